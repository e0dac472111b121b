use chrono_tz::Tz;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GeneratorError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "config/default.toml";
pub const DEFAULT_OUTPUT_PATH: &str = "smart_office_data.csv";
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Destination of the CSV table
    pub output_path: PathBuf,
    /// IANA zone used for local-time computations
    pub timezone: String,
    /// Random seed for reproducibility (None = random)
    pub random_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            timezone: DEFAULT_TIMEZONE.to_string(),
            random_seed: None,
        }
    }
}

/// Values passed explicitly on invocation; they win over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub output_path: Option<PathBuf>,
    pub timezone: Option<String>,
}

impl Overrides {
    /// Positional `[output_path] [timezone]`. Flags and extra arguments
    /// are rejected.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if let Some(flag) = args.iter().find(|a| a.starts_with('-')) {
            return Err(GeneratorError::Usage(format!("unexpected option {}", flag)));
        }
        if args.len() > 2 {
            return Err(GeneratorError::Usage(format!(
                "expected at most 2 arguments, got {}",
                args.len()
            )));
        }

        let mut args = args.into_iter();
        Ok(Self {
            output_path: args.next().map(PathBuf::from),
            timezone: args.next(),
        })
    }
}

impl Config {
    pub fn load(overrides: &Overrides) -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE, overrides)
    }

    /// Defaults, then the TOML file if it exists, then `overrides`.
    /// The timezone is validated before returning.
    pub fn load_from(config_file: impl AsRef<Path>, overrides: &Overrides) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file.as_ref()));

        if let Some(path) = &overrides.output_path {
            figment = figment.merge(Serialized::default("output_path", path));
        }
        if let Some(tz) = &overrides.timezone {
            figment = figment.merge(Serialized::default("timezone", tz));
        }

        let cfg: Config = figment.extract()?;
        cfg.tz()?;
        Ok(cfg)
    }

    /// Parsed IANA zone
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| GeneratorError::InvalidTimezone(self.timezone.clone()))
    }

    /// Generator seeded from `random_seed`, or from entropy when unset
    pub fn rng(&self) -> StdRng {
        match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use std::fs;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("smart-office-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does/not/exist.toml", &Overrides::default()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.output_path, PathBuf::from("smart_office_data.csv"));
        assert_eq!(cfg.tz().unwrap(), chrono_tz::America::Sao_Paulo);
    }

    #[test]
    fn test_file_then_overrides() {
        let file = scratch_file(
            "layered.toml",
            "output_path = \"from_file.csv\"\ntimezone = \"Europe/Lisbon\"\nrandom_seed = 42\n",
        );

        let from_file = Config::load_from(&file, &Overrides::default()).unwrap();
        assert_eq!(from_file.output_path, PathBuf::from("from_file.csv"));
        assert_eq!(from_file.timezone, "Europe/Lisbon");
        assert_eq!(from_file.random_seed, Some(42));

        let overrides =
            Overrides::from_args(vec!["cli.csv".to_string(), "UTC".to_string()]).unwrap();
        let cfg = Config::load_from(&file, &overrides).unwrap();
        assert_eq!(cfg.output_path, PathBuf::from("cli.csv"));
        assert_eq!(cfg.timezone, "UTC");
        assert_eq!(cfg.random_seed, Some(42));
    }

    #[test]
    fn test_invalid_timezone_fails_fast() {
        let overrides = Overrides {
            timezone: Some("Mars/Olympus_Mons".into()),
            ..Default::default()
        };
        let err = Config::load_from("does/not/exist.toml", &overrides).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidTimezone(ref tz) if tz == "Mars/Olympus_Mons"));
    }

    #[test]
    fn test_from_args_partial() {
        let overrides = Overrides::from_args(vec!["only_path.csv".to_string()]).unwrap();
        assert_eq!(overrides.output_path, Some(PathBuf::from("only_path.csv")));
        assert_eq!(overrides.timezone, None);

        assert_eq!(Overrides::from_args(Vec::new()).unwrap(), Overrides::default());
    }

    #[test]
    fn test_from_args_rejects_flags() {
        for flag in ["--help", "-h", "--seed=4"] {
            let err = Overrides::from_args(vec![flag.to_string()]).unwrap_err();
            assert!(matches!(err, GeneratorError::Usage(ref msg) if msg.contains(flag)));
        }

        let err = Overrides::from_args(vec!["out.csv".to_string(), "-v".to_string()]).unwrap_err();
        assert!(matches!(err, GeneratorError::Usage(_)));
    }

    #[test]
    fn test_from_args_rejects_surplus() {
        let args = ["out.csv", "UTC", "extra"].map(String::from);
        let err = Overrides::from_args(args).unwrap_err();
        assert!(matches!(err, GeneratorError::Usage(ref msg) if msg.contains("got 3")));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let cfg = Config {
            random_seed: Some(99),
            ..Default::default()
        };
        assert_eq!(cfg.rng().next_u64(), cfg.rng().next_u64());
    }
}
