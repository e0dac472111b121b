use anyhow::{Context, Result};
use chrono::Utc;
use smart_office_sim::{config, output, simulation, telemetry};
use config::{Config, Overrides};
use output::TableSummary;
use simulation::SeriesGenerator;
use telemetry::init_tracing;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let overrides = Overrides::from_args(std::env::args().skip(1))?;
    let cfg = Config::load(&overrides)?;
    let tz = cfg.tz()?;

    info!(
        output = %cfg.output_path.display(),
        timezone = %cfg.timezone,
        seed = ?cfg.random_seed,
        "starting smart office generator"
    );

    let generator = SeriesGenerator::new()?;
    let mut rng = cfg.rng();
    let table = generator.generate(Utc::now(), &tz, &mut rng)?;

    output::write_table(&table, &cfg.output_path)
        .with_context(|| format!("writing {}", cfg.output_path.display()))?;

    print!("{}", TableSummary::from_table(&table));
    Ok(())
}
