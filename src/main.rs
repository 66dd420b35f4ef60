use console::{ConsoleSettings, ScoutApp};
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::info;
use scout_core::{Roster, TimeEstimation};
use std::io;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let settings = ConsoleSettings::from_env();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let catalog = DatabaseGenerator::generate(&database)?;

    info!("catalog seeded with {} players", catalog.len());

    let mut app = ScoutApp::new(catalog, Roster::new(), settings, io::stdin().lock(), io::stdout());

    app.run()?;

    Ok(())
}
