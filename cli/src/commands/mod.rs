pub mod add;
pub mod delete;
pub mod distance;
pub mod edit;
pub mod list;
pub mod nearby;
pub mod seed;

use anyhow::Result;
use leadmap::{Coordinate, Dashboard, JsonFileStore, Settings};
use tracing::debug;

use crate::cli::Cli;

/// Settings from `--config` (or defaults) with `--store` applied on top.
pub fn settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    if let Some(store) = &cli.store {
        settings.store_path = store.clone();
    }
    debug!(?settings, "resolved settings");
    Ok(settings)
}

/// Open the dashboard over the configured JSON store, located at `--at`.
pub fn open(cli: &Cli, settings: &Settings) -> Result<Dashboard<JsonFileStore, Option<Coordinate>>> {
    Dashboard::open(JsonFileStore::new(&settings.store_path), cli.at)
}
