use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rank::{RankOptions, SortKey, DEFAULT_SCORE_THRESHOLD};

/// Dashboard preferences. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key the lead list is ordered by.
    pub sort_by: SortKey,
    /// Only list leads scoring above `score_threshold`.
    pub filter_high_score: bool,
    pub score_threshold: u8,
    /// New leads take the device position instead of manually entered coordinates.
    pub use_current_location: bool,
    /// Lead store file.
    pub store_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_by: SortKey::Score,
            filter_high_score: true,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            use_current_location: true,
            store_path: PathBuf::from("leads.json"),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file; absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Defaults, overlaid with `path` when given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// The ranking parameters these toggles describe.
    pub fn rank_options(&self) -> RankOptions {
        RankOptions::new(self.sort_by, self.filter_high_score.then_some(self.score_threshold))
    }
}
