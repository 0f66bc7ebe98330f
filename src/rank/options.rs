use std::{fmt, str::FromStr};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Score cutoff the dashboard's "high score only" toggle applies.
pub const DEFAULT_SCORE_THRESHOLD: u8 = 70;

/// Key the ranked view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest score first.
    #[default]
    Score,
    /// Nearest first.
    Distance,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Score, SortKey::Distance];

    pub fn to_str(self) -> &'static str {
        match self {
            SortKey::Score => "score",
            SortKey::Distance => "distance",
        }
    }

    /// The other key; what the dashboard's sort button switches to.
    pub fn toggled(self) -> Self {
        match self {
            SortKey::Score => SortKey::Distance,
            SortKey::Distance => SortKey::Score,
        }
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" => Ok(SortKey::Score),
            "distance" => Ok(SortKey::Distance),
            other => bail!("Unknown sort key {other:?} (expected \"score\" or \"distance\")"),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.to_str()) }
}

/// Parameters of a single ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankOptions {
    pub sort_by: SortKey,
    /// Keep only leads scoring strictly above this value.
    pub min_score: Option<u8>,
}

impl RankOptions {
    pub fn new(sort_by: SortKey, min_score: Option<u8>) -> Self {
        Self { sort_by, min_score }
    }

    /// Sorted by `sort_by`, keeping only scores above [`DEFAULT_SCORE_THRESHOLD`].
    pub fn high_score_only(sort_by: SortKey) -> Self {
        Self::new(sort_by, Some(DEFAULT_SCORE_THRESHOLD))
    }

    /// Whether a lead with `score` survives the filter.
    #[inline]
    pub fn admits(&self, score: u8) -> bool {
        self.min_score.is_none_or(|min| score > min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_parses_and_prints() {
        for key in SortKey::ALL {
            assert_eq!(key.to_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!(" Distance ".parse::<SortKey>().unwrap(), SortKey::Distance);
        assert!("nearest".parse::<SortKey>().is_err());
    }

    #[test]
    fn toggle_flips_between_keys() {
        assert_eq!(SortKey::Score.toggled(), SortKey::Distance);
        assert_eq!(SortKey::Distance.toggled().toggled(), SortKey::Distance);
    }

    #[test]
    fn filter_is_strict() {
        let opts = RankOptions::high_score_only(SortKey::Score);
        assert!(!opts.admits(60));
        assert!(!opts.admits(70));
        assert!(opts.admits(71));
        assert!(RankOptions::default().admits(0));
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        let opts: RankOptions = serde_json::from_str(r#"{"sort_by":"distance","min_score":50}"#).unwrap();
        assert_eq!(opts, RankOptions::new(SortKey::Distance, Some(50)));
    }
}
