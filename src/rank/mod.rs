mod nearby;
mod options;
mod ranking;

pub use nearby::NearbyIndex;
pub use options::{RankOptions, SortKey, DEFAULT_SCORE_THRESHOLD};
pub use ranking::{rank, RankedLead, Ranking};
