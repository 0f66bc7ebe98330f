mod dedup;
mod record;
mod samples;

pub use dedup::{find_duplicate, is_duplicate};
pub use record::{Candidate, LeadId, LeadRecord, MAX_SCORE};
pub use samples::samples_around;
