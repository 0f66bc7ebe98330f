use anyhow::Result;

use crate::lead::LeadRecord;
use super::{validate_records, LeadStore};

/// In-process store; contents live as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    leads: Vec<LeadRecord>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    /// A store pre-filled with `leads`.
    pub fn with_leads(leads: Vec<LeadRecord>) -> Self {
        Self { leads, saves: 0 }
    }

    /// Number of completed `save` calls.
    #[inline] pub fn save_count(&self) -> usize { self.saves }
}

impl LeadStore for MemoryStore {
    fn load(&self) -> Result<Vec<LeadRecord>> {
        validate_records(&self.leads)?;
        Ok(self.leads.clone())
    }

    fn save(&mut self, leads: &[LeadRecord]) -> Result<()> {
        validate_records(leads)?;
        self.leads = leads.to_vec();
        self.saves += 1;
        Ok(())
    }
}
