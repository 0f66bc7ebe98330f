use std::{fs::{self, File}, io::{BufWriter, Write}, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::lead::LeadRecord;
use super::{validate_records, LeadStore};

/// Leads stored as a single JSON array on disk.
///
/// A missing file reads as an empty collection. Writes go to a temp file next to the
/// target and are renamed over it, so a crash never leaves a half-written store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline] pub fn path(&self) -> &Path { &self.path }
}

impl LeadStore for JsonFileStore {
    fn load(&self) -> Result<Vec<LeadRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no lead store yet, starting empty");
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path)
            .with_context(|| format!("Failed to read lead store {}", self.path.display()))?;
        let leads: Vec<LeadRecord> = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse lead store {}", self.path.display()))?;
        validate_records(&leads)
            .with_context(|| format!("Lead store {} is inconsistent", self.path.display()))?;

        info!(path = %self.path.display(), count = leads.len(), "loaded leads");
        Ok(leads)
    }

    fn save(&mut self, leads: &[LeadRecord]) -> Result<()> {
        validate_records(leads)?;

        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;

        let tmp = NamedTempFile::new_in(parent).context("create temp file")?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, leads).context("serialize leads")?;
            writer.flush().context("flush lead store")?;
        }
        tmp.as_file().sync_all().ok(); // best-effort fsync file
        tmp.persist(&self.path)
            .with_context(|| format!("rename to {}", self.path.display()))?;
        let _ = File::open(parent).and_then(|f| f.sync_all()); // best-effort fsync dir

        info!(path = %self.path.display(), count = leads.len(), "saved leads");
        Ok(())
    }
}
