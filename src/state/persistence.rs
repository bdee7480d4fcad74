use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::models::DailyProgressRecord;

/// Load the progress record from a JSON file.
///
/// A missing file yields the default (never saved) record.
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<DailyProgressRecord> {
    let content = match fs::read_to_string(path.as_ref()) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.as_ref().display(), "no saved progress file");
            return Ok(DailyProgressRecord::default());
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&content)?)
}

/// Save the whole progress record to a JSON file.
pub fn save_record<P: AsRef<Path>>(path: P, record: &DailyProgressRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;
    Ok(())
}

/// Scalar key-value storage behind the tracker.
///
/// Every save rewrites the full record; last writer wins.
pub trait ProgressStore {
    fn load(&self) -> Result<DailyProgressRecord>;
    fn save(&mut self, record: &DailyProgressRecord) -> Result<()>;
}

/// Record stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<DailyProgressRecord> {
        load_record(&self.path)
    }

    fn save(&mut self, record: &DailyProgressRecord) -> Result<()> {
        save_record(&self.path, record)
    }
}

/// In-memory store. Counts writes so callers can check write behavior.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: DailyProgressRecord,
    saves: usize,
}

impl MemoryStore {
    pub fn new(record: DailyProgressRecord) -> Self {
        Self { record, saves: 0 }
    }

    pub fn record(&self) -> &DailyProgressRecord {
        &self.record
    }

    /// Number of saves since creation.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<DailyProgressRecord> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &DailyProgressRecord) -> Result<()> {
        self.record = record.clone();
        self.saves += 1;
        Ok(())
    }
}
