//! Pairing log and support rank persistence

use lineage_core::{PairingLog, SupportRanks};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to access pairing file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid pairing data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the log as pretty JSON
pub fn save_pairings(path: &Path, log: &PairingLog) -> Result<(), ExportError> {
    let json = log.to_json()?;
    fs::write(path, json)?;
    tracing::info!(count = log.len(), path = %path.display(), "exported pairings");
    Ok(())
}

pub fn load_pairings(path: &Path) -> Result<PairingLog, ExportError> {
    let content = fs::read_to_string(path)?;
    Ok(PairingLog::from_json(&content)?)
}

pub fn save_supports(path: &Path, ranks: &SupportRanks) -> Result<(), ExportError> {
    fs::write(path, ranks.to_json()?)?;
    tracing::info!(count = ranks.len(), path = %path.display(), "saved support ranks");
    Ok(())
}

pub fn load_supports(path: &Path) -> Result<SupportRanks, ExportError> {
    let content = fs::read_to_string(path)?;
    Ok(SupportRanks::from_json(&content)?)
}
