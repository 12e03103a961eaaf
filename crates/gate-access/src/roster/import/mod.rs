mod parser;

use super::catalog::Roster;
use super::domain::{VehicleId, VehicleRecord};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid roster JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("vehicle id {0} appears more than once in the roster")]
    DuplicateId(VehicleId),
}

/// Loads gate rosters exported from the front desk spreadsheet (CSV) or as JSON.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Roster, RosterImportError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let roster = if is_json {
            Self::from_json_reader(reader)?
        } else {
            Self::from_reader(reader)?
        };

        info!(path = %path.display(), vehicles = roster.len(), "roster loaded");
        Ok(roster)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Roster, RosterImportError> {
        let records = parser::parse_csv_records(reader)?;
        Self::finish(records)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Roster, RosterImportError> {
        let records: Vec<VehicleRecord> = serde_json::from_reader(reader)?;
        Self::finish(records)
    }

    fn finish(records: Vec<VehicleRecord>) -> Result<Roster, RosterImportError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(RosterImportError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Roster::new(records))
    }
}
