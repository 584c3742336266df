//! # Specimen Table Loader
//!
//! Parses the JSON specimen table. The document is a single array of
//! entries with nested donor attributes; only the first donor and its
//! first specimen-type string are consumed.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::data::SpecimenRecord;
use crate::error::{MetaqueryError, Result};

/// One element of the specimen table array
#[derive(Debug, Deserialize)]
struct TableEntry {
    id: String,
    donors: Vec<TableDonor>,
}

/// Nested donor attributes within a table entry
#[derive(Debug, Deserialize)]
struct TableDonor {
    #[serde(rename = "donorId")]
    donor_id: String,
    #[serde(rename = "specimenType")]
    specimen_type: Vec<String>,
}

/// Load the JSON specimen table into a map keyed by file id.
///
/// Duplicate file ids keep the last record seen.
pub fn load_table(path: &Path) -> Result<HashMap<String, SpecimenRecord>> {
    let file = File::open(path)?;
    let entries: Vec<TableEntry> = serde_json::from_reader(BufReader::new(file))?;

    let mut specimens = HashMap::new();
    for entry in entries {
        let TableEntry { id, donors } = entry;
        let donor = donors.into_iter().next().ok_or_else(|| {
            MetaqueryError::malformed(
                path.display().to_string(),
                format!("element {:?}", id),
                "empty donors array",
            )
        })?;
        let raw_phenotype = donor.specimen_type.into_iter().next().ok_or_else(|| {
            MetaqueryError::malformed(
                path.display().to_string(),
                format!("element {:?}", id),
                "empty specimenType array",
            )
        })?;
        specimens.insert(
            id.clone(),
            SpecimenRecord {
                file_id: id,
                donor_id: donor.donor_id,
                raw_phenotype,
            },
        );
    }

    debug!(specimens = specimens.len(), "loaded specimen table");
    Ok(specimens)
}
