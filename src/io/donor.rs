//! # Donor Information Loader
//!
//! Parses the whitespace-delimited donor file into a map keyed by
//! donor id. The first line is a header and is skipped unconditionally.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::data::DonorRecord;
use crate::error::{MetaqueryError, Result};

/// 0-indexed positions of the consumed fields
const DONOR_ID_FIELD: usize = 0;
const SEX_FIELD: usize = 4;

/// Minimum field count for a well-formed data line
const MIN_FIELDS: usize = 5;

/// Load the donor-information file into a map keyed by donor id.
///
/// Duplicate donor ids keep the last record seen.
pub fn load_donors(path: &Path) -> Result<HashMap<String, DonorRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut donors = HashMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        // Line 1 is a header; its contents are ignored.
        if idx == 0 {
            continue;
        }
        let record = parse_donor_line(path, idx + 1, &line)?;
        donors.insert(record.donor_id.clone(), record);
    }

    debug!(donors = donors.len(), "loaded donor information");
    Ok(donors)
}

/// Parse one data line into a `DonorRecord`
fn parse_donor_line(path: &Path, line_no: usize, line: &str) -> Result<DonorRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(MetaqueryError::malformed(
            path.display().to_string(),
            format!("line {}", line_no),
            format!(
                "expected at least {} fields, found {}",
                MIN_FIELDS,
                fields.len()
            ),
        ));
    }
    Ok(DonorRecord {
        donor_id: fields[DONOR_ID_FIELD].to_string(),
        sex: fields[SEX_FIELD].to_string(),
    })
}
