//! # Storage Manifest Loader
//!
//! Parses the whitespace-delimited object manifest into a
//! `ManifestMap`. The first line is a header and is skipped
//! unconditionally; file ids keep their first-seen order because both
//! the join and the grouped output format emit rows in manifest order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::data::{ManifestMap, ManifestRecord};
use crate::error::{MetaqueryError, Result};

/// 0-indexed positions of the consumed fields
const FILE_ID_FIELD: usize = 1;
const OBJECT_ID_FIELD: usize = 2;
const FILENAME_FIELD: usize = 4;
const DONOR_ID_FIELD: usize = 8;

/// Minimum field count for a well-formed data line
const MIN_FIELDS: usize = 9;

/// Load the storage manifest into a map keyed by file id.
///
/// Duplicate file ids keep the last record seen, in the position of
/// the first occurrence.
pub fn load_manifest(path: &Path) -> Result<ManifestMap> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut manifest = ManifestMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        // Line 1 is a header; its contents are ignored.
        if idx == 0 {
            continue;
        }
        manifest.insert(parse_manifest_line(path, idx + 1, &line)?);
    }

    debug!(files = manifest.len(), "loaded storage manifest");
    Ok(manifest)
}

/// Parse one data line into a `ManifestRecord`
fn parse_manifest_line(path: &Path, line_no: usize, line: &str) -> Result<ManifestRecord> {
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
    Ok(ManifestRecord {
        file_id: fields[FILE_ID_FIELD].to_string(),
        object_id: fields[OBJECT_ID_FIELD].to_string(),
        filename: fields[FILENAME_FIELD].to_string(),
        donor_id: fields[DONOR_ID_FIELD].to_string(),
    })
}
