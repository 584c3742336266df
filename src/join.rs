//! # Join Engine
//!
//! Combines the three loaded maps into denormalized rows keyed by
//! file id. Emission order is the manifest's first-seen file id order.

use std::collections::HashMap;

use tracing::debug;

use crate::data::{DonorRecord, JoinedRow, ManifestMap, Phenotype, SpecimenRecord};
use crate::error::{MetaqueryError, Result};

/// Map names used in missing-key diagnostics
const SPECIMEN_TABLE: &str = "specimen table";
const DONOR_TABLE: &str = "donor table";

/// Join manifest, specimen, and donor records into one row per
/// manifest entry.
///
/// A manifest entry whose file id has no specimen record, or whose
/// donor id has no donor record, aborts the whole join; callers emit
/// nothing on failure.
pub fn join_records(
    donors: &HashMap<String, DonorRecord>,
    manifest: &ManifestMap,
    specimens: &HashMap<String, SpecimenRecord>,
) -> Result<Vec<JoinedRow>> {
    let mut rows = Vec::with_capacity(manifest.len());

    for record in manifest.iter() {
        let specimen = specimens
            .get(&record.file_id)
            .ok_or_else(|| MetaqueryError::missing_key(record.file_id.clone(), SPECIMEN_TABLE))?;
        let donor = donors
            .get(&record.donor_id)
            .ok_or_else(|| MetaqueryError::missing_key(record.donor_id.clone(), DONOR_TABLE))?;

        rows.push(JoinedRow {
            file_id: record.file_id.clone(),
            object_id: record.object_id.clone(),
            filename: record.filename.clone(),
            donor_id: record.donor_id.clone(),
            phenotype: Phenotype::classify(&specimen.raw_phenotype),
            sex: donor.sex.clone(),
        });
    }

    debug!(rows = rows.len(), "joined manifest, specimen, and donor records");
    Ok(rows)
}
