//! # Output Formatting
//!
//! Renders joined rows into one of three presentation shapes: flat,
//! donor-sorted, or donor-grouped.

use std::collections::HashMap;

use crate::data::JoinedRow;
use crate::error::{MetaqueryError, Result};

/// Output shape selected by the CLI `-f/--format` option
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One row per file, in manifest order
    Flat,
    /// Flat rows stably sorted by donor id
    DonorSorted,
    /// One line per donor, rows separated by a `;` field
    DonorGrouped,
}

impl OutputFormat {
    /// Map the numeric CLI selector onto a format
    pub fn from_selector(selector: u32) -> Result<Self> {
        match selector {
            1 => Ok(OutputFormat::Flat),
            2 => Ok(OutputFormat::DonorSorted),
            3 => Ok(OutputFormat::DonorGrouped),
            other => Err(MetaqueryError::config(format!(
                "invalid output format {} (expected 1, 2, or 3)",
                other
            ))),
        }
    }
}

/// Render joined rows as printable lines in the selected shape.
pub fn format_rows(rows: &[JoinedRow], format: OutputFormat) -> Vec<String> {
    match format {
        OutputFormat::Flat => rows.iter().map(render_row).collect(),
        OutputFormat::DonorSorted => {
            let mut sorted: Vec<&JoinedRow> = rows.iter().collect();
            // sort_by is stable, so ties keep their original relative order
            sorted.sort_by(|a, b| a.donor_id.cmp(&b.donor_id));
            sorted.into_iter().map(render_row).collect()
        }
        OutputFormat::DonorGrouped => group_by_donor(rows),
    }
}

/// Space-join the six output fields of one row
fn render_row(row: &JoinedRow) -> String {
    format!(
        "{} {} {} {} {} {}",
        row.file_id, row.object_id, row.filename, row.donor_id, row.phenotype, row.sex
    )
}

/// Group rows by donor id in first-encounter order, one line per donor.
///
/// Successive rows of the same donor are separated by a standalone `;`
/// field; a single-row group has no separator.
fn group_by_donor(rows: &[JoinedRow]) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&JoinedRow>> = HashMap::new();

    for row in rows {
        let donor_id = row.donor_id.as_str();
        if !groups.contains_key(donor_id) {
            order.push(donor_id);
        }
        groups.entry(donor_id).or_default().push(row);
    }

    order
        .iter()
        .map(|donor_id| {
            groups[donor_id]
                .iter()
                .map(|row| render_row(row))
                .collect::<Vec<_>>()
                .join(" ; ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Phenotype;

    fn row(file_id: &str, donor_id: &str) -> JoinedRow {
        JoinedRow {
            file_id: file_id.to_string(),
            object_id: format!("obj-{}", file_id),
            filename: format!("{}.bam", file_id),
            donor_id: donor_id.to_string(),
            phenotype: Phenotype::Normal,
            sex: "female".to_string(),
        }
    }

    #[test]
    fn test_selector_maps_onto_formats() {
        assert_eq!(OutputFormat::from_selector(1).unwrap(), OutputFormat::Flat);
        assert_eq!(OutputFormat::from_selector(2).unwrap(), OutputFormat::DonorSorted);
        assert_eq!(OutputFormat::from_selector(3).unwrap(), OutputFormat::DonorGrouped);
        assert!(OutputFormat::from_selector(0).is_err());
        assert!(OutputFormat::from_selector(4).is_err());
    }

    #[test]
    fn test_flat_renders_fields_space_joined_in_input_order() {
        let rows = vec![row("FI1", "DO1"), row("FI2", "DO2")];
        let lines = format_rows(&rows, OutputFormat::Flat);

        assert_eq!(
            lines,
            vec![
                "FI1 obj-FI1 FI1.bam DO1 normal female",
                "FI2 obj-FI2 FI2.bam DO2 normal female",
            ]
        );
    }

    #[test]
    fn test_donor_sorted_is_stable() {
        let rows = vec![
            row("FI1", "DO2"),
            row("FI2", "DO1"),
            row("FI3", "DO2"),
            row("FI4", "DO1"),
        ];
        let lines = format_rows(&rows, OutputFormat::DonorSorted);

        // DO1 rows first, then DO2 rows, ties in original relative order
        assert_eq!(
            lines,
            vec![
                "FI2 obj-FI2 FI2.bam DO1 normal female",
                "FI4 obj-FI4 FI4.bam DO1 normal female",
                "FI1 obj-FI1 FI1.bam DO2 normal female",
                "FI3 obj-FI3 FI3.bam DO2 normal female",
            ]
        );
    }

    #[test]
    fn test_donor_sorted_is_idempotent() {
        let rows = vec![row("FI1", "DO2"), row("FI2", "DO1"), row("FI3", "DO2")];
        let once = format_rows(&rows, OutputFormat::DonorSorted);

        let mut twice = once.clone();
        // Re-sorting by the donor id field (index 3) must be a no-op
        twice.sort_by(|a, b| {
            let donor_a = a.split_whitespace().nth(3).unwrap().to_string();
            let donor_b = b.split_whitespace().nth(3).unwrap().to_string();
            donor_a.cmp(&donor_b)
        });
        assert_eq!(once, twice);
    }

    #[test]
    fn test_grouped_joins_same_donor_rows_with_separator_field() {
        let rows = vec![row("FI1", "DO2"), row("FI2", "DO1"), row("FI3", "DO2")];
        let lines = format_rows(&rows, OutputFormat::DonorGrouped);

        // Group order is first-encounter order of each donor id
        assert_eq!(
            lines,
            vec![
                "FI1 obj-FI1 FI1.bam DO2 normal female ; FI3 obj-FI3 FI3.bam DO2 normal female",
                "FI2 obj-FI2 FI2.bam DO1 normal female",
            ]
        );
    }

    #[test]
    fn test_grouped_single_row_group_has_no_separator() {
        let rows = vec![row("FI1", "DO1")];
        let lines = format_rows(&rows, OutputFormat::DonorGrouped);

        assert_eq!(lines, vec!["FI1 obj-FI1 FI1.bam DO1 normal female"]);
        assert!(!lines[0].contains(';'));
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let rows = vec![row("FI1", "DO2"), row("FI2", "DO2")];
        for format in [
            OutputFormat::Flat,
            OutputFormat::DonorSorted,
            OutputFormat::DonorGrouped,
        ] {
            for line in format_rows(&rows, format) {
                assert_eq!(line, line.trim_end());
            }
        }
    }
}
