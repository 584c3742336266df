//! # Phenotype Classification
//!
//! Maps free-text specimen descriptions onto a coarse phenotype code.

use std::fmt;

/// Coarse phenotype derived from a specimen-type description
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phenotype {
    /// Description mentions normal tissue
    Normal,
    /// Description mentions a tumour/tumor
    Tumor,
    /// Neither keyword set matched
    Unclassified,
}

impl Phenotype {
    /// Classify a raw specimen-type string.
    ///
    /// Matching is case-insensitive substring search. "normal" is
    /// checked before the tumor keywords, so a description containing
    /// both classifies as `Normal`.
    pub fn classify(raw: &str) -> Self {
        let lower = raw.to_ascii_lowercase();
        if lower.contains("normal") {
            Phenotype::Normal
        } else if lower.contains("tumour") || lower.contains("tumor") {
            Phenotype::Tumor
        } else {
            Phenotype::Unclassified
        }
    }

    /// Code used in formatted output rows
    pub fn as_str(self) -> &'static str {
        match self {
            Phenotype::Normal => "normal",
            Phenotype::Tumor => "tumor",
            Phenotype::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
