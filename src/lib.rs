//! # ICGC Metaquery
//!
//! Joins three independently produced ICGC metadata sources — a donor
//! demographic file, a cloud-storage object manifest, and a JSON
//! specimen table — into a single denormalized row stream keyed by
//! file id.
//!
//! ## Modules
//! - `config`: CLI argument parsing and validation
//! - `data`: In-memory records and the phenotype classifier
//! - `error`: Error types and result alias
//! - `format`: Rendering joined rows into the three output shapes
//! - `io`: Source-file loaders (donor, manifest, specimen table)
//! - `join`: The three-way join engine

pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod io;
pub mod join;

// Re-export commonly used types
pub use config::Config;
pub use data::{DonorRecord, JoinedRow, ManifestMap, ManifestRecord, Phenotype, SpecimenRecord};
pub use error::{MetaqueryError, Result};
pub use format::{format_rows, OutputFormat};
pub use join::join_records;
