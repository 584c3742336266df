//! # Configuration Logic
//!
//! CLI argument parsing and validation. The four required options and
//! the optional verbose flag are collected into one `Config` struct and
//! validated as a unit before the loaders run.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{MetaqueryError, Result};
use crate::format::OutputFormat;

/// Join ICGC donor, manifest, and specimen metadata into a flat
/// per-file table.
#[derive(Parser, Debug, Clone)]
#[command(name = "icgc-metaquery", version)]
#[command(about = "Join ICGC donor, manifest, and specimen metadata into a flat table")]
pub struct Config {
    /// File with donor information
    #[arg(short = 'd', long = "donorinfo", value_name = "FILE")]
    pub donorinfo: PathBuf,

    /// File with AWS manifest
    #[arg(short = 'a', long = "awsmanif", value_name = "FILE")]
    pub awsmanif: PathBuf,

    /// Table file in JSON format
    #[arg(short = 't', long = "table", value_name = "FILE")]
    pub table: PathBuf,

    /// Output format:
    ///  1: FILE_ID OBJECT_ID FILENAME DONOR_ID PHENOTYPE GENDER
    ///  2: the same as 1 but sorted by donor id
    ///  3: the same as 2 but entries for the same donor id on one line
    #[arg(short = 'f', long = "format", value_name = "INT", verbatim_doc_comment)]
    pub format: u32,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Config {
    /// Parse the process arguments and validate the result as a unit
    pub fn parse_and_validate() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check option values clap cannot: input files must exist and the
    /// format selector must name a known output shape.
    pub fn validate(&self) -> Result<()> {
        for path in [&self.donorinfo, &self.awsmanif, &self.table] {
            ensure_exists(path)?;
        }
        self.output_format().map(|_| ())
    }

    /// The output shape selected by `--format`
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_selector(self.format)
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(MetaqueryError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}
