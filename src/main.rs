//! # ICGC Metaquery CLI
//!
//! Correlates stored objects with the donor and phenotype they belong
//! to, one greppable row per file.
//!
//! ## Usage
//! ```bash
//! # Flat table, one row per manifest entry
//! icgc-metaquery -d donors.tsv -a manifest.tsv -t table.json -f 1
//!
//! # Grouped by donor, one line per donor
//! icgc-metaquery -d donors.tsv -a manifest.tsv -t table.json -f 3 -v
//! ```

use std::io::Write;

use clap::CommandFactory;

use icgc_metaquery::config::Config;
use icgc_metaquery::format::format_rows;
use icgc_metaquery::io::{donor, manifest, table};
use icgc_metaquery::join::join_records;
use icgc_metaquery::Result;

fn main() {
    // A bare invocation prints usage and exits cleanly; a missing
    // required option is a usage error with a non-zero status.
    if std::env::args().len() <= 1 {
        print_usage();
        std::process::exit(0);
    }

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }
}

fn print_usage() {
    let mut cmd = Config::command();
    let _ = cmd.write_help(&mut std::io::stderr());
    let _ = std::io::stderr().write_all(b"\n");
}

/// Initialize the tracing subscriber; `--verbose` lowers the level
/// filter so loader and join diagnostics show up on stderr.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let config = Config::parse_and_validate()?;
    init_tracing(config.verbose);
    let output_format = config.output_format()?;

    let donors = donor::load_donors(&config.donorinfo)?;
    let manifest = manifest::load_manifest(&config.awsmanif)?;
    let specimens = table::load_table(&config.table)?;

    let rows = join_records(&donors, &manifest, &specimens)?;

    let mut stdout = std::io::stdout().lock();
    for line in format_rows(&rows, output_format) {
        writeln!(stdout, "{}", line)?;
    }

    Ok(())
}
