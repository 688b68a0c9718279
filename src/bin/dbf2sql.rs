//! # dbf2sql CLI Entry Point
//!
//! Binary entry point for the dbf2sql converter.
//!
//! ## Usage
//!
//! ```bash
//! # Convert every table file in a directory
//! dbf2sql ./shop
//!
//! # Show version
//! dbf2sql --version
//!
//! # Show help
//! dbf2sql --help
//! ```
//!
//! Warnings go to stderr; the table summary and script location go to
//! stdout. A fatal decode or I/O error aborts with exit code 1.

use dbf2sql::convert_directory;
use eyre::{bail, Result};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let mut dir: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-v" => {
                println!("dbf2sql {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            arg if arg.starts_with('-') => {
                bail!("Unknown option: {}", arg);
            }
            arg => {
                if dir.is_some() {
                    bail!("Unexpected argument: {}", arg);
                }
                dir = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    let Some(dir) = dir else {
        print_usage();
        return Ok(());
    };

    let conversion = convert_directory(&dir)?;

    for warning in conversion.diagnostics.warnings() {
        eprintln!("Warning: {}", warning);
    }

    for table in &conversion.tables {
        println!("{}: {} fields", table.name, table.fields.len());
    }
    println!(
        "Converted {} table(s) -> {}",
        conversion.tables.len(),
        conversion.script_path.display()
    );

    Ok(())
}

fn print_usage() {
    println!("dbf2sql - convert legacy table files to a SQL script");
    println!();
    println!("Usage:");
    println!("  dbf2sql <directory>    Convert all table files in <directory>");
    println!();
    println!("Options:");
    println!("  -h, --help       Show this help message");
    println!("  -v, --version    Show version information");
    println!();
    println!("The generated script is written to <directory>/conversion.sql.");
}
