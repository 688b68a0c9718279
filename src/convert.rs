//! # Directory Conversion
//!
//! The converter walks one directory, decodes every table file in it, and
//! assembles the output script. It is fully synchronous: each file is read
//! whole, decoded, appended to the growing script, and its buffer dropped
//! before the next file opens. No state survives the pass.
//!
//! ## Per-File Flow
//!
//! 1. Select files with the table extension (case-insensitive); the table
//!    name is the file stem lowercased.
//! 2. Decode the structure. Zero valid fields drops the table with a
//!    warning; the table appears in neither the results nor the script.
//! 3. Decode the records and append the table's SQL section.
//! 4. If a same-stem companion index file exists, decode it and append the
//!    index statements.
//!
//! Files are processed in directory-listing order with no re-sorting, which
//! is observable in the script's table ordering. Fatal errors (unreadable
//! directory or file, offsets past a buffer) abort the whole run; skippable
//! conditions are collected into [`Diagnostics`] and never interrupt the
//! remaining tables.

use crate::config::{INDEX_FILE_EXTENSION, SCRIPT_FILE_NAME, TABLE_FILE_EXTENSION};
use crate::dbf::{decode_indexes, decode_records, decode_structure};
use crate::diag::{Diagnostics, Warning};
use crate::sql::{index_script, preamble, table_script};
use crate::types::TableStructure;
use eyre::{Result, WrapErr};
use std::fs;
use std::path::{Path, PathBuf};

/// Structure summary for one successfully-decoded table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableResult {
    pub name: String,
    pub fields: TableStructure,
}

/// Everything one conversion pass produced.
#[derive(Debug)]
pub struct Conversion {
    /// One entry per table with at least one valid field, in processing order.
    pub tables: Vec<TableResult>,
    /// Non-fatal conditions collected along the way.
    pub diagnostics: Diagnostics,
    /// Where the generated script was written.
    pub script_path: PathBuf,
}

/// Converts every table file in `dir` into a SQL script written back into
/// the same directory, returning the decoded structures and diagnostics.
pub fn convert_directory(dir: impl AsRef<Path>) -> Result<Conversion> {
    let dir = dir.as_ref();
    let database = dir
        .file_name()
        .unwrap_or(dir.as_os_str())
        .to_string_lossy()
        .into_owned();

    let mut script = preamble(&database);
    let mut tables = Vec::new();
    let mut diagnostics = Diagnostics::new();

    let entries = fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read directory {}", dir.display()))?;
    for entry in entries {
        let entry =
            entry.wrap_err_with(|| format!("failed to list directory {}", dir.display()))?;
        let path = entry.path();
        if !has_extension(&path, TABLE_FILE_EXTENSION) {
            continue;
        }

        let table = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let buf = fs::read(&path)
            .wrap_err_with(|| format!("failed to read table file {}", path.display()))?;

        let structure = decode_structure(&buf, &table, &mut diagnostics)
            .wrap_err_with(|| format!("failed to decode header of {}", path.display()))?;
        if structure.is_empty() {
            diagnostics.warn(Warning::EmptyTable { table });
            continue;
        }

        let records = decode_records(&buf, &structure)
            .wrap_err_with(|| format!("failed to decode records of {}", path.display()))?;
        script.push_str(&table_script(&table, &structure, &records));

        let index_path = dir.join(format!("{}.{}", table, INDEX_FILE_EXTENSION));
        if index_path.exists() {
            let index_buf = fs::read(&index_path)
                .wrap_err_with(|| format!("failed to read index file {}", index_path.display()))?;
            let indexes = decode_indexes(&index_buf)
                .wrap_err_with(|| format!("failed to decode {}", index_path.display()))?;
            script.push_str(&index_script(&table, &indexes));
        }

        tables.push(TableResult {
            name: table,
            fields: structure,
        });
    }

    let script_path = dir.join(SCRIPT_FILE_NAME);
    fs::write(&script_path, &script)
        .wrap_err_with(|| format!("failed to write {}", script_path.display()))?;

    Ok(Conversion {
        tables,
        diagnostics,
        script_path,
    })
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(has_extension(Path::new("a/items.dbf"), "dbf"));
        assert!(has_extension(Path::new("a/ITEMS.DBF"), "dbf"));
        assert!(!has_extension(Path::new("a/items.cdx"), "dbf"));
        assert!(!has_extension(Path::new("a/items"), "dbf"));
    }

    #[test]
    fn missing_directory_is_fatal() {
        let result = convert_directory("/nonexistent/path/for/sure");
        assert!(result.is_err());
    }
}
