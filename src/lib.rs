//! # dbf2sql - Legacy Table File to SQL Converter
//!
//! dbf2sql converts a directory of legacy dBase/xBase table files (binary
//! tabular storage, optionally paired with a compound-index companion file)
//! into a single MySQL-flavored SQL script: schema creation, bulk data
//! insertion, and index creation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dbf2sql::convert_directory;
//!
//! let conversion = convert_directory("./shop")?;
//! for table in &conversion.tables {
//!     println!("{}: {} fields", table.name, table.fields.len());
//! }
//! for warning in conversion.diagnostics.warnings() {
//!     eprintln!("Warning: {}", warning);
//! }
//! // The script is at conversion.script_path ("./shop/conversion.sql").
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Directory Converter (convert)      │
//! ├─────────────────────────────────────┤
//! │  Header / Record / Index Decoders    │
//! │              (dbf)                   │
//! ├─────────────────────────────────────┤
//! │  Type Mapping & Script Generation    │
//! │              (sql)                   │
//! ├─────────────────────────────────────┤
//! │  Field / Value Types │ Diagnostics   │
//! │      (types)         │   (diag)      │
//! ├─────────────────────────────────────┤
//! │     Binary Layout Table (config)     │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Decoding Model
//!
//! Each table file carries a fixed 32-byte header, 32-byte field-descriptor
//! slots, and fixed-length record slots. All byte offsets live in one layout
//! table ([`config::constants`]) shared by the header and record decoders;
//! record field offsets are accumulated from descriptor lengths in structure
//! order, never read per-field.
//!
//! ## Error Model
//!
//! The run either completes the whole directory or aborts on the first
//! unrecoverable error (unreadable file, offsets past a buffer). Recoverable
//! conditions — unnamed field descriptors, tables without valid fields — are
//! collected into an explicit [`Diagnostics`] value returned alongside the
//! results instead of being printed as side effects. Unparseable numeric
//! cells are not errors at all: they decode to a NaN marker and render
//! verbatim.
//!
//! ## Module Overview
//!
//! - [`config`]: binary-layout constants shared by both decoders
//! - [`types`]: field descriptors, type codes, tagged runtime values
//! - [`dbf`]: header, record, and compound-index decoders
//! - [`sql`]: column-type mapping, literal rendering, script assembly
//! - [`convert`]: per-directory orchestration
//! - [`diag`]: warning collection

pub mod config;
pub mod convert;
pub mod dbf;
pub mod diag;
pub mod sql;
pub mod types;

pub use convert::{convert_directory, Conversion, TableResult};
pub use dbf::IndexDef;
pub use diag::{Diagnostics, Warning};
pub use types::{FieldDef, FieldType, FieldValue, Record, TableStructure};
