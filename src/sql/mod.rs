//! # SQL Generation
//!
//! This module turns decoded table structures, records, and index
//! definitions into the textual script the converter writes out.
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────────────┐    ┌───────────────┐    ┌────────────────┐
//! │ TableStructure │───>│ types::       │───>│ script::       │
//! │ Records        │    │ column_type / │    │ preamble /     │
//! │ IndexDefs      │    │ literal       │    │ table_script / │
//! └────────────────┘    └───────────────┘    │ index_script   │
//!                                            └────────────────┘
//! ```
//!
//! The generator emits MySQL-flavored statements: a database drop/create
//! preamble, one `CREATE TABLE` per table, a single multi-row `INSERT` when
//! records exist, and `CREATE INDEX` statements for companion indexes. No
//! transactional wrapping and no statement-level recovery; a malformed index
//! expression is emitted verbatim and left to whoever runs the script.
//!
//! ## Module Organization
//!
//! - `types`: field-descriptor to column-type mapping and literal rendering
//! - `script`: statement assembly and formatting

pub mod script;
pub mod types;

pub use script::{index_script, preamble, table_script};
pub use types::{column_type, literal};
