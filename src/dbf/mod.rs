//! # dBase Binary Format Decoders
//!
//! This module decodes the legacy dBase/xBase binary file formats: the table
//! file (fixed 32-byte header, 32-byte field-descriptor slots, fixed-length
//! record slots) and the optional compound-index companion file (512-byte
//! slots holding named key expressions).
//!
//! ## Decode Pipeline
//!
//! ```text
//! ┌────────────┐   ┌───────────────────┐   ┌──────────────────┐
//! │ file bytes │──>│ header::           │──>│ records::        │
//! │            │   │ decode_structure   │   │ decode_records   │
//! └────────────┘   └───────────────────┘   └──────────────────┘
//!                         │
//! ┌────────────┐   ┌──────┴────────────┐
//! │ .cdx bytes │──>│ index::            │
//! │ (optional) │   │ decode_indexes     │
//! └────────────┘   └───────────────────┘
//! ```
//!
//! The record decoder replays the exact field order produced by the header
//! decoder: field offsets inside a record slot are accumulated from the
//! descriptor lengths, never read per-field. Both decoders consult the
//! layout table in [`crate::config::constants`].
//!
//! ## Error Policy
//!
//! Byte offsets exceeding the buffer are fatal for the whole table.
//! Skippable conditions (unnamed descriptors, empty index names) are
//! handled locally and never escape the component that detected them.
//!
//! ## Module Organization
//!
//! - `header`: table header prefix and field-descriptor decoding
//! - `records`: fixed-length record slot decoding
//! - `index`: compound-index companion file decoding

pub mod header;
pub mod index;
pub mod records;

pub use header::{decode_structure, FieldDescriptor, TableHeader};
pub use index::{decode_indexes, IndexDef, IndexEntry, IndexHeader};
pub use records::{decode_records, decode_value};

/// Decodes a NUL-padded byte region into trimmed text.
///
/// NUL bytes are stripped anywhere in the region, then surrounding
/// whitespace is removed. Invalid UTF-8 is replaced, not rejected; the
/// format predates any encoding declaration.
pub(crate) fn trim_padded(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .replace('\u{0}', "")
        .trim()
        .to_string()
}
