//! # Record Decoding
//!
//! This module decodes the fixed-length record slots that follow the table
//! header. Record geometry (start offset, slot length, count) comes from the
//! same 32-byte header prefix the structure decoder reads.
//!
//! ## Slot Layout
//!
//! ```text
//! header_len                      header_len + record_len
//! +------+------------+------------+----
//! | flag | field 0    | field 1    | ...
//! | (1B) | (length 0) | (length 1) |
//! +------+------------+------------+----
//! ```
//!
//! Field offsets are accumulated from descriptor lengths in structure
//! order; they are never read per-field. The decoder must therefore replay
//! the exact field order produced at header-decode time, including any gaps
//! left by skipped descriptor slots.
//!
//! ## Value Decoding
//!
//! Raw bytes are trimmed as text first, then interpreted by type code:
//!
//! | Code | Empty | Non-empty |
//! |------|-------|-----------|
//! | `N`, decimals > 0 | Null | `Float(parse)`, NaN on failure |
//! | `N`, decimals = 0 | Null | `Int(parse)`, `Float(NaN)` on failure |
//! | `L` | `Bool(false)` | true iff lowercased text is `y` or `t` |
//! | `D` | Null | `YYYYMMDD` -> `Date("YYYY-MM-DD")`, no calendar check |
//! | other | Null | `Text(trimmed)` verbatim |
//!
//! Unparseable numerics deliberately become the float NaN marker instead of
//! an error; a malformed digit must not block the rest of the record.
//!
//! The record count is not validated against the remaining bytes. A
//! truncated file fails with an out-of-bounds error at the first field read
//! past the buffer, which is fatal for the table.

use crate::config::RECORD_FLAG_SIZE;
use crate::dbf::header::TableHeader;
use crate::types::{FieldDef, FieldType, FieldValue, Record, TableStructure};
use eyre::{ensure, Result};
use smallvec::SmallVec;

/// Decodes all records of a table-file buffer against its decoded structure.
pub fn decode_records(buf: &[u8], structure: &TableStructure) -> Result<Vec<Record>> {
    let header = TableHeader::from_bytes(buf)?;
    let header_len = header.header_len() as usize;
    let record_len = header.record_len() as usize;
    let record_count = header.record_count() as usize;

    // The claimed count is untrusted until the reads succeed; cap the
    // pre-allocation rather than sizing it from header bytes.
    let mut records = Vec::with_capacity(record_count.min(1024));
    for i in 0..record_count {
        let base = header_len + i * record_len;
        let mut values: SmallVec<[FieldValue; 16]> = SmallVec::with_capacity(structure.len());

        let mut pos = base + RECORD_FLAG_SIZE;
        for field in structure {
            let end = pos + field.length() as usize;
            ensure!(
                end <= buf.len(),
                "record {}: field '{}' spans {}..{} but file is {} bytes",
                i,
                field.name(),
                pos,
                end,
                buf.len()
            );
            values.push(decode_value(&buf[pos..end], field));
            pos = end;
        }

        records.push(Record::new(values));
    }

    Ok(records)
}

/// Decodes one field's raw bytes into a tagged value.
pub fn decode_value(raw: &[u8], field: &FieldDef) -> FieldValue {
    let text = super::trim_padded(raw);

    match field.field_type() {
        FieldType::Numeric => {
            if text.is_empty() {
                FieldValue::Null
            } else if field.decimal_count() > 0 {
                FieldValue::Float(text.parse::<f64>().unwrap_or(f64::NAN))
            } else {
                match text.parse::<i64>() {
                    Ok(i) => FieldValue::Int(i),
                    Err(_) => FieldValue::Float(f64::NAN),
                }
            }
        }
        FieldType::Logical => {
            let lowered = text.to_ascii_lowercase();
            FieldValue::Bool(lowered == "y" || lowered == "t")
        }
        FieldType::Date => {
            if text.is_empty() {
                FieldValue::Null
            } else {
                FieldValue::Date(reformat_date(&text))
            }
        }
        FieldType::Character | FieldType::Memo | FieldType::Other(_) => {
            if text.is_empty() {
                FieldValue::Null
            } else {
                FieldValue::Text(text)
            }
        }
    }
}

/// Reinterprets `YYYYMMDD` text as `YYYY-MM-DD` without calendar validation.
/// Text that does not split into those three groups is kept verbatim.
fn reformat_date(text: &str) -> String {
    match (text.get(0..4), text.get(4..6), text.get(6..8)) {
        (Some(y), Some(m), Some(d)) => format!("{}-{}-{}", y, m, d),
        _ => text.to_string(),
    }
}
