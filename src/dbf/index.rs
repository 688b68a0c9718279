//! # Compound-Index File Decoding
//!
//! A table may be paired with a companion index file holding named key
//! expressions. The file is a sequence of 512-byte slots: the first slot is
//! the header, entries follow back-to-back.
//!
//! ## Slot Layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 11 | index name, padded |
//! | 11 | 209 | key expression, padded |
//! | 220 | 292 | reserved |
//!
//! The entry count sits at byte offset 4 of the header slot (u16 LE); the
//! header itself is assumed to be exactly one slot long rather than derived
//! from a length field.
//!
//! ## Dropped Entries
//!
//! Entries with an empty name are dropped silently. Unlike the header
//! decoder, no warning is recorded; index definitions are advisory and an
//! unnamed one carries nothing worth reporting. Entries keep their decoded
//! position, which the script generator uses for deterministic index names
//! even when expressions are later filtered.

use crate::config::{INDEX_EXPRESSION_SIZE, INDEX_NAME_SIZE, INDEX_SLOT_SIZE};
use eyre::{ensure, Result};
use zerocopy::little_endian::U16;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// One named index definition: name plus key expression over column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDef {
    pub name: String,
    pub expression: String,
}

/// Header slot of a compound-index file.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct IndexHeader {
    reserved_lead: [u8; 4],
    entry_count: U16,
    reserved_tail: [u8; 506],
}

const _: () = assert!(std::mem::size_of::<IndexHeader>() == INDEX_SLOT_SIZE);

impl IndexHeader {
    pub fn new(entry_count: u16) -> Self {
        Self {
            reserved_lead: [0u8; 4],
            entry_count: U16::new(entry_count),
            reserved_tail: [0u8; 506],
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        ensure!(
            bytes.len() >= INDEX_SLOT_SIZE,
            "buffer too small for index header: {} < {}",
            bytes.len(),
            INDEX_SLOT_SIZE
        );

        Self::ref_from_bytes(&bytes[..INDEX_SLOT_SIZE])
            .map_err(|e| eyre::eyre!("failed to parse index header: {:?}", e))
    }

    pub fn entry_count(&self) -> u16 {
        self.entry_count.get()
    }
}

/// One 512-byte index entry slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct IndexEntry {
    name: [u8; INDEX_NAME_SIZE],
    expression: [u8; INDEX_EXPRESSION_SIZE],
    reserved: [u8; 292],
}

const _: () = assert!(std::mem::size_of::<IndexEntry>() == INDEX_SLOT_SIZE);

impl IndexEntry {
    pub fn new(name: &[u8], expression: &[u8]) -> Self {
        let mut padded_name = [0u8; INDEX_NAME_SIZE];
        let n = name.len().min(INDEX_NAME_SIZE);
        padded_name[..n].copy_from_slice(&name[..n]);

        let mut padded_expr = [0u8; INDEX_EXPRESSION_SIZE];
        let e = expression.len().min(INDEX_EXPRESSION_SIZE);
        padded_expr[..e].copy_from_slice(&expression[..e]);

        Self {
            name: padded_name,
            expression: padded_expr,
            reserved: [0u8; 292],
        }
    }

    pub fn trimmed_name(&self) -> String {
        super::trim_padded(&self.name)
    }

    pub fn trimmed_expression(&self) -> String {
        super::trim_padded(&self.expression)
    }
}

/// Decodes the ordered index definitions from a companion-file buffer.
pub fn decode_indexes(buf: &[u8]) -> Result<Vec<IndexDef>> {
    let header = IndexHeader::from_bytes(buf)?;
    let entry_count = header.entry_count() as usize;

    let mut indexes = Vec::with_capacity(entry_count);
    for i in 0..entry_count {
        let start = INDEX_SLOT_SIZE + i * INDEX_SLOT_SIZE;
        let end = start + INDEX_SLOT_SIZE;
        ensure!(
            end <= buf.len(),
            "index entry {} spans {}..{} but file is {} bytes",
            i,
            start,
            end,
            buf.len()
        );

        let entry = IndexEntry::ref_from_bytes(&buf[start..end])
            .map_err(|e| eyre::eyre!("failed to parse index entry {}: {:?}", i, e))?;

        let name = entry.trimmed_name();
        if name.is_empty() {
            continue;
        }

        indexes.push(IndexDef {
            name,
            expression: entry.trimmed_expression(),
        });
    }

    Ok(indexes)
}
