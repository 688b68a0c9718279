//! # Table Header Decoding
//!
//! This module provides zerocopy views over the fixed 32-byte table header
//! and the 32-byte field-descriptor slots that follow it, plus
//! [`decode_structure`], which turns them into an ordered [`TableStructure`].
//!
//! ## Header Layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 1 | version byte (not interpreted) |
//! | 1 | 3 | last-update date (not interpreted) |
//! | 4 | 4 | record count, u32 LE |
//! | 8 | 2 | total header length in bytes, u16 LE |
//! | 10 | 2 | record length in bytes, u16 LE |
//! | 12 | 20 | reserved |
//!
//! The field-slot count is derived, not stored:
//! `(header_length - 32) / 32`, floor division. Real files often carry a
//! terminator byte inside `header_length`; the floor absorbs it.
//!
//! ## Descriptor Layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 11 | name, NUL-padded |
//! | 11 | 1 | type code (ASCII) |
//! | 12 | 4 | reserved |
//! | 16 | 1 | field length |
//! | 17 | 1 | decimal count |
//! | 18 | 14 | reserved |
//!
//! ## Skipped Slots
//!
//! A descriptor whose name is empty after trimming is dropped with a
//! warning carrying its raw slot index. Positions in the returned structure
//! therefore diverge from slot indices when gaps exist; downstream index
//! naming depends on this, so the gap is reported but never compacted away.

use crate::config::{FIELD_DESCRIPTOR_SIZE, FIELD_NAME_SIZE, TABLE_HEADER_SIZE};
use crate::diag::{Diagnostics, Warning};
use crate::types::{FieldDef, FieldType, TableStructure};
use eyre::{ensure, Result};
use zerocopy::little_endian::{U16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// Fixed 32-byte header at the start of every table file.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct TableHeader {
    version: u8,
    last_update: [u8; 3],
    record_count: U32,
    header_len: U16,
    record_len: U16,
    reserved: [u8; 20],
}

const _: () = assert!(std::mem::size_of::<TableHeader>() == TABLE_HEADER_SIZE);

impl TableHeader {
    pub fn new(record_count: u32, header_len: u16, record_len: u16) -> Self {
        Self {
            version: 0x03,
            last_update: [0u8; 3],
            record_count: U32::new(record_count),
            header_len: U16::new(header_len),
            record_len: U16::new(record_len),
            reserved: [0u8; 20],
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        ensure!(
            bytes.len() >= TABLE_HEADER_SIZE,
            "buffer too small for table header: {} < {}",
            bytes.len(),
            TABLE_HEADER_SIZE
        );

        Self::ref_from_bytes(&bytes[..TABLE_HEADER_SIZE])
            .map_err(|e| eyre::eyre!("failed to parse table header: {:?}", e))
    }

    pub fn record_count(&self) -> u32 {
        self.record_count.get()
    }

    pub fn header_len(&self) -> u16 {
        self.header_len.get()
    }

    pub fn record_len(&self) -> u16 {
        self.record_len.get()
    }

    /// Number of descriptor slots implied by the header length.
    pub fn field_slot_count(&self) -> usize {
        (self.header_len() as usize).saturating_sub(TABLE_HEADER_SIZE) / FIELD_DESCRIPTOR_SIZE
    }
}

/// One 32-byte field-descriptor slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct FieldDescriptor {
    name: [u8; FIELD_NAME_SIZE],
    type_code: u8,
    reserved: [u8; 4],
    length: u8,
    decimal_count: u8,
    trailer: [u8; 14],
}

const _: () = assert!(std::mem::size_of::<FieldDescriptor>() == FIELD_DESCRIPTOR_SIZE);

impl FieldDescriptor {
    pub fn new(name: &[u8], type_code: u8, length: u8, decimal_count: u8) -> Self {
        let mut padded = [0u8; FIELD_NAME_SIZE];
        let n = name.len().min(FIELD_NAME_SIZE);
        padded[..n].copy_from_slice(&name[..n]);
        Self {
            name: padded,
            type_code,
            reserved: [0u8; 4],
            length,
            decimal_count,
            trailer: [0u8; 14],
        }
    }

    /// Name after NUL-stripping and trimming; empty means the slot is invalid.
    pub fn trimmed_name(&self) -> String {
        super::trim_padded(&self.name)
    }

    pub fn field_type(&self) -> FieldType {
        FieldType::from_code(self.type_code)
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn decimal_count(&self) -> u8 {
        self.decimal_count
    }
}

/// Decodes the ordered table structure from a table-file buffer.
///
/// Descriptor slots with empty names are skipped with a warning carrying the
/// raw slot index; the remaining descriptors keep file order. Returning an
/// empty structure is legal and means the table should be skipped entirely.
pub fn decode_structure(
    buf: &[u8],
    table: &str,
    diagnostics: &mut Diagnostics,
) -> Result<TableStructure> {
    let header = TableHeader::from_bytes(buf)?;
    let slot_count = header.field_slot_count();

    let mut structure = Vec::with_capacity(slot_count);
    for slot in 0..slot_count {
        let start = TABLE_HEADER_SIZE + slot * FIELD_DESCRIPTOR_SIZE;
        let end = start + FIELD_DESCRIPTOR_SIZE;
        ensure!(
            end <= buf.len(),
            "table '{}': descriptor slot {} spans {}..{} but file is {} bytes",
            table,
            slot,
            start,
            end,
            buf.len()
        );

        let descriptor = FieldDescriptor::ref_from_bytes(&buf[start..end])
            .map_err(|e| eyre::eyre!("failed to parse descriptor slot {}: {:?}", slot, e))?;

        let name = descriptor.trimmed_name();
        if name.is_empty() {
            diagnostics.warn(Warning::UnnamedField {
                table: table.to_string(),
                slot,
            });
            continue;
        }

        structure.push(FieldDef::new(
            name,
            descriptor.field_type(),
            descriptor.length(),
            descriptor.decimal_count(),
        ));
    }

    Ok(structure)
}
