//! # Binary Layout Constants
//!
//! This module centralizes every byte offset and slot size used to decode
//! dBase table files and their compound-index companions. The header decoder
//! and record decoder must agree on this layout exactly, so the values live
//! here rather than scattered through decode logic.
//!
//! ## Table File Layout
//!
//! ```text
//! offset 0                    32                          header_len
//! +---------------------------+---------------------------+------------------+
//! | TableHeader (32 bytes)    | FieldDescriptor slots     | Record slots     |
//! |  record count  @ 4 (u32)  | (32 bytes each)           | (record_len each)|
//! |  header length @ 8 (u16)  |                           |                  |
//! |  record length @10 (u16)  |                           |                  |
//! +---------------------------+---------------------------+------------------+
//! ```
//!
//! Derived relationships:
//!
//! ```text
//! TABLE_HEADER_SIZE (32)
//!       │
//!       ├─> field slot count = (header_len - TABLE_HEADER_SIZE) / FIELD_DESCRIPTOR_SIZE
//!       │     Floor division: trailing terminator bytes in header_len are ignored.
//!       │
//!       └─> record area starts at header_len, NOT at a fixed offset
//!
//! FIELD_DESCRIPTOR_SIZE (32)
//!       │
//!       └─> FIELD_NAME_SIZE (11) + type code (1) + reserved (4)
//!           + length (1) + decimal count (1) + reserved (14)
//!
//! RECORD_FLAG_SIZE (1)
//!       │
//!       └─> each record slot starts with a deletion/status flag byte;
//!           field values follow back-to-back in descriptor order
//! ```
//!
//! ## Index File Layout
//!
//! ```text
//! offset 0                    512
//! +---------------------------+---------------------------+-----
//! | IndexHeader (one slot)    | IndexEntry slot 0         | ...
//! |  entry count @ 4 (u16)    | (512 bytes each)          |
//! +---------------------------+---------------------------+-----
//! ```
//!
//! The index header is assumed to occupy exactly one slot; it is not derived
//! from a length field.
//!
//! ## Critical Invariants
//!
//! Enforced by compile-time assertions next to the zerocopy structs:
//!
//! 1. `size_of::<TableHeader>() == TABLE_HEADER_SIZE`
//! 2. `size_of::<FieldDescriptor>() == FIELD_DESCRIPTOR_SIZE`
//! 3. `size_of::<IndexHeader>() == size_of::<IndexEntry>() == INDEX_SLOT_SIZE`
//!
//! All multi-byte fields are little-endian.

/// Size of the fixed table-file header preceding the field descriptors.
pub const TABLE_HEADER_SIZE: usize = 32;

/// Size of one field-descriptor slot in the table header.
pub const FIELD_DESCRIPTOR_SIZE: usize = 32;

/// Size of the NUL-padded field name inside a descriptor slot.
pub const FIELD_NAME_SIZE: usize = 11;

/// Size of the deletion/status flag at the start of every record slot.
pub const RECORD_FLAG_SIZE: usize = 1;

/// Size of one slot in a compound-index file. The file header occupies
/// exactly one slot; entries follow back-to-back.
pub const INDEX_SLOT_SIZE: usize = 512;

/// Size of the NUL-padded index name inside an entry slot.
pub const INDEX_NAME_SIZE: usize = 11;

/// Size of the index key expression inside an entry slot.
pub const INDEX_EXPRESSION_SIZE: usize = 209;

/// Extension of table files, matched case-insensitively.
pub const TABLE_FILE_EXTENSION: &str = "dbf";

/// Extension of companion index files.
pub const INDEX_FILE_EXTENSION: &str = "cdx";

/// Name of the generated script, written into the source directory.
pub const SCRIPT_FILE_NAME: &str = "conversion.sql";
