//! # Unified Type System for dbf2sql
//!
//! This module provides the canonical types shared by the decoders and the
//! script generator: the field type-code enum, the field descriptor, and the
//! tagged runtime value.
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `FieldType` | Single-character type-code tag from the table header |
//! | `FieldDef` | One column: name, type code, byte length, decimal count |
//! | `TableStructure` | Ordered field descriptors for one table |
//! | `FieldValue` | Tagged runtime value decoded from one record slot |
//! | `Record` | One row: values aligned with the table structure |
//!
//! A `FieldValue` carries no type metadata beyond its variant; it must always
//! be interpreted together with the `FieldDef` it was decoded from. The SQL
//! literal renderer keys off the descriptor's type code, not the variant.
//!
//! ## Usage
//!
//! ```ignore
//! use dbf2sql::types::{FieldDef, FieldType, FieldValue};
//!
//! let field = FieldDef::new("price", FieldType::Numeric, 8, 2);
//! assert_eq!(field.field_type(), FieldType::Numeric);
//!
//! let value = FieldValue::Float(19.99);
//! assert!(!value.is_null());
//! ```

mod field;
mod value;

pub use field::{FieldDef, FieldType, TableStructure};
pub use value::{FieldValue, Record};
