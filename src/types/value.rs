//! # Runtime Value Representation
//!
//! This module provides `FieldValue`, the tagged representation for values
//! decoded out of record slots, and `Record`, one decoded row.
//!
//! ## Value Variants
//!
//! | Variant | Rust Type | Produced by |
//! |---------|-----------|-------------|
//! | Null | - | empty text in a numeric, date, or text field |
//! | Int | i64 | numeric field with zero decimal count |
//! | Float | f64 | numeric field with decimals; also the NaN marker for unparseable numerics |
//! | Bool | bool | logical field |
//! | Date | String | date field, reformatted to `YYYY-MM-DD` |
//! | Text | String | character, memo, and unknown-code fields |
//!
//! Logical fields never produce Null: empty text decodes to `Bool(false)`.
//! Numeric fields that fail to parse produce `Float(f64::NAN)` rather than
//! an error; the literal renderer prints that marker verbatim.
//!
//! ## Records
//!
//! A `Record` stores its values positionally, aligned with the table
//! structure the record was decoded against. Name lookup goes through that
//! structure, so the two must always travel together.

use crate::types::TableStructure;
use smallvec::SmallVec;

/// Tagged runtime value decoded from one field of one record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(String),
    Text(String),
}

impl FieldValue {
    /// Returns true if this value is the null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Plain text form of this value, as embedded in generated statements
    /// before any quoting is applied.
    pub fn to_plain_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Date(s) | FieldValue::Text(s) => s.clone(),
        }
    }
}

/// One decoded row: values in table-structure order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    values: SmallVec<[FieldValue; 16]>,
}

impl Record {
    pub fn new(values: SmallVec<[FieldValue; 16]>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Looks up a value by field name through the structure this record was
    /// decoded against.
    pub fn get<'a>(&'a self, structure: &TableStructure, name: &str) -> Option<&'a FieldValue> {
        let idx = structure.iter().position(|f| f.name() == name)?;
        self.values.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldDef, FieldType};
    use smallvec::smallvec;

    #[test]
    fn null_detection() {
        assert!(FieldValue::Null.is_null());
        assert!(!FieldValue::Int(0).is_null());
        assert!(!FieldValue::Text(String::new()).is_null());
    }

    #[test]
    fn plain_text_forms() {
        assert_eq!(FieldValue::Int(7).to_plain_text(), "7");
        assert_eq!(FieldValue::Float(3.5).to_plain_text(), "3.5");
        assert_eq!(FieldValue::Float(f64::NAN).to_plain_text(), "NaN");
        assert_eq!(FieldValue::Text("Pen".into()).to_plain_text(), "Pen");
    }

    #[test]
    fn name_lookup_goes_through_structure() {
        let structure = vec![
            FieldDef::new("id", FieldType::Numeric, 5, 0),
            FieldDef::new("name", FieldType::Character, 20, 0),
        ];
        let record = Record::new(smallvec![
            FieldValue::Int(7),
            FieldValue::Text("Pen".into()),
        ]);

        assert_eq!(
            record.get(&structure, "name"),
            Some(&FieldValue::Text("Pen".into()))
        );
        assert_eq!(record.get(&structure, "missing"), None);
    }
}
