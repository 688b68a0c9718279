//! # Type Mapping and Literal Rendering
//!
//! Two pure mappings, both keyed off the field descriptor:
//!
//! - [`column_type`]: descriptor -> SQL column-type text
//! - [`literal`]: (value, descriptor) -> literal text for a VALUES tuple
//!
//! ## Column Types
//!
//! | Code | Mapping |
//! |------|---------|
//! | `C` | `VARCHAR(length)` |
//! | `N`, decimals > 0 | `DECIMAL(length,decimals)` |
//! | `N`, decimals = 0 | `BIGINT` |
//! | `L` | `BOOLEAN` |
//! | `D` | `DATE` |
//! | `M` | `TEXT` |
//! | other | `VARCHAR(length)` |
//!
//! Unknown codes fall back to a bounded text column so no table is lost to
//! an exotic descriptor.
//!
//! ## Literals
//!
//! Rendering keys off the descriptor's type code, not the value variant:
//! text-bearing codes (`C`, `M`, `D`) are single-quoted with embedded quotes
//! doubled, logicals render as `1`/`0`, and everything else renders as the
//! value's plain numeric text, including the `NaN` marker for numerics that
//! failed to parse.

use crate::types::{FieldDef, FieldType, FieldValue};

/// Maps a field descriptor to its SQL column-type text.
pub fn column_type(field: &FieldDef) -> String {
    match field.field_type() {
        FieldType::Character => format!("VARCHAR({})", field.length()),
        FieldType::Numeric => {
            if field.decimal_count() > 0 {
                format!("DECIMAL({},{})", field.length(), field.decimal_count())
            } else {
                "BIGINT".to_string()
            }
        }
        FieldType::Logical => "BOOLEAN".to_string(),
        FieldType::Date => "DATE".to_string(),
        FieldType::Memo => "TEXT".to_string(),
        FieldType::Other(_) => format!("VARCHAR({})", field.length()),
    }
}

/// Renders a decoded value as a literal for a generated statement.
pub fn literal(value: &FieldValue, field: &FieldDef) -> String {
    if value.is_null() {
        return "NULL".to_string();
    }

    if field.field_type().is_quoted() {
        return format!("'{}'", value.to_plain_text().replace('\'', "''"));
    }

    if field.field_type() == FieldType::Logical {
        return if matches!(value, FieldValue::Bool(true)) {
            "1".to_string()
        } else {
            "0".to_string()
        };
    }

    value.to_plain_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(ft: FieldType, length: u8, decimals: u8) -> FieldDef {
        FieldDef::new("f", ft, length, decimals)
    }

    #[test]
    fn column_type_mapping() {
        assert_eq!(column_type(&field(FieldType::Character, 20, 0)), "VARCHAR(20)");
        assert_eq!(column_type(&field(FieldType::Numeric, 8, 2)), "DECIMAL(8,2)");
        assert_eq!(column_type(&field(FieldType::Numeric, 5, 0)), "BIGINT");
        assert_eq!(column_type(&field(FieldType::Logical, 1, 0)), "BOOLEAN");
        assert_eq!(column_type(&field(FieldType::Date, 8, 0)), "DATE");
        assert_eq!(column_type(&field(FieldType::Memo, 10, 0)), "TEXT");
        assert_eq!(column_type(&field(FieldType::Other(b'F'), 12, 0)), "VARCHAR(12)");
    }

    #[test]
    fn null_renders_as_keyword() {
        assert_eq!(
            literal(&FieldValue::Null, &field(FieldType::Character, 10, 0)),
            "NULL"
        );
        assert_eq!(
            literal(&FieldValue::Null, &field(FieldType::Numeric, 5, 0)),
            "NULL"
        );
    }

    #[test]
    fn text_bearing_codes_are_quoted() {
        assert_eq!(
            literal(
                &FieldValue::Text("Pen".into()),
                &field(FieldType::Character, 10, 0)
            ),
            "'Pen'"
        );
        assert_eq!(
            literal(
                &FieldValue::Date("2023-01-15".into()),
                &field(FieldType::Date, 8, 0)
            ),
            "'2023-01-15'"
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(
            literal(
                &FieldValue::Text("O'Brien".into()),
                &field(FieldType::Character, 10, 0)
            ),
            "'O''Brien'"
        );
    }

    #[test]
    fn logical_renders_as_bit() {
        let f = field(FieldType::Logical, 1, 0);
        assert_eq!(literal(&FieldValue::Bool(true), &f), "1");
        assert_eq!(literal(&FieldValue::Bool(false), &f), "0");
    }

    #[test]
    fn numerics_render_plain() {
        let int_field = field(FieldType::Numeric, 5, 0);
        assert_eq!(literal(&FieldValue::Int(7), &int_field), "7");

        let dec_field = field(FieldType::Numeric, 8, 2);
        assert_eq!(literal(&FieldValue::Float(19.99), &dec_field), "19.99");
        assert_eq!(literal(&FieldValue::Float(f64::NAN), &dec_field), "NaN");
    }
}
