//! # Script Assembly
//!
//! Builds the three sections of the generated script: the per-directory
//! preamble, one schema-plus-data section per table, and index-creation
//! statements for tables with a companion index file.
//!
//! ## Output Shape
//!
//! ```text
//! -- Source: shop
//!
//! DROP DATABASE IF EXISTS shop;
//! CREATE DATABASE shop;
//! USE shop;
//!
//! -- Table: items
//! CREATE TABLE items (
//!     id BIGINT,
//!     name VARCHAR(20)
//! );
//!
//! INSERT INTO items (id, name) VALUES (7, 'Pen'),
//! (8, 'Ink');
//!
//! CREATE INDEX idx_items_0 ON items (id);
//! ```
//!
//! All records of a table go into a single multi-row insert; a table with
//! fields but no records emits its creation statement only.
//!
//! ## Index Naming
//!
//! Index statements are named `idx_<table>_<position>` where position is the
//! definition's place among all decoded definitions. Definitions with empty
//! expressions are skipped for emission but still consume their position;
//! names are never renumbered after filtering.

use crate::dbf::IndexDef;
use crate::sql::types::{column_type, literal};
use crate::types::{Record, TableStructure};

/// Emits the directory preamble: drop, recreate, and select the database.
pub fn preamble(database: &str) -> String {
    format!(
        "-- Source: {database}\n\n\
         DROP DATABASE IF EXISTS {database};\n\
         CREATE DATABASE {database};\n\
         USE {database};\n\n"
    )
}

/// Emits the creation statement and, when records exist, the bulk insert
/// for one table. Fields appear in structure order in both.
pub fn table_script(table: &str, structure: &TableStructure, records: &[Record]) -> String {
    let mut sql = format!("-- Table: {}\n", table);

    let columns = structure
        .iter()
        .map(|f| format!("    {} {}", f.name(), column_type(f)))
        .collect::<Vec<_>>()
        .join(",\n");
    sql.push_str(&format!("CREATE TABLE {} (\n{}\n);\n\n", table, columns));

    if !records.is_empty() {
        let names = structure
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(", ");

        let tuples = records
            .iter()
            .map(|record| {
                let values = structure
                    .iter()
                    .zip(record.values())
                    .map(|(field, value)| literal(value, field))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({})", values)
            })
            .collect::<Vec<_>>()
            .join(",\n");

        sql.push_str(&format!(
            "INSERT INTO {} ({}) VALUES {};\n\n",
            table, names, tuples
        ));
    }

    sql
}

/// Emits one index-creation statement per definition with a non-empty
/// expression. Positions are assigned over all definitions before the
/// filter, so skipped definitions leave holes in the numbering.
pub fn index_script(table: &str, indexes: &[IndexDef]) -> String {
    let mut sql = String::new();

    for (position, index) in indexes.iter().enumerate() {
        if index.expression.is_empty() {
            continue;
        }
        sql.push_str(&format!(
            "CREATE INDEX idx_{}_{} ON {} ({});\n",
            table, position, table, index.expression
        ));
    }

    if !sql.is_empty() {
        sql.push('\n');
    }

    sql
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldDef, FieldType, FieldValue};
    use smallvec::smallvec;

    fn items_structure() -> TableStructure {
        vec![
            FieldDef::new("id", FieldType::Numeric, 5, 0),
            FieldDef::new("name", FieldType::Character, 20, 0),
        ]
    }

    #[test]
    fn preamble_drops_and_selects() {
        let sql = preamble("shop");
        assert!(sql.contains("DROP DATABASE IF EXISTS shop;"));
        assert!(sql.contains("CREATE DATABASE shop;"));
        assert!(sql.contains("USE shop;"));
    }

    #[test]
    fn creation_lists_fields_in_order() {
        let sql = table_script("items", &items_structure(), &[]);
        assert!(sql.contains("CREATE TABLE items (\n    id BIGINT,\n    name VARCHAR(20)\n);"));
    }

    #[test]
    fn zero_records_emits_no_insert() {
        let sql = table_script("items", &items_structure(), &[]);
        assert!(!sql.contains("INSERT"));
    }

    #[test]
    fn single_record_insert() {
        let records = vec![Record::new(smallvec![
            FieldValue::Int(7),
            FieldValue::Text("Pen".into()),
        ])];
        let sql = table_script("items", &items_structure(), &records);
        assert!(sql.contains("INSERT INTO items (id, name) VALUES (7, 'Pen');"));
    }

    #[test]
    fn multi_record_insert_is_one_statement() {
        let records = vec![
            Record::new(smallvec![FieldValue::Int(7), FieldValue::Text("Pen".into())]),
            Record::new(smallvec![FieldValue::Int(8), FieldValue::Text("Ink".into())]),
        ];
        let sql = table_script("items", &items_structure(), &records);
        assert!(sql.contains("VALUES (7, 'Pen'),\n(8, 'Ink');"));
        assert_eq!(sql.matches("INSERT INTO").count(), 1);
    }

    #[test]
    fn index_positions_survive_filtering() {
        let indexes = vec![
            IndexDef {
                name: "dead".into(),
                expression: "".into(),
            },
            IndexDef {
                name: "idx_name".into(),
                expression: "UPPER(name)".into(),
            },
        ];
        let sql = index_script("items", &indexes);

        assert!(!sql.contains("idx_items_0"));
        assert!(sql.contains("CREATE INDEX idx_items_1 ON items (UPPER(name));"));
    }

    #[test]
    fn no_emittable_indexes_yields_empty_section() {
        let indexes = vec![IndexDef {
            name: "dead".into(),
            expression: "".into(),
        }];
        assert_eq!(index_script("items", &indexes), "");
    }
}
