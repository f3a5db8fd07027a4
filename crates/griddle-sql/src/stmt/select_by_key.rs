use griddle_core::{schema::TableDefinition, stmt::Value};

/// Single-row SELECT against the identifier column
#[derive(Debug, Clone)]
pub struct SelectByKey<'a> {
    /// The table to select from
    pub table: &'a TableDefinition,

    /// Identifier value, passed as a bind parameter
    pub key: Value,
}
