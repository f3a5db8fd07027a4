use griddle_core::{schema::TableDefinition, stmt::Value};

/// Parameterized single-row INSERT
#[derive(Debug, Clone)]
pub struct Insert<'a> {
    /// The table to insert into
    pub table: &'a TableDefinition,

    /// Indices into the table's column list, one per value
    pub columns: Vec<usize>,

    /// Values, passed as bind parameters in column order
    pub values: Vec<Value>,
}
