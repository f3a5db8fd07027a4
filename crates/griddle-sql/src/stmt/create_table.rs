use griddle_core::schema::TableDefinition;

/// CREATE TABLE statement
#[derive(Debug, Clone)]
pub struct CreateTable<'a> {
    /// The table to create
    pub table: &'a TableDefinition,
}
