use griddle_core::schema::TableDefinition;

/// DROP TABLE statement
#[derive(Debug, Clone)]
pub struct DropTable<'a> {
    /// The table to drop
    pub table: &'a TableDefinition,
}
