mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::Insert;

mod select_by_key;
pub use select_by_key::SelectByKey;

pub use griddle_core::stmt::*;

use griddle_core::schema::TableDefinition;

/// A SQL statement over a resolved table definition.
///
/// Statements are plain data; building one performs no I/O and
/// serializing one is deterministic.
#[derive(Debug, Clone)]
pub enum Statement<'a> {
    CreateTable(CreateTable<'a>),
    DropTable(DropTable<'a>),
    Insert(Insert<'a>),
    SelectByKey(SelectByKey<'a>),
}

impl<'a> Statement<'a> {
    pub fn create_table(table: &'a TableDefinition) -> Self {
        Self::CreateTable(CreateTable { table })
    }

    pub fn drop_table(table: &'a TableDefinition) -> Self {
        Self::DropTable(DropTable { table })
    }

    pub fn select_by_key(table: &'a TableDefinition, key: Value) -> Self {
        Self::SelectByKey(SelectByKey { table, key })
    }

    pub fn insert(table: &'a TableDefinition, columns: Vec<usize>, values: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self::Insert(Insert {
            table,
            columns,
            values,
        })
    }
}
