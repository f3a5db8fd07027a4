use crate::stmt;

/// A column of a resolved table definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// The entity field the column is mapped from.
    pub field: String,

    /// The name of the column in the database.
    pub name: String,

    /// The column's scalar type; the SQL type name is the dialect's
    /// concern.
    pub ty: stmt::Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// Maximum length, for text columns
    pub length: Option<u64>,

    /// True if the column is the table's identifier column
    pub primary_key: bool,

    /// True if the column value is generated by the database on insert
    pub auto_increment: bool,
}
