use super::{ColumnDefinition, EntityDescriptor};
use crate::{stmt::Type, Error, Result};

use heck::ToSnakeCase;

/// A resolved table definition.
///
/// Built once per entity type from its structural description; immutable
/// afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    /// Name of the table
    pub name: String,

    /// The table's columns, in field declaration order
    pub columns: Vec<ColumnDefinition>,

    /// Index of the identifier column within `columns`
    pub primary_key: usize,
}

impl TableDefinition {
    /// Resolves a structural description into a table definition.
    ///
    /// The table name defaults to the snake_case transform of the entity
    /// name unless the descriptor carries an explicit override. Fails with
    /// an invalid mapping error when the descriptor declares zero or more
    /// than one identifier field, maps two fields to one column, or marks
    /// a column as database-generated in a way the mapping cannot honor.
    pub fn resolve(descriptor: &EntityDescriptor) -> Result<TableDefinition> {
        let name = match descriptor.table {
            Some(name) => name.to_string(),
            None => descriptor.name.to_snake_case(),
        };

        let mut columns: Vec<ColumnDefinition> = Vec::with_capacity(descriptor.fields.len());
        let mut primary_key = None;

        for field in &descriptor.fields {
            let column_name = field.column.unwrap_or(field.name).to_string();

            if columns.iter().any(|column| column.name == column_name) {
                return Err(Error::invalid_mapping(format!(
                    "entity `{}` maps two fields to column `{}`",
                    descriptor.name, column_name
                )));
            }

            if field.primary_key {
                if primary_key.is_some() {
                    return Err(Error::invalid_mapping(format!(
                        "entity `{}` declares more than one identifier field",
                        descriptor.name
                    )));
                }
                primary_key = Some(columns.len());
            }

            if field.auto_increment {
                if !field.primary_key {
                    return Err(Error::invalid_mapping(format!(
                        "entity `{}`: field `{}` is database-generated but not the identifier",
                        descriptor.name, field.name
                    )));
                }
                if !matches!(field.ty, Type::I32 | Type::I64 | Type::U64) {
                    return Err(Error::invalid_mapping(format!(
                        "entity `{}`: database-generated field `{}` must be an integer",
                        descriptor.name, field.name
                    )));
                }
            }

            columns.push(ColumnDefinition {
                field: field.name.to_string(),
                name: column_name,
                ty: field.ty,
                nullable: field.nullable,
                length: field.length,
                primary_key: field.primary_key,
                auto_increment: field.auto_increment,
            });
        }

        let Some(primary_key) = primary_key else {
            return Err(Error::invalid_mapping(format!(
                "entity `{}` declares no identifier field",
                descriptor.name
            )));
        };

        Ok(TableDefinition {
            name,
            columns,
            primary_key,
        })
    }

    /// The table's identifier column.
    pub fn primary_key_column(&self) -> &ColumnDefinition {
        &self.columns[self.primary_key]
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.name == name)
    }
}
