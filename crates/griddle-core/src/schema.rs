mod column;
pub use column::ColumnDefinition;

mod entity;
pub use entity::{Entity, EntityDescriptor, FieldDescriptor};

mod table;
pub use table::TableDefinition;

use crate::{Error, Result};

use std::{
    any::{type_name, TypeId},
    collections::HashMap,
};

/// Resolved table definitions for a set of entity types.
///
/// Resolution happens once, at build time; the resulting schema carries no
/// session state and may be shared across any number of units of work.
#[derive(Debug)]
pub struct Schema {
    tables: HashMap<TypeId, TableDefinition>,
}

#[derive(Debug, Default)]
pub struct Builder {
    entities: Vec<(TypeId, EntityDescriptor)>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The table definition a type was resolved to.
    pub fn table_of<T: Entity>(&self) -> Result<&TableDefinition> {
        self.tables.get(&TypeId::of::<T>()).ok_or_else(|| {
            Error::invalid_mapping(format!(
                "type `{}` is not registered with this schema",
                type_name::<T>()
            ))
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableDefinition> + '_ {
        self.tables.values()
    }
}

impl Builder {
    pub fn register<T: Entity>(mut self) -> Self {
        self.entities.push((TypeId::of::<T>(), T::descriptor()));
        self
    }

    /// Resolves every registered descriptor into an immutable schema.
    pub fn build(self) -> Result<Schema> {
        let mut tables = HashMap::new();
        let mut names: HashMap<String, &'static str> = HashMap::new();

        for (type_id, descriptor) in self.entities {
            let entity = descriptor.name;
            let table = TableDefinition::resolve(&descriptor)?;

            if let Some(prev) = names.insert(table.name.clone(), entity) {
                return Err(Error::invalid_mapping(format!(
                    "entities `{}` and `{}` map to the same table `{}`",
                    prev, entity, table.name
                )));
            }

            tables.insert(type_id, table);
        }

        Ok(Schema { tables })
    }
}
