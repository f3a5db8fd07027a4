use crate::{EntityKey, PersistenceContext};

use griddle_core::{
    driver::Executor,
    err,
    schema::{Entity, Schema},
    Error, Result,
};
use griddle_sql::{Dialect, Serializer, Statement};

use std::rc::Rc;

/// Loads entities by key, consulting the identity map before storage.
pub struct EntityLoader<'a> {
    executor: &'a dyn Executor,
    schema: &'a Schema,
    dialect: &'a dyn Dialect,
}

impl<'a> EntityLoader<'a> {
    pub fn new(
        executor: &'a dyn Executor,
        schema: &'a Schema,
        dialect: &'a dyn Dialect,
    ) -> EntityLoader<'a> {
        EntityLoader {
            executor,
            schema,
            dialect,
        }
    }

    /// Loads the instance identified by `key`.
    ///
    /// A context hit returns the resident instance without touching
    /// storage; a key already resident is never re-queried or
    /// re-materialized within the unit of work. Otherwise the row is
    /// fetched, materialized through the type's default construction
    /// path, and registered under the key before being returned.
    pub fn load<T: Entity>(
        &self,
        context: &mut PersistenceContext,
        key: &EntityKey,
    ) -> Result<Rc<T>> {
        if !key.is_for::<T>() {
            return Err(err!(
                "key for `{}` cannot load `{}`",
                key.type_name(),
                std::any::type_name::<T>()
            ));
        }

        if let Some(instance) = context.get_entity::<T>(key) {
            tracing::debug!(key = ?key, "identity map hit");
            return Ok(instance);
        }

        let table = self.schema.table_of::<T>()?;

        let stmt = Statement::select_by_key(table, key.id().clone());
        let mut params = vec![];
        let sql = Serializer::new(self.dialect).serialize(&stmt, &mut params)?;

        tracing::debug!(%sql, "loading entity");
        let response = self.executor.execute(&sql, &params)?;
        let rows = response.rows.into_values()?;

        let Some(row) = rows.into_iter().next() else {
            return Err(Error::record_not_found(format!(
                "table={} key={:?}",
                table.name,
                key.id()
            )));
        };

        let mut instance = T::default();
        for column in &table.columns {
            let Some(value) = row.get(&column.name) else {
                return Err(Error::invalid_result(format!(
                    "column `{}` missing from result row",
                    column.name
                )));
            };
            instance.set(&column.field, value.clone())?;
        }

        let instance = Rc::new(instance);
        context.add_entity(key.clone(), Rc::clone(&instance));

        Ok(instance)
    }
}
