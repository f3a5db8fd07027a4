use griddle_core::{
    driver::{Executor, Rows},
    schema::{Entity, Schema},
    Result,
};
use griddle_sql::{Dialect, Serializer, Statement};

/// Executes mutation and table-lifecycle statements for entity types.
///
/// Writes bypass the identity map entirely; whether and when an inserted
/// instance is registered is the caller's decision.
pub struct EntityPersister<'a> {
    executor: &'a dyn Executor,
    schema: &'a Schema,
    dialect: &'a dyn Dialect,
}

impl<'a> EntityPersister<'a> {
    pub fn new(
        executor: &'a dyn Executor,
        schema: &'a Schema,
        dialect: &'a dyn Dialect,
    ) -> EntityPersister<'a> {
        EntityPersister {
            executor,
            schema,
            dialect,
        }
    }

    /// Inserts the instance's present field values, returning the
    /// affected-row count.
    ///
    /// Columns whose value is absent are omitted, as is the identifier
    /// column when it is database-generated. Executor faults propagate
    /// unrecovered.
    pub fn insert<T: Entity>(&self, instance: &T) -> Result<u64> {
        let table = self.schema.table_of::<T>()?;

        let mut columns = vec![];
        let mut values = vec![];

        for (index, column) in table.columns.iter().enumerate() {
            if column.auto_increment {
                continue;
            }

            let value = instance.get(&column.field);
            if value.is_null() {
                continue;
            }

            columns.push(index);
            values.push(value);
        }

        self.execute(&Statement::insert(table, columns, values))?
            .into_count()
    }

    /// Creates the table an entity type maps to.
    pub fn create_table<T: Entity>(&self) -> Result<()> {
        let table = self.schema.table_of::<T>()?;
        self.execute(&Statement::create_table(table))?;
        Ok(())
    }

    /// Drops the table an entity type maps to.
    pub fn drop_table<T: Entity>(&self) -> Result<()> {
        let table = self.schema.table_of::<T>()?;
        self.execute(&Statement::drop_table(table))?;
        Ok(())
    }

    fn execute(&self, stmt: &Statement<'_>) -> Result<Rows> {
        let mut params = vec![];
        let sql = Serializer::new(self.dialect).serialize(stmt, &mut params)?;

        tracing::debug!(%sql, "executing statement");
        let response = self.executor.execute(&sql, &params)?;
        Ok(response.rows)
    }
}
