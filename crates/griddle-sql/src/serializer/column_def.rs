use super::{Formatter, Ident, Params, ToSql};

use griddle_core::{schema::ColumnDefinition, Result};

impl ToSql for &ColumnDefinition {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let ty = f.serializer.dialect.column_type(self.ty, self.length)?;

        fmt!(f, Ident(&self.name), " ", ty.as_str());

        if !self.nullable {
            fmt!(f, " NOT NULL");
        }

        if self.auto_increment {
            let clause = f.serializer.dialect.identity_clause()?;
            if !clause.is_empty() {
                fmt!(f, " ", clause);
            }
        }

        Ok(())
    }
}
