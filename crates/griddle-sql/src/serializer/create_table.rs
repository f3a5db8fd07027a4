use super::{Comma, Formatter, Ident, Params, ToSql};

use crate::stmt;

use griddle_core::Result;

impl ToSql for &stmt::CreateTable<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = Ident(&self.table.name);
        let columns = Comma(&self.table.columns);
        let pk = Ident(&self.table.primary_key_column().name);

        fmt!(
            f, "CREATE TABLE ", name, " (", columns, ", PRIMARY KEY (", pk, "))"
        );

        Ok(())
    }
}
