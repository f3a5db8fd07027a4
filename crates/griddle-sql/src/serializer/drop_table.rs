use super::{Formatter, Ident, Params, ToSql};

use crate::stmt;

use griddle_core::Result;

impl ToSql for &stmt::DropTable<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, "DROP TABLE ", Ident(&self.table.name));

        Ok(())
    }
}
