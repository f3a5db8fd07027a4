use super::{Formatter, Ident, Params, ToSql};

use crate::stmt;

use griddle_core::Result;

impl ToSql for &stmt::SelectByKey<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = Ident(&self.table.name);
        let id = Ident(&self.table.primary_key_column().name);

        fmt!(f, "SELECT * FROM ", name, " WHERE ", id, " = ");

        let placeholder = f.params.push(&self.key);
        fmt!(f, placeholder);

        Ok(())
    }
}
