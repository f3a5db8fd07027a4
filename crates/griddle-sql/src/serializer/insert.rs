use super::{Comma, Formatter, Ident, Params, ToSql};

use crate::stmt;

use griddle_core::Result;

impl ToSql for &stmt::Insert<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = Ident(&self.table.name);
        let columns = Comma(
            self.columns
                .iter()
                .map(|index| Ident(&self.table.columns[*index].name)),
        );

        fmt!(f, "INSERT INTO ", name, " (", columns, ") VALUES (");

        let mut s = "";
        for value in &self.values {
            let placeholder = f.params.push(value);
            fmt!(f, s, placeholder);
            s = ", ";
        }

        fmt!(f, ")");

        Ok(())
    }
}
