use super::{Formatter, Params, ToSql};

use griddle_core::Result;

pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.serializer.dialect.quote_ident(self.0.as_ref(), f.dst);
        Ok(())
    }
}
