use super::{Formatter, ToSql};

use griddle_core::{stmt::Value, Result};

/// Collects bind parameters as a statement is serialized.
///
/// Values are never inlined into the SQL text; each pushed value is
/// referenced by a dialect-specific placeholder.
pub trait Params {
    fn push(&mut self, param: &Value) -> Placeholder;
}

/// 1-based position of a pushed bind parameter.
pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.serializer.dialect.placeholder(self.0, f.dst);
        Ok(())
    }
}
