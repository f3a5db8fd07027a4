use super::Dialect;

use griddle_core::{stmt::Type, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn column_type(&self, ty: Type, _length: Option<u64>) -> Result<String> {
        // SQLite columns carry type affinity, not constraints; lengths are
        // not enforced and integers share one storage class.
        Ok(match ty {
            Type::Bool | Type::I32 | Type::I64 | Type::U64 => "INTEGER".to_string(),
            Type::String => "TEXT".to_string(),
        })
    }

    fn placeholder(&self, position: usize, dst: &mut String) {
        dst.push('?');
        dst.push_str(&position.to_string());
    }

    fn identity_clause(&self) -> Result<&'static str> {
        // An INTEGER PRIMARY KEY aliases rowid and is assigned on insert
        // without any keyword.
        Ok("")
    }
}
