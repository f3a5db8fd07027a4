use super::{Dialect, DEFAULT_VARCHAR_LENGTH};

use griddle_core::{stmt::Type, Error, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct Postgresql;

impl Dialect for Postgresql {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn column_type(&self, ty: Type, length: Option<u64>) -> Result<String> {
        match ty {
            Type::Bool => Ok("BOOLEAN".to_string()),
            Type::I32 => Ok("INTEGER".to_string()),
            Type::I64 => Ok("BIGINT".to_string()),
            // PostgreSQL has no unsigned integer storage class
            Type::U64 => Err(Error::unsupported_type(ty, self.name())),
            Type::String => Ok(format!(
                "VARCHAR({})",
                length.unwrap_or(DEFAULT_VARCHAR_LENGTH)
            )),
        }
    }

    fn placeholder(&self, position: usize, dst: &mut String) {
        dst.push('$');
        dst.push_str(&position.to_string());
    }

    fn identity_clause(&self) -> Result<&'static str> {
        Ok("GENERATED BY DEFAULT AS IDENTITY")
    }
}
