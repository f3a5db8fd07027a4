use super::{Dialect, DEFAULT_VARCHAR_LENGTH};

use griddle_core::{stmt::Type, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct Mysql;

impl Dialect for Mysql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_char(&self) -> char {
        '`'
    }

    fn column_type(&self, ty: Type, length: Option<u64>) -> Result<String> {
        Ok(match ty {
            Type::Bool => "BOOLEAN".to_string(),
            Type::I32 => "INT".to_string(),
            Type::I64 => "BIGINT".to_string(),
            Type::U64 => "BIGINT UNSIGNED".to_string(),
            Type::String => format!("VARCHAR({})", length.unwrap_or(DEFAULT_VARCHAR_LENGTH)),
        })
    }

    fn placeholder(&self, _position: usize, dst: &mut String) {
        dst.push('?');
    }

    fn identity_clause(&self) -> Result<&'static str> {
        Ok("AUTO_INCREMENT")
    }
}
