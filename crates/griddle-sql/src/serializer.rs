#[macro_use]
mod fmt;
use fmt::ToSql;

mod column_def;

mod create_table;

mod delim;
use delim::Comma;

mod drop_table;

mod ident;
use ident::Ident;

mod insert;

mod params;
pub use params::{Params, Placeholder};

mod select_by_key;

use crate::{dialect::Dialect, stmt::Statement};

use griddle_core::Result;

/// Serialize a statement to a SQL string
pub struct Serializer<'a> {
    /// Handles the differences between SQL dialects
    dialect: &'a dyn Dialect,
}

struct Formatter<'a, P> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store bind parameters
    params: &'a mut P,
}

impl<'a> Serializer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Serializer<'a> {
        Serializer { dialect }
    }

    /// Serializes the statement, collecting bind values into `params`.
    ///
    /// Deterministic: identical inputs produce byte-identical SQL text.
    pub fn serialize(&self, stmt: &Statement<'_>, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt)?;

        ret.push(';');
        Ok(ret)
    }
}

impl ToSql for &Statement<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::SelectByKey(stmt) => stmt.to_sql(f),
        }
    }
}
