mod mysql;
pub use mysql::Mysql;

mod postgresql;
pub use postgresql::Postgresql;

mod sqlite;
pub use sqlite::Sqlite;

use griddle_core::{stmt::Type, Error, Result};

use url::Url;

/// Text columns declared without an explicit length get this one.
pub const DEFAULT_VARCHAR_LENGTH: u64 = 255;

/// Strategy object encapsulating one database's SQL syntax variations.
///
/// All SQL text variance flows through this seam: identifier quoting,
/// scalar-to-SQL type mapping, bind-parameter markers, and
/// database-generated-key rendering. Substituting dialects requires no
/// change anywhere else.
pub trait Dialect {
    /// Dialect name, as used in connection URL schemes.
    fn name(&self) -> &'static str;

    /// The character identifiers are wrapped in when quoting is needed.
    fn quote_char(&self) -> char {
        '"'
    }

    /// Writes an identifier, quoting it only when it is not already a
    /// safe bare identifier. Embedded quote characters are doubled.
    fn quote_ident(&self, ident: &str, dst: &mut String) {
        if is_safe_ident(ident) {
            dst.push_str(ident);
            return;
        }

        let quote = self.quote_char();
        dst.push(quote);
        for ch in ident.chars() {
            if ch == quote {
                dst.push(quote);
            }
            dst.push(ch);
        }
        dst.push(quote);
    }

    /// SQL type name for a column scalar type, with the length constraint
    /// folded in where the type takes one.
    fn column_type(&self, ty: Type, length: Option<u64>) -> Result<String>;

    /// Writes the bind-parameter marker for the parameter at `position`
    /// (1-based).
    fn placeholder(&self, position: usize, dst: &mut String);

    /// Keyword marking an identifier column as database-generated; empty
    /// when the database needs no keyword.
    fn identity_clause(&self) -> Result<&'static str>;
}

fn is_safe_ident(ident: &str) -> bool {
    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_lowercase() || first == '_')
        && chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}

/// Selects a dialect from a connection URL scheme.
pub fn for_url(url: &str) -> Result<Box<dyn Dialect>> {
    let parsed = Url::parse(url).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

    match parsed.scheme() {
        "mysql" => Ok(Box::new(Mysql)),
        "postgres" | "postgresql" => Ok(Box::new(Postgresql)),
        "sqlite" => Ok(Box::new(Sqlite)),
        scheme => Err(Error::invalid_connection_url(format!(
            "unknown scheme `{scheme}`"
        ))),
    }
}
