/// Scalar types an entity field can be mapped with.
///
/// This is the application-side type vocabulary; the SQL type name a
/// column is declared with is the dialect's concern and may differ per
/// database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// A boolean value
    Bool,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 64-bit integer
    U64,

    /// String value
    String,
}
