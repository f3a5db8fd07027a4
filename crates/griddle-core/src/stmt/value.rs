use super::Type;
use crate::{Error, Result};

/// A scalar value flowing between entity fields, bind parameters, and
/// result rows.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 64-bit integer
    U64(u64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The scalar type of this value, or `None` for null.
    pub const fn ty(&self) -> Option<Type> {
        match self {
            Self::Bool(_) => Some(Type::Bool),
            Self::I32(_) => Some(Type::I32),
            Self::I64(_) => Some(Type::I64),
            Self::U64(_) => Some(Type::U64),
            Self::Null => None,
            Self::String(_) => Some(Type::String),
        }
    }

    /// Coerces the value into a `bool`.
    ///
    /// Databases without a native boolean storage class return integer
    /// zero/one, so those are accepted as the inverse of the scalar
    /// mapping.
    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            Self::I32(0) | Self::I64(0) => Ok(false),
            Self::I32(1) | Self::I64(1) => Ok(true),
            _ => Err(Error::type_coercion(self, "bool")),
        }
    }

    /// Coerces the value into an `i32`, narrowing wider integers when they
    /// are in range.
    pub fn to_i32(self) -> Result<i32> {
        match self {
            Self::I32(v) => Ok(v),
            Self::I64(v) => i32::try_from(v).map_err(|_| Error::type_coercion(self, "i32")),
            Self::U64(v) => i32::try_from(v).map_err(|_| Error::type_coercion(self, "i32")),
            _ => Err(Error::type_coercion(self, "i32")),
        }
    }

    /// Coerces the value into an `i64`.
    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I32(v) => Ok(v.into()),
            Self::I64(v) => Ok(v),
            Self::U64(v) => i64::try_from(v).map_err(|_| Error::type_coercion(self, "i64")),
            _ => Err(Error::type_coercion(self, "i64")),
        }
    }

    /// Coerces the value into a `u64`.
    pub fn to_u64(self) -> Result<u64> {
        match self {
            Self::U64(v) => Ok(v),
            Self::I32(v) => u64::try_from(v).map_err(|_| Error::type_coercion(self, "u64")),
            Self::I64(v) => u64::try_from(v).map_err(|_| Error::type_coercion(self, "u64")),
            _ => Err(Error::type_coercion(self, "u64")),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(Error::type_coercion(self, "String")),
        }
    }

    pub fn to_option_bool(self) -> Result<Option<bool>> {
        match self {
            Self::Null => Ok(None),
            other => other.to_bool().map(Some),
        }
    }

    pub fn to_option_i32(self) -> Result<Option<i32>> {
        match self {
            Self::Null => Ok(None),
            other => other.to_i32().map(Some),
        }
    }

    pub fn to_option_i64(self) -> Result<Option<i64>> {
        match self {
            Self::Null => Ok(None),
            other => other.to_i64().map(Some),
        }
    }

    pub fn to_option_u64(self) -> Result<Option<u64>> {
        match self {
            Self::Null => Ok(None),
            other => other.to_u64().map(Some),
        }
    }

    pub fn to_option_string(self) -> Result<Option<String>> {
        match self {
            Self::Null => Ok(None),
            other => other.to_string().map(Some),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u64> for Value {
    fn from(src: u64) -> Self {
        Self::U64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
