use super::Error;
use crate::stmt::Type;

/// Error when a dialect has no SQL type name for a scalar type.
#[derive(Debug)]
pub(super) struct UnsupportedTypeError {
    ty: Type,
    dialect: Box<str>,
}

impl std::error::Error for UnsupportedTypeError {}

impl core::fmt::Display for UnsupportedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported type: {:?} has no SQL mapping in dialect `{}`",
            self.ty, self.dialect
        )
    }
}

impl Error {
    /// Creates an unsupported type error.
    pub fn unsupported_type(ty: Type, dialect: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedTypeError {
            ty,
            dialect: dialect.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
