use super::Error;
use crate::stmt::Value;

/// Error when a row value cannot be coerced into its target field.
#[derive(Debug)]
pub(super) struct TypeCoercionError {
    value: Value,
    to_type: &'static str,
}

impl std::error::Error for TypeCoercionError {}

impl core::fmt::Display for TypeCoercionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.value.ty() {
            Some(ty) => write!(f, "cannot convert {:?} to {}", ty, self.to_type),
            None => write!(f, "cannot convert Null to {}", self.to_type),
        }
    }
}

impl Error {
    /// Creates a type coercion error.
    pub fn type_coercion(value: Value, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeCoercion(TypeCoercionError {
            value,
            to_type,
        }))
    }

    /// Returns `true` if this error is a type coercion error.
    pub fn is_type_coercion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeCoercion(_))
    }
}
