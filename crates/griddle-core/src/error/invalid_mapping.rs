use super::Error;

/// Error when an entity's structural description cannot be mapped to a
/// table definition.
///
/// This occurs when:
/// - An entity declares zero or more than one identifier field
/// - Two fields map to the same column name
/// - Two entities map to the same table name
/// - A type is used with a schema it was never registered with
#[derive(Debug)]
pub(super) struct InvalidMappingError {
    message: Box<str>,
}

impl std::error::Error for InvalidMappingError {}

impl core::fmt::Display for InvalidMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid mapping: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid mapping error.
    ///
    /// These errors are caught at resolution time, before any SQL is
    /// generated or executed.
    pub fn invalid_mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidMapping(InvalidMappingError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid mapping error.
    pub fn is_invalid_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidMapping(_))
    }
}
