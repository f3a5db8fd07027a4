mod invalid_connection_url;
mod invalid_mapping;
mod invalid_result;
mod persistence_failure;
mod record_not_found;
mod type_coercion;
mod unsupported_type;

use invalid_connection_url::InvalidConnectionUrlError;
use invalid_mapping::InvalidMappingError;
use invalid_result::InvalidResultError;
use persistence_failure::PersistenceFailureError;
use record_not_found::RecordNotFoundError;
use std::sync::Arc;
use type_coercion::TypeCoercionError;
use unsupported_type::UnsupportedTypeError;

/// Returns early with an ad-hoc [`Error`] built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in Griddle.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    InvalidConnectionUrl(InvalidConnectionUrlError),
    InvalidMapping(InvalidMappingError),
    InvalidResult(InvalidResultError),
    PersistenceFailure(PersistenceFailureError),
    RecordNotFound(RecordNotFoundError),
    TypeCoercion(TypeCoercionError),
    UnsupportedType(UnsupportedTypeError),
}

impl Error {
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        match args.as_str() {
            Some(s) => Error::from(ErrorKind::Anyhow(anyhow::anyhow!(s))),
            None => Error::from(ErrorKind::Anyhow(anyhow::anyhow!(args.to_string()))),
        }
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::PersistenceFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self.kind() {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            InvalidMapping(err) => core::fmt::Display::fmt(err, f),
            InvalidResult(err) => core::fmt::Display::fmt(err, f),
            PersistenceFailure(err) => core::fmt::Display::fmt(err, f),
            RecordNotFound(err) => core::fmt::Display::fmt(err, f),
            TypeCoercion(err) => core::fmt::Display::fmt(err, f),
            UnsupportedType(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.inner).finish()
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(kind),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}
