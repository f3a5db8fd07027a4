use super::Error;

/// Error when the external statement executor reports a fault.
///
/// This wraps whatever the executor raised (constraint violation,
/// connectivity loss, syntax rejection) without retrying or recovering.
#[derive(Debug)]
pub(super) struct PersistenceFailureError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for PersistenceFailureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for PersistenceFailureError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the fault and walk its source chain
        write!(f, "persistence failure: {}", self.inner)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from an executor-reported fault.
    ///
    /// This is the way [`Executor`](crate::Executor) implementations are
    /// expected to surface database-level errors.
    pub fn persistence_failure(
        err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Error {
        Error::from(super::ErrorKind::PersistenceFailure(
            PersistenceFailureError { inner: err.into() },
        ))
    }

    /// Returns `true` if this error is a persistence failure.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::PersistenceFailure(_))
    }
}
