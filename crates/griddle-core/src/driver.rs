mod response;
pub use response::{Response, Rows};

mod row;
pub use row::Row;

use crate::{stmt::Value, Result};

/// Executes SQL statements against a database.
///
/// This is the seam to the physical connection: implementations receive
/// the statement text plus the ordered bind values and return either the
/// affected-row count or the result rows. Calls are synchronous and
/// blocking; database-level faults are surfaced via
/// [`Error::persistence_failure`](crate::Error::persistence_failure) and
/// are never retried by the core.
pub trait Executor {
    fn execute(&self, sql: &str, params: &[Value]) -> Result<Response>;
}
