use super::Row;
use crate::{Error, Result};

#[derive(Debug, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result rows
    Values(Vec<Row>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(values: Vec<Row>) -> Self {
        Self {
            rows: Rows::Values(values),
        }
    }

    pub fn empty() -> Self {
        Self {
            rows: Rows::Values(vec![]),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            Self::Values(_) => Err(Error::invalid_result(
                "expected affected-row count, got rows",
            )),
        }
    }

    pub fn into_values(self) -> Result<Vec<Row>> {
        match self {
            Self::Values(values) => Ok(values),
            Self::Count(_) => Err(Error::invalid_result(
                "expected rows, got affected-row count",
            )),
        }
    }
}
