use griddle::{
    driver::{Executor, Response, Row},
    stmt::Value,
    Error, Result,
};

use std::{cell::RefCell, collections::HashMap};

/// In-memory stand-in for a database connection.
///
/// Understands exactly the four statement shapes the engine generates
/// (under the MySQL dialect) and keeps a log of every executed statement
/// so tests can assert on I/O.
#[derive(Default)]
pub struct MemoryExecutor {
    tables: RefCell<HashMap<String, Vec<Row>>>,
    statements: RefCell<Vec<String>>,
}

impl MemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statement_count(&self) -> usize {
        self.statements.borrow().len()
    }
}

impl Executor for MemoryExecutor {
    fn execute(&self, sql: &str, params: &[Value]) -> Result<Response> {
        self.statements.borrow_mut().push(sql.to_string());

        let sql = sql.strip_suffix(';').unwrap_or(sql);

        if let Some(rest) = sql.strip_prefix("CREATE TABLE ") {
            let (name, _) = rest.split_once(" (").ok_or_else(|| malformed(sql))?;
            self.tables.borrow_mut().insert(name.to_string(), vec![]);
            return Ok(Response::count(0));
        }

        if let Some(name) = sql.strip_prefix("DROP TABLE ") {
            self.tables.borrow_mut().remove(name);
            return Ok(Response::count(0));
        }

        if let Some(rest) = sql.strip_prefix("INSERT INTO ") {
            let (name, rest) = rest.split_once(" (").ok_or_else(|| malformed(sql))?;
            let (columns, _) = rest.split_once(')').ok_or_else(|| malformed(sql))?;

            let mut tables = self.tables.borrow_mut();
            let Some(rows) = tables.get_mut(name) else {
                return Err(Error::persistence_failure(format!("no such table: {name}")));
            };

            let row: Row = columns.split(", ").zip(params.iter().cloned()).collect();
            rows.push(row);
            return Ok(Response::count(1));
        }

        if let Some(rest) = sql.strip_prefix("SELECT * FROM ") {
            let (name, rest) = rest.split_once(" WHERE ").ok_or_else(|| malformed(sql))?;
            let (column, _) = rest.split_once(" = ").ok_or_else(|| malformed(sql))?;
            let Some(key) = params.first() else {
                return Err(malformed(sql));
            };

            let tables = self.tables.borrow();
            let Some(rows) = tables.get(name) else {
                return Err(Error::persistence_failure(format!("no such table: {name}")));
            };

            let matching = rows
                .iter()
                .filter(|row| row.get(column) == Some(key))
                .cloned()
                .collect();
            return Ok(Response::values(matching));
        }

        Err(Error::persistence_failure(format!(
            "unsupported statement: {sql}"
        )))
    }
}

fn malformed(sql: &str) -> Error {
    Error::persistence_failure(format!("malformed statement: {sql}"))
}
