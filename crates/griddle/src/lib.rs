mod context;
pub use context::PersistenceContext;

mod key;
pub use key::EntityKey;

mod loader;
pub use loader::EntityLoader;

mod persister;
pub use persister::EntityPersister;

pub use griddle_core::{driver, schema, stmt, Error, Result};
pub use griddle_core::{
    driver::Executor,
    schema::{Entity, Schema},
};
pub use griddle_sql::{dialect, Dialect};
