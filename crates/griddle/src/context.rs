use crate::EntityKey;

use griddle_core::schema::Entity;

use std::{any::Any, collections::HashMap, rc::Rc};

/// Identity map scoped to one unit of work.
///
/// At most one instance is associated with a given key at any time; a
/// later registration for the same key replaces the former, with no
/// merge. The context owns `Rc` handles, so it cannot cross threads;
/// create one per unit of work, pass it by reference to collaborators,
/// and drop it wholesale at the end. There is no partial eviction.
#[derive(Default)]
pub struct PersistenceContext {
    entities: HashMap<EntityKey, Rc<dyn Any>>,
}

impl PersistenceContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an instance under a key, replacing any prior instance.
    pub fn add_entity<T: Entity>(&mut self, key: EntityKey, instance: Rc<T>) {
        self.entities.insert(key, instance);
    }

    /// The managed instance for a key, if any. Pure lookup.
    pub fn get_entity<T: Entity>(&self, key: &EntityKey) -> Option<Rc<T>> {
        let instance = self.entities.get(key)?;
        Rc::clone(instance).downcast::<T>().ok()
    }

    pub fn contains(&self, key: &EntityKey) -> bool {
        self.entities.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
