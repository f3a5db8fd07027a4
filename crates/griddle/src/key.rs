use griddle_core::{schema::Entity, stmt::Value};

use std::any::{type_name, TypeId};

/// Uniquely names one row: an identifier value paired with the entity
/// type's identity.
///
/// Two keys are equal iff both components match. Keys are only ever used
/// as map keys and are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKey {
    id: Value,
    ty: TypeId,
    ty_name: &'static str,
}

impl EntityKey {
    pub fn new<T: Entity>(id: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            ty: TypeId::of::<T>(),
            ty_name: type_name::<T>(),
        }
    }

    /// The identifier component.
    pub fn id(&self) -> &Value {
        &self.id
    }

    /// True if the key names an instance of `T`.
    pub fn is_for<T: Entity>(&self) -> bool {
        self.ty == TypeId::of::<T>()
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.ty_name
    }
}
