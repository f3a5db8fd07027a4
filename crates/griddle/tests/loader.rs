mod support;
use support::MemoryExecutor;

use griddle::{
    dialect::Mysql,
    schema::{EntityDescriptor, FieldDescriptor},
    stmt::{Type, Value},
    Entity, EntityKey, EntityLoader, EntityPersister, PersistenceContext, Result, Schema,
};

use pretty_assertions::assert_eq;
use std::rc::Rc;

#[derive(Debug, Default, PartialEq)]
struct Entity1 {
    id: i64,
    age: i32,
}

impl Entity for Entity1 {
    fn descriptor() -> EntityDescriptor {
        EntityDescriptor::new("Entity1")
            .field(FieldDescriptor::new("id", Type::I64).primary_key())
            .field(FieldDescriptor::new("age", Type::I32))
    }

    fn get(&self, field: &str) -> Value {
        match field {
            "id" => self.id.into(),
            "age" => self.age.into(),
            _ => Value::Null,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "id" => self.id = value.to_i64()?,
            "age" => self.age = value.to_i32()?,
            _ => {}
        }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq)]
struct Entity2 {
    id: i64,
    name: String,
}

impl Entity for Entity2 {
    fn descriptor() -> EntityDescriptor {
        EntityDescriptor::new("Entity2")
            .field(FieldDescriptor::new("id", Type::I64).primary_key())
            .field(
                FieldDescriptor::new("name", Type::String)
                    .column("nick_name")
                    .length(60)
                    .not_null(),
            )
    }

    fn get(&self, field: &str) -> Value {
        match field {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            _ => Value::Null,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "id" => self.id = value.to_i64()?,
            "name" => self.name = value.to_string()?,
            _ => {}
        }
        Ok(())
    }
}

fn schema() -> Schema {
    Schema::builder()
        .register::<Entity1>()
        .register::<Entity2>()
        .build()
        .unwrap()
}

fn setup_tables(executor: &MemoryExecutor, schema: &Schema) {
    let persister = EntityPersister::new(executor, schema, &Mysql);
    persister.create_table::<Entity1>().unwrap();
    persister.create_table::<Entity2>().unwrap();
}

#[test]
fn load_entity_registers_into_context() {
    let executor = MemoryExecutor::new();
    let schema = schema();
    setup_tables(&executor, &schema);

    let persister = EntityPersister::new(&executor, &schema, &Mysql);
    assert_eq!(persister.insert(&Entity1 { id: 1, age: 30 }).unwrap(), 1);
    assert_eq!(persister.insert(&Entity1 { id: 2, age: 40 }).unwrap(), 1);

    let mut context = PersistenceContext::new();
    let loader = EntityLoader::new(&executor, &schema, &Mysql);

    let key1 = EntityKey::new::<Entity1>(1i64);
    let key2 = EntityKey::new::<Entity1>(2i64);

    let loaded1 = loader.load::<Entity1>(&mut context, &key1).unwrap();
    let loaded2 = loader.load::<Entity1>(&mut context, &key2).unwrap();

    assert_eq!(*loaded1, Entity1 { id: 1, age: 30 });
    assert_eq!(*loaded2, Entity1 { id: 2, age: 40 });

    let managed = context.get_entity::<Entity1>(&key2).unwrap();
    assert!(Rc::ptr_eq(&managed, &loaded2));
}

#[test]
fn load_from_context_skips_storage() {
    let executor = MemoryExecutor::new();
    let schema = schema();

    let mut context = PersistenceContext::new();
    let loader = EntityLoader::new(&executor, &schema, &Mysql);

    let key1 = EntityKey::new::<Entity1>(1i64);
    let key2 = EntityKey::new::<Entity1>(2i64);

    let entity1 = Rc::new(Entity1 { id: 1, age: 30 });
    let entity2 = Rc::new(Entity1 { id: 2, age: 40 });
    context.add_entity(key1.clone(), Rc::clone(&entity1));
    context.add_entity(key2.clone(), Rc::clone(&entity2));

    // No tables were created; a storage round-trip would fail.
    let loaded1 = loader.load::<Entity1>(&mut context, &key1).unwrap();
    let loaded2 = loader.load::<Entity1>(&mut context, &key2).unwrap();

    assert!(Rc::ptr_eq(&loaded1, &entity1));
    assert!(Rc::ptr_eq(&loaded2, &entity2));
    assert_eq!(executor.statement_count(), 0);
}

#[test]
fn repeated_load_returns_identical_instance() {
    let executor = MemoryExecutor::new();
    let schema = schema();
    setup_tables(&executor, &schema);

    let persister = EntityPersister::new(&executor, &schema, &Mysql);
    persister.insert(&Entity1 { id: 1, age: 30 }).unwrap();

    let mut context = PersistenceContext::new();
    let loader = EntityLoader::new(&executor, &schema, &Mysql);
    let key = EntityKey::new::<Entity1>(1i64);

    let first = loader.load::<Entity1>(&mut context, &key).unwrap();
    let queries_after_first = executor.statement_count();

    let second = loader.load::<Entity1>(&mut context, &key).unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(executor.statement_count(), queries_after_first);
}

#[test]
fn load_absent_key_is_record_not_found() {
    let executor = MemoryExecutor::new();
    let schema = schema();
    setup_tables(&executor, &schema);

    let mut context = PersistenceContext::new();
    let loader = EntityLoader::new(&executor, &schema, &Mysql);
    let key = EntityKey::new::<Entity1>(99i64);

    let err = loader.load::<Entity1>(&mut context, &key).unwrap_err();
    assert!(err.is_record_not_found());
    assert!(!context.contains(&key));
}

#[test]
fn load_assigns_through_column_override() {
    let executor = MemoryExecutor::new();
    let schema = schema();
    setup_tables(&executor, &schema);

    let persister = EntityPersister::new(&executor, &schema, &Mysql);
    persister
        .insert(&Entity2 {
            id: 1,
            name: "John".to_string(),
        })
        .unwrap();
    persister
        .insert(&Entity2 {
            id: 2,
            name: "Jane".to_string(),
        })
        .unwrap();

    let mut context = PersistenceContext::new();
    let loader = EntityLoader::new(&executor, &schema, &Mysql);

    let key1 = EntityKey::new::<Entity2>(1i64);
    let key2 = EntityKey::new::<Entity2>(2i64);

    let loaded1 = loader.load::<Entity2>(&mut context, &key1).unwrap();
    let loaded2 = loader.load::<Entity2>(&mut context, &key2).unwrap();

    assert_eq!(loaded1.name, "John");
    assert_eq!(loaded2.name, "Jane");

    let managed = context.get_entity::<Entity2>(&key1).unwrap();
    assert!(Rc::ptr_eq(&managed, &loaded1));
}

#[test]
fn insert_does_not_register_into_context() {
    let executor = MemoryExecutor::new();
    let schema = schema();
    setup_tables(&executor, &schema);

    let persister = EntityPersister::new(&executor, &schema, &Mysql);
    persister.insert(&Entity1 { id: 1, age: 30 }).unwrap();

    let context = PersistenceContext::new();
    assert!(context.is_empty());
    assert!(!context.contains(&EntityKey::new::<Entity1>(1i64)));
}

#[test]
fn executor_fault_is_persistence_failure() {
    let executor = MemoryExecutor::new();
    let schema = schema();

    // Table was never created
    let persister = EntityPersister::new(&executor, &schema, &Mysql);
    let err = persister.insert(&Entity1 { id: 1, age: 30 }).unwrap_err();
    assert!(err.is_persistence_failure());
}

#[test]
fn drop_table_removes_storage() {
    let executor = MemoryExecutor::new();
    let schema = schema();
    setup_tables(&executor, &schema);

    let persister = EntityPersister::new(&executor, &schema, &Mysql);
    persister.insert(&Entity1 { id: 1, age: 30 }).unwrap();
    persister.drop_table::<Entity1>().unwrap();

    let mut context = PersistenceContext::new();
    let loader = EntityLoader::new(&executor, &schema, &Mysql);
    let err = loader
        .load::<Entity1>(&mut context, &EntityKey::new::<Entity1>(1i64))
        .unwrap_err();
    assert!(err.is_persistence_failure());
}

#[test]
fn mismatched_key_type_is_rejected() {
    let executor = MemoryExecutor::new();
    let schema = schema();
    setup_tables(&executor, &schema);

    let mut context = PersistenceContext::new();
    let loader = EntityLoader::new(&executor, &schema, &Mysql);

    let key = EntityKey::new::<Entity1>(1i64);
    let result = loader.load::<Entity2>(&mut context, &key);

    assert!(result.is_err());
    assert_eq!(executor.statement_count(), 2);
}
