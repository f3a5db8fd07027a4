use crate::{stmt::Type, stmt::Value, Result};

/// The contract an entity type implements to participate in persistence.
///
/// `Default` is the default construction path used when materializing an
/// instance from a row; `get`/`set` move scalar values between fields and
/// the engine without runtime introspection.
pub trait Entity: Default + 'static {
    /// Structural description of the type's mapped fields, in declaration
    /// order.
    fn descriptor() -> EntityDescriptor;

    /// Current value of the named field, `Value::Null` when unset.
    fn get(&self, field: &str) -> Value;

    /// Assigns a loaded column value into the named field.
    fn set(&mut self, field: &str, value: Value) -> Result<()>;
}

/// Statically declared structural description of an entity type.
///
/// This is pure data supplied by the metadata source; resolution into a
/// [`TableDefinition`](crate::schema::TableDefinition) happens separately.
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    /// The entity type name
    pub name: &'static str,

    /// Explicit table name, overriding the derived one
    pub table: Option<&'static str>,

    /// Mapped fields, in declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl EntityDescriptor {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            table: None,
            fields: vec![],
        }
    }

    pub fn table(mut self, name: &'static str) -> Self {
        self.table = Some(name);
        self
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// One mapped field of an entity type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The field name
    pub name: &'static str,

    /// Explicit column name, overriding the field name
    pub column: Option<&'static str>,

    /// The field's scalar type
    pub ty: Type,

    /// True if the column may hold NULL
    pub nullable: bool,

    /// Maximum length, for text columns
    pub length: Option<u64>,

    /// True if the field is the entity's identifier
    pub primary_key: bool,

    /// True if the identifier is assigned by the database on insert
    pub auto_increment: bool,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, ty: Type) -> Self {
        Self {
            name,
            column: None,
            ty,
            nullable: true,
            length: None,
            primary_key: false,
            auto_increment: false,
        }
    }

    pub fn column(mut self, name: &'static str) -> Self {
        self.column = Some(name);
        self
    }

    pub fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Marks the field as the entity's identifier.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks the identifier as database-generated.
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }
}
