use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of an entity.
///
/// The remote repository keys most records numerically, but some collections
/// (users, paths) are string-keyed, so both forms are first-class.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Num(i64),
    Str(String),
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Num(id)
    }
}

impl From<i32> for EntityId {
    fn from(id: i32) -> Self {
        EntityId::Num(id.into())
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Str(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        EntityId::Str(id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Num(id) => write!(f, "{}", id),
            EntityId::Str(id) => write!(f, "{}", id),
        }
    }
}

/// A single record mirrored from the remote repository: a unique identifier
/// plus an open-ended set of named fields.
///
/// Identity is the identifier; every other field is mutable. An event always
/// carries the entity's latest complete field set, so merging a record into a
/// table replaces the previous value wholesale rather than patching fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    #[serde(default)]
    fields: HashMap<String, Value>,
}

impl Entity {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Entity {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Builder-style field assignment.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }
}
