use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};

/// Mapping from identifier to entity record.
///
/// Keys are unique and iteration order is unspecified. Operations consume the
/// table and return the next value, so every update is a whole-value
/// replacement: readers holding a previous table never observe a partial
/// transition.
///
/// The serde representation is a sequence of entities (each record embeds its
/// own identifier), which keeps JSON snapshots free of non-string map keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Entity>", from = "Vec<Entity>")]
pub struct EntityTable {
    entries: HashMap<EntityId, Entity>,
}

impl EntityTable {
    pub fn new() -> Self {
        EntityTable {
            entries: HashMap::new(),
        }
    }

    /// Insert or overwrite the entity keyed by its identifier. All other
    /// entries are untouched.
    pub fn merge(mut self, entity: Entity) -> Self {
        self.entries.insert(entity.id().clone(), entity);
        self
    }

    /// Merge a batch of entities as if sequentially: last write wins on
    /// duplicate identifiers within the batch.
    pub fn merge_many(self, entities: impl IntoIterator<Item = Entity>) -> Self {
        entities.into_iter().fold(self, EntityTable::merge)
    }

    /// Delete the entry if present. Removing an absent key is a no-op.
    pub fn remove(mut self, id: &EntityId) -> Self {
        self.entries.remove(id);
        self
    }

    pub fn remove_many<'a>(self, ids: impl IntoIterator<Item = &'a EntityId>) -> Self {
        ids.into_iter().fold(self, |table, id| table.remove(id))
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &EntityId> {
        self.entries.keys()
    }
}

impl From<Vec<Entity>> for EntityTable {
    fn from(entities: Vec<Entity>) -> Self {
        EntityTable::new().merge_many(entities)
    }
}

impl From<EntityTable> for Vec<Entity> {
    fn from(table: EntityTable) -> Self {
        table.entries.into_values().collect()
    }
}

impl FromIterator<Entity> for EntityTable {
    fn from_iter<I: IntoIterator<Item = Entity>>(entities: I) -> Self {
        EntityTable::new().merge_many(entities)
    }
}
