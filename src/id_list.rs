use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// Ordered, duplicate-free sequence of entity identifiers.
///
/// An identifier list reflects one logical collection view, e.g. the children
/// of the current container or the user's selection. Distinct lists may
/// reference overlapping subsets of the same entity table; there is no single
/// global collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdList {
    ids: Vec<EntityId>,
}

impl IdList {
    pub fn new() -> Self {
        IdList { ids: Vec::new() }
    }

    /// Add the identifier to the end if absent; a duplicate append is a
    /// no-op, so an already-tracked identifier keeps its position.
    pub fn append(mut self, id: EntityId) -> Self {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
        self
    }

    /// Remove by position. Events carry the index the client observed, which
    /// preserves exact prior ordering even when a fresh fetch races the
    /// delete. An out-of-range index is a no-op.
    pub fn remove_at(mut self, index: usize) -> Self {
        if index < self.ids.len() {
            self.ids.remove(index);
        }
        self
    }

    /// Filter out every matching identifier regardless of position. Used for
    /// batch deletions and moves, where the event reports the affected
    /// subset.
    pub fn remove_by_ids(mut self, remove: &[EntityId]) -> Self {
        self.ids.retain(|id| !remove.contains(id));
        self
    }

    /// Replace the whole list: the server is the source of truth for
    /// membership and order. Duplicates in the input are dropped, first
    /// occurrence wins.
    pub fn replace(self, new_ids: Vec<EntityId>) -> Self {
        new_ids.into_iter().fold(IdList::new(), IdList::append)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    pub fn position(&self, id: &EntityId) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &[EntityId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityId> {
        self.ids.iter()
    }
}

impl From<Vec<EntityId>> for IdList {
    fn from(ids: Vec<EntityId>) -> Self {
        IdList::new().replace(ids)
    }
}
