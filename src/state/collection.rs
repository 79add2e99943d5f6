use serde::{Deserialize, Serialize};

use crate::event::{ActionModel, Event, QueryOptions};
use crate::id_list::IdList;
use crate::table::EntityTable;

/// The current collection view: an ordered identifier list, the entity cache
/// behind it, the operations available on the collection, and the query
/// shape that produced it.
///
/// Referential integrity between `ids` and `entities` is a best-effort
/// contract: a fetch whose entity set omits a reported id leaves a dangling
/// id, and lookups for it return `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionState {
    pub ids: IdList,
    pub entities: EntityTable,
    pub error: Option<String>,
    pub actions: Vec<ActionModel>,
    pub options: Option<QueryOptions>,
}

impl CollectionState {
    pub fn new() -> Self {
        CollectionState::default()
    }

    /// Fold one event into the collection. The identifier list and the
    /// entity table always move together, in the same transition.
    pub fn apply(mut self, event: &Event) -> Self {
        match event {
            Event::FetchRequested => {
                self.error = None;
            }
            Event::FetchSucceeded { ids, entities } => {
                self.ids = self.ids.replace(ids.clone());
                self.entities = self.entities.merge_many(entities.iter().cloned());
                self.error = None;
            }
            Event::CreateSucceeded { entity } | Event::UploadSucceeded { entity } => {
                // Upload can target a brand-new entity or replace the binary
                // of an existing one; presence in the table is the only way
                // to tell the two apart.
                if !self.entities.contains(entity.id()) {
                    self.ids = self.ids.append(entity.id().clone());
                }
                self.entities = self.entities.merge(entity.clone());
                self.error = None;
            }
            Event::UpdateSucceeded { entity } | Event::WorkflowSucceeded { entity, .. } => {
                self.entities = self.entities.merge(entity.clone());
                self.error = None;
            }
            Event::DeleteSucceeded { index, id } => {
                self.ids = self.ids.remove_at(*index);
                self.entities = self.entities.remove(id);
                self.error = None;
            }
            Event::BatchDeleteSucceeded { results } | Event::BatchMoveSucceeded { results } => {
                // An empty result set reports that nothing was affected.
                if !results.is_empty() {
                    self.ids = self.ids.remove_by_ids(results);
                    self.entities = self.entities.remove_many(results);
                }
                self.error = None;
            }
            Event::ActionsReceived { actions } => {
                self.actions = actions.clone();
            }
            Event::SetQueryOptions { options } => {
                self.options = Some(options.clone());
            }
            Event::FetchFailed { error }
            | Event::BatchDeleteFailed { error }
            | Event::BatchMoveFailed { error } => {
                self.error = Some(error.clone());
            }
            _ => {}
        }
        self
    }
}
