use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::id_list::IdList;
use crate::table::EntityTable;

/// The user's selection: an ordered identifier list plus the selected
/// records themselves, so a consumer can render a selection without going
/// back to the collection cache.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub ids: IdList,
    pub entities: EntityTable,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    pub fn apply(mut self, event: &Event) -> Self {
        match event {
            Event::Select { entity } => {
                self.ids = self.ids.append(entity.id().clone());
                self.entities = self.entities.merge(entity.clone());
            }
            Event::Deselect { id } => {
                if let Some(index) = self.ids.position(id) {
                    self.ids = self.ids.remove_at(index);
                }
                self.entities = self.entities.remove(id);
            }
            Event::ClearSelection => {
                self.ids = self.ids.replace(Vec::new());
                self.entities = EntityTable::new();
            }
            _ => {}
        }
        self
    }
}
