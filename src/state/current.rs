use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::event::Event;
use crate::lifecycle::LifecycleFlags;

/// The single "current item" slot: the entity the host is focused on, plus
/// the request lifecycle flags for it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentItemState {
    pub item: Option<Entity>,
    pub flags: LifecycleFlags,
}

impl CurrentItemState {
    pub fn new() -> Self {
        CurrentItemState::default()
    }

    pub fn apply(mut self, event: &Event) -> Self {
        self.flags = self.flags.apply(event);
        if let Event::LoadSucceeded { entity } = event {
            self.item = Some(entity.clone());
        }
        self
    }
}
