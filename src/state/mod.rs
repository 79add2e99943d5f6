//! Composed store state and the event router.
//!
//! The cache is four sibling structures owned by one [`StoreState`]: the
//! session, the current collection view, the current-item slot, and the
//! selection set. No component owns another, and entities never point back at
//! the table, so the whole state is an acyclic value.
//!
//! Routing is a pure fold: [`StoreState::apply`] hands one event to every
//! sibling and each sibling keeps only what it understands. The host owns the
//! state value and threads it through its own dispatch loop; there is no
//! ambient store reference anywhere in this module.
//!
//! ## Example
//!
//! ```
//! use normalized_rust::{Entity, EntityId, Event, StoreState};
//!
//! let state = StoreState::new().apply(&Event::FetchSucceeded {
//!     ids: vec![5145.into()],
//!     entities: vec![Entity::new(5145).with_field("DisplayName", "Document_Library")],
//! });
//!
//! assert_eq!(state.ids(), &[EntityId::from(5145)]);
//! assert!(state.entity_by_id(&5145.into()).is_some());
//! ```

mod collection;
mod current;
mod selection;
mod session;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};
use crate::event::{ActionModel, Event};
use crate::lifecycle::LifecycleFlags;

pub use collection::CollectionState;
pub use current::CurrentItemState;
pub use selection::SelectionState;
pub use session::{LoginState, SessionState};

/// Whole application state: session, collection, current item and selection
/// as siblings under a single value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    pub session: SessionState,
    pub collection: CollectionState,
    pub current: CurrentItemState,
    pub selection: SelectionState,
}

impl StoreState {
    pub fn new() -> Self {
        StoreState::default()
    }

    /// Route one event through every sibling as a single state transition.
    pub fn apply(self, event: &Event) -> Self {
        StoreState {
            session: self.session.apply(event),
            collection: self.collection.apply(event),
            current: self.current.apply(event),
            selection: self.selection.apply(event),
        }
    }

    pub fn entity_by_id(&self, id: &EntityId) -> Option<&Entity> {
        self.collection.entities.get(id)
    }

    pub fn ids(&self) -> &[EntityId] {
        self.collection.ids.as_slice()
    }

    pub fn is_fetching(&self) -> bool {
        self.current.flags.is_fetching()
    }

    pub fn error(&self) -> Option<&str> {
        self.current.flags.error()
    }

    pub fn lifecycle(&self) -> &LifecycleFlags {
        &self.current.flags
    }

    pub fn current_item(&self) -> Option<&Entity> {
        self.current.item.as_ref()
    }

    pub fn selected_ids(&self) -> &[EntityId] {
        self.selection.ids.as_slice()
    }

    pub fn available_actions(&self) -> &[ActionModel] {
        &self.collection.actions
    }

    pub fn login_state(&self) -> LoginState {
        self.session.login_state
    }
}
