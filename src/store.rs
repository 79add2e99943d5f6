use crate::error::SnapshotError;
use crate::event::Event;
use crate::state::StoreState;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

/// Host container for a [`StoreState`].
///
/// The store owns one state value and threads it through [`Store::dispatch`]
/// in delivery order, one event at a time. Each dispatch is a whole-state
/// replacement, so a snapshot taken between dispatches never observes a
/// partial transition. Serializing dispatch across producers is the caller's
/// job; the store itself never reorders or suppresses events.
///
/// ## Example
///
/// ```
/// use normalized_rust::{Entity, EntityId, Event, Store};
///
/// let mut store = Store::new();
/// store.dispatch(Event::FetchSucceeded {
///     ids: vec![5145.into()],
///     entities: vec![Entity::new(5145).with_field("DisplayName", "Document_Library")],
/// });
///
/// assert_eq!(store.state().ids(), &[EntityId::from(5145)]);
/// ```
pub struct Store {
    state: StoreState,
    #[cfg(feature = "emitter")]
    emitter: EventEmitter,
}

impl Store {
    /// Channel that fires after every dispatch, regardless of event kind.
    #[cfg(feature = "emitter")]
    pub const DISPATCH: &'static str = "DISPATCH";

    pub fn new() -> Self {
        Store::with_state(StoreState::new())
    }

    pub fn with_state(state: StoreState) -> Self {
        Store {
            state,
            #[cfg(feature = "emitter")]
            emitter: EventEmitter::new(),
        }
    }

    /// Snapshot of the current state. Valid until the next dispatch; clone
    /// it to keep reading across dispatches.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Apply one event as a single whole-state transition, then notify
    /// subscribers of the event's kind.
    pub fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(&event);

        #[cfg(feature = "emitter")]
        self.notify(&event);
    }

    #[cfg(feature = "emitter")]
    fn notify(&mut self, event: &Event) {
        if let Ok(payload) = serde_json::to_string(event) {
            self.emitter.emit(event.kind(), payload.clone());
            self.emitter.emit(Store::DISPATCH, payload);
        }
    }

    /// Register a listener for one event kind (see [`Event::kind`]). The
    /// listener receives the event serialized as JSON. Returns the listener
    /// id.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, kind: &str, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(kind, listener)
    }

    /// Register a listener fired after every dispatch.
    #[cfg(feature = "emitter")]
    pub fn on_dispatch<F>(&mut self, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(Store::DISPATCH, listener)
    }

    #[cfg(feature = "emitter")]
    pub fn remove_listener(&mut self, id: &str) -> Option<String> {
        self.emitter.remove_listener(id)
    }

    /// Serialize the current state for persistence.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        serde_json::to_vec(&self.state).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Rebuild a store from a snapshot produced by [`Store::snapshot`].
    /// Listeners are not part of a snapshot; re-register them afterwards.
    pub fn restore(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state = serde_json::from_slice(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))?;
        Ok(Store::with_state(state))
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}
