mod entity;
mod error;
mod event;
mod id_list;
mod lifecycle;
mod state;
mod store;
mod table;

pub use entity::{Entity, EntityId};
pub use error::SnapshotError;
pub use event::{ActionModel, Event, QueryOptions, UserInfo, WorkflowOp};
pub use id_list::IdList;
pub use lifecycle::{LifecycleFlags, RequestSlot};
pub use state::{
    CollectionState, CurrentItemState, LoginState, SelectionState, SessionState, StoreState,
};
pub use store::Store;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
