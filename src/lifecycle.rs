use serde::{Deserialize, Serialize};

use crate::event::Event;

/// State of one logical request slot.
///
/// A slot is reusable: the next `*Requested` event moves `Succeeded` or
/// `Failed` back to `InFlight`, so there is no terminal state. A failed slot
/// parks the error next to it; the entity data written by earlier successes
/// is never rolled back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestSlot {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl RequestSlot {
    pub fn is_in_flight(self) -> bool {
        self == RequestSlot::InFlight
    }
}

/// Request-status flags derived from the most recent relevant event.
///
/// Two slots are tracked: `fetch` for collection reads and `operation` for
/// the combined create/update/delete/load slot. The flags never reference
/// entity data; they are a sibling of the cache, not an owner of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifecycleFlags {
    pub fetch: RequestSlot,
    pub operation: RequestSlot,
    pub is_saved: bool,
    pub error: Option<String>,
}

impl Default for LifecycleFlags {
    fn default() -> Self {
        LifecycleFlags {
            fetch: RequestSlot::Idle,
            operation: RequestSlot::Idle,
            is_saved: true,
            error: None,
        }
    }
}

impl LifecycleFlags {
    pub fn new() -> Self {
        LifecycleFlags::default()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.is_in_flight()
    }

    pub fn is_operation_in_progress(&self) -> bool {
        self.operation.is_in_flight()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Explicit follow-up for hosts that want to re-mark the current item as
    /// saved. A successful create or update does not flip this flag back on
    /// its own; see DESIGN.md.
    pub fn mark_saved(mut self) -> Self {
        self.is_saved = true;
        self
    }

    /// Fold one event into the flags. Events outside the tracked set return
    /// the flags unchanged.
    pub fn apply(mut self, event: &Event) -> Self {
        match event {
            Event::FetchRequested => {
                self.fetch = RequestSlot::InFlight;
                self.error = None;
            }
            Event::FetchSucceeded { .. } => {
                self.fetch = RequestSlot::Succeeded;
                self.error = None;
            }
            Event::FetchFailed { error } => {
                self.fetch = RequestSlot::Failed;
                self.error = Some(error.clone());
            }
            Event::CreateRequested
            | Event::UpdateRequested
            | Event::DeleteRequested
            | Event::LoadRequested => {
                self.operation = RequestSlot::InFlight;
                self.is_saved = false;
                self.error = None;
            }
            Event::CreateSucceeded { .. }
            | Event::UpdateSucceeded { .. }
            | Event::DeleteSucceeded { .. }
            | Event::LoadSucceeded { .. }
            | Event::UploadSucceeded { .. }
            | Event::BatchDeleteSucceeded { .. }
            | Event::BatchMoveSucceeded { .. }
            | Event::WorkflowSucceeded { .. } => {
                // is_saved is deliberately left alone here: re-marking as
                // saved is an explicit follow-up, not an automatic effect.
                self.operation = RequestSlot::Succeeded;
                self.error = None;
            }
            Event::CreateFailed { error }
            | Event::UpdateFailed { error }
            | Event::DeleteFailed { error }
            | Event::LoadFailed { error }
            | Event::UploadFailed { error }
            | Event::BatchDeleteFailed { error }
            | Event::BatchMoveFailed { error }
            | Event::WorkflowFailed { error, .. } => {
                self.operation = RequestSlot::Failed;
                self.error = Some(error.clone());
            }
            _ => {}
        }
        self
    }
}
