use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};

/// Descriptor of an operation the repository reports as currently available
/// on a collection (rename, delete, publish, …). Stored verbatim; the cache
/// attaches no meaning to it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionModel {
    pub name: String,
    pub display_name: String,
    pub icon: String,
}

/// Query shape of the collection view: paging, ordering and projection of
/// the last fetch. Recorded so a host can re-issue the same query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    pub top: Option<u32>,
    pub skip: Option<u32>,
    pub query: Option<String>,
    pub order_by: Option<String>,
    pub filter: Option<String>,
    pub select: Vec<String>,
}

/// Versioning and approval transitions a content repository exposes on a
/// single item. A successful transition reports the item's refreshed record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowOp {
    Checkin,
    Checkout,
    UndoCheckout,
    ForceUndoCheckout,
    Publish,
    Approve,
    Reject,
    RestoreVersion,
}

impl WorkflowOp {
    pub fn success_kind(self) -> &'static str {
        match self {
            WorkflowOp::Checkin => "CHECKIN_CONTENT_SUCCESS",
            WorkflowOp::Checkout => "CHECKOUT_CONTENT_SUCCESS",
            WorkflowOp::UndoCheckout => "UNDOCHECKOUT_CONTENT_SUCCESS",
            WorkflowOp::ForceUndoCheckout => "FORCEUNDOCHECKOUT_CONTENT_SUCCESS",
            WorkflowOp::Publish => "PUBLISH_CONTENT_SUCCESS",
            WorkflowOp::Approve => "APPROVE_CONTENT_SUCCESS",
            WorkflowOp::Reject => "REJECT_CONTENT_SUCCESS",
            WorkflowOp::RestoreVersion => "RESTOREVERSION_CONTENT_SUCCESS",
        }
    }

    pub fn failure_kind(self) -> &'static str {
        match self {
            WorkflowOp::Checkin => "CHECKIN_CONTENT_FAILURE",
            WorkflowOp::Checkout => "CHECKOUT_CONTENT_FAILURE",
            WorkflowOp::UndoCheckout => "UNDOCHECKOUT_CONTENT_FAILURE",
            WorkflowOp::ForceUndoCheckout => "FORCEUNDOCHECKOUT_CONTENT_FAILURE",
            WorkflowOp::Publish => "PUBLISH_CONTENT_FAILURE",
            WorkflowOp::Approve => "APPROVE_CONTENT_FAILURE",
            WorkflowOp::Reject => "REJECT_CONTENT_FAILURE",
            WorkflowOp::RestoreVersion => "RESTOREVERSION_CONTENT_FAILURE",
        }
    }
}

/// Profile of the user the session belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub display_name: String,
    pub language: Option<String>,
}

impl Default for UserInfo {
    fn default() -> Self {
        UserInfo {
            name: "Visitor".to_string(),
            display_name: "Visitor".to_string(),
            language: None,
        }
    }
}

/// Outcome of a remote operation, delivered to the store in arrival order.
///
/// The vocabulary is closed: every variant carries a statically-shaped
/// payload, and each sub-state routes only the variants it understands,
/// returning itself unchanged for the rest. Failure events carry an opaque
/// message supplied by the collaborator that performed the request; the
/// cache does no classification or retry of its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    FetchRequested,
    /// A collection fetch completed. `ids` is the authoritative order;
    /// `entities` carries the records to merge. An id without a matching
    /// record is tolerated and simply stays unresolvable.
    FetchSucceeded {
        ids: Vec<EntityId>,
        entities: Vec<Entity>,
    },
    FetchFailed {
        error: String,
    },
    LoadRequested,
    LoadSucceeded {
        entity: Entity,
    },
    LoadFailed {
        error: String,
    },
    CreateRequested,
    CreateSucceeded {
        entity: Entity,
    },
    CreateFailed {
        error: String,
    },
    UpdateRequested,
    UpdateSucceeded {
        entity: Entity,
    },
    UpdateFailed {
        error: String,
    },
    DeleteRequested,
    /// `index` is the position the client observed when the delete was
    /// issued, so the surviving order matches what the user was looking at.
    DeleteSucceeded {
        index: usize,
        id: EntityId,
    },
    DeleteFailed {
        error: String,
    },
    /// Batch results report the affected subset, which may be smaller than
    /// requested (partial success). An empty result set changes nothing.
    BatchDeleteSucceeded {
        results: Vec<EntityId>,
    },
    BatchDeleteFailed {
        error: String,
    },
    BatchMoveSucceeded {
        results: Vec<EntityId>,
    },
    BatchMoveFailed {
        error: String,
    },
    /// Upload may create a brand-new entity or replace the binary of an
    /// existing one; the router distinguishes the two only by presence.
    UploadSucceeded {
        entity: Entity,
    },
    UploadFailed {
        error: String,
    },
    WorkflowSucceeded {
        op: WorkflowOp,
        entity: Entity,
    },
    WorkflowFailed {
        op: WorkflowOp,
        error: String,
    },
    ActionsReceived {
        actions: Vec<ActionModel>,
    },
    SetQueryOptions {
        options: QueryOptions,
    },
    Select {
        entity: Entity,
    },
    Deselect {
        id: EntityId,
    },
    ClearSelection,
    LoginSucceeded {
        user: UserInfo,
    },
    LoginFailed {
        error: String,
    },
    LogoutSucceeded,
    LogoutFailed {
        error: String,
    },
    UserChanged {
        user: UserInfo,
    },
}

impl Event {
    /// Wire-style tag of this event, used for subscriber routing.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::FetchRequested => "FETCH_CONTENT_REQUEST",
            Event::FetchSucceeded { .. } => "FETCH_CONTENT_SUCCESS",
            Event::FetchFailed { .. } => "FETCH_CONTENT_FAILURE",
            Event::LoadRequested => "LOAD_CONTENT_REQUEST",
            Event::LoadSucceeded { .. } => "LOAD_CONTENT_SUCCESS",
            Event::LoadFailed { .. } => "LOAD_CONTENT_FAILURE",
            Event::CreateRequested => "CREATE_CONTENT_REQUEST",
            Event::CreateSucceeded { .. } => "CREATE_CONTENT_SUCCESS",
            Event::CreateFailed { .. } => "CREATE_CONTENT_FAILURE",
            Event::UpdateRequested => "UPDATE_CONTENT_REQUEST",
            Event::UpdateSucceeded { .. } => "UPDATE_CONTENT_SUCCESS",
            Event::UpdateFailed { .. } => "UPDATE_CONTENT_FAILURE",
            Event::DeleteRequested => "DELETE_CONTENT_REQUEST",
            Event::DeleteSucceeded { .. } => "DELETE_CONTENT_SUCCESS",
            Event::DeleteFailed { .. } => "DELETE_CONTENT_FAILURE",
            Event::BatchDeleteSucceeded { .. } => "DELETE_BATCH_SUCCESS",
            Event::BatchDeleteFailed { .. } => "DELETE_BATCH_FAILURE",
            Event::BatchMoveSucceeded { .. } => "MOVE_BATCH_SUCCESS",
            Event::BatchMoveFailed { .. } => "MOVE_BATCH_FAILURE",
            Event::UploadSucceeded { .. } => "UPLOAD_CONTENT_SUCCESS",
            Event::UploadFailed { .. } => "UPLOAD_CONTENT_FAILURE",
            Event::WorkflowSucceeded { op, .. } => op.success_kind(),
            Event::WorkflowFailed { op, .. } => op.failure_kind(),
            Event::ActionsReceived { .. } => "REQUEST_CONTENT_ACTIONS_SUCCESS",
            Event::SetQueryOptions { .. } => "SET_ODATAOPTIONS",
            Event::Select { .. } => "SELECT_CONTENT",
            Event::Deselect { .. } => "DESELECT_CONTENT",
            Event::ClearSelection => "CLEAR_SELECTION",
            Event::LoginSucceeded { .. } => "USER_LOGIN_SUCCESS",
            Event::LoginFailed { .. } => "USER_LOGIN_FAILURE",
            Event::LogoutSucceeded => "USER_LOGOUT_SUCCESS",
            Event::LogoutFailed { .. } => "USER_LOGOUT_FAILURE",
            Event::UserChanged { .. } => "USER_CHANGED",
        }
    }
}
