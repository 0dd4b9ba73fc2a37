//! Client entity

use serde::{Deserialize, Serialize};

use core_kernel::ClientId;

/// A billable account owning plates and refills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    /// Display name, also used by forms to pick the client
    pub name: String,
    /// Free-text notes ("observaciones")
    pub notes: Option<String>,
}

/// The editable fields of a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub notes: Option<String>,
}

impl ClientDraft {
    pub fn new(name: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            name: name.into(),
            notes,
        }
    }
}

impl Client {
    /// Builds the stored client from a draft and its assigned id
    pub fn from_draft(id: ClientId, draft: &ClientDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            notes: draft.notes.clone(),
        }
    }
}
