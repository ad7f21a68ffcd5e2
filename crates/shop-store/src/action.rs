//! Action contract
//!
//! Typed applications implement [`Action`] on a closed enum. Loosely typed
//! callers (replay files, tests) use [`ActionRecord`], which has the
//! `{ "type": ..., "payload": ... }` shape on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Type of the sentinel action a store reduces once when it is created.
pub const INIT_ACTION_TYPE: &str = "@@INIT";

/// Something that can be dispatched to a store.
pub trait Action: fmt::Debug {
    /// The init sentinel, reduced once at store construction so every
    /// reducer can populate its default.
    fn init() -> Self;

    /// The `type` discriminator. `None` marks a malformed action.
    fn action_type(&self) -> Option<&str>;
}

/// Loosely typed action record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl ActionRecord {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }
}

impl Action for ActionRecord {
    fn init() -> Self {
        Self::new(INIT_ACTION_TYPE)
    }

    fn action_type(&self) -> Option<&str> {
        self.kind.as_deref().filter(|kind| !kind.is_empty())
    }
}
