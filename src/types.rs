//! Core types for marker updates.

use crate::error::UpdateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire key holding the marker identifier.
pub const MARKER_ID_KEY: &str = "markerId";

/// Wire key holding the event kind token.
pub const UPDATE_EVENT_TYPE_KEY: &str = "updateEventType";

/// Wire key holding the opaque change payload.
pub const CHANGES_KEY: &str = "changes";

/// Namespace prefix of the event kind tokens.
pub const EVENT_TYPE_NAMESPACE: &str = "MarkerUpdateEventType";

// Must match `MarkerUpdateEventType.add|update|remove` on the UI side.
pub const EVENT_TYPE_ADD: &str = "MarkerUpdateEventType.add";
pub const EVENT_TYPE_UPDATE: &str = "MarkerUpdateEventType.update";
pub const EVENT_TYPE_REMOVE: &str = "MarkerUpdateEventType.remove";

/// User assigned identifier of a marker, unique within a map session.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub String);

impl MarkerId {
    pub fn new(value: impl Into<String>) -> Self {
        MarkerId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MarkerId({})", self.0)
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MarkerId {
    fn from(value: &str) -> Self {
        MarkerId(value.to_string())
    }
}

impl From<String> for MarkerId {
    fn from(value: String) -> Self {
        MarkerId(value)
    }
}

/// Kind of change a marker update describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateEventType {
    #[serde(rename = "MarkerUpdateEventType.add")]
    Add,
    #[serde(rename = "MarkerUpdateEventType.update")]
    Update,
    #[serde(rename = "MarkerUpdateEventType.remove")]
    Remove,
}

impl UpdateEventType {
    pub const ALL: [UpdateEventType; 3] = [
        UpdateEventType::Add,
        UpdateEventType::Update,
        UpdateEventType::Remove,
    ];

    /// Wire token under the default namespace.
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateEventType::Add => EVENT_TYPE_ADD,
            UpdateEventType::Update => EVENT_TYPE_UPDATE,
            UpdateEventType::Remove => EVENT_TYPE_REMOVE,
        }
    }

    /// Member name used after the namespace dot.
    pub fn suffix(self) -> &'static str {
        match self {
            UpdateEventType::Add => "add",
            UpdateEventType::Update => "update",
            UpdateEventType::Remove => "remove",
        }
    }
}

impl fmt::Display for UpdateEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateEventType {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            EVENT_TYPE_ADD => Ok(UpdateEventType::Add),
            EVENT_TYPE_UPDATE => Ok(UpdateEventType::Update),
            EVENT_TYPE_REMOVE => Ok(UpdateEventType::Remove),
            other => Err(UpdateError::UnrecognizedEventKind(other.to_string())),
        }
    }
}

impl TryFrom<&str> for UpdateEventType {
    type Error = UpdateError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
