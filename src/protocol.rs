//! Wire protocol configuration.

use crate::error::{Result, UpdateError};
use crate::types::{
    UpdateEventType, CHANGES_KEY, EVENT_TYPE_NAMESPACE, MARKER_ID_KEY, UPDATE_EVENT_TYPE_KEY,
};

/// Names the message keys and the event kind namespace a bridge speaks.
///
/// The default is the canonical marker protocol. Other map objects diffed by
/// the same UI framework use the same message shape under different names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateProtocol {
    /// Key holding the identifier string.
    pub marker_id_key: String,

    /// Key holding the event kind token.
    pub event_type_key: String,

    /// Key holding the opaque change payload.
    pub changes_key: String,

    /// Prefix of the event kind tokens (`<namespace>.add`).
    pub event_namespace: String,
}

impl Default for UpdateProtocol {
    fn default() -> Self {
        Self {
            marker_id_key: MARKER_ID_KEY.to_string(),
            event_type_key: UPDATE_EVENT_TYPE_KEY.to_string(),
            changes_key: CHANGES_KEY.to_string(),
            event_namespace: EVENT_TYPE_NAMESPACE.to_string(),
        }
    }
}

impl UpdateProtocol {
    pub fn with_marker_id_key(mut self, key: impl Into<String>) -> Self {
        self.marker_id_key = key.into();
        self
    }

    pub fn with_event_type_key(mut self, key: impl Into<String>) -> Self {
        self.event_type_key = key.into();
        self
    }

    pub fn with_changes_key(mut self, key: impl Into<String>) -> Self {
        self.changes_key = key.into();
        self
    }

    pub fn with_event_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.event_namespace = namespace.into();
        self
    }

    /// Wire token for an event kind under this protocol.
    pub fn event_token(&self, kind: UpdateEventType) -> String {
        format!("{}.{}", self.event_namespace, kind.suffix())
    }

    /// Map a wire token to its event kind. Only exact tokens match.
    pub fn parse_event_type(&self, token: &str) -> Result<UpdateEventType> {
        let suffix = token
            .strip_prefix(self.event_namespace.as_str())
            .and_then(|rest| rest.strip_prefix('.'));

        match suffix {
            Some("add") => Ok(UpdateEventType::Add),
            Some("update") => Ok(UpdateEventType::Update),
            Some("remove") => Ok(UpdateEventType::Remove),
            _ => Err(UpdateError::UnrecognizedEventKind(token.to_string())),
        }
    }
}
