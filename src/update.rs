//! Decoding and applying a single marker update.

use crate::error::{Result, UpdateError};
use crate::protocol::UpdateProtocol;
use crate::sink::MarkerOptionsSink;
use crate::types::{MarkerId, UpdateEventType};
use serde_json::{Map, Value};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An add, update or remove of one map marker, decoded from a bridge message.
///
/// Equality and hashing only look at the marker id and the event type. Two
/// updates carrying different `changes` compare equal, so a set of updates
/// keeps one of them and drops the other's option deltas.
#[derive(Clone, Debug)]
pub struct MarkerUpdate {
    marker_id: MarkerId,
    event_type: UpdateEventType,
    // Ignored by PartialEq and Hash.
    changes: Option<Value>,
}

impl MarkerUpdate {
    pub fn new(marker_id: MarkerId, event_type: UpdateEventType, changes: Option<Value>) -> Self {
        Self {
            marker_id,
            event_type,
            changes,
        }
    }

    /// Decode a message using the default marker protocol.
    pub fn from_value(raw: &Value) -> Result<Self> {
        Self::from_value_with(raw, &UpdateProtocol::default())
    }

    /// Decode a message using the given protocol.
    ///
    /// The identifier and event kind must both be present strings. A `changes`
    /// entry that is missing or `null` decodes to `None`.
    pub fn from_value_with(raw: &Value, protocol: &UpdateProtocol) -> Result<Self> {
        let update = raw.as_object().ok_or_else(|| {
            UpdateError::InvalidInput(format!("expected an object, got {}", kind_of(raw)))
        })?;

        let marker_id = update.get(&protocol.marker_id_key).and_then(Value::as_str);
        let event_type = update.get(&protocol.event_type_key).and_then(Value::as_str);

        let (marker_id, event_type) = match (marker_id, event_type) {
            (Some(id), Some(kind)) => (id, kind),
            _ => {
                return Err(UpdateError::InvalidInput(format!(
                    "{} or {} was null",
                    protocol.marker_id_key, protocol.event_type_key
                )))
            }
        };

        let event_type = protocol.parse_event_type(event_type)?;
        let changes = match update.get(&protocol.changes_key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.clone()),
        };

        tracing::debug!(marker_id, ?event_type, "decoded marker update");

        Ok(Self::new(MarkerId::new(marker_id), event_type, changes))
    }

    /// Parse a JSON text and decode it with the default protocol.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(text)?;
        Self::from_value(&raw)
    }

    /// Decode a list of messages, stopping at the first rejected one.
    pub fn decode_all(raw: &Value) -> Result<Vec<Self>> {
        Self::decode_all_with(raw, &UpdateProtocol::default())
    }

    pub fn decode_all_with(raw: &Value, protocol: &UpdateProtocol) -> Result<Vec<Self>> {
        let items = raw.as_array().ok_or_else(|| {
            UpdateError::InvalidInput(format!("expected a list of updates, got {}", kind_of(raw)))
        })?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Self::from_value_with(item, protocol).map_err(|e| {
                    tracing::warn!(index, error = %e, "rejected marker update");
                    e
                })
            })
            .collect()
    }

    pub fn marker_id(&self) -> &MarkerId {
        &self.marker_id
    }

    pub fn event_type(&self) -> UpdateEventType {
        self.event_type
    }

    pub fn changes(&self) -> Option<&Value> {
        self.changes.as_ref()
    }

    /// Hand the buffered changes to the sink.
    ///
    /// The payload is forwarded as-is, including when it is absent.
    pub fn sink_changes<S: MarkerOptionsSink + ?Sized>(self, sink: &mut S) {
        tracing::trace!(
            marker_id = %self.marker_id,
            has_changes = self.changes.is_some(),
            "sinking marker changes"
        );
        sink.interpret_options(self.changes);
    }

    /// Encode back into the wire shape of the default protocol.
    pub fn to_value(&self) -> Value {
        self.to_value_with(&UpdateProtocol::default())
    }

    pub fn to_value_with(&self, protocol: &UpdateProtocol) -> Value {
        let mut map = Map::new();
        map.insert(
            protocol.marker_id_key.clone(),
            Value::String(self.marker_id.0.clone()),
        );
        map.insert(
            protocol.event_type_key.clone(),
            Value::String(protocol.event_token(self.event_type)),
        );
        if let Some(changes) = &self.changes {
            map.insert(protocol.changes_key.clone(), changes.clone());
        }
        Value::Object(map)
    }
}

impl PartialEq for MarkerUpdate {
    fn eq(&self, other: &Self) -> bool {
        self.marker_id == other.marker_id && self.event_type == other.event_type
    }
}

impl Eq for MarkerUpdate {}

impl Hash for MarkerUpdate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.marker_id.hash(state);
        self.event_type.hash(state);
    }
}

impl fmt::Display for MarkerUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MarkerUpdate{{markerId={}, updateEventType={:?}, changes=",
            self.marker_id, self.event_type
        )?;
        match &self.changes {
            Some(changes) => write!(f, "{}}}", changes),
            None => f.write_str("null}"),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
