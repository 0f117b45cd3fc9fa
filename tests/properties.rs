//! Property tests for decoding and identity.

use marker_update::{MarkerOptionsSink, MarkerUpdate, UpdateError, UpdateEventType};
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(update: &MarkerUpdate) -> u64 {
    let mut hasher = DefaultHasher::new();
    update.hash(&mut hasher);
    hasher.finish()
}

fn event_type() -> impl Strategy<Value = UpdateEventType> {
    prop_oneof![
        Just(UpdateEventType::Add),
        Just(UpdateEventType::Update),
        Just(UpdateEventType::Remove),
    ]
}

fn changes() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(json!({}))),
        (any::<String>(), any::<i64>()).prop_map(|(k, v)| {
            let mut delta = Map::new();
            delta.insert(k, json!(v));
            Some(Value::Object(delta))
        }),
        any::<bool>().prop_map(|b| Some(json!({"visible": b}))),
    ]
}

#[derive(Default)]
struct Counter {
    calls: usize,
    last: Option<Value>,
}

impl MarkerOptionsSink for Counter {
    fn interpret_options(&mut self, changes: Option<Value>) {
        self.calls += 1;
        self.last = changes;
    }
}

proptest! {
    #[test]
    fn decodes_id_and_kind(id in any::<String>(), kind in event_type(), delta in changes()) {
        let mut raw = json!({"markerId": id, "updateEventType": kind.as_str()});
        if let Some(delta) = &delta {
            raw["changes"] = delta.clone();
        }

        let update = MarkerUpdate::from_value(&raw).unwrap();
        prop_assert_eq!(update.marker_id().as_str(), id.as_str());
        prop_assert_eq!(update.event_type(), kind);
        prop_assert_eq!(update.changes(), delta.as_ref());
    }

    #[test]
    fn unknown_tokens_are_named_in_error(id in "[a-z0-9]{1,8}", token in "[A-Za-z.]{0,30}") {
        prop_assume!(token.parse::<UpdateEventType>().is_err());

        let result = MarkerUpdate::from_value(&json!({"markerId": id, "updateEventType": token}));
        match result {
            Err(e @ UpdateError::UnrecognizedEventKind(_)) => {
                prop_assert!(e.to_string().contains(token.as_str()));
            }
            other => prop_assert!(false, "unexpected result: {:?}", other),
        }
    }

    #[test]
    fn payload_never_affects_identity(
        id in "[a-z0-9]{1,8}",
        kind in event_type(),
        left in changes(),
        right in changes(),
    ) {
        let a = MarkerUpdate::new(id.as_str().into(), kind, left);
        let b = MarkerUpdate::new(id.as_str().into(), kind, right);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn identity_tracks_id_and_kind(
        a_id in "[a-z]{1,4}",
        b_id in "[a-z]{1,4}",
        a_kind in event_type(),
        b_kind in event_type(),
    ) {
        let a = MarkerUpdate::new(a_id.as_str().into(), a_kind, None);
        let b = MarkerUpdate::new(b_id.as_str().into(), b_kind, None);
        prop_assert_eq!(a == b, a_id == b_id && a_kind == b_kind);
    }

    #[test]
    fn sink_called_exactly_once(kind in event_type(), delta in changes()) {
        let update = MarkerUpdate::new("m".into(), kind, delta.clone());
        let mut sink = Counter::default();
        update.sink_changes(&mut sink);
        prop_assert_eq!(sink.calls, 1);
        prop_assert_eq!(sink.last, delta);
    }
}
