//! Options sink capability.

use serde_json::Value;

/// Receives marker option deltas for one native marker.
///
/// The sink owns the schema of the payload. A marker update hands it the raw
/// `changes` value, or `None` when the message carried none, and never looks
/// inside.
pub trait MarkerOptionsSink {
    /// Interpret a marker option delta and apply it to the native marker.
    fn interpret_options(&mut self, changes: Option<Value>);
}

impl<S: MarkerOptionsSink + ?Sized> MarkerOptionsSink for &mut S {
    fn interpret_options(&mut self, changes: Option<Value>) {
        (**self).interpret_options(changes)
    }
}

impl<S: MarkerOptionsSink + ?Sized> MarkerOptionsSink for Box<S> {
    fn interpret_options(&mut self, changes: Option<Value>) {
        (**self).interpret_options(changes)
    }
}
