//! # Marker Update
//!
//! Boundary glue between a UI framework's declarative marker diffing and a
//! native map SDK's imperative marker objects.
//!
//! ## Core Concepts
//!
//! - **MarkerUpdate**: A typed add, update or remove of one marker, decoded
//!   from a loosely-typed bridge message
//! - **Options sink**: The native side's capability for applying the update's
//!   opaque option deltas
//! - **Protocol**: The message keys and event kind namespace a bridge speaks
//!
//! ## Example
//!
//! ```ignore
//! use marker_update::{MarkerOptionsSink, MarkerUpdate, UpdateEventType};
//! use serde_json::json;
//!
//! let update = MarkerUpdate::from_value(&json!({
//!     "markerId": "m1",
//!     "updateEventType": "MarkerUpdateEventType.add",
//!     "changes": { "title": "A" }
//! }))?;
//!
//! assert_eq!(update.event_type(), UpdateEventType::Add);
//! update.sink_changes(&mut native_marker);
//! ```

pub mod error;
pub mod protocol;
pub mod sink;
pub mod types;
pub mod update;

// Re-exports
pub use error::{Result, UpdateError};
pub use protocol::UpdateProtocol;
pub use sink::MarkerOptionsSink;
pub use types::*;
pub use update::MarkerUpdate;
