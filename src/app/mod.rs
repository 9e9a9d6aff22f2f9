//! Application layer coordinating state, events, and effects.
//!
//! # Architecture
//!
//! The layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Intents → Events → Event Handler → State Mutations → Effects → Fetches
//!               ↑                          ↓
//!               └───── Fetch completions ──┴──→ Watch channel (snapshots)
//! ```
//!
//! # Modules
//!
//! - [`coordinator`]: the owning task, intent inbox, and state stream
//! - [`effects`]: fetch commands emitted by the event handler
//! - [`handler`]: event processing and state transition logic
//! - [`state`]: the central screen state container

pub mod coordinator;
pub mod effects;
pub mod handler;
pub mod state;

pub use coordinator::ShelfCoordinator;
pub use effects::Effect;
pub use handler::{handle_event, Event, Intent};
pub use state::{ShelfError, ShelfState};
