//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the catalog,
//! form, and UI layers. It implements the product page as an event-driven
//! state machine.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └───────── Timer Expiries ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`context`]: Shared table/grid view mode holder
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input and view mode state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod context;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use context::ViewContext;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, ViewMode};
pub use state::AppState;
