//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! library never calls into Zellij itself; the plugin shim in `main.rs`
//! executes these in order.
//!
//! # Example
//!
//! ```rust
//! use zcatalog::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleDebounce { delay: Duration::from_millis(500) }];
//! assert_eq!(actions.len(), 1);
//! ```

use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Starts a host timer for the search debounce.
    ///
    /// Its expiry must be fed back as
    /// [`Event::DebounceElapsed`](crate::app::Event::DebounceElapsed).
    ScheduleDebounce {
        /// How long the timer runs.
        delay: Duration,
    },
}
