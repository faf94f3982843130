//! Input and view mode state types for the application.
//!
//! The application operates in one of three input modes:
//! - **Normal**: Navigation, paging, and commands
//! - **Search**: Typing into the search box
//! - **Form**: Editing the add/edit product form
//!
//! View modes control how the current page is drawn:
//! - **Table**: One product per row with aligned columns
//! - **Grid**: Product cards laid out in columns
//!
//! # Example
//!
//! ```rust
//! use zcatalog::app::modes::{InputMode, ViewMode};
//!
//! let input_mode = InputMode::Search;
//! let view_mode: ViewMode = "table".parse().unwrap();
//! assert_eq!(view_mode, ViewMode::Table);
//! ```

use crate::domain::error::CatalogError;
use std::fmt;
use std::str::FromStr;

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (rows), h/l (pages), / (search), a (add),
    /// e (edit), t/g (view), q (quit).
    Normal,

    /// Typing into the search box. Each keystroke re-arms the debounce timer.
    Search,

    /// The add/edit form is open and owns all key input.
    Form,
}

/// How the current page of products is rendered.
///
/// Has no effect on filtering, pagination, or the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Table,
    #[default]
    Grid,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "grid" => Ok(Self::Grid),
            other => Err(CatalogError::Config(format!(
                "unknown view mode '{other}', expected 'table' or 'grid'"
            ))),
        }
    }
}
