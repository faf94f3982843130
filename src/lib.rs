//! zcatalog: a product catalog manager running as a Zellij plugin.
//!
//! zcatalog keeps a small in-memory product catalog and lets you:
//! - Browse it page by page as a table or as a grid of cards
//! - Filter it by name with a debounced, case-insensitive search
//! - Add products and edit existing ones through a validated form
//!
//! Nothing is persisted: the catalog is seeded from a JSON fixture when the
//! plugin loads and lives for the session.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - View context (table/grid)                        │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Form Layer    │
//! │ (ui/)         │   │ (catalog/)    │   │ (form/)       │
//! │ - Rendering   │   │ - Store       │   │ - Draft       │
//! │ - Theming     │   │ - Search      │   │ - Validation  │
//! │ - Components  │   │ - Pagination  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Product model (domain/product)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zcatalog.wasm" {
//!         page_size "5"
//!         debounce_ms "500"
//!         default_view "grid"
//!         fixture_file "~/shop/products.json"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zcatalog::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.page_items().len(), 5);
//!
//! let (render, actions) = handle_event(&mut state, &Event::NextPage)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), zcatalog::CatalogError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod form;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, ViewMode};
pub use catalog::Catalog;
pub use domain::{CatalogError, Product, ProductId, Result};
pub use ui::Theme;

use catalog::{fixture, DEFAULT_DEBOUNCE, DEFAULT_PAGE_SIZE};
use infrastructure::resolve_user_path;
use std::collections::BTreeMap;
use std::time::Duration;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Products per page. Default: 5
    pub page_size: usize,

    /// Delay between the last search keystroke and the filter being applied.
    /// Default: 500 ms
    pub debounce: Duration,

    /// View mode at startup. Default: grid
    pub default_view: ViewMode,

    /// JSON fixture to seed the catalog from instead of the bundled one.
    ///
    /// A leading `~` is resolved against the `/host` mount.
    pub fixture_file: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
            default_view: ViewMode::default(),
            fixture_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `page_size`: positive integer, else the default
    /// - `debounce_ms`: integer milliseconds, else the default
    /// - `default_view`: `table` or `grid`, else the default
    /// - `fixture_file`, `theme`, `theme_file`, `trace_level`: taken as given
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zcatalog::{Config, ViewMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "8".to_string());
    /// map.insert("default_view".to_string(), "table".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 8);
    /// assert_eq!(config.default_view, ViewMode::Table);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.page_size);

        let debounce = config
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map_or(defaults.debounce, Duration::from_millis);

        let default_view = config.get("default_view").map_or(defaults.default_view, |s| {
            s.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring default_view");
                defaults.default_view
            })
        });

        let non_empty = |key: &str| config.get(key).filter(|v| !v.trim().is_empty()).cloned();

        Self {
            page_size,
            debounce,
            default_view,
            fixture_file: non_empty("fixture_file"),
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
        }
    }
}

/// Resolves the theme: file first, then built-in name, then the default.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        match Theme::from_file(resolve_user_path(theme_file)) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            }
        }
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Seeds the catalog from the configured fixture.
///
/// A missing or invalid fixture file falls back to the bundled fixture; if
/// even that fails the catalog starts empty.
#[must_use]
pub fn load_catalog(config: &Config) -> Catalog {
    if let Some(fixture_file) = &config.fixture_file {
        let path = resolve_user_path(fixture_file);
        match fixture::load_from_file(&path).and_then(Catalog::new) {
            Ok(catalog) => {
                tracing::info!(path = ?path, products = catalog.len(), "catalog loaded from file");
                return catalog;
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "failed to load fixture file, using bundled fixture");
            }
        }
    }

    fixture::load_embedded()
        .and_then(Catalog::new)
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "bundled fixture is invalid, starting empty");
            Catalog::empty()
        })
}

/// Builds the initial application state from configuration.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let state = AppState::new(load_catalog(config), load_theme(config))
        .with_page_size(config.page_size)
        .with_debounce(config.debounce)
        .with_view(config.default_view);

    tracing::info!(
        products = state.catalog.len(),
        page_size = state.paginator.page_size(),
        view = %state.view.mode(),
        "catalog plugin initialized"
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("page_size", "3"),
            ("debounce_ms", "250"),
            ("default_view", "table"),
            ("fixture_file", "~/p.json"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.page_size, 3);
        assert_eq!(config.debounce, Duration::from_millis(250));
        assert_eq!(config.default_view, ViewMode::Table);
        assert_eq!(config.fixture_file.as_deref(), Some("~/p.json"));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("page_size", "0"),
            ("debounce_ms", "soon"),
            ("default_view", "carousel"),
            ("theme", "  "),
        ]));

        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.debounce, DEFAULT_DEBOUNCE);
        assert_eq!(config.default_view, ViewMode::Grid);
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn initialize_uses_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 4, "name": "Kettle", "price": 30, "category": "Kitchen"}}]"#
        )
        .unwrap();

        let config = Config {
            fixture_file: Some(file.path().to_string_lossy().into_owned()),
            default_view: ViewMode::Table,
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.catalog.len(), 1);
        assert_eq!(state.catalog.next_id(), ProductId(5));
        assert_eq!(state.view.mode(), ViewMode::Table);
    }

    #[test]
    fn broken_fixture_falls_back_to_bundled() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1, "name": "a", "price": 1, "category": "x"}}, {{"id": 1, "name": "b", "price": 1, "category": "x"}}]"#).unwrap();

        let config = Config {
            fixture_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };

        assert_eq!(load_catalog(&config).len(), 12);
    }

    #[test]
    fn unknown_theme_uses_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config).name, "catppuccin-mocha");
    }
}
