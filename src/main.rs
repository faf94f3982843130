//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the zcatalog library and
//! the Zellij plugin system. It implements `ZellijPlugin`, translating host
//! events into library events and library actions into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, seed the catalog
//! 2. **Subscribe**: Register for `Key` and `Timer` events
//! 3. **Update**: Map events, delegate to `handle_event`, run actions
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → mode-dependent library event (see below)
//! - `Timer(..)` → `Event::DebounceElapsed`
//!
//! # Keybindings
//!
//! In normal mode:
//! - `j`/`Down`: Next row
//! - `k`/`Up`: Previous row
//! - `l`/`Right`/`PageDown`: Next page
//! - `h`/`Left`/`PageUp`: Previous page
//! - `/`: Search
//! - `a`: Add product
//! - `e`/`Enter`: Edit selected product
//! - `t`/`g`: Table or grid view
//! - `Esc`: Clear search
//! - `q`: Close plugin
//!
//! In search mode:
//! - Characters type, `Backspace` deletes
//! - `Enter`: Back to results, keeping the query
//! - `Esc`: Clear the query
//! - `Ctrl+n`/`Ctrl+p`: Move rows
//!
//! In form mode:
//! - Characters type into the focused field, `Backspace` deletes
//! - `Tab`/`Down`: Next field
//! - `Up`: Previous field
//! - `Enter`: Submit
//! - `Esc`: Cancel

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zcatalog::{handle_event, Action, Config, Event, InputMode, ViewMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: zcatalog::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zcatalog::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// No permissions are requested: the catalog lives in memory and the
    /// only host calls are timers and hiding the pane.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zcatalog::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            page_size = config.page_size,
            debounce_ms = u64::try_from(config.debounce.as_millis()).unwrap_or(u64::MAX),
            view = %config.default_view,
            "parsed configuration"
        );
        self.app = zcatalog::initialize(&config);

        subscribe(&[EventType::Key, EventType::Timer]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::DebounceElapsed,
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                true
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zcatalog::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        match self.app.input_mode {
            InputMode::Normal => Self::map_normal_key(key),
            InputMode::Search => Self::map_search_key(key),
            InputMode::Form => Self::map_form_key(key),
        }
    }

    fn map_normal_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Right | BareKey::PageDown | BareKey::Char('l') => Event::NextPage,
            BareKey::Left | BareKey::PageUp | BareKey::Char('h') => Event::PrevPage,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('a') => Event::AddProduct,
            BareKey::Enter | BareKey::Char('e') => Event::EditSelected,
            BareKey::Char('t') => Event::SetView(ViewMode::Table),
            BareKey::Char('g') => Event::SetView(ViewMode::Grid),
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_search_key(key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Enter => Event::FocusResults,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_form_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Tab | BareKey::Down => Event::FormNextField,
            BareKey::Up => Event::FormPrevField,
            BareKey::Enter => Event::SubmitForm,
            BareKey::Esc => Event::CancelForm,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleDebounce { delay } => {
                tracing::debug!(delay_ms = ?delay, "arming debounce timer");
                set_timeout(delay.as_secs_f64());
            }
        }
    }
}
