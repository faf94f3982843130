//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! timer expiries, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextPage`, `PrevPage`
//! - **Search**: `SearchMode`, `FocusResults`, `ExitSearch`, `DebounceElapsed`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **View**: `SetView`
//! - **Form**: `AddProduct`, `EditSelected`, `FormNextField`, `FormPrevField`,
//!   `SubmitForm`, `CancelForm`
//!
//! # Example
//!
//! ```rust
//! use zcatalog::app::{handle_event, AppState, Event};
//! use zcatalog::catalog::Catalog;
//! use zcatalog::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::empty(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::SearchMode)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), zcatalog::domain::CatalogError>(())
//! ```

use super::modes::{InputMode, ViewMode};
use crate::app::{Action, AppState};
use crate::domain::error::{CatalogError, Result};

/// Events triggered by user input or host timers.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the row cursor down (wraps to the top of the page).
    KeyDown,
    /// Moves the row cursor up (wraps to the bottom of the page).
    KeyUp,
    NextPage,
    PrevPage,
    /// Hides the plugin.
    CloseFocus,

    /// Focuses the search box, keeping any existing query.
    SearchMode,
    /// Leaves the search box, applying the typed query immediately.
    FocusResults,
    /// Clears the query and leaves search mode.
    ExitSearch,
    /// A debounce timer expired.
    DebounceElapsed,

    /// Types a character into the search box or the focused form field.
    Char(char),
    /// Deletes the last character of the search box or the focused form field.
    Backspace,
    /// Cancels the form, or clears the search.
    Escape,

    /// Switches between table and grid rendering.
    SetView(ViewMode),

    /// Opens the form with an empty draft.
    AddProduct,
    /// Opens the form for the selected product.
    EditSelected,
    FormNextField,
    FormPrevField,
    SubmitForm,
    CancelForm,
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// Any status notice is dismissed by the next user event.
///
/// # Errors
///
/// Validation failures are recovered here and never returned. Other errors
/// from state transitions (such as editing a product that no longer exists)
/// are propagated.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!(
        "handle_event",
        event_type = ?event,
        input_mode = ?state.input_mode
    )
    .entered();

    let dismissed_notice = match event {
        Event::DebounceElapsed => false,
        _ => state.notice.take().is_some(),
    };

    let (render, actions) = dispatch(state, event)?;
    Ok((render || dismissed_notice, actions))
}

#[allow(clippy::too_many_lines)]
fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::KeyDown => {
            if state.input_mode == InputMode::Form {
                return Ok((false, vec![]));
            }
            Ok((state.move_selection_down(), vec![]))
        }
        Event::KeyUp => {
            if state.input_mode == InputMode::Form {
                return Ok((false, vec![]));
            }
            Ok((state.move_selection_up(), vec![]))
        }
        Event::NextPage => {
            if state.input_mode == InputMode::Form {
                return Ok((false, vec![]));
            }
            Ok((state.next_page(), vec![]))
        }
        Event::PrevPage => {
            if state.input_mode == InputMode::Form {
                return Ok((false, vec![]));
            }
            Ok((state.prev_page(), vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            if state.input_mode == InputMode::Form {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            if state.search.commit() {
                state.on_query_applied();
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            if state.input_mode == InputMode::Form {
                return Ok((false, vec![]));
            }
            Ok((clear_search(state), vec![]))
        }
        Event::DebounceElapsed => {
            let was_pending = state.search.is_pending();
            let changed = state.search.on_timer();
            if changed {
                state.on_query_applied();
            }
            Ok((changed || (was_pending && !state.search.is_pending()), vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search => {
                let delay = state.search.push_char(*c);
                Ok((true, vec![Action::ScheduleDebounce { delay }]))
            }
            InputMode::Form => {
                if let Some(form) = state.form.as_mut() {
                    form.push_char(*c);
                }
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search => Ok(state.search.backspace().map_or_else(
                || (false, vec![]),
                |delay| (true, vec![Action::ScheduleDebounce { delay }]),
            )),
            InputMode::Form => {
                if let Some(form) = state.form.as_mut() {
                    form.backspace();
                }
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => {
            if state.input_mode == InputMode::Form {
                return Ok((state.cancel_form(), vec![]));
            }
            Ok((clear_search(state), vec![]))
        }
        Event::SetView(mode) => Ok((state.view.set(*mode), vec![])),
        Event::AddProduct => {
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.open_create_form();
            Ok((true, vec![]))
        }
        Event::EditSelected => {
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            Ok((state.open_edit_form(), vec![]))
        }
        Event::FormNextField => {
            let Some(form) = state.form.as_mut() else {
                return Ok((false, vec![]));
            };
            form.focus_next();
            Ok((true, vec![]))
        }
        Event::FormPrevField => {
            let Some(form) = state.form.as_mut() else {
                return Ok((false, vec![]));
            };
            form.focus_prev();
            Ok((true, vec![]))
        }
        Event::SubmitForm => match state.submit_form() {
            Ok(committed) => Ok((committed.is_some(), vec![])),
            Err(CatalogError::Validation(errors)) => {
                tracing::debug!(error_count = errors.len(), "submit rejected");
                Ok((true, vec![]))
            }
            Err(e) => Err(e),
        },
        Event::CancelForm => Ok((state.cancel_form(), vec![])),
    }
}

/// Clears the query immediately and returns to normal mode.
fn clear_search(state: &mut AppState) -> bool {
    let was_searching = state.input_mode == InputMode::Search;
    let was_pending = state.search.is_pending();
    state.input_mode = InputMode::Normal;

    let changed = state.search.clear();
    if changed {
        tracing::debug!("search cleared");
        state.on_query_applied();
    }
    changed || was_searching || was_pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::product::{Product, ProductFields, ProductId};
    use crate::ui::theme::Theme;
    use std::time::Duration;

    fn state() -> AppState {
        let products = ["Apple", "Banana", "Apricot"]
            .iter()
            .zip(1..)
            .map(|(name, id)| {
                Product::from_fields(
                    ProductId(id),
                    ProductFields {
                        name: (*name).to_string(),
                        price: 2.0,
                        category: "Fruit".to_string(),
                        stock: 0,
                        description: String::new(),
                    },
                )
            })
            .collect();
        AppState::new(Catalog::new(products).unwrap(), Theme::default())
            .with_debounce(Duration::from_millis(300))
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn typing_schedules_debounce_without_filtering() {
        let mut state = state();
        send(&mut state, Event::SearchMode);

        let (render, actions) = send(&mut state, Event::Char('a'));

        assert!(render);
        assert_eq!(
            actions,
            vec![Action::ScheduleDebounce {
                delay: Duration::from_millis(300)
            }]
        );
        assert_eq!(state.filtered.len(), 3);
    }

    #[test]
    fn only_last_timer_applies_query() {
        let mut state = state();
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('a'));
        send(&mut state, Event::Char('p'));

        let (render, _) = send(&mut state, Event::DebounceElapsed);
        assert!(!render);
        assert_eq!(state.filtered.len(), 3);

        let (render, _) = send(&mut state, Event::DebounceElapsed);
        assert!(render);
        let names: Vec<&str> = state.filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Apricot"]);
    }

    #[test]
    fn enter_applies_query_and_keeps_it() {
        let mut state = state();
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('b'));
        send(&mut state, Event::FocusResults);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search.applied(), "b");
        assert_eq!(state.filtered.len(), 1);

        let (render, _) = send(&mut state, Event::DebounceElapsed);
        assert!(!render);
        assert_eq!(state.filtered.len(), 1);
    }

    #[test]
    fn escape_clears_search_immediately() {
        let mut state = state();
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('b'));
        send(&mut state, Event::DebounceElapsed);
        send(&mut state, Event::Char('x'));

        send(&mut state, Event::Escape);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search.applied(), "");
        assert_eq!(state.filtered.len(), 3);
        send(&mut state, Event::DebounceElapsed);
        assert_eq!(state.filtered.len(), 3);
    }

    #[test]
    fn characters_are_ignored_in_normal_mode() {
        let mut state = state();
        let (render, actions) = send(&mut state, Event::Char('x'));
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.search.input(), "");
    }

    #[test]
    fn view_toggle_changes_nothing_else() {
        let mut state = state();
        send(&mut state, Event::KeyDown);
        let before = (state.filtered.clone(), state.paginator, state.selected_row);

        let (render, _) = send(&mut state, Event::SetView(ViewMode::Table));
        assert!(render);
        let (render, _) = send(&mut state, Event::SetView(ViewMode::Table));
        assert!(!render);

        assert_eq!(state.view.mode(), ViewMode::Table);
        assert_eq!(before, (state.filtered.clone(), state.paginator, state.selected_row));
    }

    #[test]
    fn form_keys_route_to_form() {
        let mut state = state();
        send(&mut state, Event::AddProduct);
        assert_eq!(state.input_mode, InputMode::Form);

        send(&mut state, Event::Char('K'));
        send(&mut state, Event::FormNextField);
        send(&mut state, Event::Char('9'));
        send(&mut state, Event::FormNextField);
        send(&mut state, Event::Char('F'));
        send(&mut state, Event::KeyDown);
        assert_eq!(state.selected_row, 0);

        let (render, _) = send(&mut state, Event::SubmitForm);
        assert!(render);
        assert_eq!(state.catalog.len(), 4);
        assert_eq!(state.notice.as_deref(), Some("Added product #4"));

        let (render, _) = send(&mut state, Event::KeyDown);
        assert!(render);
        assert!(state.notice.is_none());
    }

    #[test]
    fn rejected_submit_renders_errors() {
        let mut state = state();
        send(&mut state, Event::EditSelected);
        send(&mut state, Event::FormNextField);
        for _ in 0..3 {
            send(&mut state, Event::Backspace);
        }

        let (render, actions) = send(&mut state, Event::SubmitForm);

        assert!(render);
        assert!(actions.is_empty());
        let form = state.form.as_ref().unwrap();
        assert_eq!(
            form.errors().get(crate::form::FormField::Price),
            Some("Price is required")
        );
        assert_eq!(state.catalog.products()[0].price, 2.0);
    }

    #[test]
    fn escape_in_form_cancels() {
        let mut state = state();
        send(&mut state, Event::AddProduct);
        send(&mut state, Event::Char('Z'));

        let (render, _) = send(&mut state, Event::Escape);

        assert!(render);
        assert!(state.form.is_none());
        assert_eq!(state.catalog.len(), 3);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state();
        let (render, actions) = send(&mut state, Event::CloseFocus);
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
