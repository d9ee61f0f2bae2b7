//! Event handling layer for the Sourcedex TUI.
//!
//! Converts raw `crossterm` events into mutations on
//! [`crate::state::AppState`]. Every filter mutation funnels through one
//! `refresh_visibility` call on the state, so the projection is always
//! consistent with what the next draw renders. All handlers are synchronous;
//! there is exactly one mutator (this module) and one reader (the render
//! pass), and they never interleave.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{AppState, LoadState};
use crate::ui::helpers::selected_record;
use crate::util::open_url;

/// What: Handle one terminal event.
///
/// Inputs:
/// - `ev`: Raw crossterm event.
/// - `app`: Mutable application state.
///
/// Output:
/// - `true` when the application should exit.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, app),
        _ => false,
    }
}

/// Key dispatch; quit keys work in every load state, the rest only once the
/// catalog is loaded.
fn handle_key(key: &KeyEvent, app: &mut AppState) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        _ => {}
    }
    if app.load != LoadState::Loaded {
        // Terminal states accept only quit keys.
        return matches!(key.code, KeyCode::Char('q'));
    }
    match key.code {
        KeyCode::Char('r') if ctrl => app.cycle_rating(),
        KeyCode::Char(c) if !ctrl => app.push_query_char(c),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Tab => app.cycle_language(true),
        KeyCode::BackTab => app.cycle_language(false),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::Home => app.move_selection(i64::MIN + 1),
        KeyCode::End => app.move_selection(i64::MAX),
        KeyCode::Enter => {
            if let Some(d) = selected_record(app)
                && !d.record.download_url.is_empty()
            {
                open_url(&d.record.download_url);
            }
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SourceRecord;

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl_key(c: char) -> CEvent {
        CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn loaded_app() -> AppState {
        let mut app = AppState::default();
        app.set_catalog(vec![
            SourceRecord {
                name: "Alpha".to_string(),
                languages: vec!["en".to_string()],
                ..Default::default()
            },
            SourceRecord {
                name: "Beta".to_string(),
                languages: vec!["ja".to_string()],
                ..Default::default()
            },
        ]);
        app
    }

    #[test]
    /// What: Typing edits the query and re-filters; Backspace undoes it
    ///
    /// - Input: 'a','l' then Backspace twice
    /// - Output: Totals shrink to the match then recover
    fn events_typing_filters() {
        let mut app = loaded_app();
        assert!(!handle_event(&key(KeyCode::Char('a')), &mut app));
        assert!(!handle_event(&key(KeyCode::Char('l')), &mut app));
        assert_eq!(app.filters.query, "al");
        assert_eq!(app.projection.total, 1);
        handle_event(&key(KeyCode::Backspace), &mut app);
        handle_event(&key(KeyCode::Backspace), &mut app);
        assert_eq!(app.projection.total, 2);
    }

    #[test]
    /// What: Tab cycles the language filter; Ctrl+R cycles rating
    ///
    /// - Input: Tab, then Ctrl+R
    /// - Output: Language set to first option; rating no longer Any
    fn events_filter_cycles() {
        let mut app = loaded_app();
        handle_event(&key(KeyCode::Tab), &mut app);
        assert_eq!(app.filters.language, "English");
        handle_event(&ctrl_key('r'), &mut app);
        assert_eq!(app.filters.rating.as_config_key(), "safe");
    }

    #[test]
    /// What: Quit keys exit in loaded and terminal states
    ///
    /// - Input: Esc when loaded; 'q' in the error state; 'q' when loaded
    /// - Output: true, true, false ('q' is query input when loaded)
    fn events_quit_keys() {
        let mut app = loaded_app();
        assert!(handle_event(&key(KeyCode::Esc), &mut app));
        assert!(!handle_event(&key(KeyCode::Char('q')), &mut app));
        assert_eq!(app.filters.query, "q");

        let mut errored = AppState {
            load: LoadState::Error,
            ..Default::default()
        };
        assert!(handle_event(&key(KeyCode::Char('q')), &mut errored));
        assert!(handle_event(&ctrl_key('c'), &mut errored));
    }

    #[test]
    /// What: Selection keys stay within the visible range
    ///
    /// - Input: End, Down, Home, Up
    /// - Output: Selection clamps at both edges
    fn events_selection_bounds() {
        let mut app = loaded_app();
        handle_event(&key(KeyCode::End), &mut app);
        assert_eq!(app.selected, 1);
        handle_event(&key(KeyCode::Down), &mut app);
        assert_eq!(app.selected, 1);
        handle_event(&key(KeyCode::Home), &mut app);
        assert_eq!(app.selected, 0);
        handle_event(&key(KeyCode::Up), &mut app);
        assert_eq!(app.selected, 0);
    }
}
