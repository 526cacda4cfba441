//! Input handling abstractions.
//!
//! This module provides traits and types for turning keyboard input into
//! application actions, so each input context can be tested independently.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the application should do in response to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing; the key is not handled here.
    None,
    /// Quit the application.
    Quit,
    /// Show or hide the help modal.
    ToggleHelp,
    /// Close the current modal or message.
    Dismiss,
    /// Move the selection or scroll the focused pane up.
    Up,
    /// Move the selection or scroll the focused pane down.
    Down,
    /// Move a page up.
    PageUp,
    /// Move a page down.
    PageDown,
    /// Jump to the first record.
    First,
    /// Jump to the last record.
    Last,
    /// Move focus to the next pane.
    CycleFocus,
    /// Enter search mode.
    StartSearch,
    /// Append a character to the search query.
    SearchInput(char),
    /// Remove the last character of the search query.
    SearchBackspace,
    /// Leave search mode keeping the filter.
    SearchSubmit,
    /// Leave search mode and clear the filter.
    SearchCancel,
    /// Copy the selected record's image reference.
    CopyImageRef,
    /// Reload the catalog file.
    Reload,
}

/// Context passed to input handlers.
///
/// This provides handlers with the information they need to process
/// input without directly accessing the full App state.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputContext {
    /// Whether search mode is active.
    pub search_active: bool,
    /// Whether a modal (help, error, status) is displayed.
    pub has_modal: bool,
}

/// Trait for handling keyboard input.
///
/// Implementations of this trait handle input for specific modes
/// or input contexts.
pub trait InputHandler {
    /// Handle a key event, returning [`Action::None`] when not applicable.
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> Action;

    /// Get the name of this handler (for debugging).
    fn name(&self) -> &'static str;
}

/// Handler for shortcuts available everywhere.
#[derive(Debug, Default)]
pub struct GlobalHandler;

impl InputHandler for GlobalHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if ctx.has_modal {
            // modals swallow everything else
            return Action::Dismiss;
        }

        if key.code == KeyCode::F(1) {
            return Action::ToggleHelp;
        }

        Action::None
    }

    fn name(&self) -> &'static str {
        "GlobalHandler"
    }
}

/// Handler for the search prompt.
#[derive(Debug, Default)]
pub struct SearchHandler;

impl InputHandler for SearchHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> Action {
        if !ctx.search_active {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => Action::SearchCancel,
            KeyCode::Enter => Action::SearchSubmit,
            KeyCode::Backspace => Action::SearchBackspace,
            KeyCode::Up => Action::Up,
            KeyCode::Down => Action::Down,
            KeyCode::Char(c) => Action::SearchInput(c),
            _ => Action::None,
        }
    }

    fn name(&self) -> &'static str {
        "SearchHandler"
    }
}

/// Handler for browsing records.
#[derive(Debug, Default)]
pub struct BrowseHandler;

impl InputHandler for BrowseHandler {
    fn handle(&mut self, key: KeyEvent, _ctx: &InputContext) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Up | KeyCode::Char('k') => Action::Up,
            KeyCode::Down | KeyCode::Char('j') => Action::Down,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::Home | KeyCode::Char('g') => Action::First,
            KeyCode::End | KeyCode::Char('G') => Action::Last,
            KeyCode::Tab => Action::CycleFocus,
            KeyCode::Char('/') => Action::StartSearch,
            KeyCode::Char('y') => Action::CopyImageRef,
            KeyCode::Char('r') => Action::Reload,
            KeyCode::Esc => Action::Dismiss,
            _ => Action::None,
        }
    }

    fn name(&self) -> &'static str {
        "BrowseHandler"
    }
}

/// Run a key through the handlers in priority order.
///
/// While searching, keys the prompt does not handle are dropped rather than
/// falling through to browsing.
pub fn dispatch(key: KeyEvent, ctx: &InputContext) -> Action {
    let action = GlobalHandler.handle(key, ctx);
    if action != Action::None {
        return action;
    }

    let mut handler: Box<dyn InputHandler> = if ctx.search_active {
        Box::new(SearchHandler)
    } else {
        Box::new(BrowseHandler)
    };
    let action = handler.handle(key, ctx);
    tracing::trace!("{} -> {action:?}", handler.name());
    action
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn browsing() -> InputContext {
        InputContext::default()
    }

    fn searching() -> InputContext {
        InputContext { search_active: true, has_modal: false }
    }

    #[test]
    fn test_browse_keys() {
        assert_eq!(dispatch(make_key(KeyCode::Char('j')), &browsing()), Action::Down);
        assert_eq!(dispatch(make_key(KeyCode::Up), &browsing()), Action::Up);
        assert_eq!(dispatch(make_key(KeyCode::Char('/')), &browsing()), Action::StartSearch);
        assert_eq!(dispatch(make_key(KeyCode::Char('q')), &browsing()), Action::Quit);
    }

    #[test]
    fn test_search_captures_letters() {
        assert_eq!(dispatch(make_key(KeyCode::Char('q')), &searching()), Action::SearchInput('q'));
        assert_eq!(dispatch(make_key(KeyCode::Esc), &searching()), Action::SearchCancel);
        assert_eq!(dispatch(make_key(KeyCode::Tab), &searching()), Action::None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(dispatch(key, &searching()), Action::Quit);
        let ctx = InputContext { search_active: false, has_modal: true };
        assert_eq!(dispatch(key, &ctx), Action::Quit);
    }

    #[test]
    fn test_modal_dismissed_by_any_key() {
        let ctx = InputContext { search_active: false, has_modal: true };
        assert_eq!(dispatch(make_key(KeyCode::Char('j')), &ctx), Action::Dismiss);
        assert_eq!(dispatch(make_key(KeyCode::Esc), &ctx), Action::Dismiss);
    }

    #[test]
    fn test_f1_toggles_help() {
        assert_eq!(dispatch(make_key(KeyCode::F(1)), &browsing()), Action::ToggleHelp);
    }
}
