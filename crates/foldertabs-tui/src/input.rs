use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use foldertabs_core::event::Command;

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a core Command.
    Command(Command),
    /// Enter a new AppMode.
    EnterMode(AppMode),
    /// Quit the application.
    Quit,
    CursorDown,
    CursorUp,
    /// Jump cursor to top (gg).
    CursorTop,
    /// Jump cursor to bottom (G).
    CursorBottom,
    /// Enter the folder or preview the file under the cursor.
    Activate,
    NextTab,
    PrevTab,
    /// Close the selected tab.
    CloseTab,
    /// Toggle the entry under the cursor in favorites.
    ToggleFavorite,
    /// Next file type filter.
    CycleFilter,
    /// Previous file type filter.
    CycleFilterBack,
    /// Switch between icon and list view.
    ToggleView,
    /// Re-read the current folder from disk.
    Reload,
    /// Open the entry under the cursor with the system handler.
    OpenSelected,
    /// Show the entry under the cursor in the system file manager.
    RevealSelected,
    /// Append a character to the search query.
    SearchChar(char),
    /// Remove the last character from the search query.
    SearchBackspace,
    /// Keep the query and return to Normal.
    SearchConfirm,
    /// Drop the query and return to Normal.
    SearchCancel,
    /// Append a character to the add-folder input.
    PromptChar(char),
    /// Remove the last character from the add-folder input.
    PromptBackspace,
    /// Add the typed folder as a tab.
    PromptConfirm,
    FavoriteDown,
    FavoriteUp,
    /// Navigate to the selected favorite in the current tab.
    FavoriteShow,
    /// Open the selected favorite with the system handler.
    FavoriteOpen,
    /// Show the selected favorite in the system file manager.
    FavoriteReveal,
    /// Remove the selected favorite.
    FavoriteRemove,
    /// No action for this key.
    None,
}

/// Tracks state for multi-key sequences like "gg".
#[derive(Debug, Default)]
pub struct InputState {
    pending_g: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self { pending_g: false }
    }
}

/// Maps a key event to an InputAction based on the current mode.
/// Returns the action and a new InputState (immutable pattern).
///
/// Ctrl+C quits from every mode.
pub fn handle_key(key: KeyEvent, mode: &AppMode, state: &InputState) -> (InputAction, InputState) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return (InputAction::Quit, InputState::new());
    }

    match mode {
        AppMode::Normal => handle_normal_key(key, state),
        AppMode::Search => handle_search_key(key),
        AppMode::AddFolder(_) => handle_prompt_key(key),
        AppMode::Favorites { .. } => handle_favorites_key(key),
        AppMode::Help => handle_help_key(key),
    }
}

fn handle_normal_key(key: KeyEvent, state: &InputState) -> (InputAction, InputState) {
    // Handle "gg" sequence
    if state.pending_g {
        let new_state = InputState { pending_g: false };
        return match key.code {
            KeyCode::Char('g') => (InputAction::CursorTop, new_state),
            _ => (InputAction::None, new_state),
        };
    }

    let new_state = InputState { pending_g: false };

    let action = match key.code {
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('j') | KeyCode::Down => InputAction::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => InputAction::CursorUp,
        KeyCode::Char('g') => {
            return (InputAction::None, InputState { pending_g: true });
        }
        KeyCode::Char('G') | KeyCode::End => InputAction::CursorBottom,
        KeyCode::Home => InputAction::CursorTop,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => InputAction::Activate,
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => {
            InputAction::Command(Command::GoBack)
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            InputAction::Command(Command::SelectTab(index))
        }
        KeyCode::Char(']') | KeyCode::Tab => InputAction::NextTab,
        KeyCode::Char('[') | KeyCode::BackTab => InputAction::PrevTab,
        KeyCode::Char('x') => InputAction::CloseTab,
        KeyCode::Char('a') => InputAction::EnterMode(AppMode::AddFolder(String::new())),
        KeyCode::Char('f') => InputAction::ToggleFavorite,
        KeyCode::Char('F') => InputAction::EnterMode(AppMode::Favorites { selected: 0 }),
        KeyCode::Char('/') => InputAction::EnterMode(AppMode::Search),
        KeyCode::Char('t') => InputAction::CycleFilter,
        KeyCode::Char('T') => InputAction::CycleFilterBack,
        KeyCode::Char('v') => InputAction::ToggleView,
        KeyCode::Char('R') | KeyCode::F(5) => InputAction::Reload,
        KeyCode::Char('o') => InputAction::OpenSelected,
        KeyCode::Char('r') => InputAction::RevealSelected,
        KeyCode::Esc => InputAction::Command(Command::ClearPreview),
        KeyCode::Char('?') => InputAction::EnterMode(AppMode::Help),
        _ => InputAction::None,
    };

    (action, new_state)
}

fn handle_search_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc => InputAction::SearchCancel,
        KeyCode::Enter => InputAction::SearchConfirm,
        KeyCode::Backspace => InputAction::SearchBackspace,
        KeyCode::Down => InputAction::CursorDown,
        KeyCode::Up => InputAction::CursorUp,
        KeyCode::Char(c) => InputAction::SearchChar(c),
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_prompt_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc => InputAction::EnterMode(AppMode::Normal),
        KeyCode::Enter => InputAction::PromptConfirm,
        KeyCode::Backspace => InputAction::PromptBackspace,
        KeyCode::Char(c) => InputAction::PromptChar(c),
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_favorites_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('F') => {
            InputAction::EnterMode(AppMode::Normal)
        }
        KeyCode::Char('j') | KeyCode::Down => InputAction::FavoriteDown,
        KeyCode::Char('k') | KeyCode::Up => InputAction::FavoriteUp,
        KeyCode::Enter | KeyCode::Char('l') => InputAction::FavoriteShow,
        KeyCode::Char('o') => InputAction::FavoriteOpen,
        KeyCode::Char('r') => InputAction::FavoriteReveal,
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => InputAction::FavoriteRemove,
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_help_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            InputAction::EnterMode(AppMode::Normal)
        }
        _ => InputAction::None,
    };
    (action, new_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key_with_mod(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn normal(code: KeyCode) -> InputAction {
        handle_key(key(code), &AppMode::Normal, &InputState::new()).0
    }

    // --- Normal mode ---

    #[test]
    fn normal_navigation_keys() {
        assert_eq!(normal(KeyCode::Char('j')), InputAction::CursorDown);
        assert_eq!(normal(KeyCode::Up), InputAction::CursorUp);
        assert_eq!(normal(KeyCode::Char('G')), InputAction::CursorBottom);
        assert_eq!(normal(KeyCode::Enter), InputAction::Activate);
        assert_eq!(normal(KeyCode::Char('l')), InputAction::Activate);
    }

    #[test]
    fn normal_reload_keys() {
        assert_eq!(normal(KeyCode::Char('R')), InputAction::Reload);
        assert_eq!(normal(KeyCode::F(5)), InputAction::Reload);
    }

    #[test]
    fn normal_back_keys() {
        for code in [KeyCode::Backspace, KeyCode::Char('h'), KeyCode::Left] {
            assert_eq!(normal(code), InputAction::Command(Command::GoBack));
        }
    }

    #[test]
    fn normal_gg_sequence() {
        let state = InputState::new();
        let (action, state) = handle_key(key(KeyCode::Char('g')), &AppMode::Normal, &state);
        assert_eq!(action, InputAction::None);
        assert!(state.pending_g);

        let (action, state) = handle_key(key(KeyCode::Char('g')), &AppMode::Normal, &state);
        assert_eq!(action, InputAction::CursorTop);
        assert!(!state.pending_g);
    }

    #[test]
    fn normal_g_then_other_key_cancels() {
        let state = InputState { pending_g: true };
        let (action, state) = handle_key(key(KeyCode::Char('j')), &AppMode::Normal, &state);
        assert_eq!(action, InputAction::None);
        assert!(!state.pending_g);
    }

    #[test]
    fn digits_select_tabs() {
        assert_eq!(
            normal(KeyCode::Char('1')),
            InputAction::Command(Command::SelectTab(0))
        );
        assert_eq!(
            normal(KeyCode::Char('9')),
            InputAction::Command(Command::SelectTab(8))
        );
        assert_eq!(normal(KeyCode::Char('0')), InputAction::None);
    }

    #[test]
    fn tab_keys() {
        assert_eq!(normal(KeyCode::Char(']')), InputAction::NextTab);
        assert_eq!(normal(KeyCode::Tab), InputAction::NextTab);
        assert_eq!(normal(KeyCode::Char('[')), InputAction::PrevTab);
        assert_eq!(normal(KeyCode::Char('x')), InputAction::CloseTab);
        assert_eq!(
            normal(KeyCode::Char('a')),
            InputAction::EnterMode(AppMode::AddFolder(String::new()))
        );
    }

    #[test]
    fn feature_keys() {
        assert_eq!(normal(KeyCode::Char('f')), InputAction::ToggleFavorite);
        assert_eq!(
            normal(KeyCode::Char('F')),
            InputAction::EnterMode(AppMode::Favorites { selected: 0 })
        );
        assert_eq!(normal(KeyCode::Char('/')), InputAction::EnterMode(AppMode::Search));
        assert_eq!(normal(KeyCode::Char('t')), InputAction::CycleFilter);
        assert_eq!(normal(KeyCode::Char('T')), InputAction::CycleFilterBack);
        assert_eq!(normal(KeyCode::Char('v')), InputAction::ToggleView);
        assert_eq!(normal(KeyCode::Char('o')), InputAction::OpenSelected);
        assert_eq!(normal(KeyCode::Char('r')), InputAction::RevealSelected);
        assert_eq!(
            normal(KeyCode::Esc),
            InputAction::Command(Command::ClearPreview)
        );
        assert_eq!(normal(KeyCode::Char('q')), InputAction::Quit);
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let ctrl_c = key_with_mod(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [
            AppMode::Normal,
            AppMode::Search,
            AppMode::AddFolder("/tmp".to_string()),
            AppMode::Favorites { selected: 0 },
            AppMode::Help,
        ] {
            let (action, _) = handle_key(ctrl_c, &mode, &InputState::new());
            assert_eq!(action, InputAction::Quit);
        }
    }

    // --- Text entry modes ---

    #[test]
    fn search_mode_captures_characters() {
        let state = InputState::new();
        let (action, _) = handle_key(key(KeyCode::Char('q')), &AppMode::Search, &state);
        assert_eq!(action, InputAction::SearchChar('q'));

        let (action, _) = handle_key(key(KeyCode::Esc), &AppMode::Search, &state);
        assert_eq!(action, InputAction::SearchCancel);

        let (action, _) = handle_key(key(KeyCode::Enter), &AppMode::Search, &state);
        assert_eq!(action, InputAction::SearchConfirm);
    }

    #[test]
    fn prompt_mode_captures_characters() {
        let mode = AppMode::AddFolder(String::new());
        let state = InputState::new();
        let (action, _) = handle_key(key(KeyCode::Char('/')), &mode, &state);
        assert_eq!(action, InputAction::PromptChar('/'));

        let (action, _) = handle_key(key(KeyCode::Backspace), &mode, &state);
        assert_eq!(action, InputAction::PromptBackspace);

        let (action, _) = handle_key(key(KeyCode::Esc), &mode, &state);
        assert_eq!(action, InputAction::EnterMode(AppMode::Normal));
    }

    // --- Favorites list ---

    #[test]
    fn favorites_mode_keys() {
        let mode = AppMode::Favorites { selected: 0 };
        let state = InputState::new();
        let act = |code| handle_key(key(code), &mode, &state).0;

        assert_eq!(act(KeyCode::Char('j')), InputAction::FavoriteDown);
        assert_eq!(act(KeyCode::Char('k')), InputAction::FavoriteUp);
        assert_eq!(act(KeyCode::Enter), InputAction::FavoriteShow);
        assert_eq!(act(KeyCode::Char('o')), InputAction::FavoriteOpen);
        assert_eq!(act(KeyCode::Char('r')), InputAction::FavoriteReveal);
        assert_eq!(act(KeyCode::Char('d')), InputAction::FavoriteRemove);
        assert_eq!(act(KeyCode::Esc), InputAction::EnterMode(AppMode::Normal));
    }

    #[test]
    fn help_closes_on_escape() {
        let (action, _) = handle_key(key(KeyCode::Esc), &AppMode::Help, &InputState::new());
        assert_eq!(action, InputAction::EnterMode(AppMode::Normal));

        let (action, _) = handle_key(key(KeyCode::Char('j')), &AppMode::Help, &InputState::new());
        assert_eq!(action, InputAction::None);
    }
}
