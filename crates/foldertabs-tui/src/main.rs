//! FolderTabs: a tabbed project-folder browser built with ratatui.
//!
//! This binary initialises the terminal, restores saved tabs and favorites,
//! runs the main event loop, and saves them again on exit.

mod app;
mod icons;
mod input;
mod launch;
mod render;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use foldertabs_core::config::settings::Config;
use foldertabs_core::config::theme::Theme;
use foldertabs_core::fs::ops::absolute_path;
use foldertabs_core::nav::tabs::FolderTabs;
use foldertabs_core::prefs::FilePreferences;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{display_name, App, AppMode};
use crate::input::{handle_key, InputAction, InputState};
use crate::launch::{open_path, reveal_path};
use crate::render::render;

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Logs go to a file so the terminal UI stays clean.
fn init_logging() -> anyhow::Result<()> {
    let log_path = std::env::temp_dir().join("foldertabs.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

/// `./config` when present (development), otherwise `~/.config/foldertabs`.
fn config_dir() -> PathBuf {
    if Path::new("config").exists() {
        PathBuf::from("config")
    } else {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/"))
            .join(".config")
            .join("foldertabs")
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cfg_dir = config_dir();
    let config = Config::load_or_default(&cfg_dir.join("default.toml"));
    let theme = Theme::load_or_default(&cfg_dir.join("theme.toml"));

    let prefs_path = config
        .storage
        .preferences_file
        .clone()
        .unwrap_or_else(|| cfg_dir.join("prefs.toml"));
    let mut prefs = FilePreferences::load_or_default(&prefs_path);

    let tabs = std::env::args()
        .skip(1)
        .map(|arg| absolute_path(Path::new(&arg)))
        .fold(FolderTabs::restore(&prefs), |tabs, path| tabs.with_folder(path));

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let (app, result) = run_app(&mut terminal, App::new(tabs, config, theme));

    let restored = restore_terminal(&mut terminal);
    // Tabs are saved even when the loop failed.
    save_tabs(app.into_tabs(), &mut prefs)?;
    restored?;

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

/// Writes the tab state into `prefs` and flushes it to disk.
fn save_tabs(tabs: FolderTabs, prefs: &mut FilePreferences) -> anyhow::Result<()> {
    tabs.persist(prefs);
    prefs
        .save()
        .with_context(|| format!("failed to save {}", prefs.path().display()))
}

/// Runs the event loop. The app is handed back on error too.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> (App, anyhow::Result<()>) {
    let mut input_state = InputState::new();

    loop {
        if app.should_quit() {
            return (app, Ok(()));
        }

        let event = match next_event(terminal, &app) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => return (app, Err(e)),
        };

        match event {
            // Dropping files on a terminal pastes their paths.
            Event::Paste(text) => {
                if matches!(app.mode(), AppMode::Normal) {
                    app = app.with_clear_status().drop_text(&text);
                }
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let (action, new_input_state) = handle_key(key, app.mode(), &input_state);
                input_state = new_input_state;
                app = dispatch(app, action);
            }
            _ => {}
        }
    }
}

/// Draws a frame and waits briefly for the next terminal event.
fn next_event(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &App,
) -> anyhow::Result<Option<Event>> {
    terminal.draw(|f| render(f, app))?;
    if !event::poll(Duration::from_millis(100))? {
        return Ok(None);
    }
    Ok(Some(event::read()?))
}

/// Applies one input action to the app.
fn dispatch(app: App, action: InputAction) -> App {
    match action {
        InputAction::Command(cmd) => app.with_clear_status().handle_command(cmd),
        InputAction::EnterMode(AppMode::Favorites { .. }) => {
            app.with_clear_status().with_mode(AppMode::Favorites { selected: 0 })
        }
        InputAction::EnterMode(mode) => app.with_mode(mode),
        InputAction::Quit => app.with_quit(),

        InputAction::CursorDown => app.cursor_down(),
        InputAction::CursorUp => app.cursor_up(),
        InputAction::CursorTop => app.cursor_top(),
        InputAction::CursorBottom => app.cursor_bottom(),
        InputAction::Activate => app.with_clear_status().activate(),

        InputAction::NextTab => app.with_clear_status().next_tab(),
        InputAction::PrevTab => app.with_clear_status().prev_tab(),
        InputAction::CloseTab => app.close_tab(),

        InputAction::ToggleFavorite => app.toggle_favorite(),
        InputAction::CycleFilter => app.cycle_filter(),
        InputAction::CycleFilterBack => app.cycle_filter_back(),
        InputAction::ToggleView => app.toggle_view(),
        InputAction::Reload => app.with_clear_status().reload(),

        InputAction::OpenSelected => {
            let path = app.selected_entry().map(|e| e.path().to_path_buf());
            launch(app, path, "Opened", open_path)
        }
        InputAction::RevealSelected => {
            let path = app.selected_entry().map(|e| e.path().to_path_buf());
            launch(app, path, "Revealed", reveal_path)
        }

        InputAction::SearchChar(c) => app.search_push_char(c),
        InputAction::SearchBackspace => app.search_pop_char(),
        InputAction::SearchConfirm => app.with_mode(AppMode::Normal),
        InputAction::SearchCancel => app.search_cancel(),

        InputAction::PromptChar(c) => app.prompt_push_char(c),
        InputAction::PromptBackspace => app.prompt_pop_char(),
        InputAction::PromptConfirm => app.prompt_confirm(),

        InputAction::FavoriteDown => app.favorites_move_down(),
        InputAction::FavoriteUp => app.favorites_move_up(),
        InputAction::FavoriteShow => match favorites_cursor(&app) {
            Some(selected) => app.favorite_show(selected),
            None => app,
        },
        InputAction::FavoriteOpen => {
            let path = selected_favorite(&app);
            launch(app, path, "Opened", open_path)
        }
        InputAction::FavoriteReveal => {
            let path = selected_favorite(&app);
            launch(app, path, "Revealed", reveal_path)
        }
        InputAction::FavoriteRemove => match favorites_cursor(&app) {
            Some(selected) => app.favorite_remove(selected),
            None => app,
        },

        InputAction::None => app,
    }
}

fn favorites_cursor(app: &App) -> Option<usize> {
    match app.mode() {
        AppMode::Favorites { selected } => Some(*selected),
        _ => None,
    }
}

fn selected_favorite(app: &App) -> Option<PathBuf> {
    favorites_cursor(app).and_then(|selected| app.favorite_path(selected))
}

/// Runs an OS hand-off for `path` and reports the outcome in the status bar.
fn launch(
    app: App,
    path: Option<PathBuf>,
    verb: &str,
    run: fn(&Path) -> anyhow::Result<()>,
) -> App {
    let Some(path) = path else {
        return app;
    };
    match run(&path) {
        Ok(()) => app.with_status(format!("{verb} {}", display_name(&path))),
        Err(e) => {
            tracing::warn!("{e:#}");
            app.with_status(format!("{e:#}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_tabs_writes_restorable_state() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config").join("prefs.toml");
        let mut prefs = FilePreferences::load_or_default(&path);
        let tabs = FolderTabs::new()
            .with_folder("/proj/Assets/Art")
            .with_toggled_favorite("/proj/Assets/Hero.prefab");

        save_tabs(tabs, &mut prefs).unwrap();

        let restored = FolderTabs::restore(&FilePreferences::load(&path).unwrap());
        assert_eq!(restored.tabs(), &[PathBuf::from("/proj/Assets/Art")]);
        assert_eq!(
            restored.favorites().get(0),
            Some(Path::new("/proj/Assets/Hero.prefab"))
        );
    }
}
