use std::path::{Path, PathBuf};

use foldertabs_core::config::settings::{Config, ViewMode};
use foldertabs_core::config::theme::Theme;
use foldertabs_core::event::Command;
use foldertabs_core::fs::asset::ProjectAssetResolver;
use foldertabs_core::fs::drop::{accept_dropped_paths, parse_dropped_text};
use foldertabs_core::fs::entry::FileEntry;
use foldertabs_core::fs::ops::{absolute_path, folder_exists};
use foldertabs_core::fs::preview::{preview_for, PreviewState};
use foldertabs_core::nav::filter::FileTypeFilter;
use foldertabs_core::nav::tabs::FolderTabs;
use foldertabs_core::nav::view::FolderView;

/// Application mode. Determines how input is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Typing into the search field. The query itself lives on [`App`].
    Search,
    /// Typing a folder path to add as a tab.
    AddFolder(String),
    /// Browsing the favorites list. `selected` is the cursor index.
    Favorites {
        selected: usize,
    },
    Help,
}

/// Everything the frontend shows, wrapped around core's [`FolderTabs`].
///
/// `FolderTabs` owns tabs, history, favorites and the preview selection.
/// This wrapper adds view concerns: the listing cursor, search query, type
/// filter, icon/list layout, and the resolved preview.
#[derive(Debug)]
pub struct App {
    mode: AppMode,
    tabs: FolderTabs,
    resolver: ProjectAssetResolver,
    /// Listing of the current folder, reloaded after every state change.
    view: FolderView,
    cursor: usize,
    query: String,
    filter: FileTypeFilter,
    view_mode: ViewMode,
    preview: PreviewState,
    /// Path `preview` was resolved for.
    preview_source: Option<PathBuf>,
    config: Config,
    theme: Theme,
    should_quit: bool,
    status_message: Option<String>,
}

impl App {
    /// Creates the app around restored navigation state.
    pub fn new(tabs: FolderTabs, config: Config, theme: Theme) -> Self {
        let resolver = match &config.general.project_root {
            Some(root) => ProjectAssetResolver::with_root(absolute_path(root)),
            None => ProjectAssetResolver::new(),
        };

        Self {
            mode: AppMode::Normal,
            tabs,
            resolver,
            view: FolderView::empty(),
            cursor: 0,
            query: String::new(),
            filter: config.general.filter(),
            view_mode: config.general.default_view,
            preview: PreviewState::NothingSelected,
            preview_source: None,
            config,
            theme,
            should_quit: false,
            status_message: None,
        }
        .refreshed()
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn tabs(&self) -> &FolderTabs {
        &self.tabs
    }

    pub fn view(&self) -> &FolderView {
        &self.view
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.view.get(self.cursor)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> FileTypeFilter {
        self.filter
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn show_icons(&self) -> bool {
        self.config.ui.show_icons
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Consumes the app, handing back the navigation state for persisting.
    pub fn into_tabs(self) -> FolderTabs {
        self.tabs
    }

    // --- Plain transitions ---

    pub fn with_mode(self, mode: AppMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }

    pub fn with_status(self, msg: String) -> Self {
        Self {
            status_message: Some(msg),
            ..self
        }
    }

    pub fn with_clear_status(self) -> Self {
        Self {
            status_message: None,
            ..self
        }
    }

    // --- Core state ---

    /// Applies a core command and reloads the listing.
    pub fn handle_command(self, cmd: Command) -> Self {
        let tabs = self.tabs.clone().apply(cmd);
        self.with_tabs(tabs)
    }

    /// Swaps in new navigation state.
    ///
    /// When the current folder changes the cursor lands on the folder we came
    /// from (after going back), or on the first entry.
    fn with_tabs(self, tabs: FolderTabs) -> Self {
        let previous = self.tabs.current_path().map(Path::to_path_buf);
        let moved = tabs.current_path() != previous.as_deref();
        let app = Self { tabs, ..self }.refreshed();
        if !moved {
            return app;
        }
        let cursor = previous
            .and_then(|prev| app.view.listing().iter().position(|e| e.path() == prev))
            .unwrap_or(0);
        Self { cursor, ..app }
    }

    /// Re-lists the current folder. The preview is resolved again only when
    /// the previewed path changed.
    fn refreshed(self) -> Self {
        let view = self
            .tabs
            .list_current(&self.resolver, &self.query, self.filter);
        let cursor = self.cursor.min(view.len().saturating_sub(1));
        let app = Self {
            view,
            cursor,
            ..self
        };
        if app.tabs.preview_path() == app.preview_source.as_deref() {
            return app;
        }
        app.with_preview_resolved()
    }

    fn with_preview_resolved(self) -> Self {
        let preview_source = self.tabs.preview_path().map(Path::to_path_buf);
        let preview = if self.config.preview.enabled {
            preview_for(
                &self.resolver,
                preview_source.as_deref(),
                self.config.preview.max_lines,
            )
        } else {
            PreviewState::NothingSelected
        };
        Self {
            preview,
            preview_source,
            ..self
        }
    }

    /// Reloads the listing and the preview from disk without changing any state.
    pub fn reload(self) -> Self {
        self.with_preview_resolved().refreshed()
    }

    // --- Cursor ---

    pub fn cursor_down(self) -> Self {
        let last = self.view.len().saturating_sub(1);
        let cursor = (self.cursor + 1).min(last);
        Self { cursor, ..self }
    }

    pub fn cursor_up(self) -> Self {
        Self {
            cursor: self.cursor.saturating_sub(1),
            ..self
        }
    }

    pub fn cursor_top(self) -> Self {
        Self { cursor: 0, ..self }
    }

    pub fn cursor_bottom(self) -> Self {
        Self {
            cursor: self.view.len().saturating_sub(1),
            ..self
        }
    }

    fn with_cursor_on(self, path: &Path) -> Self {
        let position = self.view.listing().iter().position(|e| e.path() == path);
        match position {
            Some(cursor) => Self { cursor, ..self },
            None => self,
        }
    }

    // --- Entries ---

    /// Clicks the entry under the cursor: folders are entered, files previewed.
    pub fn activate(self) -> Self {
        let Some(entry) = self.selected_entry().cloned() else {
            return self;
        };
        let tabs = self.tabs.clone().with_activated(&entry);
        self.with_tabs(tabs)
    }

    pub fn toggle_favorite(self) -> Self {
        let Some(path) = self.selected_entry().map(|e| e.path().to_path_buf()) else {
            return self;
        };
        let was_favorite = self.tabs.is_favorite(&path);
        let name = display_name(&path);
        let app = self.handle_command(Command::ToggleFavorite(path));
        if was_favorite {
            app.with_status(format!("Removed {name} from favorites"))
        } else {
            app.with_status(format!("Added {name} to favorites"))
        }
    }

    // --- Tabs ---

    pub fn select_tab(self, index: usize) -> Self {
        self.handle_command(Command::SelectTab(index))
    }

    pub fn next_tab(self) -> Self {
        let count = self.tabs.tab_count();
        match self.tabs.selected_index() {
            Some(i) if count > 1 => self.select_tab((i + 1) % count),
            _ => self,
        }
    }

    pub fn prev_tab(self) -> Self {
        let count = self.tabs.tab_count();
        match self.tabs.selected_index() {
            Some(i) if count > 1 => self.select_tab((i + count - 1) % count),
            _ => self,
        }
    }

    pub fn close_tab(self) -> Self {
        let Some(index) = self.tabs.selected_index() else {
            return self;
        };
        let name = self
            .tabs
            .selected_tab()
            .map(display_name)
            .unwrap_or_default();
        self.handle_command(Command::RemoveTab(index))
            .with_status(format!("Closed tab {name}"))
    }

    // --- Add-folder prompt ---

    pub fn prompt_push_char(self, c: char) -> Self {
        match self.mode {
            AppMode::AddFolder(ref input) => {
                let input = format!("{input}{c}");
                self.with_mode(AppMode::AddFolder(input))
            }
            _ => self,
        }
    }

    pub fn prompt_pop_char(self) -> Self {
        match self.mode {
            AppMode::AddFolder(ref input) => {
                let mut input = input.clone();
                input.pop();
                self.with_mode(AppMode::AddFolder(input))
            }
            _ => self,
        }
    }

    /// Adds the typed path as a tab. Missing folders are still added and
    /// show up as listing errors until they exist.
    pub fn prompt_confirm(self) -> Self {
        let AppMode::AddFolder(ref input) = self.mode else {
            return self;
        };
        let input = input.trim().to_string();
        let app = self.with_mode(AppMode::Normal);
        if input.is_empty() {
            return app;
        }

        let path = absolute_path(&expand_home(&input));
        let warning = if folder_exists(&path) {
            ""
        } else {
            " (folder not found)"
        };
        let msg = format!("Added tab {}{warning}", display_name(&path));
        app.handle_command(Command::AddFolder(path)).with_status(msg)
    }

    // --- Drops ---

    /// Imports folders dropped onto the terminal as pasted text.
    pub fn drop_text(self, text: &str) -> Self {
        let paths: Vec<PathBuf> = parse_dropped_text(text)
            .iter()
            .map(|p| absolute_path(p))
            .collect();
        if paths.is_empty() {
            return self;
        }
        let outcome = accept_dropped_paths(&paths);
        let app = self.handle_command(Command::DropFolders(paths));

        let added = outcome.folders.len();
        let ignored = outcome.rejected.len();
        let msg = match (added, ignored) {
            (0, _) => "Only folders can be added as tabs".to_string(),
            (n, 0) => format!("Added {n} folder(s) as tabs"),
            (n, m) => format!("Added {n} folder(s) as tabs, ignored {m} other path(s)"),
        };
        app.with_status(msg)
    }

    // --- Search & filter ---

    pub fn search_push_char(self, c: char) -> Self {
        let query = format!("{}{c}", self.query);
        Self { query, ..self }.with_query_changed()
    }

    pub fn search_pop_char(self) -> Self {
        let mut query = self.query.clone();
        query.pop();
        Self { query, ..self }.with_query_changed()
    }

    /// Leaves search mode, dropping the query.
    pub fn search_cancel(self) -> Self {
        Self {
            query: String::new(),
            mode: AppMode::Normal,
            ..self
        }
        .with_query_changed()
    }

    fn with_query_changed(self) -> Self {
        Self { cursor: 0, ..self }.refreshed()
    }

    pub fn with_filter(self, filter: FileTypeFilter) -> Self {
        Self {
            filter,
            cursor: 0,
            ..self
        }
        .refreshed()
        .with_status(format!("Filter: {}", filter.label()))
    }

    pub fn cycle_filter(self) -> Self {
        let next = self.filter.next();
        self.with_filter(next)
    }

    pub fn cycle_filter_back(self) -> Self {
        let prev = self.filter.prev();
        self.with_filter(prev)
    }

    pub fn toggle_view(self) -> Self {
        let view_mode = self.view_mode.toggle();
        Self { view_mode, ..self }.with_status(view_mode.label().to_string())
    }

    // --- Favorites list ---

    pub fn favorite_path(&self, selected: usize) -> Option<PathBuf> {
        self.tabs.favorites().get(selected).map(Path::to_path_buf)
    }

    pub fn favorites_move_down(self) -> Self {
        let AppMode::Favorites { selected } = self.mode else {
            return self;
        };
        let last = self.tabs.favorites().len().saturating_sub(1);
        self.with_mode(AppMode::Favorites {
            selected: (selected + 1).min(last),
        })
    }

    pub fn favorites_move_up(self) -> Self {
        let AppMode::Favorites { selected } = self.mode else {
            return self;
        };
        self.with_mode(AppMode::Favorites {
            selected: selected.saturating_sub(1),
        })
    }

    /// Shows a favorite in place: enters its parent folder in the current
    /// tab, puts the cursor on it and previews it.
    pub fn favorite_show(self, selected: usize) -> Self {
        let Some(path) = self.favorite_path(selected) else {
            return self;
        };
        if !self.tabs.has_selection() {
            return self.with_status("Add a folder tab first".to_string());
        }

        let app = self.with_mode(AppMode::Normal);
        let app = match path.parent() {
            Some(parent) if app.tabs.current_path() != Some(parent) => {
                app.handle_command(Command::Enter(parent.to_path_buf()))
            }
            _ => app,
        };
        app.handle_command(Command::Preview(path.clone()))
            .with_cursor_on(&path)
    }

    pub fn favorite_remove(self, selected: usize) -> Self {
        let Some(path) = self.favorite_path(selected) else {
            return self;
        };
        let name = display_name(&path);
        let app = self.handle_command(Command::ToggleFavorite(path));
        let last = app.tabs.favorites().len().saturating_sub(1);
        app.with_mode(AppMode::Favorites {
            selected: selected.min(last),
        })
        .with_status(format!("Removed {name} from favorites"))
    }
}

/// Last path component for labels, or the whole path for roots.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| foldertabs_core::nfc_string(&n.to_string_lossy()))
        .unwrap_or_else(|| path.display().to_string())
}

fn expand_home(input: &str) -> PathBuf {
    match input.strip_prefix("~/") {
        Some(rest) => match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home).join(rest),
            Err(_) => PathBuf::from(input),
        },
        None => PathBuf::from(input),
    }
}
