use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use foldertabs_core::config::theme::{parse_color, Theme};

use crate::app::{App, AppMode};
use crate::ui::favorites::render_favorites;
use crate::ui::header::{render_header, HeaderProps};
use crate::ui::listing::{render_listing, ListingProps};
use crate::ui::popup::render_popup;
use crate::ui::preview::render_preview;
use crate::ui::statusbar::{render_statusbar, StatusBarProps};
use crate::ui::tab_bar::render_tab_bar;

/// Favorites shown before the pane stops growing.
const MAX_FAVORITE_ROWS: usize = 6;

/// Main render function. Composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_tab_bar(f, rows[0], app.tabs(), theme);
    render_header(
        f,
        rows[1],
        &HeaderProps {
            current_path: app.tabs().current_path(),
            can_go_back: app.tabs().can_go_back(),
            query: app.query(),
            searching: matches!(app.mode(), AppMode::Search),
            filter: app.filter(),
            view_mode: app.view_mode(),
        },
        theme,
    );
    render_body(f, rows[2], app, theme);
    render_drop_hint(f, rows[3], theme);
    render_statusbar(
        f,
        rows[4],
        &StatusBarProps {
            entry_count: app.view().len(),
            cursor: app.cursor(),
            selected_entry: app.selected_entry(),
            tab_position: app
                .tabs()
                .selected_index()
                .map(|i| (i, app.tabs().tab_count())),
            filter: app.filter(),
            favorites_count: app.tabs().favorites().len(),
            status_message: app.status_message(),
        },
        theme,
    );

    match app.mode() {
        AppMode::Help => render_help_popup(f, theme),
        AppMode::AddFolder(input) => render_add_folder_popup(f, input, theme),
        AppMode::Normal | AppMode::Search | AppMode::Favorites { .. } => {}
    }
}

fn render_body(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let preview_percent = preview_percent(app.config().ui.preview_ratio);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - preview_percent),
            Constraint::Percentage(preview_percent),
        ])
        .split(area);

    let favorites = app.tabs().favorites();
    let favorite_rows = favorites.len().clamp(1, MAX_FAVORITE_ROWS) as u16 + 2;
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(favorite_rows)])
        .split(columns[0]);

    let favorites_selected = match app.mode() {
        AppMode::Favorites { selected } => Some(*selected),
        _ => None,
    };

    render_listing(
        f,
        left[0],
        &ListingProps {
            view: app.view(),
            cursor: app.cursor(),
            favorites,
            view_mode: app.view_mode(),
            show_icons: app.show_icons(),
            icon_width: app.config().ui.icon_width,
            has_tab: app.tabs().has_selection(),
            focused: favorites_selected.is_none(),
        },
        theme,
    );
    render_favorites(f, left[1], favorites, favorites_selected, theme);

    if app.config().preview.enabled {
        render_preview(f, columns[1], app.preview(), theme);
    }
}

fn render_drop_hint(f: &mut Frame, area: Rect, theme: &Theme) {
    let hint = Paragraph::new(Line::from(Span::styled(
        " Drop folders here (paste paths) to add them as tabs",
        Style::default()
            .fg(parse_color(&theme.listing.hint_fg))
            .add_modifier(Modifier::ITALIC),
    )));
    f.render_widget(hint, area);
}

/// Converts the configured preview ratio to a column percentage in 10..=90.
fn preview_percent(ratio: f64) -> u16 {
    if !ratio.is_finite() {
        return 30;
    }
    ((ratio * 100.0).round() as i64).clamp(10, 90) as u16
}

fn render_help_popup(f: &mut Frame, theme: &Theme) {
    let lines = vec![
        "j/k      - Move down/up".to_owned(),
        "gg/G     - Jump to top/bottom".to_owned(),
        "l/Enter  - Enter folder / preview asset".to_owned(),
        "h/Bksp   - Back".to_owned(),
        "1-9      - Select tab".to_owned(),
        "]/[      - Next/previous tab".to_owned(),
        "a        - Add folder tab".to_owned(),
        "x        - Close tab".to_owned(),
        "f        - Toggle favorite".to_owned(),
        "F        - Favorites list".to_owned(),
        "/        - Search".to_owned(),
        "t/T      - Next/previous type filter".to_owned(),
        "v        - Toggle icon/list view".to_owned(),
        "R/F5     - Reload folder".to_owned(),
        "o        - Open with system handler".to_owned(),
        "r        - Reveal in file manager".to_owned(),
        "Esc      - Clear preview".to_owned(),
        "q        - Quit".to_owned(),
        "".to_owned(),
        "Paste folder paths to add them as tabs".to_owned(),
        "Press Esc or ? to close".to_owned(),
    ];
    render_popup(f, "Help", &lines, (50, 70), theme);
}

fn render_add_folder_popup(f: &mut Frame, input: &str, theme: &Theme) {
    let lines = vec![
        format!("Folder: {input}_"),
        String::new(),
        "Enter to add, Esc to cancel".to_owned(),
    ];
    render_popup(f, "Add Folder Tab", &lines, (50, 20), theme);
}
