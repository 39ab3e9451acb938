//! Folder content rendering in list or icon-grid layout.
//!
//! Favorites carry a ★ marker in both layouts. A folder that cannot be listed
//! shows its error in place of the entries.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use foldertabs_core::config::settings::ViewMode;
use foldertabs_core::config::theme::{parse_color, Theme};
use foldertabs_core::fs::asset::AssetKind;
use foldertabs_core::fs::entry::FileEntry;
use foldertabs_core::nav::favorites::Favorites;
use foldertabs_core::nav::view::FolderView;

use crate::icons::icon_for_entry;
use crate::ui::statusbar::format_size;

/// Terminal rows taken by one icon-grid cell (icon, name, gap).
const CELL_HEIGHT: u16 = 3;
const FAVORITE_MARK: &str = "★";

/// Data needed to render the listing.
pub struct ListingProps<'a> {
    pub view: &'a FolderView,
    pub cursor: usize,
    pub favorites: &'a Favorites,
    pub view_mode: ViewMode,
    pub show_icons: bool,
    pub icon_width: u16,
    pub has_tab: bool,
    pub focused: bool,
}

/// Renders the current folder's visible entries inside a bordered block.
pub fn render_listing(f: &mut Frame, area: Rect, props: &ListingProps<'_>, theme: &Theme) {
    let border_fg = if props.focused {
        parse_color(&theme.listing.selected_fg)
    } else {
        parse_color(&theme.listing.hint_fg)
    };
    let title = format!("{} ({})", props.view_mode.label(), props.view.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_fg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if let Some(message) = placeholder(props) {
        let style = if props.view.error().is_some() {
            Style::default().fg(parse_color(&theme.listing.error_fg))
        } else {
            Style::default()
                .fg(parse_color(&theme.listing.hint_fg))
                .add_modifier(Modifier::ITALIC)
        };
        f.render_widget(Paragraph::new(Line::from(Span::styled(message, style))), inner);
        return;
    }

    match props.view_mode {
        ViewMode::List => render_list(f, inner, props, theme),
        ViewMode::Icon => render_grid(f, inner, props, theme),
    }
}

/// Text shown instead of entries, if any.
fn placeholder(props: &ListingProps<'_>) -> Option<String> {
    if !props.has_tab {
        return Some("Add a folder tab with 'a' or drop one here".to_string());
    }
    if let Some(err) = props.view.error() {
        return Some(format!("Cannot list folder: {err}"));
    }
    if props.view.is_empty() {
        return Some("No matching assets".to_string());
    }
    None
}

fn render_list(f: &mut Frame, area: Rect, props: &ListingProps<'_>, theme: &Theme) {
    let hint_fg = parse_color(&theme.listing.hint_fg);
    let favorite_fg = parse_color(&theme.listing.favorite_fg);

    let items: Vec<ListItem> = props
        .view
        .listing()
        .iter()
        .map(|entry| {
            let icon = entry_icon(entry, props.show_icons);
            let mut spans = vec![Span::styled(
                format!("{icon}{}", entry.name()),
                entry_style(entry, theme),
            )];
            if props.favorites.contains(entry.path()) {
                spans.push(Span::styled(
                    format!(" {FAVORITE_MARK}"),
                    Style::default().fg(favorite_fg),
                ));
            }
            let detail = if entry.is_dir() {
                format!("  {}", kind_label(entry))
            } else {
                format!("  {}  {}", kind_label(entry), format_size(entry.size()))
            };
            spans.push(Span::styled(detail, Style::default().fg(hint_fg)));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .fg(parse_color(&theme.listing.selected_fg)),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(props.cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_grid(f: &mut Frame, area: Rect, props: &ListingProps<'_>, theme: &Theme) {
    let cell_width = props.icon_width.max(4);
    let columns = grid_columns(area.width, cell_width);
    let total_rows = props.view.len().div_ceil(columns);
    let visible_rows = usize::from((area.height / CELL_HEIGHT).max(1));
    let (start, end) = visible_window(props.cursor / columns, total_rows, visible_rows);

    let favorite_fg = parse_color(&theme.listing.favorite_fg);
    let selected_fg = parse_color(&theme.listing.selected_fg);
    let width = usize::from(cell_width);

    let mut lines: Vec<Line> = Vec::with_capacity((end - start) * usize::from(CELL_HEIGHT));
    for row in start..end {
        let mut icons: Vec<Span> = Vec::with_capacity(columns);
        let mut names: Vec<Span> = Vec::with_capacity(columns);
        for col in 0..columns {
            let index = row * columns + col;
            let Some(entry) = props.view.get(index) else {
                break;
            };
            let style = if index == props.cursor {
                Style::default()
                    .fg(selected_fg)
                    .add_modifier(Modifier::REVERSED)
            } else {
                entry_style(entry, theme)
            };
            let glyph = entry_icon(entry, props.show_icons).trim_end().to_string();
            if props.favorites.contains(entry.path()) {
                let padded = center(&format!("{glyph} {FAVORITE_MARK}"), width);
                icons.push(Span::styled(padded, style.fg(favorite_fg)));
            } else {
                icons.push(Span::styled(center(&glyph, width), style));
            }
            let name = truncate_name(entry.name(), width.saturating_sub(1));
            names.push(Span::styled(center(&name, width), style));
        }
        lines.push(Line::from(icons));
        lines.push(Line::from(names));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn entry_icon(entry: &FileEntry, show_icons: bool) -> &'static str {
    if show_icons {
        icon_for_entry(entry)
    } else if entry.is_dir() {
        "/"
    } else {
        " "
    }
}

fn entry_style(entry: &FileEntry, theme: &Theme) -> Style {
    if entry.is_dir() {
        Style::default()
            .fg(parse_color(&theme.listing.dir_fg))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(parse_color(&theme.listing.file_fg))
    }
}

/// Asset type name for the list view's detail column.
fn kind_label(entry: &FileEntry) -> &'static str {
    if entry.is_dir() {
        AssetKind::Folder.label()
    } else {
        AssetKind::from_extension(&entry.extension_lower()).label()
    }
}

/// How many cells of `cell_width` fit in `width` (at least one).
fn grid_columns(width: u16, cell_width: u16) -> usize {
    usize::from((width / cell_width.max(1)).max(1))
}

/// Computes the visible window `(start, end)` for a list of `total` items
/// so that `selected` is always in view within `max_visible` lines.
pub fn visible_window(selected: usize, total: usize, max_visible: usize) -> (usize, usize) {
    if total <= max_visible {
        return (0, total);
    }
    let half = max_visible / 2;
    let start = if selected <= half {
        0
    } else if selected + half >= total {
        total.saturating_sub(max_visible)
    } else {
        selected - half
    };
    let end = (start + max_visible).min(total);
    (start, end)
}

/// Shortens `name` to `max` characters, ending in `…` when cut.
fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let kept: String = name.chars().take(max - 1).collect();
    format!("{kept}…")
}

/// Pads `text` with spaces on both sides to `width` characters.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}
