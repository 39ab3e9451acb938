//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the cursor position, selected asset info, tab position, active
//! type filter, favorites count and an optional status message.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use foldertabs_core::config::theme::{parse_color, Theme};
use foldertabs_core::fs::entry::FileEntry;
use foldertabs_core::nav::filter::FileTypeFilter;

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub entry_count: usize,
    pub cursor: usize,
    pub selected_entry: Option<&'a FileEntry>,
    /// `(selected, total)` with `selected` zero-based.
    pub tab_position: Option<(usize, usize)>,
    pub filter: FileTypeFilter,
    pub favorites_count: usize,
    pub status_message: Option<&'a str>,
}

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let position_fg = parse_color(&theme.statusbar.position_fg);
    let filter_fg = parse_color(&theme.statusbar.filter_fg);
    let message_fg = parse_color(&theme.statusbar.message_fg);

    let status_span = props
        .status_message
        .map(|msg| {
            Span::styled(
                format!("  {msg}"),
                Style::default()
                    .fg(message_fg)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )
        })
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            position_text(props.entry_count, props.cursor),
            Style::default()
                .fg(position_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            entry_info(props.selected_entry),
            Style::default().fg(position_fg).bg(bg),
        ),
        Span::styled(
            tab_text(props.tab_position),
            Style::default().fg(position_fg).bg(bg),
        ),
        Span::styled(
            filter_text(props.filter),
            Style::default()
                .fg(filter_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ★{}", props.favorites_count),
            Style::default().fg(position_fg).bg(bg),
        ),
        status_span,
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}

fn position_text(entry_count: usize, cursor: usize) -> String {
    if entry_count > 0 {
        format!(" {}/{}", cursor + 1, entry_count)
    } else {
        " 0/0".to_owned()
    }
}

fn entry_info(entry: Option<&FileEntry>) -> String {
    entry
        .map(|e| {
            if e.is_dir() {
                format!("  [DIR] {}", e.name())
            } else {
                format!("  {} ({})", e.name(), format_size(e.size()))
            }
        })
        .unwrap_or_default()
}

fn tab_text(position: Option<(usize, usize)>) -> String {
    match position {
        Some((selected, total)) => format!("  Tab {}/{}", selected + 1, total),
        None => "  No tab".to_owned(),
    }
}

fn filter_text(filter: FileTypeFilter) -> String {
    if filter == FileTypeFilter::All {
        String::new()
    } else {
        format!("  [{}]", filter.label())
    }
}

/// Human-readable byte size with binary units.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
