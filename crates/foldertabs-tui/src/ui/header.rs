//! Folder header: the "Content of" line with a Back marker, and the search
//! and type-filter line beneath it.

use std::path::Path;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use foldertabs_core::config::settings::ViewMode;
use foldertabs_core::config::theme::{parse_color, Theme};
use foldertabs_core::nav::filter::FileTypeFilter;

/// Data needed to render the header.
pub struct HeaderProps<'a> {
    pub current_path: Option<&'a Path>,
    pub can_go_back: bool,
    pub query: &'a str,
    pub searching: bool,
    pub filter: FileTypeFilter,
    pub view_mode: ViewMode,
}

/// Renders the two header lines into `area`.
pub fn render_header(f: &mut Frame, area: Rect, props: &HeaderProps<'_>, theme: &Theme) {
    let header_fg = parse_color(&theme.listing.header_fg);
    let hint_fg = parse_color(&theme.listing.hint_fg);
    let filter_fg = parse_color(&theme.statusbar.filter_fg);

    let mut path_spans = Vec::new();
    if props.can_go_back {
        path_spans.push(Span::styled(
            "[< Back] ",
            Style::default().fg(header_fg).add_modifier(Modifier::BOLD),
        ));
    }
    path_spans.push(Span::styled(
        content_label(props.current_path),
        Style::default().fg(header_fg),
    ));

    let cursor = if props.searching { "_" } else { "" };
    let search_style = if props.searching {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(hint_fg)
    };
    let search_line = Line::from(vec![
        Span::styled(format!("Search: {}{cursor}", props.query), search_style),
        Span::raw("   "),
        Span::styled(
            format!("Type: {}", props.filter.label()),
            Style::default().fg(filter_fg),
        ),
        Span::raw("   "),
        Span::styled(props.view_mode.label().to_string(), Style::default().fg(hint_fg)),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(path_spans), search_line]);
    f.render_widget(paragraph, area);
}

fn content_label(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("Content of: {}", p.display()),
        None => "Content of: (no folder selected)".to_string(),
    }
}
