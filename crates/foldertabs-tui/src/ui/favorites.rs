//! Favorites pane.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use foldertabs_core::config::theme::{parse_color, Theme};
use foldertabs_core::nav::favorites::Favorites;

use crate::app::display_name;

/// Renders the favorites list. `selected` is set while the pane has focus.
pub fn render_favorites(
    f: &mut Frame,
    area: Rect,
    favorites: &Favorites,
    selected: Option<usize>,
    theme: &Theme,
) {
    let border_fg = parse_color(&theme.favorites.border_fg);
    let entry_fg = parse_color(&theme.favorites.entry_fg);
    let missing_fg = parse_color(&theme.favorites.missing_fg);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Favorites ({})", favorites.len()))
        .border_style(Style::default().fg(border_fg));
    if selected.is_some() {
        block = block.title_bottom("Enter show · o open · r reveal · d remove");
    }

    let items: Vec<ListItem> = if favorites.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "Press 'f' on an asset to favorite it",
            Style::default().fg(missing_fg).add_modifier(Modifier::ITALIC),
        )))]
    } else {
        favorites
            .iter()
            .map(|path| {
                let style = if path.exists() {
                    Style::default().fg(entry_fg)
                } else {
                    Style::default()
                        .fg(missing_fg)
                        .add_modifier(Modifier::CROSSED_OUT)
                };
                ListItem::new(Line::from(vec![
                    Span::styled("★ ", Style::default().fg(border_fg)),
                    Span::styled(display_name(path), style),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !favorites.is_empty() {
        state.select(selected);
    }
    f.render_stateful_widget(list, area, &mut state);
}
