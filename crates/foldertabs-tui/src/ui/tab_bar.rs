//! Tab bar widget: one label per folder tab, numbered for the `1`-`9` keys.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use foldertabs_core::config::theme::{parse_color, Theme};
use foldertabs_core::fs::ops::folder_exists;
use foldertabs_core::nav::tabs::FolderTabs;

use crate::app::display_name;

/// Renders the tab strip. Tabs whose folder is gone are drawn in the
/// `missing_fg` color.
pub fn render_tab_bar(f: &mut Frame, area: Rect, tabs: &FolderTabs, theme: &Theme) {
    let active_idx = tabs.selected_index();

    let active_fg = parse_color(&theme.tabs.active_fg);
    let active_bg = parse_color(&theme.tabs.active_bg);
    let inactive_fg = parse_color(&theme.tabs.inactive_fg);
    let missing_fg = parse_color(&theme.tabs.missing_fg);

    if tabs.tab_count() == 0 {
        let hint = Span::styled(
            " No tabs. Press 'a' or drop a folder here ",
            Style::default()
                .fg(inactive_fg)
                .add_modifier(Modifier::ITALIC),
        );
        f.render_widget(Paragraph::new(Line::from(hint)), area);
        return;
    }

    let labels: Vec<String> = tabs
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, path)| format!(" {} ", tab_label(i, path)))
        .collect();
    let widths: Vec<usize> = labels.iter().map(|l| Span::raw(l.as_str()).width()).collect();
    let (start, end) = tab_window(&widths, active_idx.unwrap_or(0), area.width as usize);

    let marker = Style::default().fg(inactive_fg).add_modifier(Modifier::BOLD);
    let mut spans: Vec<Span> = Vec::new();
    if start > 0 {
        spans.push(Span::styled("< ", marker));
    }
    for (i, (path, label)) in tabs.tabs().iter().zip(labels).enumerate().take(end).skip(start) {
        if i > start {
            spans.push(Span::raw(" "));
        }
        let style = if Some(i) == active_idx {
            Style::default()
                .fg(active_fg)
                .bg(active_bg)
                .add_modifier(Modifier::BOLD)
        } else if folder_exists(path) {
            Style::default().fg(inactive_fg)
        } else {
            Style::default()
                .fg(missing_fg)
                .add_modifier(Modifier::CROSSED_OUT)
        };
        spans.push(Span::styled(label, style));
    }
    if end < widths.len() {
        spans.push(Span::styled(" >", marker));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Picks the run of tabs `start..end` to draw in `available` columns.
///
/// The active tab is always included; neighbours are added alternately on
/// the right and left while they fit. When not every tab fits, two columns
/// on each side are kept for the `<` and `>` markers.
fn tab_window(widths: &[usize], active: usize, available: usize) -> (usize, usize) {
    let total = widths.len();
    if total == 0 {
        return (0, 0);
    }
    let full: usize = widths.iter().sum::<usize>() + total - 1;
    if full <= available {
        return (0, total);
    }

    let available = available.saturating_sub(4);
    let active = active.min(total - 1);
    let (mut start, mut end) = (active, active + 1);
    let mut used = widths[active];
    loop {
        let mut grew = false;
        if end < total && used + 1 + widths[end] <= available {
            used += 1 + widths[end];
            end += 1;
            grew = true;
        }
        if start > 0 && used + 1 + widths[start - 1] <= available {
            start -= 1;
            used += 1 + widths[start];
            grew = true;
        }
        if !grew {
            return (start, end);
        }
    }
}

/// `"3:Art"` for the first nine tabs, the bare folder name after that.
fn tab_label(index: usize, path: &std::path::Path) -> String {
    let name = display_name(path);
    if index < 9 {
        format!("{}:{name}", index + 1)
    } else {
        name
    }
}
