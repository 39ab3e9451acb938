//! Preview pane for the last selected asset.
//!
//! Shows the asset's name, type, size and path, followed by its thumbnail:
//! image format and dimensions for textures, the first lines of text-based
//! assets, or a notice when nothing can be sampled.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use foldertabs_core::config::theme::{parse_color, Theme};
use foldertabs_core::fs::asset::AssetKind;
use foldertabs_core::fs::preview::{AssetPreview, PreviewState, Thumbnail};

use crate::ui::statusbar::format_size;

/// Renders the preview pane for `state`.
pub fn render_preview(f: &mut Frame, area: Rect, state: &PreviewState, theme: &Theme) {
    let border_fg = parse_color(&theme.preview.border_fg);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Preview")
        .border_style(Style::default().fg(border_fg));

    // Pad every line to the inner width and fill the remaining height so no
    // stale cells from a longer previous preview survive.
    let inner = block.inner(area);
    let inner_width = usize::from(inner.width);
    let inner_height = usize::from(inner.height);

    let mut content = preview_lines(state, theme);
    for line in &mut content {
        let current_width = line.width();
        if current_width < inner_width {
            line.spans.push(Span::raw(" ".repeat(inner_width - current_width)));
        }
    }
    while content.len() < inner_height {
        content.push(Line::from(" ".repeat(inner_width)));
    }

    f.render_widget(Paragraph::new(content).block(block), area);
}

/// Builds the preview pane's lines.
pub fn preview_lines(state: &PreviewState, theme: &Theme) -> Vec<Line<'static>> {
    let hint_style = Style::default()
        .fg(parse_color(&theme.preview.line_number_fg))
        .add_modifier(Modifier::ITALIC);

    match state {
        PreviewState::NothingSelected => vec![Line::from(Span::styled(
            "Select an object to see a preview",
            hint_style,
        ))],
        PreviewState::Invalid(path) => vec![
            Line::from(Span::styled(
                "No valid object selected",
                Style::default().fg(parse_color(&theme.preview.error_fg)),
            )),
            Line::from(Span::styled(format!("{}", path.display()), hint_style)),
        ],
        PreviewState::Ready(preview) => ready_lines(preview, theme),
    }
}

fn ready_lines(preview: &AssetPreview, theme: &Theme) -> Vec<Line<'static>> {
    let title_fg = parse_color(&theme.preview.title_fg);
    let dim = Style::default().fg(parse_color(&theme.preview.line_number_fg));
    let handle = &preview.handle;

    let mut lines = vec![
        Line::from(Span::styled(
            handle.name.clone(),
            Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        meta_line("Type", handle.kind.label().to_string(), dim),
    ];
    if handle.kind != AssetKind::Folder {
        lines.push(meta_line("Size", format_size(handle.size), dim));
    }
    lines.push(meta_line("Path", handle.path.display().to_string(), dim));
    lines.push(Line::from(""));

    match &preview.thumbnail {
        Thumbnail::Image(info) => {
            lines.push(meta_line("Format", info.format.clone(), dim));
            lines.push(meta_line(
                "Dimensions",
                format!("{} x {}", info.width, info.height),
                dim,
            ));
        }
        Thumbnail::Text(text) => {
            let width = text.lines.len().max(1).to_string().len();
            for (i, line) in text.lines.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:>width$} ", i + 1), dim),
                    Span::raw(line.clone()),
                ]));
            }
            if text.is_truncated {
                lines.push(Line::from(Span::styled(
                    "… more lines not shown",
                    Style::default().fg(parse_color(&theme.preview.truncation_fg)),
                )));
            }
        }
        Thumbnail::Unavailable => {
            lines.push(Line::from(Span::styled(
                "No preview available",
                dim.add_modifier(Modifier::ITALIC),
            )));
        }
    }

    lines
}

fn meta_line(label: &str, value: String, label_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::raw(value),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldertabs_core::fs::asset::AssetHandle;
    use foldertabs_core::fs::preview::{ImageInfo, TextPreview};
    use std::path::PathBuf;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn ready(kind: AssetKind, thumbnail: Thumbnail) -> PreviewState {
        PreviewState::Ready(AssetPreview {
            handle: AssetHandle {
                path: PathBuf::from("/proj/Assets/grass.png"),
                name: "grass.png".to_string(),
                kind,
                size: 2048,
                modified: None,
            },
            thumbnail,
        })
    }

    #[test]
    fn nothing_selected_hint() {
        let lines = text_of(&preview_lines(&PreviewState::NothingSelected, &Theme::default()));
        assert_eq!(lines, vec!["Select an object to see a preview".to_string()]);
    }

    #[test]
    fn invalid_selection_message() {
        let state = PreviewState::Invalid(PathBuf::from("/gone/Hero.prefab"));
        let lines = text_of(&preview_lines(&state, &Theme::default()));
        assert_eq!(lines[0], "No valid object selected");
        assert_eq!(lines[1], "/gone/Hero.prefab");
    }

    #[test]
    fn image_shows_metadata() {
        let state = ready(
            AssetKind::Texture,
            Thumbnail::Image(ImageInfo {
                width: 64,
                height: 32,
                format: "Png".to_string(),
            }),
        );
        let lines = text_of(&preview_lines(&state, &Theme::default()));
        assert_eq!(lines[0], "grass.png");
        assert!(lines.contains(&"Type: Texture".to_string()));
        assert!(lines.contains(&"Size: 2.0 KB".to_string()));
        assert!(lines.contains(&"Format: Png".to_string()));
        assert!(lines.contains(&"Dimensions: 64 x 32".to_string()));
    }

    #[test]
    fn text_lines_numbered_with_truncation_notice() {
        let state = ready(
            AssetKind::Script,
            Thumbnail::Text(TextPreview {
                lines: vec!["using UnityEngine;".to_string(), String::new()],
                is_truncated: true,
            }),
        );
        let lines = text_of(&preview_lines(&state, &Theme::default()));
        assert!(lines.contains(&"1 using UnityEngine;".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("… more lines not shown"));
    }

    #[test]
    fn unavailable_thumbnail_notice() {
        let state = ready(AssetKind::Model, Thumbnail::Unavailable);
        let lines = text_of(&preview_lines(&state, &Theme::default()));
        assert_eq!(lines.last().map(String::as_str), Some("No preview available"));
    }

    #[test]
    fn folder_omits_size() {
        let state = ready(AssetKind::Folder, Thumbnail::Unavailable);
        let lines = text_of(&preview_lines(&state, &Theme::default()));
        assert!(lines.contains(&"Type: Folder".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Size:")));
    }
}
