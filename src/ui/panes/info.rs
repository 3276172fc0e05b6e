//! Algorithm info pane: catalog metadata for the running algorithm

use super::utils::pane_block;
use crate::catalog::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

fn field<'a>(label: &'a str, value: &'a str, value_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<8}", label), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(value, value_style),
    ])
}

/// Render the info pane
pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    info: &AlgorithmInfo,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Algorithm ", is_focused);
    let keyword = Style::default().fg(DEFAULT_THEME.keyword);

    let mut lines = vec![
        Line::from(Span::styled(
            info.name(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        field("Type", info.category.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
        field(
            "Level",
            info.difficulty.as_str(),
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
        field("Time", info.time_complexity, keyword),
        field("Space", info.space_complexity, keyword),
        Line::default(),
        Line::from(Span::styled(
            info.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
    ];
    lines.extend(info.implementation.lines().map(|l| {
        Line::from(Span::styled(l, Style::default().fg(DEFAULT_THEME.comment)))
    }));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    // Wrapped lines can exceed the raw count, so only bound by it
    *scroll_offset = (*scroll_offset).min(lines.len().saturating_sub(visible_height));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
