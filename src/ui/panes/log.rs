//! Step log pane rendering

use super::utils::{clamp_scroll, follow_selection, pane_block};
use crate::normalize::NormalizedStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render every step description, marking the one on screen.
///
/// When `follow` is set the window scrolls to keep the current step visible.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[NormalizedStep],
    current: usize,
    is_focused: bool,
    follow: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Steps ", is_focused);

    if steps.is_empty() {
        let paragraph = Paragraph::new("(nothing to visualize)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let number_width = steps.len().to_string().len();

    let all_items: Vec<ListItem> = steps
        .iter()
        .map(|step| {
            let is_current = step.sequence_number == current;
            let (marker, text_style) = if is_current {
                (
                    "▶ ",
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else if step.sequence_number < current {
                ("  ", Style::default().fg(DEFAULT_THEME.comment))
            } else {
                ("  ", Style::default().fg(DEFAULT_THEME.fg))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("{:>width$} ", step.sequence_number + 1, width = number_width),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
                Span::styled(step.description.clone(), text_style),
            ]))
        })
        .collect();

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if follow {
        follow_selection(scroll_offset, current, visible_height);
    }
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
