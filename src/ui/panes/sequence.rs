//! Sequence pane: one horizontal bar per element
//!
//! Used for sorting, searching, stack, and queue steps. Bar colour shows
//! the element's role in the current step (comparing, swapping, sorted,
//! under test, eliminated, found). Stacks are drawn top first.

use super::utils::{clamp_scroll, pane_block};
use crate::algorithms::format_number;
use crate::normalize::{ElementId, NormalizedStep, StepPayload};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellRole {
    Default,
    Comparing,
    Swapping,
    Sorted,
    Highlighted,
    Eliminated,
    Found,
}

impl CellRole {
    fn color(self) -> Color {
        match self {
            CellRole::Default => DEFAULT_THEME.fg,
            CellRole::Comparing => DEFAULT_THEME.comparing,
            CellRole::Swapping => DEFAULT_THEME.swapping,
            CellRole::Sorted => DEFAULT_THEME.sorted,
            CellRole::Highlighted => DEFAULT_THEME.highlighted,
            CellRole::Eliminated => DEFAULT_THEME.eliminated,
            CellRole::Found => DEFAULT_THEME.success,
        }
    }
}

/// Role of position `index` in `step`
pub(crate) fn cell_role(step: &NormalizedStep, index: usize) -> CellRole {
    let id = ElementId::Index(index);
    if let StepPayload::Search(search) = &step.payload {
        if search.found == Some(index) {
            return CellRole::Found;
        }
        if step.highlighted.contains(&id) {
            return CellRole::Highlighted;
        }
        if search.eliminated.contains(&index) {
            return CellRole::Eliminated;
        }
        return CellRole::Default;
    }

    if step.sorted.contains(&id) {
        CellRole::Sorted
    } else if step.swapping.contains(&id) {
        CellRole::Swapping
    } else if step.comparing.contains(&id) {
        CellRole::Comparing
    } else if step.highlighted.contains(&id) {
        CellRole::Highlighted
    } else {
        CellRole::Default
    }
}

/// Number of bar cells for `value` given the largest magnitude and the room available
fn bar_length(value: f64, max_abs: f64, room: usize) -> usize {
    if !value.is_finite() || max_abs <= 0.0 || room == 0 {
        return 0;
    }
    let len = (value.abs() / max_abs * room as f64).round() as usize;
    if value != 0.0 {
        len.clamp(1, room)
    } else {
        0
    }
}

/// Label for the ends of a stack or queue
fn end_marker(payload: &StepPayload, index: usize, len: usize) -> &'static str {
    match payload {
        StepPayload::Stack(_) if index + 1 == len => " ← top",
        StepPayload::Queue(_) if index == 0 => " ← front",
        StepPayload::Queue(_) if index + 1 == len => " ← back",
        _ => "",
    }
}

/// Render the sequence pane
pub fn render_sequence_pane(
    frame: &mut Frame,
    area: Rect,
    step: &NormalizedStep,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match &step.payload {
        StepPayload::Stack(_) => " Stack ",
        StepPayload::Queue(_) => " Queue ",
        _ => " Sequence ",
    };
    let block = pane_block(title, is_focused);

    let values = step.payload.sequence().unwrap_or(&[]);
    if values.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let labels: Vec<String> = values.iter().map(|v| format_number(*v)).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let index_width = values.len().to_string().len();
    let content_width = area.width.saturating_sub(2) as usize;
    // index, two separators, label, and room for the longest marker
    let room = content_width.saturating_sub(index_width + label_width + 12);
    let max_abs = values
        .iter()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));

    let mut order: Vec<usize> = (0..values.len()).collect();
    if matches!(step.payload, StepPayload::Stack(_)) {
        order.reverse();
    }

    let all_items: Vec<ListItem> = order
        .into_iter()
        .map(|i| {
            let role = cell_role(step, i);
            let style = Style::default().fg(role.color());
            let bar_char = if values[i] < 0.0 { "░" } else { "█" };
            let bar = bar_char.repeat(bar_length(values[i], max_abs, room));
            let value_style = if role == CellRole::Default {
                Style::default().fg(DEFAULT_THEME.number)
            } else {
                style.add_modifier(Modifier::BOLD)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", i, width = index_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(bar, style),
                Span::raw(" "),
                Span::styled(labels[i].clone(), value_style),
                Span::styled(
                    end_marker(&step.payload, i, values.len()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]))
        })
        .collect();

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
