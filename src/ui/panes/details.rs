//! Details pane: family-specific fields of the current step

use super::utils::{clamp_scroll, format_indices, pane_block};
use crate::algorithms::format_number;
use crate::algorithms::graph::GraphStep;
use crate::normalize::{NormalizedStep, StepPayload};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn row(label: &str, value: String, value_color: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<11}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}

fn or_dash(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| "-".to_string())
}

fn graph_lines(step: &GraphStep) -> Vec<Line<'static>> {
    let mut lines = vec![
        row(
            "current",
            step.current_node.clone().unwrap_or_else(|| "-".to_string()),
            DEFAULT_THEME.secondary,
        ),
        row(
            "visited",
            step.visited_nodes.join(" "),
            DEFAULT_THEME.success,
        ),
    ];
    if !step.exploring_edges.is_empty() {
        lines.push(row(
            "exploring",
            step.exploring_edges.join(" "),
            DEFAULT_THEME.secondary,
        ));
    }
    if let Some(path) = &step.shortest_path {
        lines.push(row("path", path.join(" → "), DEFAULT_THEME.path));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "node  dist  prev",
        Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::UNDERLINED),
    )));
    for node in &step.nodes {
        let dist_color = if node.distance.is_finite() {
            DEFAULT_THEME.number
        } else {
            DEFAULT_THEME.comment
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<6}", node.id),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Span::styled(
                format!("{:<6}", format_number(node.distance)),
                Style::default().fg(dist_color),
            ),
            Span::styled(
                node.previous.clone().unwrap_or_else(|| "-".to_string()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));
    }
    lines
}

/// Lines describing the family-specific state of `step`
pub(crate) fn detail_lines(step: &NormalizedStep) -> Vec<Line<'static>> {
    match &step.payload {
        StepPayload::Sort(sort) => vec![
            row("comparing", format_indices(&sort.comparing), DEFAULT_THEME.comparing),
            row("swapping", format_indices(&sort.swapping), DEFAULT_THEME.swapping),
            row("sorted", format_indices(&sort.sorted), DEFAULT_THEME.sorted),
        ],
        StepPayload::Search(search) => vec![
            row("target", format_number(search.target), DEFAULT_THEME.number),
            row(
                "checking",
                format_indices(&search.searching),
                DEFAULT_THEME.highlighted,
            ),
            row(
                "eliminated",
                format_indices(&search.eliminated),
                DEFAULT_THEME.eliminated,
            ),
            row(
                "found",
                search
                    .found
                    .map(|i| format!("index {}", i))
                    .unwrap_or_else(|| "-".to_string()),
                DEFAULT_THEME.success,
            ),
        ],
        StepPayload::Graph(graph) => graph_lines(graph),
        StepPayload::Stack(stack) => vec![
            row("operation", stack.operation.to_string(), DEFAULT_THEME.keyword),
            row("value", or_dash(stack.value), DEFAULT_THEME.number),
            row("size", stack.stack.len().to_string(), DEFAULT_THEME.fg),
        ],
        StepPayload::Queue(queue) => vec![
            row("operation", queue.operation.to_string(), DEFAULT_THEME.keyword),
            row("value", or_dash(queue.value), DEFAULT_THEME.number),
            row("size", queue.queue.len().to_string(), DEFAULT_THEME.fg),
        ],
    }
}

/// Render the details pane
pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&NormalizedStep>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Details ", is_focused);

    let Some(step) = step else {
        let paragraph = Paragraph::new("(no step)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let all_items: Vec<ListItem> = detail_lines(step).into_iter().map(ListItem::new).collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::structures::{run_stack, StructureOp};
    use crate::normalize::{normalize, FamilyTrace};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_stack_detail_lines() {
        let trace = normalize(&FamilyTrace::Stack(run_stack(&[
            StructureOp::Insert(4.0),
            StructureOp::Remove,
            StructureOp::Remove,
        ])));
        let pushed: Vec<String> = detail_lines(&trace[1]).iter().map(text).collect();
        assert!(pushed[0].ends_with("push"));
        assert!(pushed[1].ends_with('4'));

        let empty_pop: Vec<String> = detail_lines(&trace[3]).iter().map(text).collect();
        assert!(empty_pop[1].ends_with('-'));
        assert!(empty_pop[2].ends_with('0'));
    }
}
