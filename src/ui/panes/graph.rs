//! Graph pane: nodes and edges drawn on a braille canvas
//!
//! Node positions come from the step snapshot. Colours mark the current
//! node, visited nodes, edges being explored, and the reconstructed
//! shortest path when the step carries one.

use super::utils::pane_block;
use crate::algorithms::format_number;
use crate::algorithms::graph::GraphStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Line as CanvasLine},
    widgets::Paragraph,
    Frame,
};

/// Canvas bounds padded so labels at the extremes stay visible
fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() {
        return [-1.0, 1.0];
    }
    let pad = ((max - min) * 0.15).max(0.5);
    [min - pad, max + pad]
}

fn on_path(path: &[String], from: &str, to: &str) -> bool {
    path.windows(2).any(|w| w[0] == from && w[1] == to)
}

fn node_color(step: &GraphStep, id: &str) -> Color {
    let path = step.shortest_path.as_deref().unwrap_or(&[]);
    if step.current_node.as_deref() == Some(id) {
        DEFAULT_THEME.secondary
    } else if path.iter().any(|p| p == id) {
        DEFAULT_THEME.path
    } else if step.visited_nodes.iter().any(|v| v == id) {
        DEFAULT_THEME.success
    } else {
        DEFAULT_THEME.fg
    }
}

fn edge_color(step: &GraphStep, from: &str, to: &str, id: &str) -> Color {
    let path = step.shortest_path.as_deref().unwrap_or(&[]);
    if on_path(path, from, to) {
        DEFAULT_THEME.path
    } else if step.exploring_edges.iter().any(|e| e == id) {
        DEFAULT_THEME.secondary
    } else {
        DEFAULT_THEME.comment
    }
}

/// Render the graph pane
pub fn render_graph_pane(frame: &mut Frame, area: Rect, step: &GraphStep, is_focused: bool) {
    let block = pane_block(" Graph ", is_focused);

    if step.nodes.is_empty() {
        let paragraph = Paragraph::new("(no nodes)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let x_bounds = bounds(step.nodes.iter().map(|n| n.x));
    // Screen rows grow downward; flip y so input coordinates read naturally
    let y_bounds = bounds(step.nodes.iter().map(|n| -n.y));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for edge in &step.edges {
                let (Some(from), Some(to)) = (step.node(&edge.from), step.node(&edge.to)) else {
                    continue;
                };
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: -from.y,
                    x2: to.x,
                    y2: -to.y,
                    color: edge_color(step, &edge.from, &edge.to, &edge.id()),
                });
            }
            ctx.layer();

            for edge in &step.edges {
                let (Some(from), Some(to)) = (step.node(&edge.from), step.node(&edge.to)) else {
                    continue;
                };
                ctx.print(
                    (from.x + to.x) / 2.0,
                    -(from.y + to.y) / 2.0,
                    Span::styled(
                        format_number(edge.weight),
                        Style::default().fg(DEFAULT_THEME.number),
                    ),
                );
            }

            for node in &step.nodes {
                let mut label = vec![Span::styled(
                    format!("({})", node.id),
                    Style::default()
                        .fg(node_color(step, &node.id))
                        .add_modifier(Modifier::BOLD),
                )];
                if node.distance.is_finite() {
                    label.push(Span::styled(
                        format!(" {}", format_number(node.distance)),
                        Style::default().fg(DEFAULT_THEME.comment),
                    ));
                }
                ctx.print(node.x, -node.y, Line::from(label));
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_pad_single_point() {
        assert_eq!(bounds([2.0].into_iter()), [1.5, 2.5]);
        assert_eq!(bounds(std::iter::empty()), [-1.0, 1.0]);
    }

    #[test]
    fn test_on_path() {
        let path = vec!["A".to_string(), "B".to_string(), "D".to_string()];
        assert!(on_path(&path, "A", "B"));
        assert!(on_path(&path, "B", "D"));
        assert!(!on_path(&path, "B", "A"));
    }
}
