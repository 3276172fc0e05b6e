// Integration tests for trace generation across every algorithm family

use algotrace::algorithms::graph::{breadth_first_search, dijkstra, GraphEdge, GraphNode};
use algotrace::algorithms::searching::{binary_search, linear_search};
use algotrace::algorithms::sorting::{bubble_sort, quick_sort};
use algotrace::algorithms::structures::{run_queue, run_stack, StructureOp};
use algotrace::algorithms::{run, AlgorithmInput, AlgorithmKind};
use algotrace::input::{demo_graph, parse_operations, DEFAULT_ARRAY, DEFAULT_SCRIPT};
use algotrace::normalize::{normalize, ElementId, StepPayload};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn line_graph() -> (Vec<GraphNode>, Vec<GraphEdge>) {
    let nodes = vec![
        GraphNode::new("A", 0.0, 0.0),
        GraphNode::new("B", 1.0, 0.0),
        GraphNode::new("C", 2.0, 0.0),
        GraphNode::new("D", 1.0, 1.0),
    ];
    let edges = vec![
        GraphEdge::new("A", "B", 1.0),
        GraphEdge::new("B", "C", 2.0),
        GraphEdge::new("B", "D", 5.0),
    ];
    (nodes, edges)
}

#[test]
fn test_bubble_sort_scenario() {
    let trace = bubble_sort(&[5.0, 2.0, 8.0, 1.0]);

    let first = trace.first().unwrap();
    assert_eq!(first.array, vec![5.0, 2.0, 8.0, 1.0]);
    assert_eq!(first.description, "Starting Bubble Sort");

    assert!(trace
        .iter()
        .any(|s| s.swapping == vec![0, 1] && s.array == vec![2.0, 5.0, 8.0, 1.0]));

    let last = trace.last().unwrap();
    assert_eq!(last.array, vec![1.0, 2.0, 5.0, 8.0]);
    assert_eq!(last.sorted, vec![0, 1, 2, 3]);
}

#[test]
fn test_binary_search_scenario() {
    let trace = binary_search(&[5.0, 2.0, 8.0, 1.0], 8.0);
    assert!(trace.iter().all(|s| s.array == vec![1.0, 2.0, 5.0, 8.0]));
    assert_eq!(trace.last().unwrap().found, Some(3));
}

#[test]
fn test_linear_search_miss_scenario() {
    let trace = linear_search(&[5.0, 2.0, 8.0, 1.0], 99.0);
    assert_eq!(trace.last().unwrap().eliminated, vec![0, 1, 2, 3]);
    assert!(trace.iter().all(|s| s.found.is_none()));
}

#[test]
fn test_dijkstra_scenario() {
    let (nodes, edges) = line_graph();
    let trace = dijkstra(&nodes, &edges, "A", None);
    let last = trace.last().unwrap();
    let distances: Vec<f64> = ["A", "B", "C", "D"]
        .iter()
        .map(|id| last.node(id).unwrap().distance)
        .collect();
    assert_eq!(distances, vec![0.0, 1.0, 3.0, 6.0]);
}

#[test]
fn test_dijkstra_path_to_target() {
    let (nodes, edges) = line_graph();
    let trace = dijkstra(&nodes, &edges, "A", Some("D"));
    let last = trace.last().unwrap();
    assert_eq!(
        last.shortest_path.as_deref(),
        Some(&["A".to_string(), "B".to_string(), "D".to_string()][..])
    );
    assert_eq!(last.description, "Shortest path to D: A → B → D");

    // The caller's nodes are untouched
    assert!(nodes.iter().all(|n| n.distance.is_infinite()));
}

#[test]
fn test_bfs_on_demo_graph_visits_everything() {
    let graph = demo_graph();
    let trace = breadth_first_search(&graph.nodes, &graph.edges, "A");
    let last = trace.last().unwrap();
    assert_eq!(last.visited_nodes, vec!["A", "B", "C", "D", "E", "F"]);
    assert_eq!(last.description, "BFS traversal completed");
}

#[test]
fn test_default_inputs_produce_traces() {
    let graph = demo_graph();
    let input = AlgorithmInput {
        array: DEFAULT_ARRAY.to_vec(),
        target: Some(7.0),
        nodes: graph.nodes,
        edges: graph.edges,
        start: graph.start,
        destination: Some("F".to_string()),
        operations: parse_operations(DEFAULT_SCRIPT).unwrap(),
    };
    for kind in AlgorithmKind::ALL {
        let normalized = normalize(&run(kind, &input));
        assert!(!normalized.is_empty(), "{} produced no steps", kind);
        for (i, step) in normalized.iter().enumerate() {
            assert_eq!(step.sequence_number, i);
        }
    }
}

#[test]
fn test_stack_script_on_empty_structure() {
    let ops = parse_operations(DEFAULT_SCRIPT).unwrap();
    let trace = run_stack(&ops);
    // init + 8 operations
    assert_eq!(trace.len(), 9);
    assert_eq!(trace.last().unwrap().description, "Stack is empty, cannot pop");
    assert!(trace.last().unwrap().stack.is_empty());
}

#[test]
fn test_queue_is_fifo() {
    let trace = run_queue(&[
        StructureOp::Insert(1.0),
        StructureOp::Insert(2.0),
        StructureOp::Remove,
        StructureOp::Inspect,
    ]);
    let steps = trace.steps();
    assert_eq!(steps[3].value, Some(1.0));
    assert_eq!(steps[3].queue, vec![2.0]);
    assert_eq!(steps[4].value, Some(2.0));
}

#[test]
fn test_normalized_graph_highlights_nodes_and_edges() {
    let (nodes, edges) = line_graph();
    let input = AlgorithmInput {
        nodes,
        edges,
        start: Some("A".to_string()),
        ..Default::default()
    };
    let normalized = normalize(&run(AlgorithmKind::Dijkstra, &input));
    let exploring = normalized
        .iter()
        .find(|s| s.description == "Exploring neighbors of B")
        .unwrap();
    assert!(exploring.highlighted.contains(&ElementId::Node("B".to_string())));
    assert!(exploring.highlighted.contains(&ElementId::Edge("B-D".to_string())));
    assert!(matches!(exploring.payload, StepPayload::Graph(_)));
}

/// Shortest distance from `start` to every node by trying every simple path
fn brute_force_distances(n: usize, edges: &[(usize, usize, f64)], start: usize) -> Vec<f64> {
    fn walk(
        node: usize,
        cost: f64,
        edges: &[(usize, usize, f64)],
        on_path: &mut Vec<bool>,
        best: &mut Vec<f64>,
    ) {
        if cost < best[node] {
            best[node] = cost;
        }
        for &(from, to, weight) in edges {
            if from == node && !on_path[to] {
                on_path[to] = true;
                walk(to, cost + weight, edges, on_path, best);
                on_path[to] = false;
            }
        }
    }

    let mut best = vec![f64::INFINITY; n];
    let mut on_path = vec![false; n];
    on_path[start] = true;
    walk(start, 0.0, edges, &mut on_path, &mut best);
    best
}

fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (2usize..6).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0u32..10).prop_map(|(a, b, w)| (a, b, w as f64));
        (Just(n), prop::collection::vec(edge, 0..12))
    })
}

fn small_numbers() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-50i32..50).prop_map(f64::from), 0..24)
}

proptest! {
    #[test]
    fn prop_sorts_end_sorted(values in small_numbers()) {
        let mut expected = values.clone();
        expected.sort_by(|a, b| a.total_cmp(b));
        let all: Vec<usize> = (0..values.len()).collect();

        for trace in [bubble_sort(&values), quick_sort(&values)] {
            let last = trace.last().unwrap();
            prop_assert_eq!(&last.array, &expected);
            prop_assert_eq!(&last.sorted, &all);
        }
    }

    #[test]
    fn prop_bubble_sorted_positions_never_move(values in small_numbers()) {
        let trace = bubble_sort(&values);
        let steps = trace.steps();
        for (i, step) in steps.iter().enumerate() {
            for &k in &step.sorted {
                for later in &steps[i..] {
                    prop_assert_eq!(later.array[k], step.array[k]);
                    prop_assert!(later.sorted.contains(&k));
                }
            }
        }
    }

    #[test]
    fn prop_sorts_leave_input_alone(values in small_numbers()) {
        let copy = values.clone();
        let _ = bubble_sort(&values);
        let _ = quick_sort(&values);
        prop_assert_eq!(values, copy);
    }

    #[test]
    fn prop_search_trace_lengths(values in small_numbers(), target in -50i32..50) {
        let target = f64::from(target);
        let n = values.len();

        let linear = linear_search(&values, target);
        prop_assert!(linear.len() <= 2 * n + 2);

        let rounds = if n == 0 { 0 } else { (usize::BITS - n.leading_zeros()) as usize };
        let binary = binary_search(&values, target);
        prop_assert!(binary.len() <= 2 * rounds + 2);
    }

    #[test]
    fn prop_found_only_on_last_step(values in small_numbers(), target in -50i32..50) {
        let target = f64::from(target);
        let present = values.contains(&target);

        for trace in [linear_search(&values, target), binary_search(&values, target)] {
            let found: Vec<usize> = trace
                .iter()
                .enumerate()
                .filter(|(_, s)| s.found.is_some())
                .map(|(i, _)| i)
                .collect();
            if present {
                prop_assert_eq!(found, vec![trace.len() - 1]);
            } else {
                prop_assert!(found.is_empty());
            }
        }
    }

    #[test]
    fn prop_binary_search_index_is_into_sorted_copy(values in small_numbers(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!values.is_empty());
        let target = values[pick.index(values.len())];
        let trace = binary_search(&values, target);
        let last = trace.last().unwrap();
        let index = last.found.unwrap();
        prop_assert_eq!(last.array[index], target);

        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        prop_assert_eq!(&last.array, &sorted);
    }

    #[test]
    fn prop_dijkstra_matches_brute_force((n, edges) in arb_graph()) {
        let ids: Vec<String> = (0..n).map(|i| format!("N{}", i)).collect();
        let nodes: Vec<GraphNode> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| GraphNode::new(id.as_str(), i as f64, 0.0))
            .collect();
        let graph_edges: Vec<GraphEdge> = edges
            .iter()
            .map(|&(a, b, w)| GraphEdge::new(ids[a].as_str(), ids[b].as_str(), w))
            .collect();

        let trace = dijkstra(&nodes, &graph_edges, "N0", None);
        let last = trace.last().unwrap();
        let expected = brute_force_distances(n, &edges, 0);
        for (i, id) in ids.iter().enumerate() {
            prop_assert_eq!(last.node(id).unwrap().distance, expected[i]);
        }
    }

    #[test]
    fn prop_normalized_sort_sets_match(values in small_numbers()) {
        let traced = quick_sort(&values);
        let normalized = normalize(&run(
            AlgorithmKind::QuickSort,
            &AlgorithmInput { array: values, ..Default::default() },
        ));
        prop_assert_eq!(normalized.len(), traced.len());
        for (step, raw) in normalized.iter().zip(traced.iter()) {
            let swapping: BTreeSet<ElementId> =
                raw.swapping.iter().map(|&i| ElementId::Index(i)).collect();
            prop_assert_eq!(&step.swapping, &swapping);
        }
    }
}
