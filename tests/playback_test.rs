// Integration tests for the playback cursor over normalized traces

use algotrace::algorithms::{run, AlgorithmInput, AlgorithmKind};
use algotrace::errors::AlgoError;
use algotrace::input::demo_graph;
use algotrace::normalize::normalize;
use algotrace::playback::Playback;
use proptest::prelude::*;

fn dijkstra_playback() -> Playback {
    let graph = demo_graph();
    let input = AlgorithmInput {
        nodes: graph.nodes,
        edges: graph.edges,
        start: graph.start,
        destination: Some("F".to_string()),
        ..Default::default()
    };
    Playback::new(normalize(&run(AlgorithmKind::Dijkstra, &input)))
}

#[test]
fn test_replay_reads_identical_steps() {
    let mut playback = dijkstra_playback();
    let snapshot = playback.trace().clone();

    let mut forward = Vec::new();
    while playback.step_forward().is_ok() {
        forward.push(playback.current_step().unwrap().clone());
    }
    playback.rewind_to_start();
    let mut again = Vec::new();
    while playback.step_forward().is_ok() {
        again.push(playback.current_step().unwrap().clone());
    }

    assert_eq!(forward, again);
    assert_eq!(playback.trace(), &snapshot);
}

#[test]
fn test_cursor_bounds() {
    let mut playback = dijkstra_playback();
    let total = playback.total_steps();
    assert!(total > 0);

    assert!(matches!(playback.step_backward(), Err(AlgoError::AtStart)));

    playback.jump_to_end();
    assert_eq!(playback.position(), total);
    assert!(playback.is_finished());
    assert!(matches!(playback.step_forward(), Err(AlgoError::AtEnd)));

    let last = playback.current_step().unwrap();
    assert_eq!(last.sequence_number, total - 1);
    assert!(last.description.starts_with("Shortest path to F"));

    playback.step_backward().unwrap();
    assert_eq!(playback.displayed_index(), total - 1);
}

#[test]
fn test_missing_target_plays_nothing() {
    let input = AlgorithmInput {
        array: vec![1.0, 2.0, 3.0],
        ..Default::default()
    };
    let mut playback = Playback::new(normalize(&run(AlgorithmKind::BinarySearch, &input)));
    assert_eq!(playback.total_steps(), 0);
    assert!(playback.current_step().is_none());
    assert!(matches!(playback.step_forward(), Err(AlgoError::EmptyTrace)));
    assert!(playback.go_to(5).is_none());
    assert_eq!(playback.position(), 0);
}

proptest! {
    #[test]
    fn prop_go_to_stays_in_bounds(index in 0usize..200) {
        let mut playback = dijkstra_playback();
        let total = playback.total_steps();
        let step = playback.go_to(index).cloned();

        prop_assert!(playback.position() <= total);
        prop_assert_eq!(playback.position(), index.min(total));
        let expected = index.min(total - 1);
        prop_assert_eq!(step.map(|s| s.sequence_number), Some(expected));
    }
}
