// src/story/grouping.rs

use std::collections::HashMap;
use std::sync::Arc;

use petgraph::graphmap::DiGraphMap;

use crate::story::step::StoryStep;
use crate::story::topo::{TopoOrder, topological_sort};
use crate::types::Checkpoint;

/// Bucket step indices by their start checkpoint.
///
/// Indices within a bucket keep the order of `steps`.
pub fn group_by_start_checkpoint<E>(steps: &[Arc<StoryStep<E>>]) -> HashMap<&Checkpoint, Vec<usize>> {
    let mut checkpoints: HashMap<&Checkpoint, Vec<usize>> = HashMap::new();
    for (idx, step) in steps.iter().enumerate() {
        checkpoints
            .entry(step.start_checkpoint())
            .or_default()
            .push(idx);
    }
    checkpoints
}

/// Build the step graph over indices into `steps`.
///
/// Edge direction: `i -> j` when step `j` starts at the checkpoint step `i`
/// ends on. Steps that end the story, or end on one of
/// `terminal_checkpoints`, have no successors. A step that starts where it
/// ends gets a self-loop.
pub fn step_adjacency<E>(
    steps: &[Arc<StoryStep<E>>],
    terminal_checkpoints: &[Checkpoint],
) -> DiGraphMap<usize, ()> {
    let checkpoints = group_by_start_checkpoint(steps);
    let mut graph: DiGraphMap<usize, ()> = DiGraphMap::with_capacity(steps.len(), steps.len());

    for idx in 0..steps.len() {
        graph.add_node(idx);
    }

    for (idx, step) in steps.iter().enumerate() {
        let Some(end) = step.end_checkpoint() else {
            continue;
        };
        if terminal_checkpoints.contains(end) {
            continue;
        }
        if let Some(successors) = checkpoints.get(end) {
            for &next in successors {
                graph.add_edge(idx, next, ());
            }
        }
    }

    graph
}

/// Topologically sort `steps`, returning arena indices.
pub fn order_steps<E>(
    steps: &[Arc<StoryStep<E>>],
    terminal_checkpoints: &[Checkpoint],
) -> TopoOrder<usize> {
    topological_sort(&step_adjacency(steps, terminal_checkpoints))
}
