// src/story/topo.rs

//! Depth-first topological sort that tolerates cycles.

use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;

use petgraph::graphmap::{DiGraphMap, NodeTrait};
use tracing::trace;

/// Visit state of a node during the traversal. Absent from the map means
/// "not visited yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current traversal path.
    InProgress,
    /// All successors processed.
    Done,
}

/// Result of [`topological_sort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoOrder<N> {
    /// Every node exactly once. For each edge that was not removed, the
    /// source comes before the target.
    pub ordered: VecDeque<N>,
    /// Edges that would have re-entered a node on the current traversal path,
    /// in the order they were discovered.
    pub removed_edges: Vec<(N, N)>,
}

impl<N> TopoOrder<N> {
    pub fn is_acyclic(&self) -> bool {
        self.removed_edges.is_empty()
    }

    pub fn into_parts(self) -> (VecDeque<N>, Vec<(N, N)>) {
        (self.ordered, self.removed_edges)
    }
}

/// Topologically sort `graph`, reporting the back edges that had to be
/// ignored to do so.
///
/// This is an *unstable* sort: roots are taken in node insertion order and
/// successors in edge insertion order, so equivalent graphs built in a
/// different order may sort differently. The same graph always sorts the
/// same way.
///
/// Traversal uses an explicit frame stack, so graph depth is bounded by
/// memory rather than by the call stack.
pub fn topological_sort<N, W>(graph: &DiGraphMap<N, W>) -> TopoOrder<N>
where
    N: NodeTrait + Debug,
{
    let mut marks: HashMap<N, Mark> = HashMap::with_capacity(graph.node_count());
    let mut ordered = VecDeque::with_capacity(graph.node_count());
    let mut removed_edges = Vec::new();

    for root in graph.nodes() {
        if marks.contains_key(&root) {
            continue;
        }

        marks.insert(root, Mark::InProgress);
        let mut stack = vec![(root, graph.neighbors(root))];

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            match frame.1.next() {
                Some(next) => match marks.get(&next) {
                    Some(Mark::InProgress) => {
                        trace!(?node, ?next, "back edge");
                        removed_edges.push((node, next));
                    }
                    Some(Mark::Done) => {}
                    None => {
                        marks.insert(next, Mark::InProgress);
                        stack.push((next, graph.neighbors(next)));
                    }
                },
                None => {
                    stack.pop();
                    ordered.push_front(node);
                    marks.insert(node, Mark::Done);
                }
            }
        }
    }

    TopoOrder {
        ordered,
        removed_edges,
    }
}
