// src/story/graph.rs

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use tracing::debug;

use crate::errors::{Result, StoryGraphError};
use crate::story::grouping::order_steps;
use crate::story::step::StoryStep;
use crate::types::{Checkpoint, StepId};

/// A finite set of story steps arranged by their checkpoints.
///
/// The graph is an owned arena: steps live in a vector, a lookup maps each
/// step id to its slot, and the topological order and the back edges found
/// while computing it are stored as slot indices. Once built it is never
/// mutated; [`with_cycles_removed`](Self::with_cycles_removed) returns a new
/// graph.
#[derive(Debug, Clone)]
pub struct StoryGraph<E> {
    pub(crate) steps: Vec<Arc<StoryStep<E>>>,
    lookup: HashMap<StepId, usize>,
    ordered: Vec<usize>,
    cyclic: Vec<(usize, usize)>,
    /// Checkpoints considered terminal for this graph, beyond the story end.
    /// Steps ending on one of them have no successors.
    pub(crate) story_end_checkpoints: Vec<Checkpoint>,
}

impl<E> StoryGraph<E> {
    /// Build a graph from `steps`, sorting it topologically.
    ///
    /// Fails if two steps share an id.
    pub fn new(steps: Vec<StoryStep<E>>) -> Result<Self> {
        Self::with_story_end_checkpoints(steps, Vec::new())
    }

    /// Build a graph in which steps ending on any of `story_end_checkpoints`
    /// lead nowhere.
    pub fn with_story_end_checkpoints(
        steps: Vec<StoryStep<E>>,
        story_end_checkpoints: Vec<Checkpoint>,
    ) -> Result<Self> {
        Self::from_shared(steps.into_iter().map(Arc::new).collect(), story_end_checkpoints)
    }

    pub(crate) fn from_shared(
        steps: Vec<Arc<StoryStep<E>>>,
        story_end_checkpoints: Vec<Checkpoint>,
    ) -> Result<Self> {
        let mut lookup = HashMap::with_capacity(steps.len());
        for (idx, step) in steps.iter().enumerate() {
            if lookup.insert(step.id().to_string(), idx).is_some() {
                return Err(StoryGraphError::DuplicateStepId(step.id().to_string()));
            }
        }

        let (ordered, cyclic) = order_steps(&steps, &story_end_checkpoints).into_parts();

        debug!(
            steps = steps.len(),
            cyclic_edges = cyclic.len(),
            end_checkpoints = story_end_checkpoints.len(),
            "built story graph"
        );

        Ok(Self {
            steps,
            lookup,
            ordered: ordered.into(),
            cyclic,
            story_end_checkpoints,
        })
    }

    /// Look a step up by its id.
    pub fn get(&self, step_id: &str) -> Option<&StoryStep<E>> {
        self.lookup.get(step_id).map(|&idx| self.steps[idx].as_ref())
    }

    /// Steps in the order they were given.
    pub fn story_steps(&self) -> impl Iterator<Item = &StoryStep<E>> {
        self.steps.iter().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn story_end_checkpoints(&self) -> &[Checkpoint] {
        &self.story_end_checkpoints
    }

    pub fn is_story_end_checkpoint(&self, label: &str) -> bool {
        self.story_end_checkpoints.iter().any(|c| c.name() == label)
    }

    /// Step ids in topological order.
    pub fn ordered_ids(&self) -> Vec<&str> {
        self.ordered.iter().map(|&idx| self.steps[idx].id()).collect()
    }

    /// Steps in topological order.
    pub fn ordered_steps(&self) -> Vec<&StoryStep<E>> {
        self.ordered.iter().map(|&idx| self.steps[idx].as_ref()).collect()
    }

    pub(crate) fn ordered_shared(&self) -> impl Iterator<Item = &Arc<StoryStep<E>>> {
        self.ordered.iter().map(|&idx| &self.steps[idx])
    }

    /// `(source, target)` ids of the back edges found while sorting.
    pub fn cyclic_edge_ids(&self) -> Vec<(&str, &str)> {
        self.cyclic
            .iter()
            .map(|&(s, t)| (self.steps[s].id(), self.steps[t].id()))
            .collect()
    }

    /// `(source, target)` steps of the back edges found while sorting.
    pub fn cyclic_edges(&self) -> Vec<(&StoryStep<E>, &StoryStep<E>)> {
        self.cyclic
            .iter()
            .map(|&(s, t)| (self.steps[s].as_ref(), self.steps[t].as_ref()))
            .collect()
    }

    pub fn has_cycles(&self) -> bool {
        !self.cyclic.is_empty()
    }
}

impl<E: Display> StoryGraph<E> {
    /// Render every step, in input order, as story text.
    pub fn as_story_string(&self) -> String {
        self.steps.iter().map(|s| s.as_story_string()).collect()
    }
}
