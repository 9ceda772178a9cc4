// src/story/cycles.rs

//! Cycle breaking by rerouting back edges through fresh checkpoints.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::{Result, StoryGraphError};
use crate::story::graph::StoryGraph;
use crate::story::ids::IdGenerator;
use crate::types::{CYCLE_CHECKPOINT_PREFIX, Checkpoint};

impl<E: Clone> StoryGraph<E> {
    /// Return a new graph in which every back edge found while sorting this
    /// one is replaced by a seam through a freshly minted checkpoint.
    ///
    /// For each back edge `(source, target)`:
    /// - `source` is dropped from the step list (once, however many back
    ///   edges leave it),
    /// - a copy of `source` ending at the new checkpoint is added,
    /// - a copy of `target` starting at the new checkpoint is added,
    /// - the new checkpoint is recorded as a story end checkpoint.
    ///
    /// This is a single pass: only the reported back edges are rewritten and
    /// the result is not re-checked for cycles they did not cover.
    pub fn with_cycles_removed(&self) -> Result<StoryGraph<E>> {
        let mut story_end_checkpoints = self.story_end_checkpoints.clone();

        if !self.has_cycles() {
            return StoryGraph::from_shared(self.steps.clone(), story_end_checkpoints);
        }

        let cyclic_edges = self.cyclic_edges();

        let steps_to_be_removed: HashSet<&str> =
            cyclic_edges.iter().map(|&(source, _)| source.id()).collect();

        let mut story_steps: Vec<_> = self
            .steps
            .iter()
            .filter(|s| !steps_to_be_removed.contains(s.id()))
            .cloned()
            .collect();

        let mut checkpoint_ids = IdGenerator::new(self.checkpoint_labels());
        let mut step_ids = IdGenerator::new(self.steps.iter().map(|s| s.id().to_string()));

        for (source, target) in cyclic_edges {
            let cid = Checkpoint::new(checkpoint_ids.mint(CYCLE_CHECKPOINT_PREFIX));
            if story_end_checkpoints.contains(&cid) {
                return Err(StoryGraphError::CheckpointCollision(cid.to_string()));
            }

            debug!(
                source = %source.id(),
                target = %target.id(),
                checkpoint = %cid,
                "rerouting back edge through synthetic checkpoint"
            );

            let modified_start = source
                .create_copy(step_ids.mint(&format!("{}_", source.id())))
                .with_end_checkpoint(Some(cid.clone()))
                .into_synthetic();
            story_steps.push(Arc::new(modified_start));

            let modified_end = target
                .create_copy(step_ids.mint(&format!("{}_", target.id())))
                .with_start_checkpoint(cid.clone())
                .into_synthetic();
            story_steps.push(Arc::new(modified_end));

            story_end_checkpoints.push(cid);
        }

        info!(
            removed_steps = steps_to_be_removed.len(),
            synthetic_checkpoints = story_end_checkpoints.len() - self.story_end_checkpoints.len(),
            "removed cycles from story graph"
        );

        StoryGraph::from_shared(story_steps, story_end_checkpoints)
    }

    /// Every checkpoint label this graph mentions.
    fn checkpoint_labels(&self) -> HashSet<String> {
        let mut labels: HashSet<String> = self
            .story_end_checkpoints
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        for step in &self.steps {
            labels.insert(step.start_checkpoint_name().to_string());
            if let Some(end) = step.end_checkpoint_name() {
                labels.insert(end.to_string());
            }
        }
        labels
    }
}
