// src/story/enumerate.rs

//! Story enumeration by frontier propagation.
//!
//! Steps are processed in topological order. The frontier maps each
//! checkpoint to the partial stories currently ending there, starting with
//! one empty story at `STORY_START`. Every step extends the stories waiting
//! at its start checkpoint and hands the results to its end checkpoint.
//! Whatever reaches the story end is returned.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::story::domain::Domain;
use crate::story::graph::StoryGraph;
use crate::story::step::StoryStep;
use crate::types::Checkpoint;

/// Seed used by [`StoryGraph::build_stories`].
pub const DEFAULT_STORY_SEED: u64 = 42;

/// Frontier width used when a scenario does not configure one.
pub const DEFAULT_MAX_FRONTIER_WIDTH: usize = 2000;

/// One concrete path through a story graph.
///
/// Steps are shared with the graph they came from; the sequence itself is
/// owned, so extending a story never affects the story it was extended from.
#[derive(Debug)]
pub struct Story<E> {
    steps: Vec<Arc<StoryStep<E>>>,
}

impl<E> Story<E> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// A new story made of this one followed by `step`.
    pub fn extended(&self, step: &Arc<StoryStep<E>>) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend(self.steps.iter().cloned());
        steps.push(Arc::clone(step));
        Self { steps }
    }

    pub fn steps(&self) -> impl Iterator<Item = &StoryStep<E>> {
        self.steps.iter().map(Arc::as_ref)
    }

    pub fn step_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All explicit events of the story, step after step.
    pub fn explicit_events<D>(&self, domain: &D) -> Vec<E>
    where
        D: Domain<E> + ?Sized,
    {
        self.steps
            .iter()
            .flat_map(|s| s.explicit_events(domain))
            .collect()
    }
}

impl<E: Display> Story<E> {
    pub fn as_story_string(&self) -> String {
        self.steps.iter().map(|s| s.as_story_string()).collect()
    }
}

impl<E> Clone for Story<E> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<E> Default for Story<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick `max` items uniformly at random, without replacement.
///
/// Slices of at most `max` items are returned whole, in order, and leave
/// `rng` untouched.
pub fn subsample<'a, T, R>(items: &'a [T], max: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    if items.len() <= max {
        return items.iter().collect();
    }
    items.choose_multiple(rng, max).collect()
}

impl<E> StoryGraph<E> {
    /// Enumerate the stories from `STORY_START` to the story end.
    ///
    /// `max_frontier_width` caps how many partial stories are carried through
    /// any single step; `None` enumerates exhaustively. Subsampling uses a
    /// generator seeded with [`DEFAULT_STORY_SEED`], so the result is
    /// reproducible.
    pub fn build_stories<D>(&self, domain: &D, max_frontier_width: Option<usize>) -> Vec<Story<E>>
    where
        D: Domain<E> + ?Sized,
    {
        let mut rng = StdRng::seed_from_u64(DEFAULT_STORY_SEED);
        self.build_stories_with_rng(domain, max_frontier_width, &mut rng)
    }

    /// Like [`build_stories`](Self::build_stories), drawing subsamples from
    /// `rng`.
    ///
    /// The graph is expected to be acyclic; run
    /// [`with_cycles_removed`](Self::with_cycles_removed) first otherwise.
    /// Steps whose start checkpoint is never reached are skipped. Steps that
    /// resolve to no events extend nothing.
    pub fn build_stories_with_rng<D, R>(
        &self,
        domain: &D,
        max_frontier_width: Option<usize>,
        rng: &mut R,
    ) -> Vec<Story<E>>
    where
        D: Domain<E> + ?Sized,
        R: Rng + ?Sized,
    {
        let story_start = Checkpoint::story_start();
        let mut frontier: HashMap<Option<&Checkpoint>, Vec<Story<E>>> = HashMap::new();
        frontier.insert(Some(&story_start), vec![Story::new()]);

        for step in self.ordered_shared() {
            let Some(waiting) = frontier.get(&Some(step.start_checkpoint())) else {
                trace!(step = %step.id(), "start checkpoint not reached; skipping");
                continue;
            };

            let extended: Vec<Story<E>> = {
                let incoming: Vec<&Story<E>> = match max_frontier_width {
                    Some(max) if waiting.len() > max => {
                        debug!(
                            step = %step.id(),
                            checkpoint = %step.start_checkpoint(),
                            waiting = waiting.len(),
                            max,
                            "subsampling frontier"
                        );
                        subsample(waiting, max, rng)
                    }
                    _ => waiting.iter().collect(),
                };

                if step.explicit_events(domain).is_empty() {
                    Vec::new()
                } else {
                    incoming.into_iter().map(|story| story.extended(step)).collect()
                }
            };

            trace!(
                step = %step.id(),
                extended = extended.len(),
                "propagated frontier"
            );

            frontier
                .entry(step.end_checkpoint())
                .or_default()
                .extend(extended);
        }

        let stories = frontier.remove(&None).unwrap_or_default();
        debug!(stories = stories.len(), "built stories");
        stories
    }
}
