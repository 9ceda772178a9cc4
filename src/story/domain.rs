// src/story/domain.rs

//! The collaborator that turns a step's raw events into concrete ones.

use crate::story::step::StoryStep;

/// Resolves the explicit events a step contributes to a story.
///
/// The enumerator calls this once per reachable step. Steps for which it
/// returns an empty list are not represented in any story.
pub trait Domain<E> {
    fn explicit_events(&self, step: &StoryStep<E>) -> Vec<E>;
}

/// Domain that contributes each step's raw events unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDomain;

impl<E: Clone> Domain<E> for PlainDomain {
    fn explicit_events(&self, step: &StoryStep<E>) -> Vec<E> {
        step.events().to_vec()
    }
}

impl<E, F> Domain<E> for F
where
    F: Fn(&StoryStep<E>) -> Vec<E>,
{
    fn explicit_events(&self, step: &StoryStep<E>) -> Vec<E> {
        self(step)
    }
}
