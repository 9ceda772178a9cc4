// src/story/step.rs

use std::fmt::{Display, Write};

use crate::story::domain::Domain;
use crate::types::{Checkpoint, StepId};

/// One atomic narrative fragment.
///
/// A step starts at one checkpoint, contributes an ordered list of events,
/// and either flows into another checkpoint (`end = Some(..)`) or ends the
/// story (`end = None`). The event payload `E` is owned by whoever parsed the
/// step; the graph never looks inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryStep<E> {
    id: StepId,
    start: Checkpoint,
    end: Option<Checkpoint>,
    events: Vec<E>,
    /// Set on copies minted while breaking a cycle.
    synthetic: bool,
}

impl<E> StoryStep<E> {
    pub fn new(
        id: impl Into<StepId>,
        start: Checkpoint,
        end: Option<Checkpoint>,
        events: Vec<E>,
    ) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            events,
            synthetic: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start_checkpoint(&self) -> &Checkpoint {
        &self.start
    }

    pub fn end_checkpoint(&self) -> Option<&Checkpoint> {
        self.end.as_ref()
    }

    pub fn start_checkpoint_name(&self) -> &str {
        self.start.name()
    }

    /// `None` when this step ends the story.
    pub fn end_checkpoint_name(&self) -> Option<&str> {
        self.end.as_ref().map(Checkpoint::name)
    }

    /// Raw events as parsed, before the domain resolves them.
    pub fn events(&self) -> &[E] {
        &self.events
    }

    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    /// Resolve the concrete events this step contributes.
    pub fn explicit_events<D>(&self, domain: &D) -> Vec<E>
    where
        D: Domain<E> + ?Sized,
    {
        domain.explicit_events(self)
    }

    pub fn with_start_checkpoint(mut self, start: Checkpoint) -> Self {
        self.start = start;
        self
    }

    pub fn with_end_checkpoint(mut self, end: Option<Checkpoint>) -> Self {
        self.end = end;
        self
    }

    pub fn into_synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }
}

impl<E: Clone> StoryStep<E> {
    /// Copy every field of this step under a new identity.
    pub fn create_copy(&self, new_id: impl Into<StepId>) -> Self {
        Self {
            id: new_id.into(),
            ..self.clone()
        }
    }
}

impl<E: Display> StoryStep<E> {
    /// Render the step as a story block.
    ///
    /// ```text
    /// ## greet
    /// > after_intro
    ///     - utter_hello
    /// > greeted
    /// ```
    pub fn as_story_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "\n## {}", self.id);
        if !self.start.is_story_start() {
            let _ = writeln!(out, "> {}", self.start);
        }
        for event in &self.events {
            let _ = writeln!(out, "    - {event}");
        }
        if let Some(end) = &self.end {
            let _ = writeln!(out, "> {end}");
        }
        out
    }
}
