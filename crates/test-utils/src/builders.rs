#![allow(dead_code)]

use storygraph::story::{StoryGraph, StoryStep};
use storygraph::types::Checkpoint;

/// Builder for `StoryStep<String>` to simplify test setup.
///
/// Steps start at `STORY_START`, end the story and carry one event named
/// after the step unless told otherwise.
pub struct StepBuilder {
    id: String,
    start: Checkpoint,
    end: Option<Checkpoint>,
    events: Vec<String>,
}

impl StepBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            start: Checkpoint::story_start(),
            end: None,
            events: vec![format!("event_{id}")],
        }
    }

    pub fn start(mut self, checkpoint: &str) -> Self {
        self.start = Checkpoint::new(checkpoint);
        self
    }

    pub fn end(mut self, checkpoint: &str) -> Self {
        self.end = Some(Checkpoint::new(checkpoint));
        self
    }

    pub fn event(mut self, event: &str) -> Self {
        self.events.push(event.to_string());
        self
    }

    pub fn no_events(mut self) -> Self {
        self.events.clear();
        self
    }

    pub fn build(self) -> StoryStep<String> {
        StoryStep::new(self.id, self.start, self.end, self.events)
    }
}

/// `start -> s1 -> s2 -> end`, joined at checkpoint `c1`.
pub fn linear() -> Vec<StoryStep<String>> {
    vec![
        StepBuilder::new("s1").end("c1").build(),
        StepBuilder::new("s2").start("c1").build(),
    ]
}

/// `start` branches into `s1` and `s2`, both ending at `c`, then `c -> s3 -> end`.
pub fn diamond() -> Vec<StoryStep<String>> {
    vec![
        StepBuilder::new("s1").end("c").build(),
        StepBuilder::new("s2").end("c").build(),
        StepBuilder::new("s3").start("c").build(),
    ]
}

/// `a -> b -> c -> a` through checkpoints `ab`, `bc`, `ca`, entered from
/// `STORY_START` by `entry` and left to the story end by `exit`.
pub fn three_cycle() -> Vec<StoryStep<String>> {
    vec![
        StepBuilder::new("entry").end("ca").build(),
        StepBuilder::new("a").start("ca").end("ab").build(),
        StepBuilder::new("b").start("ab").end("bc").build(),
        StepBuilder::new("c").start("bc").end("ca").build(),
        StepBuilder::new("exit").start("bc").build(),
    ]
}

/// Build a graph, panicking on invalid input.
pub fn graph(steps: Vec<StoryStep<String>>) -> StoryGraph<String> {
    StoryGraph::new(steps).expect("test steps should form a valid story graph")
}
