// src/types.rs

use std::fmt;

use serde::Deserialize;

/// Identity of a story step. Unique within a [`StoryGraph`](crate::story::StoryGraph).
pub type StepId = String;

/// Label of the checkpoint every story begins at.
pub const STORY_START: &str = "STORY_START";

/// Prefix of checkpoint labels minted while breaking cycles.
pub const CYCLE_CHECKPOINT_PREFIX: &str = "CYCLE_";

/// A named join/split point connecting the end of one step to the start of
/// another.
///
/// Two checkpoints are equal iff their labels are equal. The story *end* is
/// not a checkpoint value: wherever a step may end the story, its end slot is
/// an `Option<Checkpoint>` and `None` means "end".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Checkpoint(String);

impl Checkpoint {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The sentinel every story starts at.
    pub fn story_start() -> Self {
        Self(STORY_START.to_string())
    }

    pub fn is_story_start(&self) -> bool {
        self.0 == STORY_START
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Checkpoint {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Checkpoint {
    fn from(label: String) -> Self {
        Self(label)
    }
}
