// src/config/model.rs

use serde::Deserialize;

use crate::story::{DEFAULT_MAX_FRONTIER_WIDTH, DEFAULT_STORY_SEED, StoryStep};
use crate::types::{Checkpoint, STORY_START};

/// Scenario file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// max_frontier_width = 100
/// seed = 7
///
/// [[step]]
/// id = "greet"
/// end = "greeted"
/// events = ["utter_hello"]
///
/// [[step]]
/// id = "farewell"
/// start = "greeted"
/// events = ["utter_goodbye"]
/// ```
///
/// A step without `start` begins at `STORY_START`; a step without `end` ends
/// the story.
#[derive(Debug, Clone, Deserialize)]
pub struct RawScenarioFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default, rename = "step")]
    pub steps: Vec<StepConfig>,
}

/// Validated scenario. Built from a [`RawScenarioFile`] with `TryFrom`.
#[derive(Debug, Clone)]
pub struct ScenarioFile {
    pub config: ConfigSection,
    pub steps: Vec<StepConfig>,
}

impl ScenarioFile {
    /// Construct without validating. Use `TryFrom<RawScenarioFile>` instead.
    pub(crate) fn new_unchecked(config: ConfigSection, steps: Vec<StepConfig>) -> Self {
        Self { config, steps }
    }

    /// The steps as graph input, in file order.
    pub fn story_steps(&self) -> Vec<StoryStep<String>> {
        self.steps.iter().map(StepConfig::to_story_step).collect()
    }

    /// Effective frontier cap; `None` when the scenario asks for exhaustive
    /// enumeration.
    pub fn frontier_width(&self) -> Option<usize> {
        if self.config.unbounded {
            None
        } else {
            Some(self.config.max_frontier_width)
        }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Maximum number of partial stories carried through a single step.
    #[serde(default = "default_max_frontier_width")]
    pub max_frontier_width: usize,

    /// Ignore `max_frontier_width` and enumerate every story.
    #[serde(default)]
    pub unbounded: bool,

    /// Seed for frontier subsampling.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Break cycles before enumerating.
    #[serde(default = "default_remove_cycles")]
    pub remove_cycles: bool,
}

fn default_max_frontier_width() -> usize {
    DEFAULT_MAX_FRONTIER_WIDTH
}

fn default_seed() -> u64 {
    DEFAULT_STORY_SEED
}

fn default_remove_cycles() -> bool {
    true
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            max_frontier_width: default_max_frontier_width(),
            unbounded: false,
            seed: default_seed(),
            remove_cycles: default_remove_cycles(),
        }
    }
}

/// One `[[step]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct StepConfig {
    pub id: String,

    #[serde(default = "default_start")]
    pub start: Checkpoint,

    /// Absent when the step ends the story.
    #[serde(default)]
    pub end: Option<Checkpoint>,

    #[serde(default)]
    pub events: Vec<String>,
}

fn default_start() -> Checkpoint {
    Checkpoint::new(STORY_START)
}

impl StepConfig {
    pub fn to_story_step(&self) -> StoryStep<String> {
        StoryStep::new(
            self.id.clone(),
            self.start.clone(),
            self.end.clone(),
            self.events.clone(),
        )
    }
}
