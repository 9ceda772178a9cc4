// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{RawScenarioFile, ScenarioFile};
use crate::errors::{Result, StoryGraphError};

impl TryFrom<RawScenarioFile> for ScenarioFile {
    type Error = StoryGraphError;

    fn try_from(raw: RawScenarioFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_scenario(&raw)?;
        Ok(ScenarioFile::new_unchecked(raw.config, raw.steps))
    }
}

/// Checks:
/// - `max_frontier_width >= 1` unless `unbounded`
/// - every step has a non-empty id, unique within the file
/// - no checkpoint label is empty
///
/// An empty step list is valid. Cycles are not an error here; they are
/// reported and broken by the story graph.
fn validate_raw_scenario(cfg: &RawScenarioFile) -> Result<()> {
    validate_global_config(cfg)?;
    validate_step_ids(cfg)?;
    validate_checkpoints(cfg)?;
    Ok(())
}

fn validate_global_config(cfg: &RawScenarioFile) -> Result<()> {
    if !cfg.config.unbounded && cfg.config.max_frontier_width == 0 {
        return Err(StoryGraphError::ConfigError(
            "[config].max_frontier_width must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_step_ids(cfg: &RawScenarioFile) -> Result<()> {
    let mut seen = HashSet::new();
    for (pos, step) in cfg.steps.iter().enumerate() {
        if step.id.trim().is_empty() {
            return Err(StoryGraphError::ConfigError(format!(
                "step #{} has an empty `id`",
                pos + 1
            )));
        }
        if !seen.insert(step.id.as_str()) {
            return Err(StoryGraphError::DuplicateStepId(step.id.clone()));
        }
    }
    Ok(())
}

fn validate_checkpoints(cfg: &RawScenarioFile) -> Result<()> {
    for step in cfg.steps.iter() {
        if step.start.name().is_empty() {
            return Err(StoryGraphError::ConfigError(format!(
                "step '{}' has an empty `start` checkpoint",
                step.id
            )));
        }
        if step.end.as_ref().is_some_and(|end| end.name().is_empty()) {
            return Err(StoryGraphError::ConfigError(format!(
                "step '{}' has an empty `end` checkpoint",
                step.id
            )));
        }
    }
    Ok(())
}
