// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{RawScenarioFile, ScenarioFile};
use crate::errors::Result;

/// Load a scenario file and return the raw, unvalidated [`RawScenarioFile`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawScenarioFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let scenario: RawScenarioFile = toml::from_str(&contents)?;

    Ok(scenario)
}

/// Load a scenario file and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks ids, checkpoint labels and the `[config]` section.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ScenarioFile> {
    let raw = load_from_path(&path)?;
    let scenario = ScenarioFile::try_from(raw)?;
    Ok(scenario)
}

/// `Stories.toml` in the current working directory.
pub fn default_scenario_path() -> PathBuf {
    PathBuf::from("Stories.toml")
}
