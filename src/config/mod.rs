// src/config/mod.rs

//! Scenario files for the `storygraph` binary.
//!
//! - `model.rs`: the TOML-backed data model.
//! - `loader.rs`: reading a scenario from disk.
//! - `validate.rs`: turning a raw scenario into a validated one.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_scenario_path, load_and_validate, load_from_path};
pub use model::{ConfigSection, RawScenarioFile, ScenarioFile, StepConfig};
