// src/story/mod.rs

//! Story graph construction, cycle breaking and story enumeration.
//!
//! - [`step`] holds the step record.
//! - [`domain`] is the seam to whatever resolves a step's events.
//! - [`grouping`] builds the step adjacency from checkpoints.
//! - [`topo`] is the cycle-tolerant topological sort.
//! - [`graph`] owns the steps and their order.
//! - [`cycles`] rewrites back edges into synthetic checkpoints.
//! - [`enumerate`] walks the graph and collects stories.
//! - [`ids`] mints unique ids and checkpoint labels.

pub mod cycles;
pub mod domain;
pub mod enumerate;
pub mod graph;
pub mod grouping;
pub mod ids;
pub mod step;
pub mod topo;

pub use domain::{Domain, PlainDomain};
pub use enumerate::{DEFAULT_MAX_FRONTIER_WIDTH, DEFAULT_STORY_SEED, Story, subsample};
pub use graph::StoryGraph;
pub use grouping::{group_by_start_checkpoint, order_steps, step_adjacency};
pub use ids::IdGenerator;
pub use step::StoryStep;
pub use topo::{TopoOrder, topological_sort};
