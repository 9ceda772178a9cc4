// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod story;
pub mod types;

use std::path::PathBuf;

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::story::{PlainDomain, StoryGraph};

pub use crate::errors::StoryGraphError;
pub use crate::story::{Domain, Story, StoryStep};
pub use crate::types::{Checkpoint, STORY_START, StepId};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - scenario loading
/// - graph construction and cycle reporting
/// - cycle breaking (unless disabled)
/// - story enumeration
pub fn run(args: CliArgs) -> Result<()> {
    let scenario_path = PathBuf::from(&args.scenario);
    let scenario = load_and_validate(&scenario_path)?;

    let max_frontier_width = match args.max_frontier_width {
        Some(0) => bail!("--max-frontier-width must be >= 1 (got 0)"),
        Some(width) => Some(width),
        None => scenario.frontier_width(),
    };
    let seed = args.seed.unwrap_or(scenario.config.seed);

    let graph = StoryGraph::new(scenario.story_steps())?;
    print_graph(&graph);

    let graph = if graph.has_cycles() && scenario.config.remove_cycles && !args.keep_cycles {
        graph.with_cycles_removed()?
    } else {
        if graph.has_cycles() {
            warn!(
                cyclic_edges = graph.cyclic_edge_ids().len(),
                "enumerating a graph that still has cycles"
            );
        }
        graph
    };

    if args.dry_run {
        debug!("dry-run complete (no enumeration)");
        return Ok(());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let stories = graph.build_stories_with_rng(&PlainDomain, max_frontier_width, &mut rng);
    info!(
        stories = stories.len(),
        ?max_frontier_width,
        seed,
        "enumerated stories"
    );

    println!("stories ({}):", stories.len());
    for story in &stories {
        println!("  {}", story.step_ids().join(" -> "));
    }

    Ok(())
}

/// Print the topological order and the back edges found while computing it.
fn print_graph(graph: &StoryGraph<String>) {
    println!("steps ({}):", graph.len());
    for step in graph.ordered_steps() {
        let end = step.end_checkpoint_name().unwrap_or("<end>");
        println!("  - {}: {} -> {}", step.id(), step.start_checkpoint(), end);
    }

    let cyclic = graph.cyclic_edge_ids();
    if !cyclic.is_empty() {
        println!();
        println!("cyclic edges ({}):", cyclic.len());
        for (source, target) in cyclic {
            println!("  - {source} -> {target}");
        }
    }
    println!();
}
