use std::collections::BTreeSet;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use storygraph::story::{PlainDomain, Story, StoryGraph, StoryStep, subsample};
use storygraph_test_utils::builders::{StepBuilder, diamond, graph, linear, three_cycle};
use storygraph_test_utils::init_tracing;

fn story_ids(stories: &[Story<String>]) -> Vec<Vec<String>> {
    stories
        .iter()
        .map(|s| s.step_ids().into_iter().map(str::to_string).collect())
        .collect()
}

/// `width` steps from `STORY_START` into `c`, then `join` from `c` to the end.
fn fan_in(width: usize) -> StoryGraph<String> {
    let mut steps: Vec<_> = (0..width)
        .map(|i| StepBuilder::new(&format!("b{i}")).end("c").build())
        .collect();
    steps.push(StepBuilder::new("join").start("c").build());
    graph(steps)
}

#[test]
fn linear_graph_yields_one_story() {
    init_tracing();
    let stories = graph(linear()).build_stories(&PlainDomain, Some(10));

    assert_eq!(story_ids(&stories), vec![vec!["s1", "s2"]]);
}

#[test]
fn branch_and_merge_yields_one_story_per_branch() {
    let stories = graph(diamond()).build_stories(&PlainDomain, Some(10));

    let found: BTreeSet<Vec<String>> = story_ids(&stories).into_iter().collect();
    let expected: BTreeSet<Vec<String>> = [
        vec!["s1".to_string(), "s3".to_string()],
        vec!["s2".to_string(), "s3".to_string()],
    ]
    .into();
    assert_eq!(stories.len(), 2);
    assert_eq!(found, expected);
}

#[test]
fn story_events_follow_step_order() {
    let stories = graph(linear()).build_stories(&PlainDomain, None);

    assert_eq!(
        stories[0].explicit_events(&PlainDomain),
        vec!["event_s1".to_string(), "event_s2".to_string()]
    );
}

#[test]
fn oversized_frontier_is_subsampled_to_the_maximum() {
    let graph = fan_in(5);

    let capped = graph.build_stories(&PlainDomain, Some(3));
    assert_eq!(capped.len(), 3);

    let distinct: BTreeSet<Vec<String>> = story_ids(&capped).into_iter().collect();
    assert_eq!(distinct.len(), 3);

    assert_eq!(graph.build_stories(&PlainDomain, Some(5)).len(), 5);
    assert_eq!(graph.build_stories(&PlainDomain, None).len(), 5);
}

#[test]
fn subsampling_is_reproducible_for_a_seed() {
    let graph = fan_in(20);

    let first = graph.build_stories(&PlainDomain, Some(4));
    let second = graph.build_stories(&PlainDomain, Some(4));
    assert_eq!(story_ids(&first), story_ids(&second));

    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    assert_eq!(
        story_ids(&graph.build_stories_with_rng(&PlainDomain, Some(4), &mut rng_a)),
        story_ids(&graph.build_stories_with_rng(&PlainDomain, Some(4), &mut rng_b)),
    );
}

#[test]
fn subsample_picks_distinct_items() {
    let items: Vec<u32> = (0..10).collect();
    let mut rng = StdRng::seed_from_u64(1);

    let picked = subsample(&items, 4, &mut rng);

    assert_eq!(picked.len(), 4);
    let distinct: BTreeSet<u32> = picked.iter().map(|&&i| i).collect();
    assert_eq!(distinct.len(), 4);
}

#[test]
fn subsample_keeps_small_inputs_whole() {
    let items = vec!["x", "y", "z"];
    let mut rng = StdRng::seed_from_u64(1);

    let picked = subsample(&items, 3, &mut rng);

    assert_eq!(picked, vec![&"x", &"y", &"z"]);
}

#[test]
fn zero_event_step_extends_nothing() {
    let graph = graph(vec![
        StepBuilder::new("s1").end("c1").no_events().build(),
        StepBuilder::new("s2").start("c1").build(),
    ]);

    assert!(graph.build_stories(&PlainDomain, Some(10)).is_empty());
}

#[test]
fn zero_event_branch_drops_only_its_own_stories() {
    let silent_s1 = |step: &StoryStep<String>| {
        if step.id() == "s1" {
            Vec::new()
        } else {
            step.events().to_vec()
        }
    };

    let stories = graph(diamond()).build_stories(&silent_s1, Some(10));

    assert_eq!(story_ids(&stories), vec![vec!["s2", "s3"]]);
}

#[test]
fn unreachable_steps_are_skipped() {
    let graph = graph(vec![
        StepBuilder::new("s1").build(),
        StepBuilder::new("orphan").start("never_reached").build(),
    ]);

    let stories = graph.build_stories(&PlainDomain, Some(10));

    assert_eq!(story_ids(&stories), vec![vec!["s1"]]);
}

#[test]
fn graph_without_complete_story_yields_nothing() {
    let graph = graph(vec![StepBuilder::new("s1").end("dangling").build()]);

    assert!(graph.build_stories(&PlainDomain, Some(10)).is_empty());
}

#[test]
fn cyclic_graph_enumeration_terminates() {
    let stories = graph(three_cycle()).build_stories(&PlainDomain, Some(10));

    assert_eq!(story_ids(&stories), vec![vec!["entry", "a", "b", "exit"]]);
}

#[test]
fn extending_a_story_leaves_the_original_alone() {
    let base: Story<String> = Story::new();
    let step = Arc::new(StepBuilder::new("s1").build());

    let first = base.extended(&step);
    let second = first.extended(&step);

    assert!(base.is_empty());
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(second.as_story_string(), format!("{}{}", step.as_story_string(), step.as_story_string()));
}
