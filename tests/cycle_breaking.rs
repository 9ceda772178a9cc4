use storygraph::story::{PlainDomain, StoryGraph, StoryStep};
use storygraph::types::{CYCLE_CHECKPOINT_PREFIX, Checkpoint};
use storygraph_test_utils::builders::{StepBuilder, diamond, graph, three_cycle};
use storygraph_test_utils::init_tracing;

fn ids_with_prefix<'a>(graph: &'a StoryGraph<String>, prefix: &str) -> Vec<&'a StoryStep<String>> {
    graph
        .story_steps()
        .filter(|s| s.id().starts_with(prefix))
        .collect()
}

#[test]
fn acyclic_graph_is_unchanged() {
    let original = graph(diamond());

    let rewritten = original.with_cycles_removed().unwrap();

    assert_eq!(rewritten.ordered_ids(), original.ordered_ids());
    assert!(rewritten.story_end_checkpoints().is_empty());
}

#[test]
fn three_cycle_is_rerouted_through_a_synthetic_checkpoint() {
    init_tracing();
    let original = graph(three_cycle());
    assert_eq!(original.cyclic_edge_ids(), vec![("c", "a")]);

    let rewritten = original.with_cycles_removed().unwrap();

    // "c" is replaced by its copy; "a" stays and gains a copy.
    assert!(rewritten.get("c").is_none());
    assert!(rewritten.get("a").is_some());
    assert_eq!(rewritten.len(), original.len() + 1);

    let cycle_checkpoints = rewritten.story_end_checkpoints();
    assert_eq!(cycle_checkpoints.len(), 1);
    let seam = &cycle_checkpoints[0];
    assert!(seam.name().starts_with(CYCLE_CHECKPOINT_PREFIX));
    assert!(rewritten.is_story_end_checkpoint(seam.name()));

    let source_copies = ids_with_prefix(&rewritten, "c_");
    assert_eq!(source_copies.len(), 1);
    let source_copy = source_copies[0];
    assert!(source_copy.is_synthetic());
    assert_eq!(source_copy.start_checkpoint_name(), "bc");
    assert_eq!(source_copy.end_checkpoint(), Some(seam));
    assert_eq!(source_copy.events(), &["event_c".to_string()]);

    let target_copies = ids_with_prefix(&rewritten, "a_");
    assert_eq!(target_copies.len(), 1);
    let target_copy = target_copies[0];
    assert!(target_copy.is_synthetic());
    assert_eq!(target_copy.start_checkpoint(), seam);
    assert_eq!(target_copy.end_checkpoint_name(), Some("ab"));

    assert!(rewritten.cyclic_edge_ids().is_empty());
}

#[test]
fn original_graph_is_left_untouched() {
    let original = graph(three_cycle());

    let _rewritten = original.with_cycles_removed().unwrap();

    assert_eq!(original.len(), 5);
    assert_eq!(original.cyclic_edge_ids(), vec![("c", "a")]);
    assert!(original.story_steps().all(|s| !s.is_synthetic()));
    assert!(original.story_end_checkpoints().is_empty());
}

#[test]
fn self_loop_is_broken() {
    let original = graph(vec![
        StepBuilder::new("enter").end("loop").build(),
        StepBuilder::new("spin").start("loop").end("loop").build(),
        StepBuilder::new("leave").start("loop").build(),
    ]);
    assert_eq!(original.cyclic_edge_ids(), vec![("spin", "spin")]);

    let rewritten = original.with_cycles_removed().unwrap();

    assert!(rewritten.get("spin").is_none());
    assert_eq!(ids_with_prefix(&rewritten, "spin_").len(), 2);
    assert!(!rewritten.has_cycles());
}

#[test]
fn source_of_several_back_edges_is_removed_once_and_copied_per_edge() {
    // entry -> q; v1: q -> r; t: r -> q; v2: q -> s; u: s -> q
    let original = graph(vec![
        StepBuilder::new("entry").end("q").build(),
        StepBuilder::new("v1").start("q").end("r").build(),
        StepBuilder::new("t").start("r").end("q").build(),
        StepBuilder::new("v2").start("q").end("s").build(),
        StepBuilder::new("u").start("s").end("q").build(),
    ]);
    assert_eq!(
        original.cyclic_edge_ids(),
        vec![("t", "v1"), ("u", "v1"), ("u", "v2")]
    );

    let rewritten = original.with_cycles_removed().unwrap();

    // Sources go, targets stay.
    assert!(rewritten.get("t").is_none());
    assert!(rewritten.get("u").is_none());
    assert!(rewritten.get("v1").is_some());
    assert!(rewritten.get("v2").is_some());

    assert_eq!(rewritten.len(), 3 + 2 * 3);
    assert_eq!(rewritten.story_end_checkpoints().len(), 3);

    let u_copies = ids_with_prefix(&rewritten, "u_");
    assert_eq!(u_copies.len(), 2);
    assert_ne!(u_copies[0].end_checkpoint(), u_copies[1].end_checkpoint());

    assert_eq!(ids_with_prefix(&rewritten, "v1_").len(), 2);
    assert_eq!(ids_with_prefix(&rewritten, "v2_").len(), 1);
    assert_eq!(ids_with_prefix(&rewritten, "t_").len(), 1);

    assert!(rewritten.cyclic_edge_ids().is_empty());
}

#[test]
fn synthetic_checkpoints_skip_labels_already_in_use() {
    let taken = format!("{CYCLE_CHECKPOINT_PREFIX}00000000");
    let original = graph(vec![
        StepBuilder::new("enter").end(&taken).build(),
        StepBuilder::new("spin").start(&taken).end(&taken).build(),
    ]);

    let rewritten = original.with_cycles_removed().unwrap();

    let seams = rewritten.story_end_checkpoints();
    assert_eq!(seams.len(), 1);
    assert_ne!(seams[0], Checkpoint::new(taken));
}

#[test]
fn copy_ids_never_collide_with_existing_ids() {
    let original = graph(vec![
        StepBuilder::new("enter").end("loop").build(),
        StepBuilder::new("spin").start("loop").end("loop").build(),
        StepBuilder::new("spin_00000000").start("elsewhere").build(),
    ]);

    let rewritten = original.with_cycles_removed().unwrap();

    assert!(rewritten.get("spin_00000000").is_some());
    assert!(!rewritten.get("spin_00000000").unwrap().is_synthetic());
    assert_eq!(
        rewritten.story_steps().filter(|s| s.is_synthetic()).count(),
        2
    );
}

#[test]
fn broken_cycle_still_enumerates_the_exit_story() {
    let rewritten = graph(three_cycle()).with_cycles_removed().unwrap();

    let stories = rewritten.build_stories(&PlainDomain, Some(100));

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].step_ids(), vec!["entry", "a", "b", "exit"]);
}
