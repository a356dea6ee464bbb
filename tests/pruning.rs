use sapling::prelude::*;


fn record(id: &str, label: char, features: &str) -> Record {
    Record::new(id, label, features.chars().collect())
}


fn universe(records: Vec<Record>) -> RecordSet {
    RecordSet::new(records, vec!['X', 'Y'], vec!['n', 'y'])
}


// Training data that grows this two-level tree:
//
//   Feature A:
//       n Feature B:
//           n Y
//           y X
//       y Y
//
// The root ties 3-3 and resolves to X;
// the inner branch's majority is X.
fn two_level_training() -> RecordSet {
    universe(vec![
        record("r0", 'Y', "yy"),
        record("r1", 'Y', "yn"),
        record("r2", 'X', "ny"),
        record("r3", 'X', "ny"),
        record("r4", 'X', "ny"),
        record("r5", 'Y', "nn"),
    ])
}


#[test]
fn pruning_commits_the_candidate_with_the_best_accuracy() {
    let mut tree = DecisionTree::build(&two_level_training()).unwrap();
    let root = tree.root();
    let inner = tree.children(root).unwrap()[&'n'];
    assert_eq!(tree.unpruned_branch_count(), 2);

    // The full tree classifies t0 wrong and t1 right (0.5).
    // Pruning the inner branch fixes t0 without breaking t1 (1.0);
    // pruning the root would break t1 instead (0.5).
    let tuning = universe(vec![
        record("t0", 'X', "nn"),
        record("t1", 'Y', "yy"),
    ]);
    let before = accuracy(&tree, &tuning);
    assert_eq!(before, 0.5);

    let pruned = tree.prune(&tuning);
    assert_eq!(pruned, 1);
    assert!(tree.is_pruned(inner));
    assert!(!tree.is_pruned(root));
    assert_eq!(accuracy(&tree, &tuning), 1.0);
    assert_eq!(tree.unpruned_branch_count(), 1);

    // A pruned branch answers with its own label.
    assert_eq!(*tree.classify(&record("t", 'E', "nn")), 'X');
}


#[test]
fn pruning_never_decreases_tuning_accuracy_or_grows_the_tree() {
    let mut tree = DecisionTree::build(&two_level_training()).unwrap();
    let tuning = universe(vec![
        record("t0", 'X', "nn"),
        record("t1", 'Y', "yy"),
        record("t2", 'X', "ny"),
    ]);

    let nodes_before = tree.node_count();
    let branches_before = tree.unpruned_branch_count();
    let accuracy_before = accuracy(&tree, &tuning);

    tree.prune(&tuning);

    assert!(accuracy(&tree, &tuning) >= accuracy_before);
    assert!(tree.unpruned_branch_count() <= branches_before);
    // The subtree structure is kept; only flags changed.
    assert_eq!(tree.node_count(), nodes_before);
}


#[test]
fn pruning_is_idempotent() {
    let mut tree = DecisionTree::build(&two_level_training()).unwrap();
    let tuning = universe(vec![
        record("t0", 'X', "nn"),
        record("t1", 'Y', "yy"),
    ]);

    assert_eq!(tree.prune(&tuning), 1);
    assert_eq!(tree.prune(&tuning), 0);
}


#[test]
fn equal_accuracy_still_prefers_the_simpler_tree() {
    let mut tree = DecisionTree::build(&two_level_training()).unwrap();

    // The full tree already scores 1.0 here, but pruning the inner
    // branch keeps that score, so it is pruned anyway.
    let tuning = universe(vec![record("t0", 'Y', "yy")]);
    assert_eq!(accuracy(&tree, &tuning), 1.0);

    assert_eq!(tree.prune(&tuning), 1);
    assert_eq!(accuracy(&tree, &tuning), 1.0);
    assert_eq!(tree.unpruned_branch_count(), 1);
}


#[test]
fn empty_tuning_set_collapses_the_tree() {
    // Every candidate scores the defined 0.0, so each round prunes
    // its last post-order candidate until the root itself is pruned.
    let mut tree = DecisionTree::build(&two_level_training()).unwrap();
    let empty = universe(Vec::new());

    let pruned = tree.prune(&empty);
    assert_eq!(pruned, 1);
    assert!(tree.is_pruned(tree.root()));
    assert_eq!(tree.unpruned_branch_count(), 0);
}


#[test]
fn pruned_flags_can_be_reverted() {
    let mut tree = DecisionTree::build(&two_level_training()).unwrap();
    let root = tree.root();

    tree.set_pruned(root, true);
    assert!(tree.is_pruned(root));
    assert_eq!(*tree.classify(&record("t", 'E', "nn")), 'X');

    tree.set_pruned(root, false);
    assert!(!tree.is_pruned(root));
    assert_eq!(*tree.classify(&record("t", 'E', "nn")), 'Y');
}
