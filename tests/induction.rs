use sapling::prelude::*;


fn record(id: &str, label: char, features: &str) -> Record {
    Record::new(id, label, features.chars().collect())
}


// One binary feature that separates the labels perfectly:
//
//   feature | label
//   --------+------
//      0    |   X
//      0    |   X
//      1    |   Y
//      1    |   Y
fn separable() -> RecordSet {
    RecordSet::new(
        vec![
            record("r0", 'X', "0"),
            record("r1", 'X', "0"),
            record("r2", 'Y', "1"),
            record("r3", 'Y', "1"),
        ],
        vec!['X', 'Y'],
        vec!['0', '1'],
    )
}


#[test]
fn perfect_split_yields_two_pure_leaves() {
    let dataset = separable();
    assert!((dataset.entropy().unwrap() - 1.0).abs() < 1e-12);

    let tree = DecisionTree::build(&dataset).unwrap();
    let root = tree.root();

    assert_eq!(tree.split_feature(root), Some(0));
    let children = tree.children(root).unwrap();
    assert_eq!(children.len(), 2);

    let zero = children[&'0'];
    let one = children[&'1'];
    assert!(tree.is_leaf(zero));
    assert!(tree.is_leaf(one));
    assert_eq!(*tree.label(zero), 'X');
    assert_eq!(*tree.label(one), 'Y');

    assert_eq!(*tree.classify(&record("t", 'E', "0")), 'X');
    assert_eq!(*tree.classify(&record("t", 'E', "1")), 'Y');
}


#[test]
fn single_example_becomes_a_single_leaf() {
    let dataset = RecordSet::new(
        vec![record("r0", 'Y', "01")],
        vec!['X', 'Y'],
        vec!['0', '1'],
    );

    let tree = DecisionTree::build(&dataset).unwrap();
    assert_eq!(tree.node_count(), 1);
    assert!(tree.is_leaf(tree.root()));
    assert_eq!(*tree.label(tree.root()), 'Y');
    assert!(tree.children(tree.root()).is_none());
}


#[test]
fn pure_dataset_stays_a_leaf() {
    let dataset = RecordSet::new(
        vec![record("r0", 'X', "0"), record("r1", 'X', "1")],
        vec!['X', 'Y'],
        vec!['0', '1'],
    );

    let tree = DecisionTree::build(&dataset).unwrap();
    assert!(tree.is_leaf(tree.root()));
    assert_eq!(*tree.label(tree.root()), 'X');
}


#[test]
fn empty_root_dataset_fails() {
    let dataset = RecordSet::new(Vec::new(), vec!['X', 'Y'], vec!['0', '1']);
    let err = DecisionTree::build(&dataset).unwrap_err();
    assert!(matches!(err, SaplingError::EmptyDataset));
}


#[test]
fn induction_is_deterministic() {
    let dataset = RecordSet::new(
        vec![
            record("r0", 'X', "yyn"),
            record("r1", 'X', "yny"),
            record("r2", 'Y', "nyn"),
            record("r3", 'Y', "nny"),
            record("r4", 'X', "ynn"),
            record("r5", 'Y', "nyy"),
            record("r6", 'X', "yyy"),
            record("r7", 'Y', "nnn"),
        ],
        vec!['X', 'Y'],
        vec!['n', 'y'],
    );

    let once = DecisionTree::build(&dataset).unwrap();
    let twice = DecisionTree::build(&dataset).unwrap();
    assert_eq!(once.to_string(), twice.to_string());
    assert_eq!(once.node_count(), twice.node_count());
}


#[test]
fn classification_is_total_over_the_declared_universe() {
    // `m` is declared but unseen, so the split on feature 0 grows an
    // empty child for it; that child inherits the parent's label.
    let dataset = RecordSet::new(
        vec![
            record("r0", 'X', "y"),
            record("r1", 'X', "y"),
            record("r2", 'X', "n"),
            record("r3", 'Y', "n"),
            record("r4", 'Y', "n"),
        ],
        vec!['X', 'Y'],
        vec!['m', 'n', 'y'],
    );

    let tree = DecisionTree::build(&dataset).unwrap();
    for value in dataset.feature_values() {
        let label = tree.classify(&record("t", 'E', &value.to_string()));
        assert!(dataset.labels().contains(label));
    }

    // Even a value outside the declared universe gets an answer:
    // the node falls back to its own label.
    let label = tree.classify(&record("t", 'E', "z"));
    assert!(dataset.labels().contains(label));
}


#[test]
fn tied_majority_inherits_the_parent_label() {
    // Bucket `b` holds one X and one Y; the root majority is X,
    // so the tied child resolves to X as well.
    let dataset = RecordSet::new(
        vec![
            record("r0", 'X', "a"),
            record("r1", 'X', "a"),
            record("r2", 'X', "b"),
            record("r3", 'Y', "b"),
        ],
        vec!['X', 'Y'],
        vec!['a', 'b'],
    );

    let tree = DecisionTree::build(&dataset).unwrap();
    let root = tree.root();
    assert_eq!(tree.split_feature(root), Some(0));
    assert_eq!(*tree.label(root), 'X');

    let tied = tree.children(root).unwrap()[&'b'];
    assert!(tree.is_leaf(tied));
    assert_eq!(*tree.label(tied), 'X');
}


#[test]
fn tied_majority_at_the_root_follows_the_declared_label_order() {
    // No parent to inherit from and nothing to split on;
    // the first declared label among the tied ones wins.
    let dataset = RecordSet::new(
        vec![record("r0", 'Y', "a"), record("r1", 'X', "a")],
        vec!['X', 'Y'],
        vec!['a', 'b'],
    );

    let tree = DecisionTree::build(&dataset).unwrap();
    assert!(tree.is_leaf(tree.root()));
    assert_eq!(*tree.label(tree.root()), 'X');
}
