//! Defines the decision tree and its induction algorithm.
use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use rayon::prelude::*;

use super::node::{BranchNode, Node, NodeId};
use crate::dataset::{Dataset, FeatureValue, Label, LabeledData};
use crate::errors::SaplingError;


/// A classification tree over discrete feature values
/// and discrete labels, induced by greedy entropy-gain splitting.
///
/// Nodes live in an arena indexed by [`NodeId`];
/// the root always exists once construction succeeds.
/// Every node carries a resolved label, even branches,
/// which is what lets [reduced-error pruning](DecisionTree::prune)
/// turn any branch into a leaf without rebuilding anything.
///
/// # Example
/// ```no_run
/// use sapling::prelude::*;
///
/// # fn main() -> Result<(), SaplingError> {
/// let records = RecordReader::new()
///     .file("records.tsv")
///     .read()?;
/// let tree = DecisionTree::build(&records)?;
/// for record in records.data() {
///     println!("{} -> {}", record.id(), tree.classify(record));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree<L, K> {
    nodes: Vec<Node<L, K>>,
    root: NodeId,
}


impl<L, K> DecisionTree<L, K>
    where L: Label,
          K: FeatureValue,
{
    /// Induce a tree from the given dataset, without pruning.
    ///
    /// Building from an empty dataset fails with
    /// [`SaplingError::EmptyDataset`];
    /// with no parent to inherit from, a root cannot resolve a label.
    pub fn build<D>(dataset: &D) -> Result<Self, SaplingError>
        where D: Dataset<Label = L, Value = K> + Sync,
    {
        let mut tree = Self { nodes: Vec::new(), root: 0 };
        tree.root = tree.grow(None, dataset)?;
        Ok(tree)
    }


    /// Recursively grows the node for `dataset` and its subtree.
    /// The node's label is resolved before any children are built,
    /// since children may need to inherit it.
    fn grow<D>(
        &mut self,
        parent: Option<NodeId>,
        dataset: &D,
    ) -> Result<NodeId, SaplingError>
        where D: Dataset<Label = L, Value = K> + Sync,
    {
        let label = self.resolve_label(parent, dataset)?;
        let id = self.nodes.len();
        self.nodes.push(Node::leaf(parent, label.clone()));

        // Too small or already pure; stay a leaf.
        if dataset.size() <= 1 {
            return Ok(id);
        }
        let initial_entropy = dataset.entropy()?;
        if initial_entropy == 0.0 {
            return Ok(id);
        }

        let Some((feature, gain)) =
            best_split(dataset, initial_entropy)?
        else {
            debug!("no feature splits with positive gain; leaf it is");
            return Ok(id);
        };
        debug!(
            "splitting {} examples on feature {feature} (gain {gain:.4})",
            dataset.size(),
        );

        let partitions = dataset.partition_by_feature(feature)?;
        let mut children = BTreeMap::new();
        for (value, subset) in partitions {
            let child = self.grow(Some(id), &subset)?;
            children.insert(value, child);
        }
        self.nodes[id] = Node::Branch(BranchNode {
            parent,
            split_feature: feature,
            children,
            label,
            pruned: false,
        });
        Ok(id)
    }


    /// Resolves the label this node would report as a leaf.
    ///
    /// A single example decides directly.
    /// An empty dataset inherits the parent's label.
    /// Otherwise the majority label wins;
    /// a tie among the top counts goes to the parent's label
    /// when there is a parent, and to the first tied label
    /// in the declared universe order when there is none.
    fn resolve_label<D>(
        &self,
        parent: Option<NodeId>,
        dataset: &D,
    ) -> Result<L, SaplingError>
        where D: Dataset<Label = L, Value = K>,
    {
        let data = dataset.data();
        if data.len() == 1 {
            return Ok(data[0].label());
        }
        if data.is_empty() {
            return match parent {
                Some(p) => Ok(self.nodes[p].label().clone()),
                None => Err(SaplingError::EmptyDataset),
            };
        }

        let groups = dataset.group_by_label();
        let mut majority = 0_usize;
        let mut winner = dataset.default_label();
        let mut tie = false;
        // Walking the declared universe keeps ties deterministic.
        for label in dataset.labels() {
            let count = groups.get(label).map_or(0, |group| group.len());
            if count > majority {
                winner = label.clone();
                majority = count;
                tie = false;
            } else if count == majority {
                tie = true;
            }
        }

        if tie {
            if let Some(p) = parent {
                winner = self.nodes[p].label().clone();
            }
        }
        Ok(winner)
    }


    /// Returns the best label this tree knows for the given example.
    ///
    /// Classification is total:
    /// a leaf (or a pruned branch) answers with its own label,
    /// and a branch with no child for the example's feature value
    /// falls back to its own label instead of failing.
    pub fn classify<E>(&self, example: &E) -> &L
        where E: LabeledData<Label = L, Value = K>,
    {
        let mut current = self.root;
        loop {
            match &self.nodes[current] {
                Node::Leaf(leaf) => return &leaf.label,
                Node::Branch(branch) => {
                    if branch.pruned {
                        return &branch.label;
                    }
                    let value = example.feature(branch.split_feature);
                    match branch.children.get(&value) {
                        Some(&child) => { current = child; },
                        None => {
                            debug!(
                                "no child for value {value:?} at feature \
                                 {}; answering with the node label",
                                branch.split_feature,
                            );
                            return &branch.label;
                        },
                    }
                },
            }
        }
    }


    /// Returns the id of the root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }


    /// Returns the total number of nodes, pruned subtrees included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }


    /// Is the given node a leaf?
    #[inline]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id].is_leaf()
    }


    /// Is the given node pruned, i.e. forced to behave as a leaf?
    #[inline]
    pub fn is_pruned(&self, id: NodeId) -> bool {
        self.nodes[id].is_pruned()
    }


    /// Returns the feature index the given node splits on,
    /// or `None` for leaves.
    #[inline]
    pub fn split_feature(&self, id: NodeId) -> Option<usize> {
        self.nodes[id].split_feature()
    }


    /// Returns the resolved label of the given node.
    #[inline]
    pub fn label(&self, id: NodeId) -> &L {
        self.nodes[id].label()
    }


    /// Returns the parent of the given node, or `None` at the root.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent()
    }


    /// Returns the children of the given node keyed by feature value,
    /// or `None` for leaves.
    #[inline]
    pub fn children(&self, id: NodeId) -> Option<&BTreeMap<K, NodeId>> {
        self.nodes[id].children()
    }


    /// Mark a branch as pruned or not.
    /// The subtree below it is kept,
    /// so the flag can be flipped back at any time.
    /// Marking a leaf has no effect.
    #[inline]
    pub fn set_pruned(&mut self, id: NodeId, pruned: bool) {
        if let Node::Branch(branch) = &mut self.nodes[id] {
            branch.pruned = pruned;
        }
    }


    /// Counts the branches that still behave as branches,
    /// i.e. are neither pruned themselves
    /// nor hidden under a pruned ancestor.
    pub fn unpruned_branch_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_leaf() || node.is_pruned() {
                continue;
            }
            count += 1;
            if let Some(children) = node.children() {
                stack.extend(children.values().copied());
            }
        }
        count
    }


    fn fmt_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        depth: usize,
    ) -> fmt::Result
    {
        let node = &self.nodes[id];
        if node.is_leaf() || node.is_pruned() {
            return write!(f, "{}", node.label());
        }

        let mut indent = String::new();
        for i in 0..=depth {
            if i > 0 && i < depth {
                indent.push('|');
            }
            indent.push_str("    ");
        }

        let feature = node.split_feature().unwrap_or_default();
        write!(f, "Feature {}:", feature_name(feature))?;
        if let Some(children) = node.children() {
            for (value, &child) in children {
                write!(f, "\n{indent}{value} ")?;
                self.fmt_node(f, child, depth + 1)?;
            }
        }
        Ok(())
    }
}


impl<L, K> fmt::Display for DecisionTree<L, K>
    where L: Label,
          K: FeatureValue,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root, 0)
    }
}


/// Finds the feature with the strictly greatest information gain,
/// or `None` when no feature gains anything.
/// Ties go to the smallest feature index.
fn best_split<D>(
    dataset: &D,
    initial_entropy: f64,
) -> Result<Option<(usize, f64)>, SaplingError>
    where D: Dataset + Sync,
{
    let n = dataset.size() as f64;
    let n_features = dataset.data()[0].feature_count();

    // Weighted post-split entropy of every candidate feature.
    // The scan is pure, so it fans out across features.
    let gains = (0..n_features)
        .into_par_iter()
        .map(|i| {
            let partitions = dataset.partition_by_feature(i)?;
            let mut weighted = 0.0;
            for subset in partitions.values() {
                weighted += (subset.size() as f64 / n) * subset.entropy()?;
            }
            Ok((i, initial_entropy - weighted))
        })
        .collect::<Result<Vec<_>, SaplingError>>()?;

    let mut best = None;
    let mut best_gain = 0.0;
    for (i, gain) in gains {
        if gain > best_gain {
            best = Some((i, gain));
            best_gain = gain;
        }
    }
    Ok(best)
}


/// Single letters for the feature indices a rendered tree shows,
/// `A` through `Z`, then plain numbers.
fn feature_name(i: usize) -> String {
    if i < 26 {
        char::from(b'A' + i as u8).to_string()
    } else {
        i.to_string()
    }
}
