//! Defines the inner representation
//! of the decision tree.
use std::collections::BTreeMap;

use crate::dataset::{FeatureValue, Label};


/// Index of a node in the arena owned by
/// [`DecisionTree`](super::DecisionTree).
/// A child's back-reference to its parent is one of these indices,
/// so the parent's ownership of its children stays the only
/// strong reference in the structure.
pub type NodeId = usize;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node<L, K> {
    /// A node that keeps one child per feature value.
    Branch(BranchNode<L, K>),


    /// A node that has no children.
    Leaf(LeafNode<L>),
}


/// Represents the branch nodes of a decision tree.
/// A branch keeps its resolved label even though it splits,
/// so pruning can turn it into a usable leaf instantly.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BranchNode<L, K> {
    pub(crate) parent: Option<NodeId>,
    pub(crate) split_feature: usize,
    pub(crate) children: BTreeMap<K, NodeId>,
    pub(crate) label: L,
    // Forces leaf behavior without discarding the subtree,
    // so a pruning search can undo itself.
    pub(crate) pruned: bool,
}


/// Represents the leaf nodes of a decision tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LeafNode<L> {
    pub(crate) parent: Option<NodeId>,
    pub(crate) label: L,
}


impl<L, K> Node<L, K>
    where L: Label,
          K: FeatureValue,
{
    /// Construct a leaf node from the given arguments.
    #[inline]
    pub(crate) fn leaf(parent: Option<NodeId>, label: L) -> Self {
        Self::Leaf(LeafNode { parent, label })
    }


    #[inline]
    pub(crate) fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Branch(node) => node.parent,
            Node::Leaf(node) => node.parent,
        }
    }


    #[inline]
    pub(crate) fn label(&self) -> &L {
        match self {
            Node::Branch(node) => &node.label,
            Node::Leaf(node) => &node.label,
        }
    }


    /// A node without children behaves as a leaf,
    /// whether or not it was built as one.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        match self {
            Node::Branch(node) => node.children.is_empty(),
            Node::Leaf(_) => true,
        }
    }


    #[inline]
    pub(crate) fn is_pruned(&self) -> bool {
        match self {
            Node::Branch(node) => node.pruned,
            Node::Leaf(_) => false,
        }
    }


    #[inline]
    pub(crate) fn split_feature(&self) -> Option<usize> {
        match self {
            Node::Branch(node) => Some(node.split_feature),
            Node::Leaf(_) => None,
        }
    }


    #[inline]
    pub(crate) fn children(&self) -> Option<&BTreeMap<K, NodeId>> {
        match self {
            Node::Branch(node) => Some(&node.children),
            Node::Leaf(_) => None,
        }
    }
}
