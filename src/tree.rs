//! Decision-tree induction, classification, and pruning.

/// Defines the decision tree and its induction algorithm.
pub(crate) mod decision_tree;
/// Builds tuned trees.
pub(crate) mod builder;

// Defines the inner representation of `DecisionTree`.
mod node;
// Reduced-error pruning, implemented on `DecisionTree`.
mod pruning;


pub use builder::{DecisionTreeBuilder, Tuning};
pub use decision_tree::DecisionTree;
pub use node::NodeId;
