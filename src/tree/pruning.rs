//! Reduced-error pruning against a held-out tuning dataset.
use log::{debug, trace};

use super::decision_tree::DecisionTree;
use super::node::NodeId;
use crate::dataset::{Dataset, FeatureValue, Label};
use crate::evaluation::accuracy;


impl<L, K> DecisionTree<L, K>
    where L: Label,
          K: FeatureValue,
{
    /// Prunes this tree against a disjoint tuning dataset
    /// and returns the number of branches pruned.
    ///
    /// Each round walks every unpruned branch in post order,
    /// temporarily forces it into a leaf,
    /// and re-scores the whole tree on `tuning`.
    /// The round's best candidate is committed
    /// when its accuracy at least matches the best seen,
    /// equality included: a simpler tree that classifies
    /// equally well is the better tree.
    /// Rounds repeat until one finds no candidate.
    ///
    /// Ties within a round go to the last candidate visited,
    /// i.e. the later subtree in post order.
    /// Each committed round removes one branch from consideration,
    /// so the search always reaches a fixed point.
    pub fn prune<D>(&mut self, tuning: &D) -> usize
        where D: Dataset<Label = L, Value = K>,
    {
        let mut rounds = 0;
        loop {
            let mut best: Option<NodeId> = None;
            let mut best_accuracy = accuracy(self, tuning);

            // Post-order traversal without recursion.
            // A node is evaluated only after its whole subtree was,
            // and pruned subtrees are skipped outright.
            let mut stack = vec![self.root()];
            let mut prev: Option<NodeId> = None;
            while let Some(&current) = stack.last() {
                if self.is_leaf(current) || self.is_pruned(current) {
                    prev = stack.pop();
                } else if prev
                    .is_some_and(|p| self.parent(p) == Some(current))
                {
                    // Children are done; evaluate this branch.
                    prev = stack.pop();

                    self.set_pruned(current, true);
                    let candidate = accuracy(self, tuning);
                    trace!(
                        "pruning node {current} scores {candidate:.4} \
                         against best {best_accuracy:.4}"
                    );
                    if candidate >= best_accuracy {
                        best = Some(current);
                        best_accuracy = candidate;
                    }
                    self.set_pruned(current, false);
                } else {
                    // First visit; push the children.
                    if let Some(children) = self.children(current) {
                        stack.extend(children.values().copied());
                    }
                    prev = Some(current);
                }
            }

            let Some(id) = best else { break; };
            self.set_pruned(id, true);
            rounds += 1;
            debug!(
                "round {rounds}: pruned node {id} \
                 at accuracy {best_accuracy:.4}"
            );
        }
        rounds
    }
}
