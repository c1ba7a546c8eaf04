//! The binary search tree module.
//! This module implements persistent, unbalanced binary search trees over numbers.
//!
//! For every node, all the values in its left subtree are smaller than the node's value,
//! and all the values in its right subtree are bigger. Duplicate values are never stored.
//!
//! # Persistence
//!
//! Persistence is implemented using [`std::rc::Rc`] pointers, the same way as for
//! [`crate::LinkedList`]: an operation clones the nodes on the path from the root to the
//! modified position, unless the tree is their only owner. Every other subtree is shared
//! between the old and the new tree.

use crate::error::{OpError, Structure};
use crate::message::{Message, Outcome};
use std::rc::Rc;

mod iterators;
pub use iterators::*;

/// A binary search tree. Might be empty.
#[derive(Clone, Debug, Default)]
pub enum Bst {
    /// An empty tree
    #[default]
    Empty,
    /// A non empty tree, with a root node
    Root(Rc<BstNode>),
}
use Bst::*;

/// A node of a [`Bst`]. Can be viewed as a non-empty tree.
#[derive(Clone, Debug)]
pub struct BstNode {
    value: f64,
    pub left: Bst,
    pub right: Bst,
}

impl BstNode {
    pub fn new(value: f64) -> BstNode {
        BstNode {
            value,
            left: Empty,
            right: Empty,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Bst {
    pub fn new() -> Bst {
        Empty
    }

    /// Constructs a new non-empty tree from a node.
    pub fn from_node(node: BstNode) -> Bst {
        Root(Rc::new(node))
    }

    /// Returns The inner node.
    pub fn node(&self) -> Option<&BstNode> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Returns The inner node, cloning it first if it is shared with another tree.
    fn node_mut(&mut self) -> Option<&mut BstNode> {
        match self {
            Empty => None,
            Root(node) => Some(Rc::make_mut(node)),
        }
    }

    /// Useful for the algorithms that need to gain ownership of parts of the tree.
    fn take(&mut self) -> Bst {
        std::mem::take(self)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    /// Takes `O(n)` time.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// `0` for an empty tree, otherwise `1 +` the height of the taller subtree.
    pub fn height(&self) -> usize {
        match self.node() {
            None => 0,
            Some(node) => 1 + node.left.height().max(node.right.height()),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        match self.node() {
            None => false,
            Some(node) if value == node.value => true,
            Some(node) if value < node.value => node.left.contains(value),
            Some(node) => node.right.contains(value),
        }
    }

    pub fn min(&self) -> Option<f64> {
        let mut node = self.node()?;
        while let Some(left) = node.left.node() {
            node = left;
        }
        Some(node.value)
    }

    pub fn max(&self) -> Option<f64> {
        let mut node = self.node()?;
        while let Some(right) = node.right.node() {
            node = right;
        }
        Some(node.value)
    }

    /// Iterates over the values in increasing order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub fn preorder(&self) -> PreorderIter<'_> {
        PreorderIter::new(self)
    }

    /// Inserts `value`, unless it is already in the tree.
    ///```
    /// use classic_structures::Bst;
    ///
    /// let tree = Bst::new().insert(5.).state.insert(3.).state.insert(8.).state;
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![3., 5., 8.]);
    ///
    /// let outcome = tree.insert(3.);
    /// assert_eq!(outcome.message.text, "Value 3 already exists in the BST.");
    /// # tree.assert_correctness();
    ///```
    pub fn insert(&self, value: f64) -> Outcome<Bst> {
        let res = if self.contains(value) {
            Err(OpError::DuplicateIdentity(format!(
                "Value {} already exists in the BST.",
                value
            )))
        } else {
            let mut tree = self.clone();
            tree.insert_value(value);
            Ok((tree, (), Message::success(format!("Inserted {} into the BST.", value))))
        };
        Outcome::from_result(res, || (self.clone(), ()))
    }

    /// Removes `value` from the tree.
    pub fn remove(&self, value: f64) -> Outcome<Bst> {
        let res = if self.is_empty() {
            Err(OpError::empty("remove from", Structure::Bst))
        } else if !self.contains(value) {
            Err(OpError::NotFound(format!(
                "Value {} does not exist in the BST.",
                value
            )))
        } else {
            let mut tree = self.clone();
            tree.remove_value(value);
            Ok((tree, (), Message::success(format!("Removed {} from the BST.", value))))
        };
        Outcome::from_result(res, || (self.clone(), ()))
    }

    /// Searches for `value`. The output is whether it was found.
    pub fn search(&self, value: f64) -> Outcome<Bst, bool> {
        let res = if self.is_empty() {
            Err(OpError::empty("search", Structure::Bst))
        } else if self.contains(value) {
            Ok((
                self.clone(),
                true,
                Message::success(format!("Found {} in the BST.", value)),
            ))
        } else {
            Err(OpError::NotFound(format!(
                "Value {} not found in the BST.",
                value
            )))
        };
        Outcome::from_result(res, || (self.clone(), false))
    }

    pub fn reset(&self) -> Outcome<Bst> {
        Outcome::new(Empty, (), Message::warning("BST has been reset."))
    }

    // Descends to the empty position where `value` belongs, and puts a new leaf there.
    // Does nothing if `value` is already present.
    fn insert_value(&mut self, value: f64) {
        match self.node_mut() {
            None => *self = Bst::from_node(BstNode::new(value)),
            Some(node) => {
                if value < node.value {
                    node.left.insert_value(value);
                } else if value > node.value {
                    node.right.insert_value(value);
                }
            }
        }
    }

    // Assumes `value` is present.
    fn remove_value(&mut self, value: f64) {
        let node = match self.node_mut() {
            None => return,
            Some(node) => node,
        };
        if value < node.value {
            node.left.remove_value(value);
        } else if value > node.value {
            node.right.remove_value(value);
        } else if node.left.is_empty() {
            let right = node.right.take();
            *self = right;
        } else if node.right.is_empty() {
            let left = node.left.take();
            *self = left;
        } else if let Some(successor) = node.right.min() {
            // two sons: the in-order successor takes this node's place
            node.value = successor;
            node.right.remove_value(successor);
        }
    }

    /// Checks that the ordering invariant holds for every node.
    /// If it is violated, panics.
    pub fn assert_correctness(&self) {
        Self::assert_correctness_internal(self, None, None);
    }

    fn assert_correctness_internal(tree: &Bst, lower: Option<f64>, upper: Option<f64>) {
        if let Some(node) = tree.node() {
            if let Some(lower) = lower {
                assert!(node.value > lower, "{} is not bigger than {}", node.value, lower);
            }
            if let Some(upper) = upper {
                assert!(node.value < upper, "{} is not smaller than {}", node.value, upper);
            }
            Self::assert_correctness_internal(&node.left, lower, Some(node.value));
            Self::assert_correctness_internal(&node.right, Some(node.value), upper);
        }
    }
}

/// Inserts the values one by one, skipping duplicates.
impl std::iter::FromIterator<f64> for Bst {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut tree = Empty;
        for value in iter {
            tree.insert_value(value);
        }
        tree
    }
}

/// Two trees are equal if they have the same shape and values.
impl PartialEq for Bst {
    fn eq(&self, other: &Self) -> bool {
        match (self.node(), other.node()) {
            (None, None) => true,
            (Some(a), Some(b)) => a.value == b.value && a.left == b.left && a.right == b.right,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn tree_of(values: &[f64]) -> Bst {
        values.iter().copied().collect()
    }

    #[test]
    fn insert_keeps_order() {
        let mut tree = Bst::new();
        for &x in &[50., 30., 70., 20., 40., 60., 80., 35.] {
            tree = tree.insert(x).state;
            tree.assert_correctness();
        }
        assert_eq!(tree.len(), 8);
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.min(), Some(20.));
        assert_eq!(tree.max(), Some(80.));
    }

    #[test]
    fn duplicate_rejected() {
        let tree = tree_of(&[2., 1.]);
        let outcome = tree.insert(1.);
        assert_eq!(outcome.error(), Some(ErrorKind::DuplicateIdentity));
        assert_eq!(outcome.state, tree);
    }

    #[test]
    fn remove_cases() {
        let tree = tree_of(&[50., 30., 70., 20., 40., 60., 80., 35.]);

        // leaf
        let leaf = tree.remove(20.).state;
        leaf.assert_correctness();
        assert!(!leaf.contains(20.));

        // one son
        let one = tree.remove(40.).state;
        one.assert_correctness();
        assert_eq!(one.iter().collect::<Vec<_>>(), vec![20., 30., 35., 50., 60., 70., 80.]);

        // two sons: 50 is replaced by its successor 60
        let two = tree.remove(50.);
        assert_eq!(two.message.text, "Removed 50 from the BST.");
        let two = two.state;
        two.assert_correctness();
        assert_eq!(two.node().map(BstNode::value), Some(60.));
        assert_eq!(two.len(), 7);

        // the original is untouched
        assert_eq!(tree, tree_of(&[50., 30., 70., 20., 40., 60., 80., 35.]));
    }

    #[test]
    fn remove_errors() {
        let outcome = Bst::new().remove(1.);
        assert_eq!(outcome.error(), Some(ErrorKind::EmptyStructure));
        assert_eq!(outcome.message.text, "Cannot remove from an empty BST.");

        let outcome = tree_of(&[1.]).remove(2.);
        assert_eq!(outcome.error(), Some(ErrorKind::NotFound));
        assert_eq!(outcome.message.text, "Value 2 does not exist in the BST.");
    }

    #[test]
    fn search() {
        let tree = tree_of(&[4., 2., 6.]);
        let outcome = tree.search(6.);
        assert!(outcome.output);
        assert_eq!(outcome.message.text, "Found 6 in the BST.");

        let outcome = tree.search(5.);
        assert!(!outcome.output);
        assert_eq!(outcome.error(), Some(ErrorKind::NotFound));

        let outcome = Bst::new().search(5.);
        assert_eq!(outcome.message.text, "Cannot search an empty BST.");
    }

    #[test]
    fn height_of_empty_and_chain() {
        assert_eq!(Bst::new().height(), 0);
        assert_eq!(tree_of(&[1., 2., 3., 4.]).height(), 4);
    }
}
