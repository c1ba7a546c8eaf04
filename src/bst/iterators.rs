use super::*;

/// In-order iterator over the values of a [`Bst`].
/// Holds the stack of nodes whose left subtree was already entered, but that weren't yet yielded.
pub struct Iter<'a> {
    stack: Vec<&'a BstNode>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(tree: &'a Bst) -> Self {
        let mut res = Iter { stack: vec![] };
        res.push_left_spine(tree);
        res
    }

    // pushes the tree's root, its left son, that son's left son, and so on.
    fn push_left_spine(&mut self, mut tree: &'a Bst) {
        while let Some(node) = tree.node() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(node.value)
    }
}

/// Pre-order iterator: a node comes before its left subtree, which comes before its right subtree.
pub struct PreorderIter<'a> {
    stack: Vec<&'a BstNode>,
}

impl<'a> PreorderIter<'a> {
    pub(super) fn new(tree: &'a Bst) -> Self {
        PreorderIter {
            stack: tree.node().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.node());
        self.stack.extend(node.left.node());
        Some(node.value)
    }
}

#[test]
fn orders() {
    let tree: Bst = vec![5., 3., 8., 1., 4., 9.].into_iter().collect();
    assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1., 3., 4., 5., 8., 9.]);
    assert_eq!(
        tree.preorder().collect::<Vec<_>>(),
        vec![5., 3., 1., 4., 8., 9.]
    );
    assert_eq!(Bst::Empty.iter().next(), None);
}
