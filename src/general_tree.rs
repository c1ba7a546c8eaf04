//! Rooted, unordered trees where every node may have any number of children.
//!
//! Nodes are addressed by their value. Values don't have to be unique: a lookup always
//! finds the first match in pre-order (a node, then each child subtree in insertion order).

use crate::error::OpError;
use crate::message::{Message, Outcome};
use crate::value::Value;
use std::rc::Rc;

/// A node with its ordered children.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    value: Value,
    children: Vec<Rc<TreeNode>>,
}

impl TreeNode {
    pub fn new(value: Value) -> TreeNode {
        TreeNode {
            value,
            children: vec![],
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.children.iter().map(|child| &**child)
    }

    fn height(&self) -> usize {
        1 + self.children().map(TreeNode::height).max().unwrap_or(0)
    }

    // Path of child indices from this node to the first pre-order match.
    fn locate(&self, value: &Value) -> Option<Vec<usize>> {
        if &self.value == value {
            return Some(vec![]);
        }
        self.children.iter().enumerate().find_map(|(i, child)| {
            let mut path = child.locate(value)?;
            path.insert(0, i);
            Some(path)
        })
    }
}

/// A general tree. Might be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneralTree {
    root: Option<Rc<TreeNode>>,
}

impl GeneralTree {
    pub fn new() -> GeneralTree {
        GeneralTree::default()
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.root().and_then(|root| root.locate(value)).is_some()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.preorder().count()
    }

    /// `0` for an empty tree, `1` for a lone root.
    pub fn height(&self) -> usize {
        self.root().map_or(0, TreeNode::height)
    }

    /// Iterates over the values: a node, then each of its child subtrees in order.
    pub fn preorder(&self) -> impl Iterator<Item = &Value> {
        let mut stack: Vec<&TreeNode> = self.root().into_iter().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev().map(|child| &**child));
            Some(&node.value)
        })
    }

    /// Makes a lone root. Only allowed on an empty tree.
    pub fn add_root(&self, value: impl Into<Value>) -> Outcome<GeneralTree> {
        let value = value.into();
        let res = if self.is_empty() {
            let text = format!("Added {} as the root node.", value);
            let tree = GeneralTree {
                root: Some(Rc::new(TreeNode::new(value))),
            };
            Ok((tree, (), Message::success(text)))
        } else {
            Err(OpError::InvalidOperationForState(
                "Root already exists. Add child nodes instead.".to_string(),
            ))
        };
        Outcome::from_result(res, || (self.clone(), ()))
    }

    /// Appends a new leaf holding `child` to the children of the first node holding `parent`.
    ///```
    /// use classic_structures::{GeneralTree, Value};
    ///
    /// let tree = GeneralTree::new().add_root("A").state;
    /// let tree = tree.add_child("A", "B").state.add_child("A", "C").state;
    /// let tree = tree.add_child("B", "D").state;
    /// let values: Vec<_> = tree.preorder().cloned().collect();
    /// assert_eq!(values, ["A", "B", "D", "C"].iter().map(|&s| Value::from(s)).collect::<Vec<_>>());
    ///
    /// let outcome = tree.add_child("Z", "E");
    /// assert_eq!(outcome.message.text, "Parent node with value Z not found.");
    ///```
    pub fn add_child(
        &self,
        parent: impl Into<Value>,
        child: impl Into<Value>,
    ) -> Outcome<GeneralTree> {
        let (parent, child) = (parent.into(), child.into());
        Outcome::from_result(self.try_add_child(&parent, child), || (self.clone(), ()))
    }

    fn try_add_child(
        &self,
        parent: &Value,
        child: Value,
    ) -> Result<(GeneralTree, (), Message), OpError> {
        let not_found =
            || OpError::NotFound(format!("Parent node with value {} not found.", parent));
        let path = match self.root() {
            None => {
                return Err(OpError::InvalidOperationForState(
                    "Please add a root node first.".to_string(),
                ))
            }
            Some(root) => root.locate(parent).ok_or_else(not_found)?,
        };
        let text = format!("Added {} as a child of {}.", child, parent);

        // clone the path from the root down to the parent, leaving the rest shared
        let mut tree = self.clone();
        let mut node = match tree.root.as_mut() {
            Some(root) => Rc::make_mut(root),
            None => return Err(not_found()),
        };
        for ix in path {
            node = Rc::make_mut(&mut node.children[ix]);
        }
        node.children.push(Rc::new(TreeNode::new(child)));

        Ok((tree, (), Message::success(text)))
    }

    pub fn reset(&self) -> Outcome<GeneralTree> {
        Outcome::new(
            GeneralTree::new(),
            (),
            Message::warning("Tree has been reset."),
        )
    }
}
