//! The linked list module.
//! This module implements a persistent singly linked list.
//!
//! The list is identified by its head link. Each node is owned by its predecessor
//! (or by the list, for the head), and there are no back references, so every
//! traversal goes forward from the head.
//!
//! # Persistence
//!
//! Nodes are held in [`std::rc::Rc`] pointers. Cloning a list takes `O(1)` time.
//! When an operation modifies the list, the nodes from the head to the modified link are
//! cloned, unless the list is their only owner, in which case they are mutated directly.
//! The nodes after the modified link stay shared between the old and the new list.

use crate::error::{OpError, Structure};
use crate::message::{Message, Outcome};
use crate::value::Value;
use std::fmt;
use std::rc::Rc;

mod iterative_deallocator;
mod walker;

use iterative_deallocator::deallocate_iteratively;
use walker::ListWalker;

type Link = Option<Rc<ListNode>>;

/// A node of the list: a value and the link to the next node.
#[derive(Clone, Debug)]
pub struct ListNode {
    value: Value,
    next: Link,
}

impl ListNode {
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn next(&self) -> Option<&ListNode> {
        self.next.as_deref()
    }
}

/// A singly linked list. Might be empty.
#[derive(Clone, Default)]
pub struct LinkedList {
    head: Link,
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        deallocate_iteratively(&mut self.head);
    }
}

impl LinkedList {
    pub fn new() -> LinkedList {
        LinkedList { head: None }
    }

    pub fn head(&self) -> Option<&ListNode> {
        self.head.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Takes `O(n)` time.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { node: self.head() }
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// The position of the first node holding `value`, if any.
    pub fn position_of(&self, value: &Value) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Attaches a new node after the last node. If the list is empty,
    /// the new node becomes the head.
    pub fn append(&self, value: impl Into<Value>) -> Outcome<LinkedList> {
        let value = value.into();
        let text = if self.is_empty() {
            format!("Added {} as the head of the linked list.", value)
        } else {
            format!("Appended {} to the end of the linked list.", value)
        };
        let mut res = self.clone();
        let mut walker = ListWalker::new(&mut res.head);
        walker.go_to_end();
        walker.insert(value);
        drop(walker);
        Outcome::new(res, (), Message::success(text))
    }

    /// Makes a new head whose successor is the current head. Takes `O(1)` time.
    ///```
    /// use classic_structures::LinkedList;
    /// use classic_structures::Value;
    ///
    /// let list = LinkedList::new().prepend("b").state.prepend("a").state;
    /// assert_eq!(list.to_vec(), vec![Value::from("a"), Value::from("b")]);
    /// assert_eq!(list.search("b").output, Some(1));
    ///```
    pub fn prepend(&self, value: impl Into<Value>) -> Outcome<LinkedList> {
        let value = value.into();
        let text = format!("Prepended {} to the beginning of the linked list.", value);
        let res = LinkedList {
            head: Some(Rc::new(ListNode {
                value,
                next: self.head.clone(),
            })),
        };
        Outcome::new(res, (), Message::success(text))
    }

    /// Removes the first node holding `value`. The output is whether a node was removed.
    pub fn remove(&self, value: impl Into<Value>) -> Outcome<LinkedList, bool> {
        let value = value.into();
        Outcome::from_result(self.try_remove(&value), || (self.clone(), false))
    }

    fn try_remove(&self, value: &Value) -> Result<(LinkedList, bool, Message), OpError> {
        if self.is_empty() {
            return Err(OpError::empty("remove from", Structure::LinkedList));
        }
        let position = self.position_of(value).ok_or_else(|| not_found(value))?;

        let mut res = self.clone();
        let mut walker = ListWalker::new(&mut res.head);
        walker.advance(position).map_err(|_| not_found(value))?;
        walker.delete().ok_or_else(|| not_found(value))?;
        drop(walker);

        let text = if position == 0 {
            format!("Removed {} from the head of the linked list.", value)
        } else {
            format!("Removed {} from the linked list.", value)
        };
        Ok((res, true, Message::success(text)))
    }

    /// Looks for the first node holding `value`. The output is its zero-based position.
    pub fn search(&self, value: impl Into<Value>) -> Outcome<LinkedList, Option<usize>> {
        let value = value.into();
        let res = if self.is_empty() {
            Err(OpError::empty("search", Structure::LinkedList))
        } else {
            match self.position_of(&value) {
                Some(position) => {
                    let text = format!(
                        "Found {} at position {} in the linked list.",
                        value, position
                    );
                    Ok((self.clone(), Some(position), Message::success(text)))
                }
                None => Err(not_found(&value)),
            }
        };
        Outcome::from_result(res, || (self.clone(), None))
    }

    pub fn reset(&self) -> Outcome<LinkedList> {
        Outcome::new(
            LinkedList::new(),
            (),
            Message::warning("Linked list has been reset."),
        )
    }
}

fn not_found(value: &Value) -> OpError {
    OpError::NotFound(format!("Value {} not found in the linked list.", value))
}

/// Iterates over the values of the list, from the head.
pub struct Iter<'a> {
    node: Option<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next();
        Some(&node.value)
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Into<Value>> std::iter::FromIterator<V> for LinkedList {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut list = LinkedList::new();
        let mut walker = ListWalker::new(&mut list.head);
        for value in iter {
            walker.insert(value.into());
            // the inserted node is fresh, so this never fails
            let _ = walker.go_next();
        }
        drop(walker);
        list
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
