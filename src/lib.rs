//! Classic data structures as persistent values.
//!
//! Every operation takes the current state by reference and returns an [`Outcome`]:
//! the new state, the operation's output, and a [`Message`] describing what happened.
//! Operations never fail loudly. When an operation can't be performed, the outcome holds
//! the unchanged state and an error message, and [`Outcome::error`] tells the [`ErrorKind`].
//!
//! The state the caller held before an operation is never modified, so keeping older
//! states around (for undo, for example) is just a matter of keeping the values.

#[macro_use]
extern crate derive_destructure;

pub mod bst;
pub mod error;
pub mod general_tree;
pub mod graph;
pub mod heap;
pub mod linked_list;
pub mod message;
pub mod sequences;
pub mod value;

pub use bst::Bst;
pub use error::{ErrorKind, OpError, Structure};
pub use general_tree::GeneralTree;
pub use graph::Graph;
pub use heap::{Heap, HeapMode};
pub use linked_list::LinkedList;
pub use message::{Message, MessageKind, Outcome};
pub use sequences::{Array, Deque, Queue, Stack};
pub use value::Value;
