//! The sequence-backed structures: array, stack, queue and deque.
//!
//! All four are thin wrappers around [`Sequence`], an ordered run of [`Value`]s.
//!
//! # Persistence
//!
//! A [`Sequence`] keeps its items behind an [`Rc`]. Cloning a sequence takes `O(1)` time,
//! and an operation only copies the items if another clone still points at them.
//! Every operation returns a new state, so the state the caller held before the
//! operation always stays exactly as it was.

use crate::error::{OpError, Structure};
use crate::message::{Message, Outcome};
use crate::value::Value;
use std::rc::Rc;

#[macro_use]
mod macros;

pub mod deque;
pub mod queue;
pub mod stack;

pub use deque::Deque;
pub use queue::Queue;
pub use stack::Stack;

/// An ordered sequence of values. No uniqueness constraint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequence {
    items: Rc<Vec<Value>>,
}

impl Sequence {
    pub fn new() -> Sequence {
        Sequence::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Inserts `value` before position `index`. Valid for `0 <= index <= len`.
    pub fn insert_at(&self, value: Value, index: isize) -> Result<Sequence, OpError> {
        let ix = self.check_index(index, self.len() as isize)?;
        let mut res = self.clone();
        Rc::make_mut(&mut res.items).insert(ix, value);
        Ok(res)
    }

    /// Removes the value at `index`. Valid for `0 <= index < len`.
    pub fn remove_at(&self, index: isize) -> Result<(Sequence, Value), OpError> {
        let ix = self.check_index(index, self.len() as isize - 1)?;
        let mut res = self.clone();
        let removed = Rc::make_mut(&mut res.items).remove(ix);
        Ok((res, removed))
    }

    /// The value at `index`. Valid for `0 <= index < len`.
    pub fn view_at(&self, index: isize) -> Result<&Value, OpError> {
        let ix = self.check_index(index, self.len() as isize - 1)?;
        Ok(&self.items[ix])
    }

    pub fn push_back(&self, value: Value) -> Sequence {
        let mut res = self.clone();
        Rc::make_mut(&mut res.items).push(value);
        res
    }

    pub fn push_front(&self, value: Value) -> Sequence {
        let mut res = self.clone();
        Rc::make_mut(&mut res.items).insert(0, value);
        res
    }

    /// Removes the last value. `None` if the sequence is empty.
    pub fn pop_back(&self) -> Option<(Sequence, Value)> {
        let mut res = self.clone();
        let removed = Rc::make_mut(&mut res.items).pop()?;
        Some((res, removed))
    }

    /// Removes the first value. `None` if the sequence is empty.
    pub fn pop_front(&self) -> Option<(Sequence, Value)> {
        if self.is_empty() {
            return None;
        }
        let mut res = self.clone();
        let removed = Rc::make_mut(&mut res.items).remove(0);
        Some((res, removed))
    }

    // `max` is inclusive. It is `-1` for removal from an empty sequence.
    fn check_index(&self, index: isize, max: isize) -> Result<usize, OpError> {
        match usize::try_from(index) {
            Ok(ix) if index <= max => Ok(ix),
            _ => Err(OpError::OutOfRange { index, max }),
        }
    }
}

impl<V: Into<Value>> std::iter::FromIterator<V> for Sequence {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Sequence {
            items: Rc::new(iter.into_iter().map(Into::into).collect()),
        }
    }
}

derive_sequence_wrapper! {
    /// A fixed-order array with positional insertion, removal and lookup.
    Array, Structure::Array, "Array has been reset."
}

impl Array {
    /// Inserts `value` before position `index`, shifting the rest to the right.
    ///```
    /// use classic_structures::sequences::Array;
    /// use classic_structures::{MessageKind, Value};
    ///
    /// let array = Array::new();
    /// let outcome = array.insert_at("x", 0);
    /// assert_eq!(outcome.message.text, "Added x at index 0.");
    /// assert_eq!(outcome.state.as_slice(), &[Value::from("x")]);
    ///
    /// let outcome = outcome.state.remove_at(5);
    /// assert_eq!(outcome.message.kind, MessageKind::Error);
    /// assert_eq!(outcome.output, None);
    /// assert_eq!(outcome.state.len(), 1);
    ///```
    pub fn insert_at(&self, value: impl Into<Value>, index: isize) -> Outcome<Array> {
        let value = value.into();
        let res = self.seq.insert_at(value.clone(), index).map(|seq| {
            let message = Message::success(format!("Added {} at index {}.", value, index));
            (Array::from_seq(seq), (), message)
        });
        Outcome::from_result(res, || (self.clone(), ()))
    }

    /// Removes the value at `index`, returning it as the output.
    pub fn remove_at(&self, index: isize) -> Outcome<Array, Option<Value>> {
        let res = self.seq.remove_at(index).map(|(seq, removed)| {
            let message = Message::success(format!("Removed {} from index {}.", removed, index));
            (Array::from_seq(seq), Some(removed), message)
        });
        Outcome::from_result(res, || (self.clone(), None))
    }

    /// Looks up the value at `index`. The array is returned unchanged.
    pub fn view_at(&self, index: isize) -> Outcome<Array, Option<Value>> {
        let res = self.seq.view_at(index).map(|value| {
            let message = Message::info(format!("Value at index {} is {}.", index, value));
            (self.clone(), Some(value.clone()), message)
        });
        Outcome::from_result(res, || (self.clone(), None))
    }
}
