//! Implementation of binary heaps
//!
//! The heap is a dense array of numbers, viewed as a complete binary tree:
//! the parent of index `i` is `(i - 1) / 2`, and its sons are `2i + 1` and `2i + 2`.
//!
//! The ordering can be switched between a min-heap and a max-heap at any time.
//! Switching re-heapifies the array in `O(n)` time.

use crate::error::{OpError, Structure};
use crate::message::{Message, Outcome};
use log::trace;
use std::fmt;
use std::rc::Rc;

/// Which value goes to the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeapMode {
    #[default]
    Min,
    Max,
}

impl HeapMode {
    pub fn flip(self) -> HeapMode {
        match self {
            HeapMode::Min => HeapMode::Max,
            HeapMode::Max => HeapMode::Min,
        }
    }

    /// Whether `parent` and `child` violate the heap order, i.e, should be swapped.
    pub fn should_swap(self, parent: f64, child: f64) -> bool {
        match self {
            HeapMode::Min => parent > child,
            HeapMode::Max => parent < child,
        }
    }
}

impl fmt::Display for HeapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapMode::Min => f.write_str("min"),
            HeapMode::Max => f.write_str("max"),
        }
    }
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_son(index: usize) -> usize {
    2 * index + 1
}

fn right_son(index: usize) -> usize {
    2 * index + 2
}

/// A binary heap. Cloning takes `O(1)` time; the values are copied on the first
/// modification of a shared heap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Heap {
    items: Rc<Vec<f64>>,
    mode: HeapMode,
}

impl Heap {
    pub fn new() -> Heap {
        Heap::default()
    }

    pub fn with_mode(mode: HeapMode) -> Heap {
        Heap {
            items: Default::default(),
            mode,
        }
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The backing array, in heap order.
    pub fn as_slice(&self) -> &[f64] {
        &self.items
    }

    /// Number of levels of the tree: `0` when empty, otherwise `floor(log2(len)) + 1`.
    pub fn height(&self) -> usize {
        (usize::BITS - self.len().leading_zeros()) as usize
    }

    /// Adds `value` at the end and sifts it up.
    ///```
    /// use classic_structures::Heap;
    ///
    /// let mut heap = Heap::new();
    /// for x in [5., 3., 8., 1.] {
    ///     heap = heap.insert(x).state;
    /// }
    /// let (heap, first, _) = heap.extract().into_parts();
    /// let (_, second, _) = heap.extract().into_parts();
    /// assert_eq!((first, second), (Some(1.), Some(3.)));
    ///```
    pub fn insert(&self, value: f64) -> Outcome<Heap> {
        let mut heap = self.clone();
        let items = Rc::make_mut(&mut heap.items);
        items.push(value);
        let last = items.len() - 1;
        sift_up(items, self.mode, last);
        let message = Message::success(format!("Inserted {} into the {} heap.", value, self.mode));
        Outcome::new(heap, (), message)
    }

    /// Removes the root, returning it as the output.
    /// The last value takes the root's place and is sifted down.
    pub fn extract(&self) -> Outcome<Heap, Option<f64>> {
        Outcome::from_result(self.try_extract(), || (self.clone(), None))
    }

    fn try_extract(&self) -> Result<(Heap, Option<f64>, Message), OpError> {
        let root = *self
            .items
            .first()
            .ok_or_else(|| OpError::empty("extract from", Structure::Heap))?;

        let mut heap = self.clone();
        let items = Rc::make_mut(&mut heap.items);
        if let Some(last) = items.pop() {
            if !items.is_empty() {
                items[0] = last;
                sift_down(items, self.mode, 0);
            }
        }
        let message = Message::success(format!("Extracted {} from the {} heap.", root, self.mode));
        Ok((heap, Some(root), message))
    }

    /// Looks at the root. The heap is returned unchanged.
    pub fn peek(&self) -> Outcome<Heap, Option<f64>> {
        let res = match self.items.first() {
            Some(&root) => Ok((
                self.clone(),
                Some(root),
                Message::info(format!("Root of the {} heap is {}.", self.mode, root)),
            )),
            None => Err(OpError::empty("peek", Structure::Heap)),
        };
        Outcome::from_result(res, || (self.clone(), None))
    }

    /// Switches between min-heap and max-heap, and rebuilds the heap order
    /// for the new mode by sifting down from the last parent to the root.
    pub fn toggle_mode(&self) -> Outcome<Heap> {
        let mut heap = self.clone();
        heap.mode = self.mode.flip();
        if heap.len() > 1 {
            let items = Rc::make_mut(&mut heap.items);
            for index in (0..items.len() / 2).rev() {
                sift_down(items, heap.mode, index);
            }
        }
        let message = Message::info(format!("Switched to {} heap.", heap.mode));
        Outcome::new(heap, (), message)
    }

    pub fn reset(&self) -> Outcome<Heap> {
        let message = Message::warning(format!("{} heap has been reset.", self.mode));
        Outcome::new(Heap::with_mode(self.mode), (), message)
    }

    /// Checks that every parent is ordered correctly relative to its sons.
    /// If not, panics.
    pub fn assert_correctness(&self) {
        for index in 1..self.len() {
            let p = parent(index);
            assert!(
                !self.mode.should_swap(self.items[p], self.items[index]),
                "{} heap order violated between index {} ({}) and index {} ({})",
                self.mode,
                p,
                self.items[p],
                index,
                self.items[index]
            );
        }
    }
}

fn sift_up(items: &mut [f64], mode: HeapMode, mut index: usize) {
    while index > 0 {
        let p = parent(index);
        if !mode.should_swap(items[p], items[index]) {
            break;
        }
        trace!("sift up: swapping index {} with parent {}", index, p);
        items.swap(p, index);
        index = p;
    }
}

// If both sons violate the order, the one that should be the root of the three wins.
fn sift_down(items: &mut [f64], mode: HeapMode, mut index: usize) {
    loop {
        let mut best = index;
        for son in [left_son(index), right_son(index)] {
            if son < items.len() && mode.should_swap(items[best], items[son]) {
                best = son;
            }
        }
        if best == index {
            break;
        }
        trace!("sift down: swapping index {} with son {}", index, best);
        items.swap(index, best);
        index = best;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn heap_of(values: &[f64], mode: HeapMode) -> Heap {
        let mut heap = Heap::with_mode(mode);
        for &x in values {
            heap = heap.insert(x).state;
            heap.assert_correctness();
        }
        heap
    }

    fn drain(mut heap: Heap) -> Vec<f64> {
        let mut out = vec![];
        while !heap.is_empty() {
            let (next, root, _) = heap.extract().into_parts();
            heap = next;
            heap.assert_correctness();
            out.extend(root);
        }
        out
    }

    #[test]
    fn min_and_max_order() {
        let values = [7., 2., 9., 4., 4., 1., 8.];
        assert_eq!(
            drain(heap_of(&values, HeapMode::Min)),
            vec![1., 2., 4., 4., 7., 8., 9.]
        );
        assert_eq!(
            drain(heap_of(&values, HeapMode::Max)),
            vec![9., 8., 7., 4., 4., 2., 1.]
        );
    }

    #[test]
    fn toggle_rebuilds() {
        let heap = heap_of(&[5., 3., 8., 1., 6.], HeapMode::Min);
        let outcome = heap.toggle_mode();
        assert_eq!(outcome.message.text, "Switched to max heap.");
        let toggled = outcome.state;
        assert_eq!(toggled.mode(), HeapMode::Max);
        toggled.assert_correctness();
        assert_eq!(toggled.peek().output, Some(8.));
        // the old heap keeps its mode and order
        assert_eq!(heap.mode(), HeapMode::Min);
        heap.assert_correctness();
    }

    #[test]
    fn extract_single_and_empty() {
        let heap = heap_of(&[42.], HeapMode::Min);
        let outcome = heap.extract();
        assert_eq!(outcome.output, Some(42.));
        assert_eq!(outcome.message.text, "Extracted 42 from the min heap.");
        assert!(outcome.state.is_empty());

        let outcome = outcome.state.extract();
        assert_eq!(outcome.error(), Some(ErrorKind::EmptyStructure));
        assert_eq!(outcome.message.text, "Cannot extract from an empty heap.");
        assert_eq!(outcome.state.peek().output, None);
    }

    #[test]
    fn heights() {
        assert_eq!(Heap::new().height(), 0);
        assert_eq!(heap_of(&[1.], HeapMode::Min).height(), 1);
        assert_eq!(heap_of(&[1., 2., 3.], HeapMode::Min).height(), 2);
        assert_eq!(heap_of(&[1., 2., 3., 4.], HeapMode::Min).height(), 3);
    }

    #[test]
    fn reset_keeps_mode() {
        let heap = heap_of(&[1., 2.], HeapMode::Max);
        let outcome = heap.reset();
        assert_eq!(outcome.message.text, "max heap has been reset.");
        assert_eq!(outcome.state.mode(), HeapMode::Max);
        assert!(outcome.state.is_empty());
    }
}
