// This is a private module, so no documentation for it directly.
// instead look for documentation of the `ListWalker` struct.

use super::*;
use recursive_reference::*;

/// A cursor over the links of a [`LinkedList`].
/// It holds a mutable reference to the list, and walks forward one link at a time.
/// Its position is a link, i.e, the `next` slot of some node (or the head slot),
/// which may be empty if the walker is past the last node.
///
/// Every node the walker steps over is made unique first, by [`Rc::make_mut`].
/// Nodes shared with an older state are cloned on the way, so that old state
/// never sees the modification.
///
/// Internally, [`recursive_reference::RecRef`] is used, in order to be able to
/// go down the chain without upsetting the borrow checker.
pub(super) struct ListWalker<'a> {
    rec_ref: RecRef<'a, Link>,
    position: usize,
}

impl<'a> ListWalker<'a> {
    pub fn new(head: &'a mut Link) -> ListWalker<'a> {
        ListWalker {
            rec_ref: RecRef::new(head),
            position: 0,
        }
    }

    /// Number of nodes before the current position.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.rec_ref.is_none()
    }

    /// Steps over the node at the current position.
    /// Fails if the current position is empty.
    pub fn go_next(&mut self) -> Result<(), ()> {
        let res = RecRef::extend_result(&mut self.rec_ref, |link| match link {
            Some(node) => Ok(&mut Rc::make_mut(node).next),
            None => Err(()),
        });
        if res.is_ok() {
            self.position += 1;
        }
        res
    }

    /// Goes forward `steps` nodes. Fails if the chain ends first.
    pub fn advance(&mut self, steps: usize) -> Result<(), ()> {
        for _ in 0..steps {
            self.go_next()?;
        }
        Ok(())
    }

    /// Goes to the empty link after the last node.
    pub fn go_to_end(&mut self) {
        while self.go_next().is_ok() {}
    }

    /// Puts a new node at the current position. The node that was there
    /// (if any) becomes the new node's successor.
    pub fn insert(&mut self, value: Value) {
        let next = self.rec_ref.take();
        *self.rec_ref = Some(Rc::new(ListNode { value, next }));
    }

    /// Splices out the node at the current position and returns its value.
    /// Returns `None` if the current position is empty.
    pub fn delete(&mut self) -> Option<Value> {
        let rc = self.rec_ref.take()?;
        let (value, next) = match Rc::try_unwrap(rc) {
            Ok(node) => (node.value, node.next),
            // still referenced by an older state
            Err(rc) => (rc.value.clone(), rc.next.clone()),
        };
        *self.rec_ref = next;
        Some(value)
    }
}

#[test]
fn walker_splices() {
    let mut head: Link = None;
    let mut walker = ListWalker::new(&mut head);
    walker.insert(Value::from(3));
    walker.insert(Value::from(1));
    walker.go_next().unwrap();
    walker.insert(Value::from(2));
    walker.go_to_end();
    assert_eq!(walker.position(), 3);
    assert!(walker.is_empty());
    assert_eq!(walker.delete(), None);
    drop(walker);

    let list = LinkedList { head };
    assert_eq!(list.to_vec(), vec![Value::from(1), Value::from(2), Value::from(3)]);
}
