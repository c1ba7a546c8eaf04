use super::*;

/// The auto-generated deallocation code for a chain of [`ListNode`]s is recursive.
/// Since lists can be arbitrarily long, deallocating a large list could cause a stack overflow.
///
/// Therefore the chain is unlinked one node at a time here. Deallocation stops at the first
/// node that is still shared with another list; that list owns the rest of the chain.
/// Input is a reference and not an owned value so that this function can get
/// called in `Drop` implementations.
pub(super) fn deallocate_iteratively(head: &mut Link) {
    let mut link = head.take();
    while let Some(rc) = link {
        link = match Rc::try_unwrap(rc) {
            Ok(mut node) => node.next.take(),
            Err(_) => None,
        };
    }
}

#[test]
fn long_list_drops() {
    let mut list = LinkedList::new();
    for x in 0..200_000 {
        list = list.prepend(x).state;
    }
    let shared = list.clone();
    drop(list);
    assert_eq!(shared.len(), 200_000);
    drop(shared);
}
