//! Rewiring primitives of the ring.
//!
//! None of these functions allocate or fail; they only rewrite `next` and
//! `prev` pointers. Ownership and length bookkeeping is done by the
//! [`List`](crate::List) that calls them.

use crate::list::node::Link;
use std::ptr::NonNull;

/// Make `prev` and `next` adjacent.
///
/// It is unsafe because both pointers must be valid links.
#[inline]
pub(crate) unsafe fn connect(prev: NonNull<Link>, next: NonNull<Link>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

/// Link a detached `node` between the adjacent links `prev` and `next`.
///
/// It is unsafe because it does not check whether `prev` and `next` are
/// adjacent links of the same ring (only in `#[cfg(debug_assertions)]`), or
/// whether `node` is detached.
pub(crate) unsafe fn link_between(prev: NonNull<Link>, next: NonNull<Link>, node: NonNull<Link>) {
    #[cfg(debug_assertions)]
    assert_adjacent(prev, next);
    connect(prev, node);
    connect(node, next);
    #[cfg(debug_assertions)]
    {
        assert_adjacent(prev, node);
        assert_adjacent(node, next);
    }
}

/// Link a detached `node` immediately before `position`.
///
/// It is unsafe for the same reasons as [`link_between`].
#[inline]
pub(crate) unsafe fn link_before(node: NonNull<Link>, position: NonNull<Link>) {
    link_between((*position.as_ptr()).prev, position, node);
}

/// Remove `node` from its ring, stitching its neighbours together.
///
/// The pointers of `node` itself are left untouched and must not be read
/// afterwards.
pub(crate) unsafe fn unlink(node: NonNull<Link>) {
    connect((*node.as_ptr()).prev, (*node.as_ptr()).next);
}

/// A chain of nodes detached from a ring, used when the contents of two
/// lists are exchanged.
///
/// When detached from a ring, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct Detached {
    pub(crate) front: NonNull<Link>,
    pub(crate) back: NonNull<Link>,
    pub(crate) len: usize,
}

/// Detach the closed range `front..=back` from its ring.
///
/// It is unsafe because `front..=back` must be a non-empty range of element
/// nodes in one ring, holding exactly `len` nodes.
pub(crate) unsafe fn detach_range(front: NonNull<Link>, back: NonNull<Link>, len: usize) -> Detached {
    debug_assert!(len > 0, "Cannot detach nodes of length 0");
    connect((*front.as_ptr()).prev, (*back.as_ptr()).next);
    Detached { front, back, len }
}

/// Attach a detached chain between the adjacent links `prev` and `next`.
///
/// It is unsafe for the same reasons as [`link_between`].
pub(crate) unsafe fn attach_range(prev: NonNull<Link>, next: NonNull<Link>, detached: &Detached) {
    #[cfg(debug_assertions)]
    assert_adjacent(prev, next);
    connect(prev, detached.front);
    connect(detached.back, next);
}

#[cfg(any(test, debug_assertions))]
pub(crate) fn assert_adjacent(prev: NonNull<Link>, next: NonNull<Link>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}
