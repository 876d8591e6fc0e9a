use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use allocator_api2::alloc::{AllocError, Allocator, Global};

use crate::error::InsertError;
use crate::list::allocator::NodeAllocator;
use crate::list::cursor::{Cursor, CursorMut};
use crate::list::node::{Ghost, Link, Node};
use crate::list::ring::Detached;
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;
mod allocator;
mod node;
mod ring;

/// The `List` is a doubly-linked list with owned nodes, implemented as a ring
/// anchored by a ghost node. It allows inserting, removing elements at any
/// given position in constant time. In compromise, accessing or mutating
/// elements at any position take *O*(*n*) time.
///
/// Every element node is allocated by the allocator `A`, rebound to the node
/// type, so `A` observes the full footprint of each node.
///
/// The `List` contains:
/// - the ghost node, which has no payload and marks both ends of the ring;
/// - the length of the list, counting the element nodes linked in the ring;
/// - the allocator.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct List<T, A: Allocator = Global> {
    ghost: Ghost,
    /// the number of element nodes linked in the ring
    len: usize,
    alloc: NodeAllocator<T, A>,
    _marker: PhantomData<Box<Node<T>>>,
}

// private methods
impl<T, A: Allocator> List<T, A> {
    #[inline]
    pub(crate) fn ghost_node(&self) -> NonNull<Link> {
        self.ghost.link()
    }
    #[inline]
    pub(crate) fn front_node(&self) -> NonNull<Link> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { self.ghost_node().as_ref().next }
    }
    #[inline]
    pub(crate) fn back_node(&self) -> NonNull<Link> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { self.ghost_node().as_ref().prev }
    }

    /// Allocate and construct a detached node holding the element produced
    /// by `f`.
    ///
    /// If `f` panics, the storage is released and the panic is propagated.
    pub(crate) fn new_node<F: FnOnce() -> T>(&self, f: F) -> NonNull<Link> {
        Node::as_link(self.alloc.allocate().construct(f))
    }

    /// Like [`List::new_node`], but return the allocator's error instead of
    /// diverging.
    pub(crate) fn try_new_node<F: FnOnce() -> T>(&self, f: F) -> Result<NonNull<Link>, AllocError> {
        Ok(Node::as_link(self.alloc.try_allocate()?.construct(f)))
    }

    /// Attach a detached node `node` to the list, right before `next`.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// list, or whether `node` is a detached node allocated by this list.
    pub(crate) unsafe fn attach_node(&mut self, next: NonNull<Link>, node: NonNull<Link>) {
        ring::link_before(node, next);
        self.len += 1;
    }

    /// Detach a single element node `node` from the list, release its
    /// storage, and return its element.
    ///
    /// It is unsafe because it does not check whether `node` is an element
    /// node of the list.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Link>) -> T {
        debug_assert_ne!(node, self.ghost_node(), "Cannot detach the ghost node");
        ring::unlink(node);
        self.len -= 1;
        self.alloc.release(Node::from_link(node))
    }

    /// Detach all nodes from the list, and return the detached nodes, or return
    /// `None` if the list is empty.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a valid range.
    fn detach_all_nodes(&mut self) -> Option<Detached> {
        if self.is_empty() {
            return None;
        }
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: the list is not empty, so `front..=back` is a valid range
        // holding exactly `len` element nodes.
        unsafe { Some(ring::detach_range(self.front_node(), self.back_node(), len)) }
    }

    /// Attach detached nodes to an empty list.
    ///
    /// It is unsafe because the detached nodes must have been allocated by an
    /// allocator that is (or will become) the allocator of this list.
    unsafe fn attach_all_nodes(&mut self, detached: Detached) {
        debug_assert!(self.is_empty());
        ring::attach_range(self.ghost_node(), self.ghost_node(), &detached);
        self.len = detached.len;
    }

    /// Walk the ring in both directions and check it against `len`.
    #[cfg(test)]
    pub(crate) fn check_ring(&self) {
        let ghost = self.ghost_node();
        let mut forward = 0;
        let mut ptr = self.front_node();
        while ptr != ghost {
            // SAFETY: every link in the ring is valid.
            unsafe { ring::assert_adjacent(ptr.as_ref().prev, ptr) };
            forward += 1;
            ptr = unsafe { ptr.as_ref().next };
        }
        let mut backward = 0;
        let mut ptr = self.back_node();
        while ptr != ghost {
            backward += 1;
            ptr = unsafe { ptr.as_ref().prev };
        }
        assert_eq!(forward, self.len, "forward walk disagrees with `len`");
        assert_eq!(backward, self.len, "backward walk disagrees with `len`");
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// No node is allocated.
    ///
    /// # Examples
    /// ```
    /// use ringlist::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates a `List` holding `count` clones of `value`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list = List::from_elem(3, &'x');
    /// assert_eq!(Vec::from_iter(list), vec!['x', 'x', 'x']);
    /// ```
    pub fn from_elem(count: usize, value: &T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(count, value, Global)
    }

    /// Creates a `List` holding `count` default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list: List<i32> = List::with_len(2);
    /// assert_eq!(Vec::from_iter(list), vec![0, 0]);
    /// ```
    pub fn with_len(count: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::from_elem(count, &T::default())
    }
}

impl<T, A: Allocator> List<T, A> {
    /// Create an empty `List` whose nodes will be allocated by `alloc`.
    ///
    /// No node is allocated.
    ///
    /// # Examples
    /// ```
    /// use ringlist::List;
    /// use allocator_api2::alloc::Global;
    ///
    /// let list: List<u32, _> = List::new_in(Global);
    /// assert!(list.is_empty());
    /// ```
    pub fn new_in(alloc: A) -> Self {
        let ghost = Ghost::new();
        let len = 0;
        let alloc = NodeAllocator::new(alloc);
        let _marker = PhantomData;
        Self {
            ghost,
            len,
            alloc,
            _marker,
        }
    }

    /// Creates a `List` holding `count` clones of `value`, allocated by `alloc`.
    ///
    /// If a clone of `value` panics, every node built so far is destroyed and
    /// released before the panic is propagated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use allocator_api2::alloc::Global;
    ///
    /// let list = List::from_elem_in(2, &"a", Global);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn from_elem_in(count: usize, value: &T, alloc: A) -> Self
    where
        T: Clone,
    {
        let mut list = Self::new_in(alloc);
        for _ in 0..count {
            let node = list.new_node(|| value.clone());
            // SAFETY: the ghost node belongs to the list and `node` is detached.
            unsafe { list.attach_node(list.ghost_node(), node) };
        }
        list
    }

    /// Like [`List::from_elem_in`], but returns the allocator's error when it
    /// cannot supply a node. Every node built so far is released before the
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use allocator_api2::alloc::Global;
    ///
    /// let list = List::try_from_elem_in(2, &1, Global).unwrap();
    /// assert_eq!(Vec::from_iter(list), vec![1, 1]);
    /// ```
    pub fn try_from_elem_in(count: usize, value: &T, alloc: A) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut list = Self::new_in(alloc);
        for _ in 0..count {
            let node = list.try_new_node(|| value.clone())?;
            // SAFETY: the ghost node belongs to the list and `node` is detached.
            unsafe { list.attach_node(list.ghost_node(), node) };
        }
        Ok(list)
    }

    /// Returns a reference to the underlying allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.alloc.inner()
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the front node is an element node,
        // and `&mut self` guarantees exclusive access.
        unsafe { Some(Node::element_mut(self.front_node())) }
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    ///
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the back node is an element node,
        // and `&mut self` guarantees exclusive access.
        unsafe { Some(Node::element_mut(self.back_node())) }
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = self.new_node(|| elt);
        // SAFETY: the front node belongs to the list and `node` is detached.
        unsafe { self.attach_node(self.front_node(), node) };
    }

    /// Adds an element first in the list, or hands it back if the allocator
    /// cannot supply a node. The list is unchanged on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    /// list.try_push_front(1).unwrap();
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn try_push_front(&mut self, elt: T) -> Result<(), InsertError<T>> {
        let node = match self.alloc.try_allocate() {
            Ok(uninit) => Node::as_link(uninit.construct(|| elt)),
            Err(error) => return Err(InsertError::new(elt, error)),
        };
        // SAFETY: the front node belongs to the list and `node` is detached.
        unsafe { self.attach_node(self.front_node(), node) };
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the front node is an element node.
        unsafe { Some(self.detach_node(self.front_node())) }
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = self.new_node(|| elt);
        // SAFETY: the ghost node belongs to the list and `node` is detached.
        unsafe { self.attach_node(self.ghost_node(), node) };
    }

    /// Appends an element to the back of a list, or hands it back if the
    /// allocator cannot supply a node. The list is unchanged on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    /// list.try_push_back(1).unwrap();
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn try_push_back(&mut self, elt: T) -> Result<(), InsertError<T>> {
        let node = match self.alloc.try_allocate() {
            Ok(uninit) => Node::as_link(uninit.construct(|| elt)),
            Err(error) => return Err(InsertError::new(elt, error)),
        };
        // SAFETY: the ghost node belongs to the list and `node` is detached.
        unsafe { self.attach_node(self.ghost_node(), node) };
        Ok(())
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the back node is an element node.
        unsafe { Some(self.detach_node(self.back_node())) }
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is pointing to the "ghost" node if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T, A> {
        assert!(
            at <= self.len,
            "Cannot create cursor at a nonexistent index"
        );
        let mut cursor = self.cursor_start();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the "ghost" node if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T, A> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T, A> {
        Cursor::new(self, self.ghost_node(), self.len)
    }

    /// Provides a cursor with editing operations at the node with given index.
    ///
    /// By convention, the cursor is pointing to the "ghost" node if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// assert_eq!(list.cursor_mut(3).current_mut(), None);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T, A> {
        assert!(
            at <= self.len,
            "Cannot create cursor at a nonexistent index"
        );
        let mut cursor = self.cursor_start_mut();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is pointing to the "ghost" node if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T, A> {
        let front = self.front_node();
        CursorMut::new(self, front, 0)
    }

    /// Provides a cursor with editing operations at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// if let Some(x) = cursor.previous_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.previous(), Some(&15));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T, A> {
        let (ghost, len) = (self.ghost_node(), self.len);
        CursorMut::new(self, ghost, len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.front_node(), self.ghost_node(), self.len)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.front_node(), self.ghost_node(), self.len)
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_front(3);
    ///
    /// assert_eq!(list.remove(1), 2);
    /// assert_eq!(list.remove(0), 3);
    /// assert_eq!(list.remove(0), 1);
    /// ```
    pub fn remove(&mut self, at: usize) -> T {
        assert!(
            at < self.len,
            "Cannot remove at an index outside of the list bounds"
        );
        self.cursor_mut(at)
            .remove()
            .expect("Cannot remove at an index outside of the list bounds")
    }

    /// Adds an element at the given index in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4);
    /// list.insert(4, 5);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) {
        assert!(
            at <= self.len,
            "Cannot insert at an index outside of the list bounds"
        );
        self.cursor_mut(at).insert(elt);
    }

    /// Exchanges the contents of two lists, including their allocators.
    ///
    /// No element is moved or copied: the nodes are relinked to the other
    /// list's ghost node. Empty lists on either side are handled as well.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut a = List::from_iter([1, 2]);
    /// let mut b = List::new();
    /// a.swap(&mut b);
    /// assert!(a.is_empty());
    /// assert_eq!(Vec::from_iter(b), vec![1, 2]);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        let mine = self.detach_all_nodes();
        let theirs = other.detach_all_nodes();
        mem::swap(&mut self.alloc, &mut other.alloc);
        // SAFETY: both lists are empty now, and each chain goes to the list
        // that now owns the allocator its nodes came from.
        unsafe {
            if let Some(detached) = theirs {
                self.attach_all_nodes(detached);
            }
            if let Some(detached) = mine {
                other.attach_all_nodes(detached);
            }
        }
    }

    /// Moves all elements, along with the allocator, into a new list, leaving
    /// `self` empty with a default-constructed allocator.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let moved = list.take();
    /// assert!(list.is_empty());
    /// assert_eq!(Vec::from_iter(moved), vec![1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> Self
    where
        A: Default,
    {
        let mut moved = Self::new_in(A::default());
        moved.swap(self);
        moved
    }
}

impl<T: Clone, A: Allocator + Clone> List<T, A> {
    /// Copies the list into a new one, or returns the allocator's error.
    ///
    /// The new list's allocator is a clone of this list's allocator. If the
    /// allocator fails, or a clone of an element panics, every node copied so
    /// far is released and `self` is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let copy = list.try_clone().unwrap();
    /// assert_eq!(list, copy);
    /// ```
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut list = Self::new_in(self.allocator().clone());
        for elt in self {
            let node = list.try_new_node(|| elt.clone())?;
            // SAFETY: the ghost node belongs to the list and `node` is detached.
            unsafe { list.attach_node(list.ghost_node(), node) };
        }
        Ok(list)
    }

    /// Replaces the contents of `self` with a copy of `source`.
    ///
    /// The copy is fully built before `self` is touched, and then swapped in.
    /// On failure `self` is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.try_clone_from(&List::from_iter([4, 5])).unwrap();
    /// assert_eq!(Vec::from_iter(list), vec![4, 5]);
    /// ```
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), AllocError> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for List<T, A> {
    fn clone(&self) -> Self {
        let mut list = Self::new_in(self.allocator().clone());
        for elt in self {
            let node = list.new_node(|| elt.clone());
            // SAFETY: the ghost node belongs to the list and `node` is detached.
            unsafe { list.attach_node(list.ghost_node(), node) };
        }
        list
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

/// Exchanges the contents of two lists. See [`List::swap`].
///
/// # Examples
///
/// ```
/// use ringlist::List;
///
/// let mut a = List::from_iter([1]);
/// let mut b = List::from_iter([2, 3]);
/// ringlist::swap(&mut a, &mut b);
/// assert_eq!(Vec::from_iter(a), vec![2, 3]);
/// assert_eq!(Vec::from_iter(b), vec![1]);
/// ```
#[inline]
pub fn swap<T, A: Allocator>(lhs: &mut List<T, A>, rhs: &mut List<T, A>) {
    lhs.swap(rhs)
}

impl<T: Debug, A: Allocator> Debug for List<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, A: Allocator + Default> Default for List<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, A: Allocator> Drop for List<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send, A: Allocator + Send> Send for List<T, A> {}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for List<T, A> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{swap, List};
    use crate::testing::{Bomb, CountingAlloc};
    use allocator_api2::alloc::AllocError;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn list_eq<T, A, I>(list: &List<T, A>, expected: I)
    where
        T: Debug + Clone + Eq,
        A: allocator_api2::alloc::Allocator,
        I: IntoIterator<Item = T>,
    {
        list.check_ring();
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_create_does_not_allocate_nodes() {
        let alloc = CountingAlloc::default();
        let list = List::<String, _>::new_in(alloc.clone());
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        drop(list);
        assert_eq!(alloc.allocations(), 0);
        assert_eq!(alloc.deallocations(), 0);
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let alloc = CountingAlloc::default();
        let mut list = List::new_in(alloc.clone());
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        assert_eq!(alloc.live(), 3);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
        assert_eq!(alloc.live(), 0);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_push_pop_sequence_tracks_len() {
        let alloc = CountingAlloc::default();
        let mut list = List::new_in(alloc.clone());
        let mut model = std::collections::VecDeque::new();
        for i in 0..64 {
            match i % 5 {
                0 | 1 => {
                    list.push_back(i);
                    model.push_back(i);
                }
                2 => {
                    list.push_front(i);
                    model.push_front(i);
                }
                3 => assert_eq!(list.pop_front(), model.pop_front()),
                _ => assert_eq!(list.pop_back(), model.pop_back()),
            }
            assert_eq!(list.len(), model.len());
            assert_eq!(alloc.live(), model.len());
        }
        list_eq(&list, model);
    }

    #[test]
    fn list_front_back_mut() {
        let mut list = List::from_iter([1, 2, 3]);
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        list_eq(&list, [10, 2, 30]);
        let mut empty = List::<i32>::new();
        assert_eq!(empty.front_mut(), None);
        assert_eq!(empty.back_mut(), None);
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::from_iter(0..10);
        list.insert(5, 10);
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove(10), 9);
        assert_eq!(list.back(), Some(&8));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(0, 11);
        assert_eq!(list.front(), Some(&11));
        list_eq(&list, (11..=11).chain((0..5).chain(Some(10)).chain(5..9)));

        assert_eq!(list.remove(0), 11);
        assert_eq!(list.front(), Some(&0));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(10, 12);
        assert_eq!(list.back(), Some(&12));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));
    }

    #[test]
    #[should_panic(expected = "Cannot insert at an index outside of the list bounds")]
    fn list_insert_out_of_bounds() {
        let mut list = List::from_iter([1, 2]);
        list.insert(3, 0);
    }

    #[test]
    #[should_panic(expected = "Cannot remove at an index outside of the list bounds")]
    fn list_remove_out_of_bounds() {
        let mut list = List::from_iter([1, 2]);
        list.remove(2);
    }

    #[test]
    fn list_example_sequence() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        list.push_front(0);
        list_eq(&list, [0, 1, 2]);
        assert_eq!(list.len(), 3);

        list.pop_front();
        list_eq(&list, [1, 2]);

        let mut cursor = list.cursor_end_mut();
        cursor.move_prev().unwrap();
        assert_eq!(cursor.remove(), Some(2));
        list_eq(&list, [1]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn list_clear() {
        let alloc = CountingAlloc::default();
        let mut list = List::new_in(alloc.clone());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.extend(0..5);
        assert_eq!(alloc.live(), 5);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(alloc.live(), 0);
        list.clear();
        assert!(list.is_empty());

        list.push_back(7);
        list_eq(&list, [7]);
    }

    #[test]
    fn list_from_elem() {
        list_eq(&List::from_elem(3, &7), [7, 7, 7]);
        list_eq(&List::from_elem(0, &7), None);
        list_eq(&List::<u8>::with_len(2), [0, 0]);

        let alloc = CountingAlloc::default();
        let list = List::from_elem_in(4, &'a', alloc.clone());
        assert_eq!(list.len(), 4);
        assert_eq!(alloc.live(), 4);
        drop(list);
        assert_eq!(alloc.live(), 0);
    }

    #[test]
    fn list_from_elem_rolls_back_on_panic() {
        for k in 0..4 {
            let alloc = CountingAlloc::default();
            let bomb = Bomb::new(0, k);
            let result = catch_unwind(AssertUnwindSafe(|| {
                List::from_elem_in(4, &bomb, alloc.clone())
            }));
            assert!(result.is_err());
            // `k` nodes were built, and the storage of the failing one was taken too.
            assert_eq!(alloc.allocations(), k + 1);
            assert_eq!(alloc.live(), 0);
        }
    }

    #[test]
    fn list_from_elem_rolls_back_on_alloc_failure() {
        let alloc = CountingAlloc::failing_after(2);
        let result = List::try_from_elem_in(5, &1, alloc.clone());
        assert_eq!(result.err(), Some(AllocError));
        assert_eq!(alloc.allocations(), 2);
        assert_eq!(alloc.live(), 0);

        let list = List::try_from_elem_in(2, &1, CountingAlloc::failing_after(2)).unwrap();
        list_eq(&list, [1, 1]);
    }

    #[test]
    fn list_try_push_hands_back_element() {
        let alloc = CountingAlloc::failing_after(1);
        let mut list = List::new_in(alloc.clone());
        list.try_push_back(String::from("a")).unwrap();

        let error = list.try_push_back(String::from("b")).unwrap_err();
        assert_eq!(error.into_inner(), "b");
        let error = list.try_push_front(String::from("c")).unwrap_err();
        assert_eq!(AllocError::from(error), AllocError);

        list_eq(&list, [String::from("a")]);
        assert_eq!(alloc.live(), 1);
    }

    #[test]
    fn list_clone() {
        let alloc = CountingAlloc::default();
        let mut list = List::new_in(alloc.clone());
        list.extend([1, 2, 3]);

        let mut cloned = list.clone();
        assert!(cloned.allocator().same_as(list.allocator()));
        assert_eq!(cloned, list);
        assert_eq!(alloc.live(), 6);

        cloned.push_back(4);
        *cloned.front_mut().unwrap() = 0;
        list_eq(&list, [1, 2, 3]);
        list_eq(&cloned, [0, 2, 3, 4]);

        let empty = List::<i32>::new();
        assert!(empty.clone().is_empty());
    }

    #[test]
    fn list_clone_rolls_back_on_panic() {
        let alloc = CountingAlloc::default();
        let mut list = List::new_in(alloc.clone());
        list.extend((1..=4).map(|value| Bomb::new(value, 1)));
        // only the third element explodes
        list.iter().nth(2).unwrap().rearm(0);

        let result = catch_unwind(AssertUnwindSafe(|| list.clone()));
        assert!(result.is_err());
        assert_eq!(alloc.allocations(), 7);
        assert_eq!(alloc.live(), 4);
        assert_eq!(
            Vec::from_iter(list.iter().map(|bomb| bomb.value)),
            vec![1, 2, 3, 4]
        );
        list.check_ring();
    }

    #[test]
    fn list_try_clone_rolls_back_on_alloc_failure() {
        let alloc = CountingAlloc::failing_after(5);
        let mut list = List::new_in(alloc.clone());
        list.extend(0..3);

        assert_eq!(list.try_clone().err(), Some(AllocError));
        assert_eq!(alloc.live(), 3);
        list_eq(&list, 0..3);
    }

    #[test]
    fn list_clone_from_is_all_or_nothing() {
        let mut target = List::from_iter([Bomb::new(9, 0)]);
        let source = List::from_iter([Bomb::new(1, 1), Bomb::new(2, 0)]);

        let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());
        assert_eq!(Vec::from_iter(target.iter().map(|bomb| bomb.value)), vec![9]);

        source.iter().for_each(|bomb| bomb.rearm(1));
        target.clone_from(&source);
        assert_eq!(
            Vec::from_iter(target.iter().map(|bomb| bomb.value)),
            vec![1, 2]
        );
        target.check_ring();
    }

    #[test]
    fn list_try_clone_from_keeps_target_on_failure() {
        let alloc = CountingAlloc::failing_after(3);
        let mut target = List::new_in(alloc.clone());
        target.extend([7, 8]);
        let mut source = List::new_in(alloc.clone());
        source.push_back(1);

        assert_eq!(target.try_clone_from(&source), Err(AllocError));
        list_eq(&target, [7, 8]);
        assert_eq!(alloc.live(), 3);

        let alloc = CountingAlloc::default();
        let mut target = List::new_in(alloc.clone());
        target.extend([7, 8]);
        let mut source = List::new_in(alloc.clone());
        source.extend([1, 2, 3]);

        target.try_clone_from(&source).unwrap();
        list_eq(&target, [1, 2, 3]);
        list_eq(&source, [1, 2, 3]);
        assert_eq!(alloc.live(), 6);
    }

    #[test]
    fn list_swap() {
        fn test_swap<I1, I2>(a: I1, b: I2)
        where
            I1: IntoIterator<Item = i32> + Clone,
            I2: IntoIterator<Item = i32> + Clone,
        {
            let alloc_a = CountingAlloc::default();
            let alloc_b = CountingAlloc::default();
            let mut list_a = List::new_in(alloc_a.clone());
            list_a.extend(a.clone());
            let mut list_b = List::new_in(alloc_b.clone());
            list_b.extend(b.clone());

            swap(&mut list_a, &mut list_b);
            list_eq(&list_a, b.clone());
            list_eq(&list_b, a.clone());
            assert!(list_a.allocator().same_as(&alloc_b));
            assert!(list_b.allocator().same_as(&alloc_a));

            swap(&mut list_a, &mut list_b);
            list_eq(&list_a, a);
            list_eq(&list_b, b);
            assert!(list_a.allocator().same_as(&alloc_a));
            assert!(list_b.allocator().same_as(&alloc_b));

            list_a.push_back(100);
            list_b.push_front(200);
            drop(list_a);
            drop(list_b);
            assert_eq!(alloc_a.live(), 0);
            assert_eq!(alloc_b.live(), 0);
        }
        test_swap(0..3, 3..5);
        test_swap(0..3, None);
        test_swap(None, 3..5);
        test_swap(None, None);
        test_swap(Some(1), Some(2));
    }

    #[test]
    fn list_take() {
        let alloc = CountingAlloc::default();
        let mut list = List::new_in(alloc.clone());
        list.extend(0..3);

        let mut moved = list.take();
        assert!(list.is_empty());
        assert!(moved.allocator().same_as(&alloc));
        assert!(!list.allocator().same_as(&alloc));
        list_eq(&moved, 0..3);

        list.push_back(5);
        moved.push_back(3);
        list_eq(&list, [5]);
        list_eq(&moved, 0..4);
        assert_eq!(alloc.live(), 4);
    }

    #[test]
    fn list_moves_keep_ring_valid() {
        fn build() -> List<i32> {
            let mut list = List::new();
            list.extend(0..3);
            list
        }
        let list = build();
        let mut boxed = Box::new(list);
        boxed.push_front(-1);
        list_eq(&*boxed, -1..3);
        let lists = vec![*boxed, List::new()];
        list_eq(&lists[0], -1..3);
        list_eq(&lists[1], None);
    }
}
