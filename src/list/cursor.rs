use crate::error::{BoundaryError, InsertError};
use crate::list::node::{Link, Node};
use crate::list::List;
use allocator_api2::alloc::{Allocator, Global};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the ghost node of the list.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`).
/// ```
/// use ringlist::List;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // Create a cursor in the end and move forward: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert!(cursor.move_next().is_err());
/// // Move cursor forward, cyclically: [|A B C D #] (index = 0)
/// cursor.move_next_cyclic();
/// assert_eq!(cursor.current(), Some(&'A'));
/// ```
pub struct Cursor<'a, T: 'a, A: Allocator = Global> {
    index: usize,
    pub(crate) current: NonNull<Link>,
    pub(crate) list: &'a List<T, A>,
}

impl<'a, T: 'a, A: Allocator> Clone for Cursor<'a, T, A> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            current: self.current,
            list: self.list,
        }
    }
}

/// Compare cursors by the node they point to.
///
/// Two cursors are equal if and only if they point to the same node. Since
/// every list has its own ghost node, cursors of different lists are never
/// equal.
///
/// # Examples
/// ```
/// use ringlist::List;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// // The same node.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next_cyclic();
/// // Different nodes.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // Different lists.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a, A: Allocator> PartialEq for Cursor<'a, T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<'a, T: 'a, A: Allocator> Eq for Cursor<'a, T, A> {}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list can compare, so it is `PartialOrd`
/// but not `Ord`.
///
/// # Examples
/// ```
/// use ringlist::List;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// cursor2.move_next_cyclic();
/// // They belong to the same list, can compare.
/// assert!(cursor1 < cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_end();
/// // They belong to different lists, cannot compare.
/// assert_eq!(cursor1.partial_cmp(&cursor3), None);
/// ```
impl<'a, T: 'a, A: Allocator> PartialOrd for Cursor<'a, T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.list.ghost_node() != other.list.ghost_node() {
            return None;
        }
        Some(self.index.cmp(&other.index))
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek back-and-forth,
/// and can safely mutate the list during iteration. This is because the lifetime of
/// its yielded references is tied to its own lifetime, instead of just the underlying
/// list. This means cursors cannot yield multiple elements at once.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily borrow
/// the list and returns an immutable reference whose lifetime is shorter than the
/// cursor.
///
/// A `CursorMut` converts into a [`Cursor`], but not the other way around.
///
/// # Examples
///
/// ```compile_fail
/// use ringlist::List;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a, A: Allocator = Global> {
    index: usize,
    pub(crate) current: NonNull<Link>,
    pub(crate) list: &'a mut List<T, A>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a, A: Allocator> $CURSOR<'a, T, A> {
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.ghost_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Link> {
                // SAFETY: `current.next` is always valid since it is a cyclic list.
                unsafe { self.current.as_ref().next }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Link> {
                // SAFETY: `current.prev` is always valid since it is a cyclic list.
                unsafe { self.current.as_ref().prev }
            }

            /// Move forward the cursor by given steps, without checking whether
            /// it will pass through the ghost node.
            ///
            /// It is unsafe because if the moving passes through the ghost node,
            /// the index will be invalid.
            unsafe fn seek_forward_fast(&mut self, steps: usize) {
                self.index += steps;
                (0..steps).for_each(|_| self.current = self.next_node());
            }

            /// Move backward the cursor by given steps, without checking whether
            /// it will pass through the ghost node.
            ///
            /// It is unsafe because if the moving passes through the ghost node,
            /// the index will be invalid.
            unsafe fn seek_backward_fast(&mut self, steps: usize) {
                self.index -= steps;
                (0..steps).for_each(|_| self.current = self.prev_node());
            }
        }

        impl<'a, T: 'a, A: Allocator> $CURSOR<'a, T, A> {
            /// Return the index of the cursor
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the cursor points to the ghost node, i.e. the
            /// end of the list.
            pub fn is_ghost(&self) -> bool {
                self.current == self.list.ghost_node()
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ringlist::List;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the ghost node
            /// assert_eq!(cursor.previous(), Some(&3));
            /// cursor.move_next_cyclic();
            ///
            /// // The cursor is now at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_next_cyclic(&mut self) {
                if self.is_ghost() {
                    self.index = 0;
                } else {
                    self.index += 1;
                }
                self.current = self.next_node();
            }

            /// Move the cursor to the previous position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ringlist::List;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// cursor.move_prev_cyclic();
            ///
            /// // The cursor is now at the ghost node
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn move_prev_cyclic(&mut self) {
                if self.is_front_node() {
                    self.index = self.list.len();
                } else {
                    self.index -= 1;
                }
                self.current = self.prev_node();
            }

            /// Move the cursor to the next position, or return an error
            /// when passing through the ghost node is happened.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ringlist::List;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the ghost node
            /// assert_eq!(cursor.previous(), Some(&3));
            ///
            /// // Forbid to move passing through the ghost node
            /// assert!(cursor.move_next().is_err());
            ///
            /// // the cursor is still at the ghost node
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn move_next(&mut self) -> Result<(), BoundaryError> {
                if self.is_ghost() {
                    return Err(BoundaryError);
                }
                self.move_next_cyclic();
                Ok(())
            }

            /// Move the cursor to the previous position, or return an error
            /// when passing through the ghost node is happened.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ringlist::List;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// // Forbid to move passing through the ghost node
            /// assert!(cursor.move_prev().is_err());
            ///
            /// // The cursor is stiil at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_prev(&mut self) -> Result<(), BoundaryError> {
                if self.is_front_node() {
                    return Err(BoundaryError);
                }
                self.move_prev_cyclic();
                Ok(())
            }

            /// Move forward the cursor by given steps, or return an error
            /// when passing through the ghost node is happened.
            ///
            /// If an error occurs, the cursor will stay at the ghost node, and
            /// the error holds the number of steps actually taken.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ringlist::List;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // Forbid to move passing through the ghost node
            /// assert_eq!(cursor.seek_forward(5), Err(3));
            ///
            /// // the cursor is now at the ghost node
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
            }

            /// Move backward the cursor by given steps, or return an error
            /// when passing through the ghost node is happened.
            ///
            /// If an error occurs, the cursor will stay at the first node, and
            /// the error holds the number of steps actually taken.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ringlist::List;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // Forbid to move passing through the ghost node
            /// assert_eq!(cursor.seek_backward(5), Err(3));
            ///
            /// // the cursor is now at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_prev().map_err(|_| i))
            }

            /// Move the cursor to the given position `target`, or return an error
            /// when `target > len`, holding how far `target` is beyond `len`.
            ///
            /// The cursor walks from whichever of its current position, the first
            /// node or the ghost node is nearest to `target`.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ringlist::List;
            ///
            /// let list = List::from_iter([1, 2, 3, 4, 5]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_to(3).is_ok());
            /// assert_eq!(cursor.current(), Some(&4));
            ///
            /// assert_eq!(cursor.seek_to(7), Err(2));
            /// assert_eq!(cursor.current(), Some(&4));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                if target == self.index {
                    return Ok(());
                }
                let len = self.list.len();
                match target {
                    target if target > len => return Err(target - len),
                    0 => self.move_to_start(),
                    target if target == len => self.move_to_end(),
                    // SAFETY: `0 < target < len`, so no walk below passes through
                    // the ghost node.
                    _ => unsafe {
                        // current=c, target=t, ghost=#
                        if target > self.index {
                            // target is at the right side of current: [   c----->t   #]
                            if target - self.index <= len - target {
                                // target is near the right side of current: [    c-->t     #]
                                self.seek_forward_fast(target - self.index);
                            } else {
                                // target is far from the right side of current: [ c     t<--#]
                                self.move_to_end();
                                self.seek_backward_fast(len - target);
                            }
                        } else {
                            // target is at the left side of current: [   t<-----c   #]
                            if self.index - target <= target {
                                // target is near the left side of current: [    t<--c     #]
                                self.seek_backward_fast(self.index - target);
                            } else {
                                // target is far from the left side of current: [-->t      c #]
                                self.move_to_start();
                                self.seek_forward_fast(target);
                            }
                        }
                    },
                }
                Ok(())
            }

            /// Move the cursor to the first node (or the ghost node if the list
            /// is empty).
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.front_node();
            }

            /// Move the cursor to the ghost node.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = self.list.ghost_node();
            }
        }

        impl<'a, T: fmt::Debug + 'a, A: Allocator> fmt::Debug for $CURSOR<'a, T, A> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a, A: Allocator> Cursor<'a, T, A> {
    pub(crate) fn new(list: &'a List<T, A>, current: NonNull<Link>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Provides a reference to the element at the cursor, or `None` if the
    /// cursor is at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor_start().current(), Some(&1));
    /// assert_eq!(list.cursor_end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_ghost() {
            return None;
        }
        // SAFETY: it is safe because non-ghost nodes must hold a
        // valid element.
        unsafe { Some(Node::element(self.current)) }
    }

    /// Provides a reference to the element before the cursor, or `None` if
    /// the cursor is at the first node (or the list is empty).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor_start().previous(), None);
    /// assert_eq!(list.cursor_end().previous(), Some(&3));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: it is safe because the previous node of a non-first node
        // is never a ghost node, and non-ghost nodes must hold a valid element.
        unsafe { Some(Node::element(self.prev_node())) }
    }

    /// Returns the list the cursor is viewing.
    pub fn view(&self) -> &'a List<T, A> {
        self.list
    }
}

impl<'a, T: 'a, A: Allocator> CursorMut<'a, T, A> {
    pub(crate) fn new(list: &'a mut List<T, A>, current: NonNull<Link>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }
}

// Methods that does not change the linking structure of the list.
impl<'a, T: 'a, A: Allocator> CursorMut<'a, T, A> {
    /// Provides a reference to the element at the cursor, or `None` if the
    /// cursor is at the ghost node.
    pub fn current(&self) -> Option<&T> {
        self.as_cursor().current()
    }

    /// Provides a reference to the element before the cursor, or `None` if
    /// the cursor is at the first node (or the list is empty).
    pub fn previous(&self) -> Option<&T> {
        self.as_cursor().previous()
    }

    /// Provides a mutable reference to the element at the cursor, or `None`
    /// if the cursor is at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// *cursor.current_mut().unwrap() = 10;
    /// assert_eq!(list.front(), Some(&10));
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_ghost() {
            return None;
        }
        // SAFETY: it is safe because non-ghost nodes must hold a
        // valid element, and `&mut self` guarantees exclusive access.
        unsafe { Some(Node::element_mut(self.current)) }
    }

    /// Provides a mutable reference to the element before the cursor, or
    /// `None` if the cursor is at the first node (or the list is empty).
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: it is safe because the previous node of a non-first node
        // is never a ghost node, and non-ghost nodes must hold a valid element.
        unsafe { Some(Node::element_mut(self.prev_node())) }
    }

    /// Returns a read-only cursor at the same position, borrowing from this
    /// one.
    pub fn as_cursor(&self) -> Cursor<'_, T, A> {
        Cursor::new(&*self.list, self.current, self.index)
    }

    /// Converts into a read-only cursor at the same position.
    pub fn into_cursor(self) -> Cursor<'a, T, A> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Temporarily borrows the list the cursor is editing.
    pub fn view(&self) -> &List<T, A> {
        &*self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a, A: Allocator> CursorMut<'a, T, A> {
    /// Adds an element first in the list. The cursor keeps pointing to the
    /// same node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_mut(1);
    /// cursor.push_front(0);
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.index(), 2);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.list.push_front(elt);
        self.index += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// If the cursor was pointing to the removed node, it moves to the next
    /// node.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        if self.is_front_node() {
            self.current = self.next_node();
        } else {
            self.index -= 1;
        }
        self.list.pop_front()
    }

    /// Appends an element to the back of the list. The cursor keeps pointing
    /// to the same node.
    pub fn push_back(&mut self, elt: T) {
        self.list.push_back(elt);
        if self.is_ghost() {
            self.index += 1;
        }
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// If the cursor was pointing to the removed node, it moves to the ghost
    /// node.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        if self.is_ghost() {
            self.index -= 1;
        } else if self.current == self.list.back_node() {
            self.current = self.list.ghost_node();
        }
        self.list.pop_back()
    }

    /// Inserts a new element before the cursor. The cursor keeps pointing to
    /// the same node.
    ///
    /// If the cursor is at the ghost node, the element is appended to the
    /// list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let mut cursor = list.cursor_mut(1);
    /// cursor.insert(2);
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(cursor.previous(), Some(&2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert(&mut self, elt: T) {
        let node = self.list.new_node(|| elt);
        // SAFETY: `self.current` is a valid node in the list, and `node` is detached.
        unsafe { self.list.attach_node(self.current, node) };
        self.index += 1;
    }

    /// Like [`CursorMut::insert`], but hands the element back if the allocator
    /// cannot supply a node. The list is unchanged on failure.
    pub fn try_insert(&mut self, elt: T) -> Result<(), InsertError<T>> {
        let node = match self.list.alloc.try_allocate() {
            Ok(uninit) => Node::as_link(uninit.construct(|| elt)),
            Err(error) => return Err(InsertError::new(elt, error)),
        };
        // SAFETY: `self.current` is a valid node in the list, and `node` is detached.
        unsafe { self.list.attach_node(self.current, node) };
        self.index += 1;
        Ok(())
    }

    /// Removes the element at the cursor and returns it, or `None` if the
    /// cursor is at the ghost node. The cursor moves to the next node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    /// assert_eq!(cursor.remove(), Some(2));
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(Vec::from_iter(list), vec![1, 3]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_ghost() {
            return None;
        }
        let node = self.current;
        self.current = self.next_node();
        // SAFETY: `node` is a valid non-ghost node in the list, so it is safe.
        unsafe { Some(self.list.detach_node(node)) }
    }

    /// Removes the element before the cursor and returns it, or `None` if the
    /// cursor is at the first node. The cursor keeps pointing to the same node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    /// assert_eq!(cursor.backspace(), Some(3));
    /// assert_eq!(cursor.previous(), Some(&2));
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }
}

impl<'a, T: 'a, A: Allocator> From<CursorMut<'a, T, A>> for Cursor<'a, T, A> {
    fn from(cursor: CursorMut<'a, T, A>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync, A: Allocator + Sync> Send for Cursor<'_, T, A> {}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for Cursor<'_, T, A> {}

unsafe impl<T: Send, A: Allocator + Send> Send for CursorMut<'_, T, A> {}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for CursorMut<'_, T, A> {}

#[cfg(test)]
mod tests {
    use crate::list::cursor::Cursor;
    use crate::List;

    #[test]
    fn cursor_moves_through_ghost() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_end();
        assert!(cursor.is_ghost());
        assert_eq!(cursor.index(), 3);

        // `--end` is the last element
        cursor.move_prev_cyclic();
        assert_eq!(cursor.current(), Some(&3));
        assert_eq!(cursor.index(), 2);

        cursor.move_next_cyclic();
        assert!(cursor.is_ghost());
        // `++end` wraps around to the first element
        cursor.move_next_cyclic();
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.index(), 0);

        cursor.move_prev_cyclic();
        assert!(cursor.is_ghost());
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor, list.cursor_end());
    }

    #[test]
    fn cursor_on_empty_list() {
        let mut list = List::<i32>::new();
        let mut cursor = list.cursor_start();
        assert!(cursor.is_ghost());
        assert_eq!(cursor, list.cursor_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), None);
        assert!(cursor.move_next().is_err());
        assert!(cursor.move_prev().is_err());
        cursor.move_next_cyclic();
        cursor.move_prev_cyclic();
        assert!(cursor.is_ghost());
        assert_eq!(cursor.index(), 0);

        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.remove(), None);
        assert_eq!(cursor.backspace(), None);
        assert_eq!(cursor.pop_front(), None);
        assert_eq!(cursor.pop_back(), None);
        cursor.insert(1);
        assert!(cursor.is_ghost());
        assert_eq!(cursor.index(), 1);
        assert_eq!(Vec::from_iter(list), vec![1]);
    }

    #[test]
    fn cursor_seek() {
        let list = List::from_iter(0..10);
        let mut cursor = list.cursor_start();
        for target in [7, 2, 9, 10, 0, 5, 4, 8, 1, 10] {
            assert!(cursor.seek_to(target).is_ok());
            assert_eq!(cursor.index(), target);
            assert_eq!(cursor, list.cursor(target));
            if target < 10 {
                assert_eq!(cursor.current(), Some(&(target as i32)));
            } else {
                assert_eq!(cursor.current(), None);
            }
        }
        assert_eq!(cursor.seek_to(13), Err(3));
        assert_eq!(cursor.index(), 10);

        let mut cursor = list.cursor(4);
        assert_eq!(cursor.seek_forward(3), Ok(()));
        assert_eq!(cursor.current(), Some(&7));
        assert_eq!(cursor.seek_backward(10), Err(7));
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.seek_forward(11), Err(10));
        assert!(cursor.is_ghost());
    }

    #[test]
    fn cursor_equality_and_order() {
        let list = List::from_iter([1, 2, 3]);
        let other = List::from_iter([1, 2, 3]);
        assert_eq!(list.cursor(1), list.cursor(1));
        assert_ne!(list.cursor(1), list.cursor(2));
        assert_ne!(list.cursor(1), other.cursor(1));
        assert!(list.cursor(0) < list.cursor(3));
        assert_eq!(list.cursor(1).partial_cmp(&other.cursor(1)), None);
    }

    #[test]
    fn cursor_mut_converts_to_cursor() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_mut(1);
        assert_eq!(cursor.as_cursor().current(), Some(&2));
        *cursor.current_mut().unwrap() = 20;
        *cursor.previous_mut().unwrap() = 10;
        let cursor: Cursor<'_, i32> = cursor.into();
        assert_eq!(cursor.current(), Some(&20));
        assert_eq!(cursor.previous(), Some(&10));
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.view().len(), 3);
    }

    #[test]
    fn cursor_stays_valid_across_edits_elsewhere() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_mut(1);

        cursor.push_front(0);
        cursor.push_back(4);
        cursor.insert(9);
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.index(), 3);
        assert_eq!(Vec::from_iter(cursor.view().iter().copied()), vec![0, 1, 9, 2, 3, 4]);

        // erase every other node
        while cursor.view().len() > 1 {
            if cursor.index() > 0 {
                assert!(cursor.pop_front().is_some());
            } else {
                assert!(cursor.pop_back().is_some());
            }
            assert_eq!(cursor.current(), Some(&2));
        }
        assert_eq!(cursor.index(), 0);
        assert_eq!(Vec::from_iter(list), vec![2]);
    }

    #[test]
    fn cursor_pops_its_own_node() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.pop_front(), Some(1));
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.index(), 0);

        cursor.move_to_end();
        assert_eq!(cursor.pop_back(), Some(3));
        assert!(cursor.is_ghost());
        assert_eq!(cursor.index(), 1);

        cursor.move_to_start();
        assert_eq!(cursor.pop_back(), Some(2));
        assert!(cursor.is_ghost());
        assert_eq!(cursor.index(), 0);
        assert!(cursor.is_empty());
    }

    #[test]
    fn cursor_insert_and_remove() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_end_mut();
        cursor.insert(4);
        assert!(cursor.is_ghost());
        assert_eq!(cursor.index(), 4);
        assert_eq!(cursor.backspace(), Some(4));
        assert_eq!(cursor.index(), 3);

        cursor.move_to_start();
        cursor.try_insert(0).unwrap();
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.remove(), Some(1));
        assert_eq!(cursor.remove(), Some(2));
        assert_eq!(cursor.remove(), Some(3));
        assert_eq!(cursor.remove(), None);
        assert_eq!(cursor.index(), 1);
        list.check_ring();
        assert_eq!(Vec::from_iter(list), vec![0]);
    }
}
