//! This crate provides an allocator-aware doubly-linked list with owned nodes,
//! implemented as a ring anchored by a ghost node.
//!
//! The [`List`] allows inserting, removing elements at any given position in
//! constant time. In compromise, accessing or mutating elements at any position
//! take *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ringlist::List;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&1));
//! assert_eq!(Vec::from_iter(cursor.view().iter().copied()), vec![0, 1, 2, 3, 4]);
//!
//! cursor.seek_to(3).unwrap(); // move the cursor to position 3, and removes it.
//! assert_eq!(cursor.remove(), Some(3));
//! assert_eq!(Vec::from_iter(cursor.view().iter().copied()), vec![0, 1, 2, 4]);
//!
//! cursor.push_front(5); // pushing front to the list is also allowed
//! assert_eq!(Vec::from_iter(list), vec![5, 0, 1, 2, 4]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                         Ghost Link  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        └───────────┘
//! │  ║ element T ║           ║ element T ║                            ↑   ↑
//! │  ╚═══════════╝           ╚═══════════╝                            │   │
//! │      Node 0                  Node 1                               │   │
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╟───────────╢
//! ║   alloc   ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `ghost` that points to the ghost link;
//! - a length field `len` counting the element nodes in the ring;
//! - the allocator `alloc` that supplies every element node.
//!
//! Each element node of the list `List<T, A>` is allocated by `A`, and contains:
//! - the `next` pointer that points to the next element (or the ghost link if it
//!   is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the ghost link if
//!   it is the first element in the list);
//! - the element `T`.
//!
//! The ghost link has *NO* element, and is never handed to the allocator `A`:
//! it lives on the global heap so that moving a `List` keeps the ring intact.
//!
//! Initially, the ghost link of an empty list has its `next` and `prev` pointers
//! pointing to itself.
//!
//! As elements are inserted into the list, `ghost.next` points to the first element,
//! and `ghost.prev` points to the last element of the list.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the ghost node is always indexed by *n*. (In an empty list, the
//! ghost nodes is indexed by 0, which is equal to its length 0).
//!
//! # Allocators
//!
//! A `List<T, A>` takes any [`Allocator`] from `allocator-api2`, [`Global`] by
//! default. The allocator is asked for whole nodes (links and element together),
//! so its statistics reflect the real footprint of the list.
//!
//! Every inserting operation has a `try_*` counterpart that reports an
//! [`AllocError`] instead of aborting, and hands the element back in an
//! [`InsertError`]. A panic raised while cloning an element never leaks a node:
//! the storage of the node under construction is released, and a list that was
//! being built is dropped as a whole.
//!
//! ```
//! use ringlist::List;
//! use allocator_api2::alloc::Global;
//!
//! let mut list = List::new_in(Global);
//! list.try_push_back(1).unwrap();
//! let copy = list.try_clone().unwrap();
//! assert_eq!(copy, list);
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//! [`IterMut`] provides mutability of the elements (but not the linked structure of
//! the list).
//!
//! ## Examples
//!
//! ```
//! use ringlist::List;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list.iter().rev().copied()), vec![6, 4, 2]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list.
//!
//! As the names suggest, they are like cursors and can move forward or backward
//! over the list. In a list with length *n*, there are *n* + 1 valid locations
//! for the cursor, indexed by 0, 1, ..., *n*, where *n* is the ghost node of the
//! list.
//!
//! Two cursors are equal if they point to the same node. A [`CursorMut`]
//! converts into a [`Cursor`], but not the other way around.
//!
//! ## Examples
//!
//! ```
//! use ringlist::List;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut cursor = list.cursor_end();
//! cursor.move_prev_cyclic(); // stepping back from the ghost node reaches the last element
//! assert_eq!(cursor.current(), Some(&3));
//! cursor.move_next_cyclic();
//! cursor.move_next_cyclic(); // stepping over the ghost node wraps around
//! assert_eq!(cursor.current(), Some(&1));
//! assert!(cursor.move_prev().is_err()); // unless asked not to
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides many useful ways to mutate the list in any position.
//! - [`insert`]: insert a new item before the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`backspace`]: remove the item before the cursor;
//!
//! ## Examples
//!
//! ```
//! use ringlist::List;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`InsertError`]: crate::InsertError
//! [`Allocator`]: allocator_api2::alloc::Allocator
//! [`AllocError`]: allocator_api2::alloc::AllocError
//! [`Global`]: allocator_api2::alloc::Global
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace

#[doc(inline)]
pub use error::{BoundaryError, InsertError};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{swap, List};

pub mod list;

mod error;

#[cfg(test)]
mod testing;
