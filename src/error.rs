//! Error types of the list and its cursors.

use allocator_api2::alloc::AllocError;
use std::error::Error;
use std::fmt;

/// The error returned by the `try_*` inserting methods of
/// [`List`](crate::List) and [`CursorMut`](crate::list::cursor::CursorMut)
/// when the allocator cannot supply storage for a new node.
///
/// The rejected element is handed back, and the list is left unchanged.
///
/// # Examples
///
/// ```
/// use ringlist::List;
///
/// let mut list = List::new();
/// assert!(list.try_push_back(String::from("a")).is_ok());
/// assert_eq!(list.front().map(String::as_str), Some("a"));
/// ```
pub struct InsertError<T> {
    element: T,
    error: AllocError,
}

impl<T> InsertError<T> {
    pub(crate) fn new(element: T, error: AllocError) -> Self {
        Self { element, error }
    }

    /// Returns the element that could not be inserted.
    pub fn into_inner(self) -> T {
        self.element
    }

    /// Returns the allocator's error.
    pub fn alloc_error(&self) -> AllocError {
        self.error
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("memory allocation failed while inserting an element")
    }
}

impl<T> Error for InsertError<T> {}

impl<T> From<InsertError<T>> for AllocError {
    fn from(error: InsertError<T>) -> Self {
        error.error
    }
}

/// The error returned when a cursor is asked to step across the ghost node
/// of its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryError;

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cursor moved across the ghost boundary")
    }
}

impl Error for BoundaryError {}
