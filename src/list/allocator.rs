//! The allocator adapter of a list.
//!
//! A list of `T` is parameterized by an allocator `A`, but `A` never sees a
//! bare `T`: every request goes through [`NodeAllocator`], which always asks
//! for the layout of a whole `Node<T>`. This is the only place where node
//! storage is allocated, constructed, destroyed and deallocated.

use crate::list::node::Node;
use allocator_api2::alloc::{AllocError, Allocator};
use std::alloc::{handle_alloc_error, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

/// An allocator `A` rebound to `Node<T>`.
pub(crate) struct NodeAllocator<T, A: Allocator> {
    alloc: A,
    _marker: PhantomData<fn() -> Node<T>>,
}

/// Storage for one node, allocated but not constructed yet.
///
/// The storage is given back to the allocator when an `Uninit` is dropped,
/// which happens if it is never [constructed](Uninit::construct), or if the
/// construction panics.
pub(crate) struct Uninit<'a, T, A: Allocator> {
    ptr: NonNull<Node<T>>,
    alloc: &'a NodeAllocator<T, A>,
}

impl<T, A: Allocator> NodeAllocator<T, A> {
    const LAYOUT: Layout = Layout::new::<Node<T>>();

    pub(crate) fn new(alloc: A) -> Self {
        let _marker = PhantomData;
        Self { alloc, _marker }
    }

    #[inline]
    pub(crate) fn inner(&self) -> &A {
        &self.alloc
    }

    /// Allocate storage for one node, or return the allocator's error.
    pub(crate) fn try_allocate(&self) -> Result<Uninit<'_, T, A>, AllocError> {
        let ptr = self.alloc.allocate(Self::LAYOUT)?.cast::<Node<T>>();
        Ok(Uninit { ptr, alloc: self })
    }

    /// Allocate storage for one node, diverging through
    /// [`handle_alloc_error`] if the allocator fails.
    pub(crate) fn allocate(&self) -> Uninit<'_, T, A> {
        match self.try_allocate() {
            Ok(uninit) => uninit,
            Err(_) => handle_alloc_error(Self::LAYOUT),
        }
    }

    /// Destroy the node and release its storage, returning the element.
    ///
    /// It is unsafe because `node` must be a constructed node obtained from
    /// this allocator (or an equal one), detached from any ring, and never
    /// used again.
    pub(crate) unsafe fn release(&self, node: NonNull<Node<T>>) -> T {
        let element = ptr::read(ptr::addr_of!((*node.as_ptr()).element));
        self.deallocate(node);
        element
    }

    /// It is unsafe because `node` must have been allocated by this allocator
    /// (or an equal one), and its element must be already moved out or never
    /// constructed.
    unsafe fn deallocate(&self, node: NonNull<Node<T>>) {
        self.alloc.deallocate(node.cast(), Self::LAYOUT)
    }
}

impl<'a, T, A: Allocator> Uninit<'a, T, A> {
    /// Construct the node in place with the element produced by `f`.
    ///
    /// If `f` panics, the storage is released before the panic leaves this
    /// function.
    pub(crate) fn construct<F: FnOnce() -> T>(self, f: F) -> NonNull<Node<T>> {
        let element = f();
        let ptr = self.ptr;
        mem::forget(self);
        // SAFETY: `ptr` was allocated with the layout of `Node<T>` and is not
        // aliased by anyone else.
        unsafe { ptr.as_ptr().write(Node::new(element)) };
        ptr
    }
}

impl<T, A: Allocator> Drop for Uninit<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY: the storage is allocated by `self.alloc` and holds no element.
        unsafe { self.alloc.deallocate(self.ptr) }
    }
}
