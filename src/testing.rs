//! Allocators and element types that make failures observable in tests.

use allocator_api2::alloc::{AllocError, Allocator, Global};
use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;
use std::rc::Rc;

#[derive(Default)]
struct Stats {
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    last_size: Cell<usize>,
    fail_after: Cell<Option<usize>>,
}

/// An allocator backed by [`Global`] that counts its calls.
///
/// Clones share the same counters, so a list cloned from another one keeps
/// reporting to the same place. A default-constructed `CountingAlloc` starts
/// a fresh set of counters.
#[derive(Clone, Default)]
pub(crate) struct CountingAlloc {
    stats: Rc<Stats>,
}

impl CountingAlloc {
    /// An allocator that succeeds `n` times and fails afterwards.
    pub(crate) fn failing_after(n: usize) -> Self {
        let alloc = Self::default();
        alloc.stats.fail_after.set(Some(n));
        alloc
    }

    pub(crate) fn allocations(&self) -> usize {
        self.stats.allocations.get()
    }

    pub(crate) fn deallocations(&self) -> usize {
        self.stats.deallocations.get()
    }

    pub(crate) fn live(&self) -> usize {
        self.allocations() - self.deallocations()
    }

    pub(crate) fn last_size(&self) -> usize {
        self.stats.last_size.get()
    }

    pub(crate) fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stats, &other.stats)
    }
}

unsafe impl Allocator for CountingAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if let Some(limit) = self.stats.fail_after.get() {
            if self.allocations() >= limit {
                return Err(AllocError);
            }
        }
        let ptr = Global.allocate(layout)?;
        self.stats.allocations.set(self.allocations() + 1);
        self.stats.last_size.set(layout.size());
        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.stats.deallocations.set(self.deallocations() + 1);
        Global.deallocate(ptr, layout)
    }
}

/// An element whose `clone` panics once its shared fuse has burnt down.
///
/// `Bomb::new(value, fuse)` allows `fuse` successful clones (of itself or any
/// of its clones); the next one panics.
#[derive(Debug)]
pub(crate) struct Bomb {
    pub(crate) value: i32,
    fuse: Rc<Cell<usize>>,
}

impl Bomb {
    pub(crate) fn new(value: i32, fuse: usize) -> Self {
        let fuse = Rc::new(Cell::new(fuse));
        Self { value, fuse }
    }

    /// Give the shared fuse `fuse` more clones.
    pub(crate) fn rearm(&self, fuse: usize) {
        self.fuse.set(fuse);
    }
}

impl Clone for Bomb {
    fn clone(&self) -> Self {
        match self.fuse.get() {
            0 => panic!("bomb {} exploded while cloning", self.value),
            n => self.fuse.set(n - 1),
        }
        Self {
            value: self.value,
            fuse: Rc::clone(&self.fuse),
        }
    }
}

impl PartialEq for Bomb {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
