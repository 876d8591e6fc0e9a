use std::ptr::NonNull;

/// The link part of a node, shared by the ghost node and the element nodes.
///
/// A `Link` never owns the nodes it points to; ownership of element nodes
/// belongs to the `List`.
#[repr(C)]
pub(crate) struct Link {
    pub(crate) next: NonNull<Link>,
    pub(crate) prev: NonNull<Link>,
}

/// An element node: a `Link` followed by the payload.
///
/// Because of `#[repr(C)]` the link is at offset 0, so a `NonNull<Node<T>>`
/// can be viewed as a `NonNull<Link>` and back again, as long as the link
/// is known not to be the ghost node.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) link: Link,
    pub(crate) element: T,
}

impl Link {
    /// A link whose pointers must be overwritten before being read.
    pub(crate) const fn dangling() -> Self {
        Self {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn new(element: T) -> Self {
        Self {
            link: Link::dangling(),
            element,
        }
    }

    pub(crate) fn as_link(node: NonNull<Node<T>>) -> NonNull<Link> {
        node.cast()
    }

    /// It is unsafe because `link` must be an element node of type `Node<T>`,
    /// which is never the case for the ghost node.
    pub(crate) unsafe fn from_link(link: NonNull<Link>) -> NonNull<Node<T>> {
        link.cast()
    }

    /// It is unsafe because `link` must be a live element node of type `Node<T>`,
    /// and the returned reference must not outlive it.
    pub(crate) unsafe fn element<'a>(link: NonNull<Link>) -> &'a T {
        &(*Self::from_link(link).as_ptr()).element
    }

    /// Like [`Node::element`], but the caller must also guarantee exclusive
    /// access to the element.
    pub(crate) unsafe fn element_mut<'a>(link: NonNull<Link>) -> &'a mut T {
        &mut (*Self::from_link(link).as_ptr()).element
    }
}

/// The ghost node of a list.
///
/// It carries no payload. It is kept behind a stable heap address so that
/// moving the owning `List` never invalidates the `next`/`prev` pointers of
/// its neighbours.
pub(crate) struct Ghost {
    link: NonNull<Link>,
}

impl Ghost {
    /// Create a ghost node whose `next` and `prev` point to itself.
    pub(crate) fn new() -> Self {
        let link = NonNull::from(Box::leak(Box::new(Link::dangling())));
        // SAFETY: `link` was just leaked from a box, so it is valid and unique.
        unsafe {
            (*link.as_ptr()).next = link;
            (*link.as_ptr()).prev = link;
        }
        Self { link }
    }

    #[inline]
    pub(crate) fn link(&self) -> NonNull<Link> {
        self.link
    }
}

impl Drop for Ghost {
    fn drop(&mut self) {
        // SAFETY: `link` was created by `Box::leak` in `Ghost::new` and is
        // released exactly once here.
        unsafe { drop(Box::from_raw(self.link.as_ptr())) }
    }
}
