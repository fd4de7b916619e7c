//! Heap wrapper for enforced Arc usage.
//!
//! `Heap<T>` wraps `Arc<T>` and is the only way to allocate heap values in
//! the `Value` system. The constructor is `pub(super)`, so external code
//! must go through `Value`'s factory methods (`Value::string`,
//! `Value::list`, ...). This keeps a single point of control over
//! allocation and guarantees that every heap variant is shareable.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A heap-allocated value wrapper.
///
/// # Thread Safety
/// Uses `Arc` internally for thread-safe reference counting.
///
/// # Zero-Cost Abstraction
/// `#[repr(transparent)]` ensures this has the same memory layout as
/// `Arc<T>`, so there is no overhead from the wrapper.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    /// Create a new heap-allocated value.
    ///
    /// `pub(super)` - only visible within the value module. External code
    /// must use `Value`'s factory methods.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Pointer identity: do both wrappers share the same allocation?
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deref_and_clone_share_allocation() {
        let a = Heap::new(String::from("shared"));
        let b = a.clone();
        assert_eq!(&*a, "shared");
        assert!(Heap::ptr_eq(&a, &b));
    }

    #[test]
    fn separate_allocations_compare_equal_but_not_identical() {
        let a = Heap::new(vec![1, 2, 3]);
        let b = Heap::new(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert!(!Heap::ptr_eq(&a, &b));
    }
}
