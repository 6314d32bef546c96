use core::alloc::Layout;
use core::mem;
use core::ptr::NonNull;
use std::alloc::{alloc, dealloc, handle_alloc_error};

/// Trait representing the backing storage of a [`DynArr`](crate::DynArr).
///
/// A buffer owns a contiguous run of `capacity()` element slots. All slots are
/// uninitialized from the buffer's point of view: constructing and destroying
/// elements is entirely the job of the array on top, a buffer only acquires and
/// releases the memory. Dropping a buffer therefore runs no element destructors.
///
/// Implementations must uphold:
/// - `allocate(n)` returns a buffer with `capacity() == n` whose pointer is
///   valid for reads and writes of `n` elements (for zero-sized `T`, a dangling
///   but well-aligned pointer).
/// - `empty()` is equivalent to `allocate(0)` and never allocates.
/// - No two live buffers return the same non-dangling pointer.
pub trait ArrayBuffer<T>: Sized {
    /// Creates a buffer with no storage.
    fn empty() -> Self;

    /// Acquires storage for exactly `capacity` uninitialized slots.
    ///
    /// Failure to acquire memory is fatal and must not be retried; an
    /// implementation either returns a fully usable buffer or diverges.
    fn allocate(capacity: usize) -> Self;

    /// The number of slots this buffer holds.
    fn capacity(&self) -> usize;

    fn as_ptr(&self) -> *const T;
    fn as_mut_ptr(&mut self) -> *mut T;
}

/// The default [`ArrayBuffer`]: one allocation from the global allocator.
pub struct HeapBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> HeapBuffer<T> {
    fn layout_for(capacity: usize) -> Layout {
        match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        }
    }
}

impl<T> ArrayBuffer<T> for HeapBuffer<T> {
    #[inline]
    fn empty() -> Self {
        Self { ptr: NonNull::dangling(), cap: 0 }
    }

    fn allocate(capacity: usize) -> Self {
        if capacity == 0 || mem::size_of::<T>() == 0 {
            // Zero-sized types never touch the heap, the dangling pointer is
            // valid for any number of them.
            return Self { ptr: NonNull::dangling(), cap: capacity };
        }

        let layout = Self::layout_for(capacity);
        // SAFETY: `layout` has non-zero size, as neither `capacity` nor the
        // element size is 0 here.
        let ptr = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(ptr.cast::<T>()) else {
            handle_alloc_error(layout);
        };
        Self { ptr, cap: capacity }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for HeapBuffer<T> {
    fn drop(&mut self) {
        if self.cap != 0 && mem::size_of::<T>() != 0 {
            // SAFETY: the pointer was obtained from `alloc` with this exact
            // layout; `layout_for` cannot fail for a capacity that has already
            // been allocated once.
            unsafe { dealloc(self.ptr.as_ptr().cast(), Self::layout_for(self.cap)) };
        }
    }
}

// The buffer owns its slots exclusively, so it inherits the element's thread
// affinity, same as the array on top of it.
unsafe impl<T: Send> Send for HeapBuffer<T> {}
unsafe impl<T: Sync> Sync for HeapBuffer<T> {}
