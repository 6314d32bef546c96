use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ptr;
use core::slice;

use crate::raw::{ArrayBuffer, HeapBuffer};

use super::DynArr;

/// An iterator that moves out of a [`DynArr`].
///
/// Holds the array's buffer and yields the elements front to back; whatever is
/// left unconsumed is dropped with the iterator, then the buffer is released.
pub struct IntoIter<T, B: ArrayBuffer<T> = HeapBuffer<T>> {
    buf: B,
    start: usize,
    end: usize,
    _marker: PhantomData<T>,
}

impl<T, B: ArrayBuffer<T>> IntoIterator for DynArr<T, B> {
    type Item = T;
    type IntoIter = IntoIter<T, B>;

    fn into_iter(self) -> IntoIter<T, B> {
        let me = ManuallyDrop::new(self);
        // SAFETY: `me` is never touched again; the buffer and the live range
        // move into the iterator wholesale.
        let buf = unsafe { ptr::read(&me.buf) };
        IntoIter { buf, start: 0, end: me.len, _marker: PhantomData }
    }
}

impl<T, B: ArrayBuffer<T>> IntoIter<T, B> {
    /// The remaining elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` are initialized elements of the buffer.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`.
        unsafe {
            slice::from_raw_parts_mut(self.buf.as_mut_ptr().add(self.start), self.end - self.start)
        }
    }
}

impl<T, B: ArrayBuffer<T>> Iterator for IntoIter<T, B> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: slot `start` is live; bumping `start` gives up ownership.
        let value = unsafe { ptr::read(self.buf.as_ptr().add(self.start)) };
        self.start += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }
}

impl<T, B: ArrayBuffer<T>> DoubleEndedIterator for IntoIter<T, B> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: slot `end` was live; shrinking `end` gave up ownership.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.end)) })
    }
}

impl<T, B: ArrayBuffer<T>> ExactSizeIterator for IntoIter<T, B> {}
impl<T, B: ArrayBuffer<T>> FusedIterator for IntoIter<T, B> {}

impl<T: fmt::Debug, B: ArrayBuffer<T>> fmt::Debug for IntoIter<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, B: ArrayBuffer<T>> Drop for IntoIter<T, B> {
    fn drop(&mut self) {
        // SAFETY: `[start, end)` hold the unconsumed elements; the range is
        // emptied first so a panicking `Drop` cannot re-drop them. The buffer
        // releases its memory right after.
        unsafe {
            let remaining: *mut [T] = ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().add(self.start),
                self.end - self.start,
            );
            self.end = self.start;
            ptr::drop_in_place(remaining);
        }
    }
}
