use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ops::{Add, Deref, DerefMut, Index, IndexMut, Range};
use core::ptr;
use core::slice::{self, SliceIndex};

use scopeguard::{guard, ScopeGuard};

use crate::error::OutOfRange;
use crate::raw::{ArrayBuffer, HeapBuffer};

mod into_iter;

pub use into_iter::IntoIter;

/// A contiguous growable array type, also known as a dynamic array.
///
/// `DynArr` keeps a logical sequence of `len` elements mapped onto a single
/// backing buffer of `capacity >= len` slots. Elements occupy `[0, len)`; the
/// slots in `[len, capacity)` are allocated but uninitialized. Indexing is
/// *O*(1), [`push`] is amortized *O*(1), and front or mid-sequence mutations
/// shift the affected elements in *O*(n).
///
/// # Growth and shrinking
///
/// When a buffer is exhausted the capacity doubles (a fresh empty array grows
/// to capacity 1). [`pop`] and [`pop_front`] shrink the buffer to exactly the
/// remaining length whenever occupancy after the removal drops to half of the
/// capacity or below; other removals never shrink.
///
/// # Backing storage
///
/// The second type parameter selects the allocation strategy through the
/// [`ArrayBuffer`] trait and defaults to [`HeapBuffer`], the global allocator.
/// All element construction and destruction happens in the array itself; a
/// buffer only acquires and releases memory.
///
/// # Invalidation
///
/// Any reference, slice, or iterator derived from the array is tied to the
/// backing buffer and the current element layout, both of which a mutation may
/// change. Those borrows must end before the mutating call; the borrow checker
/// enforces this, so the contract cannot be violated in safe code:
///
/// ```compile_fail
/// let mut arr = dynarr::dynarr![1, 2, 3];
/// let first = &arr[0];
/// arr.push(4); // may reallocate, invalidating `first`
/// assert_eq!(*first, 1);
/// ```
///
/// # Examples
///
/// ```
/// use dynarr::dynarr;
///
/// let mut arr = dynarr![3, 1, 4, 1, 5];
/// arr.remove_range(1..3).unwrap();
/// arr.insert(1, 9).unwrap();
/// assert_eq!(arr, [3, 9, 1, 5]);
/// ```
///
/// [`push`]: DynArr::push
/// [`pop`]: DynArr::pop
/// [`pop_front`]: DynArr::pop_front
pub struct DynArr<T, B: ArrayBuffer<T> = HeapBuffer<T>> {
    buf: B,
    len: usize,
    _marker: PhantomData<T>,
}

static_assertions::assert_eq_size!(DynArr<u8>, [usize; 3]);
static_assertions::assert_eq_size!(DynArr<u8>, Option<DynArr<u8>>);

impl<T> DynArr<T> {
    /// Constructs a new, empty `DynArr<T>`. Does not allocate.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an empty `DynArr<T>` whose buffer already holds `capacity`
    /// slots.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: HeapBuffer::allocate(capacity), len: 0, _marker: PhantomData }
    }

    /// Constructs a `DynArr<T>` of `n` default-constructed elements.
    #[must_use]
    pub fn from_default(n: usize) -> Self
    where
        T: Default,
    {
        let mut buf: HeapBuffer<T> = HeapBuffer::allocate(n);
        let mut init = guard((buf.as_mut_ptr(), 0usize), |(ptr, built)| unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, built));
        });
        for i in 0..n {
            // SAFETY: slot `i` is inside the fresh buffer and uninitialized.
            unsafe { ptr::write(init.0.add(i), T::default()) };
            init.1 = i + 1;
        }
        let _ = ScopeGuard::into_inner(init);
        Self { buf, len: n, _marker: PhantomData }
    }
}

impl<T: Clone> DynArr<T> {
    /// Constructs a `DynArr<T>` of `n` clones of `value`.
    #[must_use]
    pub fn from_elem(value: T, n: usize) -> Self {
        let mut arr = Self::new();
        arr.assign(n, value);
        arr
    }

    /// Constructs a `DynArr<T>` by cloning a slice, sized exactly to it.
    #[must_use]
    pub fn from_slice(src: &[T]) -> Self {
        Self { buf: Self::buffer_cloned_from(src), len: src.len(), _marker: PhantomData }
    }
}

impl<T, B: ArrayBuffer<T>> DynArr<T, B> {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns the element at `index`, or [`OutOfRange`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.as_slice().get(index).ok_or(OutOfRange { index, len: self.len })
    }

    /// Mutable counterpart of [`at`](DynArr::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(OutOfRange { index, len })
    }

    /// Appends `value` to the back.
    ///
    /// Amortized *O*(1); doubles the buffer when it is full.
    pub fn push(&mut self, value: T) {
        let len = self.len;
        if len == self.capacity() {
            let mut buf = B::allocate(Self::grown(len));
            // SAFETY: the new buffer holds `len + 1` or more slots. The old
            // elements are moved across, so zeroing `self.len` before `adopt`
            // keeps them from being dropped with the old buffer.
            unsafe {
                ptr::copy_nonoverlapping(self.buf.as_ptr(), buf.as_mut_ptr(), len);
                ptr::write(buf.as_mut_ptr().add(len), value);
                self.len = 0;
            }
            self.adopt(buf, len + 1);
        } else {
            // SAFETY: `len < capacity`, so the slot exists and is vacant.
            unsafe { ptr::write(self.buf.as_mut_ptr().add(len), value) };
            self.len += 1;
        }
    }

    /// Prepends `value`, shifting every existing element right by one. *O*(n).
    pub fn push_front(&mut self, value: T) {
        let len = self.len;
        if len == self.capacity() {
            let mut buf = B::allocate(Self::grown(len));
            // SAFETY: as in `push`, with the old live range landing at offset 1.
            unsafe {
                ptr::write(buf.as_mut_ptr(), value);
                ptr::copy_nonoverlapping(self.buf.as_ptr(), buf.as_mut_ptr().add(1), len);
                self.len = 0;
            }
            self.adopt(buf, len + 1);
        } else {
            // SAFETY: one spare slot exists past the live range, so the
            // overlapping shift stays in bounds and vacates slot 0.
            unsafe {
                let ptr = self.buf.as_mut_ptr();
                ptr::copy(ptr, ptr.add(1), len);
                ptr::write(ptr, value);
            }
            self.len += 1;
        }
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    ///
    /// Shrinks the buffer to exactly the remaining length when occupancy after
    /// the removal is at or below half of the capacity.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let new_len = self.len - 1;
        // SAFETY: index `new_len` is live; ownership of that slot is given up
        // by the shrink or the length decrement below.
        let value = unsafe { ptr::read(self.buf.as_ptr().add(new_len)) };
        if 2 * new_len <= self.capacity() {
            self.shrink_to_exact(new_len);
        } else {
            self.len = new_len;
        }
        Some(value)
    }

    /// Removes and returns the first element, or `None` if the array is empty.
    ///
    /// Shifts the remaining elements left in place while occupancy stays above
    /// half of the capacity, and reallocates to exactly the remaining length
    /// otherwise. *O*(n).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let new_len = self.len - 1;
        // SAFETY: slot 0 is live and is vacated by the shift or discarded with
        // the old buffer below.
        let value = unsafe { ptr::read(self.buf.as_ptr()) };
        if 2 * new_len > self.capacity() {
            // SAFETY: `[1, len)` are live slots, the overlapping copy moves
            // them one slot down.
            unsafe {
                let ptr = self.buf.as_mut_ptr();
                ptr::copy(ptr.add(1), ptr, new_len);
            }
            self.len = new_len;
        } else {
            let mut buf = B::allocate(new_len);
            // SAFETY: the surviving elements `[1, len)` move into the new
            // buffer; slot 0 was read out above.
            unsafe {
                ptr::copy_nonoverlapping(self.buf.as_ptr().add(1), buf.as_mut_ptr(), new_len);
                self.len = 0;
            }
            self.adopt(buf, new_len);
        }
        Some(value)
    }

    /// Inserts `value` at `pos`, shifting everything from `pos` onward right
    /// by one. `pos == len` appends, `pos == 0` prepends. *O*(n).
    ///
    /// Fails with [`OutOfRange`] if `pos > len`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), OutOfRange> {
        let len = self.len;
        if pos > len {
            return Err(OutOfRange { index: pos, len });
        }
        if pos == len {
            self.push(value);
        } else if pos == 0 {
            self.push_front(value);
        } else if len == self.capacity() {
            let mut buf = B::allocate(Self::grown(len));
            // SAFETY: splices `[0, pos)`, `value`, `[pos, len)` into the new
            // buffer; all existing elements are moved, none dropped.
            unsafe {
                let old = self.buf.as_ptr();
                let new = buf.as_mut_ptr();
                ptr::copy_nonoverlapping(old, new, pos);
                ptr::write(new.add(pos), value);
                ptr::copy_nonoverlapping(old.add(pos), new.add(pos + 1), len - pos);
                self.len = 0;
            }
            self.adopt(buf, len + 1);
        } else {
            // SAFETY: a spare slot exists at `len`, the overlapping shift
            // vacates `pos`.
            unsafe {
                let ptr = self.buf.as_mut_ptr().add(pos);
                ptr::copy(ptr, ptr.add(1), len - pos);
                ptr::write(ptr, value);
            }
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the element at `pos`, shifting everything after it
    /// left by one. *O*(n).
    ///
    /// Fails with [`OutOfRange`] if `pos >= len`; removal never shrinks the
    /// buffer.
    pub fn remove(&mut self, pos: usize) -> Result<T, OutOfRange> {
        let len = self.len;
        if pos >= len {
            return Err(OutOfRange { index: pos, len });
        }
        // SAFETY: `pos` is live; the element is read out before the
        // overlapping shift fills its slot.
        unsafe {
            let ptr = self.buf.as_mut_ptr().add(pos);
            let value = ptr::read(ptr);
            ptr::copy(ptr.add(1), ptr, len - pos - 1);
            self.len = len - 1;
            Ok(value)
        }
    }

    /// Removes the elements in `range`, shifting the tail left over the gap.
    /// An empty range is a no-op. *O*(n).
    ///
    /// Fails with [`OutOfRange`] if the range is inverted or ends past `len`.
    pub fn remove_range(&mut self, range: Range<usize>) -> Result<(), OutOfRange> {
        let len = self.len;
        let Range { start, end } = range;
        if end > len {
            return Err(OutOfRange { index: end, len });
        }
        if start > end {
            return Err(OutOfRange { index: start, len });
        }
        if start == end {
            return Ok(());
        }
        // SAFETY: `[start, end)` are live and dropped exactly once; the length
        // is cut to the prefix first so a panicking `Drop` leaks the tail
        // instead of exposing vacated slots.
        unsafe {
            let ptr = self.buf.as_mut_ptr();
            let vacated: *mut [T] = ptr::slice_from_raw_parts_mut(ptr.add(start), end - start);
            let tail_len = len - end;
            self.len = start;
            ptr::drop_in_place(vacated);
            ptr::copy(ptr.add(end), ptr.add(start), tail_len);
            self.len = start + tail_len;
        }
        Ok(())
    }

    /// Destroys all elements and releases the backing store.
    pub fn clear(&mut self) {
        self.adopt(B::empty(), 0);
    }

    /// Switches to a freshly populated buffer: destroys every currently-live
    /// element, releases the old backing store, and takes over `buf` with
    /// `len` elements already constructed in it.
    ///
    /// This is the single choke point every reallocating mutation passes
    /// through, and it is only called once the new buffer is fully populated.
    /// An unwind raised while populating (say, by an element's `Clone`) thus
    /// never reaches here and leaves the old buffer completely intact.
    fn adopt(&mut self, buf: B, len: usize) {
        debug_assert!(len <= buf.capacity());
        // SAFETY: `[0, self.len)` are live and dropped exactly once; the
        // length is zeroed first so a panicking `Drop` cannot re-expose them.
        unsafe {
            let live: *mut [T] = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len);
            self.len = 0;
            ptr::drop_in_place(live);
        }
        self.buf = buf;
        self.len = len;
    }

    /// Reallocates to exactly `new_len` slots. The caller has already taken
    /// ownership of every element at `new_len` and beyond.
    fn shrink_to_exact(&mut self, new_len: usize) {
        let mut buf = B::allocate(new_len);
        // SAFETY: `[0, new_len)` are live and move into the new buffer.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), buf.as_mut_ptr(), new_len);
            self.len = 0;
        }
        self.adopt(buf, new_len);
    }

    /// Capacity after growing a full buffer of `len` elements.
    fn grown(len: usize) -> usize {
        if len == 0 {
            1
        } else {
            match len.checked_mul(2) {
                Some(cap) => cap,
                None => panic!("capacity overflow"),
            }
        }
    }
}

impl<T: Clone, B: ArrayBuffer<T>> DynArr<T, B> {
    /// Replaces the contents with `n` clones of `value`.
    ///
    /// Always builds a fresh buffer sized exactly to the new content, even
    /// when the existing capacity would suffice.
    pub fn assign(&mut self, n: usize, value: T) {
        let mut buf = B::allocate(n);
        if n != 0 {
            let mut init = guard((buf.as_mut_ptr(), 0usize), |(ptr, built)| unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, built));
            });
            for i in 0..n - 1 {
                // SAFETY: slot `i` is inside the fresh buffer and uninitialized.
                unsafe { ptr::write(init.0.add(i), value.clone()) };
                init.1 = i + 1;
            }
            // The final slot takes `value` itself, saving one clone.
            unsafe { ptr::write(init.0.add(n - 1), value) };
            let _ = ScopeGuard::into_inner(init);
        }
        self.adopt(buf, n);
    }

    /// Replaces the contents with clones of `src`, sized exactly to it.
    ///
    /// Like [`assign`](DynArr::assign), existing capacity is never reused.
    pub fn assign_from_slice(&mut self, src: &[T]) {
        let buf = Self::buffer_cloned_from(src);
        self.adopt(buf, src.len());
    }

    /// Inserts clones of `src` at `pos`, shifting everything from `pos`
    /// onward right by `src.len()`. An empty slice is a no-op.
    ///
    /// Fails with [`OutOfRange`] if `pos > len`. If the combined tail would
    /// not fit in the current buffer the array reallocates to twice the
    /// combined length; a buffer the new content would exactly fill also
    /// reallocates.
    pub fn insert_slice(&mut self, pos: usize, src: &[T]) -> Result<(), OutOfRange> {
        let len = self.len;
        if pos > len {
            return Err(OutOfRange { index: pos, len });
        }
        let count = src.len();
        if count == 0 {
            return Ok(());
        }

        if len + count >= self.capacity() {
            // Splice `[0, pos)`, the clones, and `[pos, len)` into a buffer of
            // twice the combined length. The incoming range is cloned before
            // any live element moves, so a panicking clone unwinds with the
            // array untouched.
            let mut buf = B::allocate(Self::doubled(len + count));
            let mut init = guard((buf.as_mut_ptr(), 0usize), move |(ptr, built)| unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.add(pos), built));
            });
            for (i, value) in src.iter().enumerate() {
                // SAFETY: slot `pos + i` is inside the fresh buffer.
                unsafe { ptr::write(init.0.add(pos + i), value.clone()) };
                init.1 = i + 1;
            }
            let _ = ScopeGuard::into_inner(init);
            // SAFETY: moves cannot panic past this point; both segments land
            // around the clones already in place.
            unsafe {
                let old = self.buf.as_ptr();
                let new = buf.as_mut_ptr();
                ptr::copy_nonoverlapping(old, new, pos);
                ptr::copy_nonoverlapping(old.add(pos), new.add(pos + count), len - pos);
                self.len = 0;
            }
            self.adopt(buf, len + count);
        } else if pos == len {
            // Bulk-construct directly after the current end, claiming each
            // element as it is built.
            for value in src {
                // SAFETY: `len + count < capacity`, so the slot is vacant.
                unsafe { ptr::write(self.buf.as_mut_ptr().add(self.len), value.clone()) };
                self.len += 1;
            }
        } else {
            // Stash the tail aside, clone the incoming range into the freed
            // slots, then put the tail back right after it.
            let tail_len = len - pos;
            let mut stash = TailStash::<T, B> { buf: B::allocate(tail_len), len: tail_len, _marker: PhantomData };
            // SAFETY: `[pos, len)` move into the stash; the length is cut to
            // the prefix so a panicking clone below leaves a valid array and
            // the stash destructor covers the moved tail.
            unsafe {
                ptr::copy_nonoverlapping(self.buf.as_ptr().add(pos), stash.buf.as_mut_ptr(), tail_len);
            }
            self.len = pos;
            for value in src {
                // SAFETY: the tail slots were vacated above.
                unsafe { ptr::write(self.buf.as_mut_ptr().add(self.len), value.clone()) };
                self.len += 1;
            }
            // SAFETY: the stashed elements move back; defusing the stash keeps
            // them from being dropped with it.
            unsafe {
                ptr::copy_nonoverlapping(stash.buf.as_ptr(), self.buf.as_mut_ptr().add(self.len), tail_len);
            }
            stash.len = 0;
            self.len = pos + count + tail_len;
        }
        Ok(())
    }

    /// Builds a new array holding `self`'s elements followed by `other`'s,
    /// sized exactly to the combined length and independent of both inputs.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let total = self.len + other.len;
        let mut buf = B::allocate(total);
        let mut init = guard((buf.as_mut_ptr(), 0usize), |(ptr, built)| unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, built));
        });
        for value in self.iter().chain(other.iter()) {
            // SAFETY: `init.1` slots are built so far, `total` fit.
            unsafe { ptr::write(init.0.add(init.1), value.clone()) };
            init.1 += 1;
        }
        let _ = ScopeGuard::into_inner(init);
        Self { buf, len: total, _marker: PhantomData }
    }

    /// Clone-populates a fresh exact-sized buffer from `src`.
    fn buffer_cloned_from(src: &[T]) -> B {
        let mut buf = B::allocate(src.len());
        let mut init = guard((buf.as_mut_ptr(), 0usize), |(ptr, built)| unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, built));
        });
        for (i, value) in src.iter().enumerate() {
            // SAFETY: slot `i` is inside the fresh buffer and uninitialized.
            unsafe { ptr::write(init.0.add(i), value.clone()) };
            init.1 = i + 1;
        }
        let _ = ScopeGuard::into_inner(init);
        buf
    }

    /// `2 * n`, panicking on overflow like any other capacity computation.
    fn doubled(n: usize) -> usize {
        match n.checked_mul(2) {
            Some(cap) => cap,
            None => panic!("capacity overflow"),
        }
    }
}

/// Holding area for the tail of the live range during an in-place splice. If
/// an element clone panics before the tail is restored, the stashed elements
/// are dropped here instead of leaking.
struct TailStash<T, B: ArrayBuffer<T>> {
    buf: B,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T, B: ArrayBuffer<T>> Drop for TailStash<T, B> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` of the stash hold the moved tail elements; `len`
        // is zeroed once they move back out.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len));
        }
    }
}

impl<T, B: ArrayBuffer<T>> Drop for DynArr<T, B> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` are live and dropped exactly once; the buffer's
        // own destructor releases the store right after.
        unsafe {
            let live: *mut [T] = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len);
            self.len = 0;
            ptr::drop_in_place(live);
        }
    }
}

/// An empty array over any buffer type. This is the generic entry point for a
/// custom [`ArrayBuffer`]; the inherent constructors are tied to [`HeapBuffer`].
impl<T, B: ArrayBuffer<T>> Default for DynArr<T, B> {
    #[inline]
    fn default() -> Self {
        Self { buf: B::empty(), len: 0, _marker: PhantomData }
    }
}

impl<T, B: ArrayBuffer<T>> Deref for DynArr<T, B> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        // SAFETY: `[0, len)` are initialized; for `capacity == 0` the dangling
        // pointer is valid for an empty slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T, B: ArrayBuffer<T>> DerefMut for DynArr<T, B> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: as in `deref`.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }
}

impl<T: Clone, B: ArrayBuffer<T>> Clone for DynArr<T, B> {
    fn clone(&self) -> Self {
        Self { buf: Self::buffer_cloned_from(self), len: self.len, _marker: PhantomData }
    }

    fn clone_from(&mut self, source: &Self) {
        // Deliberately rebuilds an exact-sized buffer instead of reusing
        // capacity, matching `assign`.
        let buf = Self::buffer_cloned_from(source);
        self.adopt(buf, source.len);
    }
}

impl<T: fmt::Debug, B: ArrayBuffer<T>> fmt::Debug for DynArr<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Hash, B: ArrayBuffer<T>> Hash for DynArr<T, B> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state)
    }
}

impl<T, B: ArrayBuffer<T>, I: SliceIndex<[T]>> Index<I> for DynArr<T, B> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, B: ArrayBuffer<T>, I: SliceIndex<[T]>> IndexMut<I> for DynArr<T, B> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

macro_rules! impl_slice_partial_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                self[..] == other[..]
            }
        }
    };
}

impl_slice_partial_eq! { [BT: ArrayBuffer<T>, BU: ArrayBuffer<U>] DynArr<T, BT>, DynArr<U, BU> }
impl_slice_partial_eq! { [B: ArrayBuffer<T>] DynArr<T, B>, [U] }
impl_slice_partial_eq! { [B: ArrayBuffer<T>] DynArr<T, B>, &[U] }
impl_slice_partial_eq! { [B: ArrayBuffer<T>] DynArr<T, B>, &mut [U] }
impl_slice_partial_eq! { [B: ArrayBuffer<T>, const N: usize] DynArr<T, B>, [U; N] }
impl_slice_partial_eq! { [B: ArrayBuffer<T>, const N: usize] DynArr<T, B>, &[U; N] }

impl<T: Eq, B: ArrayBuffer<T>> Eq for DynArr<T, B> {}

impl<T: PartialOrd, B: ArrayBuffer<T>> PartialOrd for DynArr<T, B> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, B: ArrayBuffer<T>> Ord for DynArr<T, B> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Clone, B: ArrayBuffer<T>> Add for &DynArr<T, B> {
    type Output = DynArr<T, B>;

    #[inline]
    fn add(self, rhs: Self) -> DynArr<T, B> {
        self.concat(rhs)
    }
}

impl<T, B: ArrayBuffer<T>> Extend<T> for DynArr<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a, B: ArrayBuffer<T>> Extend<&'a T> for DynArr<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push(*value);
        }
    }
}

impl<T, B: ArrayBuffer<T>> FromIterator<T> for DynArr<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::default();
        arr.extend(iter);
        arr
    }
}

impl<'a, T, B: ArrayBuffer<T>> IntoIterator for &'a DynArr<T, B> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, B: ArrayBuffer<T>> IntoIterator for &'a mut DynArr<T, B> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Clone> From<&[T]> for DynArr<T> {
    #[inline]
    fn from(src: &[T]) -> Self {
        Self::from_slice(src)
    }
}

impl<T: Clone> From<&mut [T]> for DynArr<T> {
    #[inline]
    fn from(src: &mut [T]) -> Self {
        Self::from_slice(src)
    }
}

impl<T, const N: usize> From<[T; N]> for DynArr<T> {
    fn from(array: [T; N]) -> Self {
        let array = ManuallyDrop::new(array);
        let mut buf = HeapBuffer::allocate(N);
        // SAFETY: the elements move into the fresh buffer and are not dropped
        // at the source.
        unsafe { ptr::copy_nonoverlapping(array.as_ptr(), buf.as_mut_ptr(), N) };
        Self { buf, len: N, _marker: PhantomData }
    }
}

impl<T, B: ArrayBuffer<T>> AsRef<[T]> for DynArr<T, B> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, B: ArrayBuffer<T>> AsMut<[T]> for DynArr<T, B> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

/// Creates a [`DynArr`] from a list of elements or an `elem; n` repetition.
///
/// ```
/// use dynarr::dynarr;
///
/// let arr = dynarr![1, 2, 3];
/// assert_eq!(arr, [1, 2, 3]);
/// let arr = dynarr![0u8; 4];
/// assert_eq!(arr, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::DynArr::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynArr::from_elem($elem, $n)
    };
    ($($val:expr),+ $(,)?) => {
        $crate::DynArr::from([$($val),+])
    };
}
