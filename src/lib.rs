//! A growable, contiguous sequence container backed by a single allocation.
//!
//! The crate provides one type, [`DynArr`], a dynamic array with *O*(1)
//! indexing, amortized *O*(1) [`push`](DynArr::push), both-end push/pop,
//! arbitrary-position insert/erase, and range splicing. Its backing storage is
//! pluggable through the [`ArrayBuffer`] trait and defaults to the global
//! allocator via [`HeapBuffer`].
//!
//! Two policies drive every reallocation: a full buffer doubles, and a removal
//! from either end that leaves occupancy at or below half of the capacity
//! shrinks the buffer to exactly the remaining length. Every reallocating
//! mutation builds and populates its replacement buffer completely before the
//! array adopts it, so an element constructor that panics midway (a `Clone`,
//! say) unwinds with the original contents untouched.
//!
//! Bounds-checked operations report [`OutOfRange`]; removal from an empty
//! array is a plain `None`/no-op, never an error. That asymmetry is
//! deliberate: a missing element to remove is an ordinary state, a position
//! past the end never is.
//!
//! ```
//! use dynarr::{dynarr, DynArr};
//!
//! let mut arr: DynArr<i32> = dynarr![3, 1, 4, 1, 5];
//! arr.remove_range(1..3).unwrap();
//! assert_eq!(arr, [3, 1, 5]);
//!
//! arr.insert(1, 9).unwrap();
//! assert_eq!(arr, [3, 9, 1, 5]);
//!
//! assert!(arr.at(4).is_err());
//! assert_eq!(arr.pop(), Some(5));
//! ```

mod dynarr;
mod error;
mod raw;

pub use dynarr::{DynArr, IntoIter};
pub use error::OutOfRange;
pub use raw::{ArrayBuffer, HeapBuffer};
