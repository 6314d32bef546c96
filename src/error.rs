use thiserror::Error;

/// A position that falls outside the valid bound of the operation it was
/// passed to.
///
/// Returned by checked access ([`at`](crate::DynArr::at)) and by every
/// position-taking mutation. For access and removal the valid bound is
/// `index < len`, for insertion it is `index <= len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("index {index} out of range for length {len}")]
pub struct OutOfRange {
    /// The offending position.
    pub index: usize,
    /// The length of the array at the time of the call.
    pub len: usize,
}
