use thiserror::Error;

/// An index outside the valid range of the list it was used on.
///
/// Insertion accepts indices in `[0, len]`; access and removal accept
/// `[0, len - 1]`. An operation that returns this error leaves the list
/// unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for list of length {len}")]
pub struct OutOfBounds {
	/// The offending index.
	pub index: usize,
	/// Number of live elements at the time of the call.
	pub len: usize,
}
