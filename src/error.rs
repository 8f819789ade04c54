//! Error types for the clustering engine

use thiserror::Error;

/// Result alias for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by vectors, the distance engine and the orchestrator.
#[derive(Debug, Error)]
pub enum Error {
	/// Compared vectors report different lengths.
	#[error("len(p)={left} != len(q)={right}")]
	DimensionMismatch {
		/// Length of the left-hand vector
		left: usize,
		/// Length of the right-hand vector
		right: usize,
	},

	/// Requested centroid count cannot be satisfied by the point set.
	///
	/// Raised when `k < 2`, `k >= points`, or fewer than `k` points have
	/// distinct signatures.
	#[error("invalid k={k} for {points} points: need 2 <= k < points and k distinct points")]
	InvalidK {
		/// Requested centroid count
		k: usize,
		/// Number of points supplied
		points: usize,
	},

	/// A dimension past the vector's declared length was requested.
	#[error("dimension index {index} out of bounds for length {len}")]
	DimensionIndexOutOfBounds {
		/// Requested ordinal
		index: usize,
		/// Declared length of the vector
		len: usize,
	},

	/// Cluster export failed.
	#[error("JSON serialization failed: {0}")]
	Json(#[from] serde_json::Error),
}
