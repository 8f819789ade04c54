//! Content-derived identity keys for vectors

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// Stable key identifying a vector by content.
///
/// Two vectors are the same point iff their signatures are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Signature(String);

impl Signature {
	pub fn new(key: impl Into<String>) -> Self {
		Self(key.into())
	}

	/// Join already-rendered parts with the configured separator
	pub fn from_parts<I, S>(parts: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let joined = parts
			.into_iter()
			.map(|p| p.as_ref().to_string())
			.collect::<Vec<_>>()
			.join(crate::config::SIGNATURE_SEPARATOR);
		Self(joined)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// 16-char xxh3 digest for logging/display
	pub fn digest(&self) -> String {
		format!("{:016x}", xxh3_64(self.0.as_bytes()))
	}

	/// First 8 characters of the digest
	pub fn short(&self) -> String {
		self.digest()[..8].to_string()
	}
}

impl std::fmt::Display for Signature {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
