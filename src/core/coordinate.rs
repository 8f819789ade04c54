//! Built-in coordinate vector

use std::sync::OnceLock;

use serde::{Serialize, Serializer};

use super::{Signature, Value, Vector};
use crate::error::{Error, Result};

/// An immutable tuple of dimension values.
///
/// The signature is computed on first access and cached.
#[derive(Debug, Clone, Default)]
pub struct Coordinate {
	dimens: Vec<Value>,
	signature: OnceLock<Signature>,
}

impl Coordinate {
	pub fn new(dimens: Vec<Value>) -> Self {
		Self {
			dimens,
			signature: OnceLock::new(),
		}
	}

	pub fn values(&self) -> &[Value] {
		&self.dimens
	}

	/// Parse "1.5,2,-3" style input; integers stay integers
	pub fn parse(input: &str) -> std::result::Result<Self, String> {
		let dimens = input
			.split(',')
			.map(str::trim)
			.filter(|s| !s.is_empty())
			.map(|s| {
				if let Ok(i) = s.parse::<i64>() {
					Ok(Value::Int(i))
				} else {
					s.parse::<f64>()
						.map(Value::Float)
						.map_err(|_| format!("'{}' is not a valid number", s))
				}
			})
			.collect::<std::result::Result<Vec<_>, _>>()?;

		if dimens.is_empty() {
			return Err(format!("'{}' has no dimensions", input));
		}
		Ok(Self::new(dimens))
	}
}

/// Build a [`Coordinate`] from mixed numeric literals: `coord![23, 10.5, 15]`
#[macro_export]
macro_rules! coord {
	($($v:expr),* $(,)?) => {
		$crate::core::Coordinate::new(vec![$($crate::core::Value::from($v)),*])
	};
}

impl Vector for Coordinate {
	fn len(&self) -> usize {
		self.dimens.len()
	}

	fn dimension(&self, i: usize) -> Result<Value> {
		self.dimens.get(i).cloned().ok_or(Error::DimensionIndexOutOfBounds {
			index: i,
			len: self.dimens.len(),
		})
	}

	fn signature(&self) -> Signature {
		self.signature
			.get_or_init(|| Signature::from_parts(self.dimens.iter().map(Value::render)))
			.clone()
	}
}

impl PartialEq for Coordinate {
	fn eq(&self, other: &Self) -> bool {
		self.signature() == other.signature()
	}
}

impl Eq for Coordinate {}

impl std::hash::Hash for Coordinate {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.signature().hash(state);
	}
}

impl Serialize for Coordinate {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.dimens.serialize(serializer)
	}
}
