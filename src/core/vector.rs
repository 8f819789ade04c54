//! The capability contract every clusterable item satisfies

use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Signature;
use crate::error::Result;

/// A single dimension value.
///
/// Numeric variants coerce to `f64` for distance computation; text and null coerce to `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	Int(i64),
	UInt(u64),
	Float(f64),
	Text(String),
	Null,
}

impl Value {
	/// Numeric coercion used when no transformer is supplied
	pub fn as_f64(&self) -> f64 {
		match self {
			Value::Int(v) => *v as f64,
			Value::UInt(v) => *v as f64,
			Value::Float(v) => *v,
			Value::Text(_) | Value::Null => 0.0,
		}
	}

	/// Textual form used when building signatures
	pub fn render(&self) -> String {
		match self {
			Value::Int(v) => v.to_string(),
			Value::UInt(v) => v.to_string(),
			Value::Float(v) => format!("{:?}", v),
			Value::Text(s) => format!("{:?}", s),
			Value::Null => "null".to_string(),
		}
	}
}

macro_rules! value_from {
	($variant:ident as $target:ty: $($t:ty),*) => {
		$(
			impl From<$t> for Value {
				fn from(v: $t) -> Self {
					Value::$variant(v as $target)
				}
			}
		)*
	};
}

value_from!(Int as i64: i8, i16, i32, i64, isize);
value_from!(UInt as u64: u8, u16, u32, u64, usize);
value_from!(Float as f64: f32, f64);

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::Text(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::Text(s)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Null)
	}
}

/// Maps a raw dimension value to the float used for distance computation
pub trait Transformer {
	fn transform(&self, value: &Value) -> f64;
}

impl<F> Transformer for F
where
	F: Fn(&Value) -> f64,
{
	fn transform(&self, value: &Value) -> f64 {
		self(value)
	}
}

/// Apply the transformer if present, else coerce numerically
pub fn quantify(transform: Option<&dyn Transformer>, value: &Value) -> f64 {
	match transform {
		Some(t) => t.transform(value),
		None => value.as_f64(),
	}
}

/// Anything that can be clustered.
///
/// Implementors must report a fixed dimensionality, the value at each ordinal
/// and a content-derived signature. Once a vector takes part in clustering it
/// must not change: signatures are allowed to be cached on first access.
pub trait Vector {
	/// Fixed dimensionality
	fn len(&self) -> usize;

	/// Value at ordinal `i`, `DimensionIndexOutOfBounds` when `i >= len()`
	fn dimension(&self, i: usize) -> Result<Value>;

	/// Identity key; equal signatures mean the same point
	fn signature(&self) -> Signature;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<T: Vector + ?Sized> Vector for &T {
	fn len(&self) -> usize {
		(**self).len()
	}

	fn dimension(&self, i: usize) -> Result<Value> {
		(**self).dimension(i)
	}

	fn signature(&self) -> Signature {
		(**self).signature()
	}
}

macro_rules! forward_vector {
	($($ptr:ident),*) => {
		$(
			impl<T: Vector + ?Sized> Vector for $ptr<T> {
				fn len(&self) -> usize {
					(**self).len()
				}

				fn dimension(&self, i: usize) -> Result<Value> {
					(**self).dimension(i)
				}

				fn signature(&self) -> Signature {
					(**self).signature()
				}
			}
		)*
	};
}

forward_vector!(Box, Rc, Arc);
