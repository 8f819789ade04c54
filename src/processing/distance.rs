//! Euclidean distance between vectors
//!
//! sqrt((p1 - q1)^2 + (p2 - q2)^2 + ... + (pn - qn)^2)
//!
//! A dimension that fails to load counts as [`Value::Null`]: it goes through
//! the transformer like any other value, or coerces to 0.0 without one.

use crate::core::{quantify, Transformer, Value, Vector};
use crate::error::{Error, Result};

/// Euclidean distance after mapping every dimension through `transform`
pub fn transformed_distance<P, Q>(transform: Option<&dyn Transformer>, p: &P, q: &Q) -> Result<f64>
where
	P: Vector + ?Sized,
	Q: Vector + ?Sized,
{
	let (p_len, q_len) = (p.len(), q.len());
	if p_len != q_len {
		return Err(Error::DimensionMismatch {
			left: p_len,
			right: q_len,
		});
	}

	let squared: f64 = (0..p_len)
		.map(|i| {
			let pi = quantify(transform, &p.dimension(i).unwrap_or(Value::Null));
			let qi = quantify(transform, &q.dimension(i).unwrap_or(Value::Null));
			(pi - qi) * (pi - qi)
		})
		.sum();

	Ok(squared.sqrt())
}

/// Plain Euclidean distance
pub fn euclidean_distance<P, Q>(p: &P, q: &Q) -> Result<f64>
where
	P: Vector + ?Sized,
	Q: Vector + ?Sized,
{
	transformed_distance(None, p, q)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::coord;
	use crate::core::Signature;

	struct Person {
		age: f32,
		languages: i32,
		experience: f32,
	}

	impl Vector for Person {
		fn len(&self) -> usize {
			3
		}

		fn dimension(&self, i: usize) -> Result<Value> {
			match i {
				0 => Ok(self.age.into()),
				1 => Ok(self.languages.into()),
				2 => Ok(self.experience.into()),
				_ => Err(Error::DimensionIndexOutOfBounds { index: i, len: 3 }),
			}
		}

		fn signature(&self) -> Signature {
			Signature::new(format!("{:.6}-{}-{:.6}", self.age, self.languages, self.experience))
		}
	}

	/// Claims more dimensions than it can serve
	struct Short;

	impl Vector for Short {
		fn len(&self) -> usize {
			2
		}

		fn dimension(&self, i: usize) -> Result<Value> {
			match i {
				0 => Ok(Value::Int(3)),
				_ => Err(Error::DimensionIndexOutOfBounds { index: i, len: 1 }),
			}
		}

		fn signature(&self) -> Signature {
			Signature::new("short")
		}
	}

	#[test]
	fn coordinate_distance() {
		let a = coord![10.2, 15.6, 25];
		let b = coord![23.7, -8.9, 99.4];
		let d = euclidean_distance(&a, &b).unwrap();
		assert_eq!(format!("{:.3}", d), "79.485");
	}

	#[test]
	fn person_distance_coerces_integer_fields() {
		let lebron = Person { age: 32.0, languages: 1, experience: 14.0 };
		let kobe = Person { age: 38.0, languages: 3, experience: 18.0 };
		let d = euclidean_distance(&kobe, &lebron).unwrap();
		assert_eq!(format!("{:.3}", d), "7.483");
	}

	#[test]
	fn distance_is_symmetric() {
		let a = coord![1, -2.5, 7];
		let b = coord![4.25, 3, -1];
		assert_eq!(euclidean_distance(&a, &b).unwrap(), euclidean_distance(&b, &a).unwrap());
	}

	#[test]
	fn identical_points_are_zero_apart() {
		let a = coord![5, 5, 5];
		assert_eq!(euclidean_distance(&a, &a.clone()).unwrap(), 0.0);
	}

	#[test]
	fn mismatched_lengths_fail() {
		let err = euclidean_distance(&coord![1, 2], &coord![1, 2, 3]).unwrap_err();
		assert!(matches!(err, Error::DimensionMismatch { left: 2, right: 3 }));
	}

	#[test]
	fn transformer_is_applied_to_every_dimension() {
		let halve = |v: &Value| v.as_f64() / 2.0;
		let d = transformed_distance(Some(&halve), &coord![0, 0], &coord![6, 8]).unwrap();
		assert_eq!(d, 5.0);
	}

	#[test]
	fn non_numeric_dimensions_count_as_zero() {
		let d = euclidean_distance(&coord!["north", 3], &coord![4, 0]).unwrap();
		assert_eq!(d, 5.0);
	}

	#[test]
	fn failed_dimension_fetch_counts_as_null() {
		let d = euclidean_distance(&Short, &coord![0, 4]).unwrap();
		assert_eq!(d, 5.0);

		let marker = |v: &Value| if *v == Value::Null { 10.0 } else { v.as_f64() };
		let d = transformed_distance(Some(&marker), &Short, &coord![3, 10]).unwrap();
		assert_eq!(d, 0.0);
	}

	#[test]
	fn trait_objects_are_accepted() {
		let a: Box<dyn Vector> = Box::new(coord![0, 3]);
		let b: Box<dyn Vector> = Box::new(coord![4, 0]);
		assert_eq!(euclidean_distance(a.as_ref(), b.as_ref()).unwrap(), 5.0);
		assert_eq!(euclidean_distance(&a, &b).unwrap(), 5.0);
	}
}
