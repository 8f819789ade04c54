//! USGS GeoJSON feed records

use std::sync::OnceLock;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::core::{Signature, Value, Vector};
use crate::error::{Error, Result};

/// Top level of a USGS earthquake feed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feed {
	#[serde(default)]
	pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub properties: Properties,
	pub geometry: Geometry,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
	pub mag: Option<f64>,
	pub place: Option<String>,
	/// Milliseconds since the Unix epoch
	pub time: Option<i64>,
}

/// GeoJSON point: `[longitude, latitude, depth]`
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
	pub coordinates: Vec<f64>,
}

impl Geometry {
	fn axis(&self, i: usize) -> f64 {
		self.coordinates.get(i).copied().unwrap_or(0.0)
	}

	pub fn longitude(&self) -> f64 {
		self.axis(0)
	}

	pub fn latitude(&self) -> f64 {
		self.axis(1)
	}

	pub fn depth(&self) -> f64 {
		self.axis(2)
	}
}

/// An earthquake clustered by (latitude, longitude, depth)
#[derive(Debug, Clone)]
pub struct Quake {
	feature: Feature,
	signature: OnceLock<Signature>,
}

impl Quake {
	pub const DIMENSIONS: usize = 3;

	pub fn new(feature: Feature) -> Self {
		Self {
			feature,
			signature: OnceLock::new(),
		}
	}

	pub fn latitude(&self) -> f64 {
		self.feature.geometry.latitude()
	}

	pub fn longitude(&self) -> f64 {
		self.feature.geometry.longitude()
	}

	pub fn depth(&self) -> f64 {
		self.feature.geometry.depth()
	}

	pub fn magnitude(&self) -> Option<f64> {
		self.feature.properties.mag
	}

	pub fn place(&self) -> Option<&str> {
		self.feature.properties.place.as_deref()
	}

	pub fn id(&self) -> Option<&str> {
		self.feature.id.as_deref()
	}

	pub fn time(&self) -> Option<DateTime<Utc>> {
		self.feature
			.properties
			.time
			.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
	}
}

impl Vector for Quake {
	fn len(&self) -> usize {
		Self::DIMENSIONS
	}

	fn dimension(&self, i: usize) -> Result<Value> {
		match i {
			0 => Ok(Value::Float(self.latitude())),
			1 => Ok(Value::Float(self.longitude())),
			2 => Ok(Value::Float(self.depth())),
			_ => Err(Error::DimensionIndexOutOfBounds {
				index: i,
				len: Self::DIMENSIONS,
			}),
		}
	}

	fn signature(&self) -> Signature {
		self.signature
			.get_or_init(|| {
				Signature::new(format!("{:.6}-{:.6}-{:.6}", self.latitude(), self.longitude(), self.depth()))
			})
			.clone()
	}
}

#[derive(Serialize)]
struct QuakeExport<'a> {
	#[serde(skip_serializing_if = "Option::is_none")]
	id: Option<&'a str>,
	latitude: f64,
	longitude: f64,
	depth: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	mag: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	place: Option<&'a str>,
}

impl Serialize for Quake {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		QuakeExport {
			id: self.id(),
			latitude: self.latitude(),
			longitude: self.longitude(),
			depth: self.depth(),
			mag: self.magnitude(),
			place: self.place(),
		}
		.serialize(serializer)
	}
}
