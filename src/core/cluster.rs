//! Cluster assignments keyed by centroid signature

use std::collections::{BTreeMap, HashSet};

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

use super::{Signature, Vector};
use crate::error::Result;

#[derive(Debug, Clone)]
struct Entry<V> {
	centroid: V,
	members: Vec<V>,
}

/// Mapping from centroid to the points assigned to it.
///
/// Centroids are input points, never averages. Entries are keyed by the
/// centroid's signature, so two clusters built in different orders compare
/// equal. A centroid without members holds an empty list.
#[derive(Debug, Clone)]
pub struct Cluster<V> {
	entries: BTreeMap<Signature, Entry<V>>,
}

impl<V> Default for Cluster<V> {
	fn default() -> Self {
		Self {
			entries: BTreeMap::new(),
		}
	}
}

impl<V: Vector> Cluster<V> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of centroids
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Register a centroid, keeping existing members if already present
	pub fn insert_centroid(&mut self, centroid: V) -> &mut Vec<V> {
		&mut self
			.entries
			.entry(centroid.signature())
			.or_insert_with(|| Entry {
				centroid,
				members: Vec::new(),
			})
			.members
	}

	/// Append `member` to `centroid`'s list, registering the centroid if needed
	pub fn assign(&mut self, centroid: V, member: V) {
		self.insert_centroid(centroid).push(member);
	}

	/// Builder form used for fixtures
	pub fn with_members(mut self, centroid: V, members: impl IntoIterator<Item = V>) -> Self {
		self.insert_centroid(centroid).extend(members);
		self
	}

	pub fn centroids(&self) -> impl Iterator<Item = &V> {
		self.entries.values().map(|e| &e.centroid)
	}

	pub fn contains_centroid(&self, signature: &Signature) -> bool {
		self.entries.contains_key(signature)
	}

	/// Members of the centroid with the same signature as `centroid`
	pub fn members(&self, centroid: &impl Vector) -> Option<&[V]> {
		self.entries
			.get(&centroid.signature())
			.map(|e| e.members.as_slice())
	}

	/// (centroid, members) pairs in signature order
	pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> {
		self.entries
			.values()
			.map(|e| (&e.centroid, e.members.as_slice()))
	}

	/// Centroids plus all members
	pub fn point_count(&self) -> usize {
		self.entries.values().map(|e| 1 + e.members.len()).sum()
	}

	/// `{ "<json of centroid>": [<json of member>, ...] }`
	pub fn to_json(&self) -> Result<String>
	where
		V: Serialize,
	{
		Ok(serde_json::to_string(self)?)
	}
}

impl<V: Vector> FromIterator<(V, Vec<V>)> for Cluster<V> {
	fn from_iter<I: IntoIterator<Item = (V, Vec<V>)>>(iter: I) -> Self {
		iter.into_iter()
			.fold(Self::new(), |cluster, (centroid, members)| cluster.with_members(centroid, members))
	}
}

/// True when both clusters hold the same centroids with set-equal member lists
pub fn clusters_equal<A: Vector, B: Vector>(a: &Cluster<A>, b: &Cluster<B>) -> bool {
	if a.len() != b.len() {
		return false;
	}

	a.entries.iter().all(|(signature, entry_a)| match b.entries.get(signature) {
		Some(entry_b) => members_equal(&entry_a.members, &entry_b.members),
		None => false,
	})
}

/// Set equality by member signature; empty lists only equal empty lists
fn members_equal<A: Vector, B: Vector>(a: &[A], b: &[B]) -> bool {
	if a.is_empty() || b.is_empty() {
		return a.is_empty() && b.is_empty();
	}

	let sigs_a: HashSet<Signature> = a.iter().map(Vector::signature).collect();
	let sigs_b: HashSet<Signature> = b.iter().map(Vector::signature).collect();
	sigs_a == sigs_b
}

impl<V: Vector> PartialEq for Cluster<V> {
	fn eq(&self, other: &Self) -> bool {
		clusters_equal(self, other)
	}
}

impl<V: Serialize> Serialize for Cluster<V> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for entry in self.entries.values() {
			let key = serde_json::to_string(&entry.centroid).map_err(S::Error::custom)?;
			map.serialize_entry(&key, &entry.members)?;
		}
		map.end()
	}
}
