//! K-means partitioning around fixed, randomly seeded centroids
//!
//! The run moves through three phases:
//!
//! 1. **Seeding**: validate `k`, shuffle the point indices with a seeded RNG and
//!    walk the permutation, keeping the first `k` indices whose signatures
//!    have not been seen yet.
//! 2. **Assigning**: every non-centroid point joins its nearest centroid.
//! 3. **Converged**: two consecutive passes produced equal clusters.
//!
//! Centroids are picked once and never relocated, so the first pass is
//! already stable and every valid run converges after exactly two passes.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::distance::transformed_distance;
use crate::config::{resolve_seed, MIN_K};
use crate::core::{clusters_equal, Cluster, Transformer, Vector};
use crate::error::{Error, Result};
use crate::ui;

/// Clustering request: centroid count, points and seed.
///
/// A non-positive seed means "seed from the current time".
pub struct KMeanRequest<V> {
	pub k: usize,
	pub points: Vec<V>,
	pub seed: i64,
	transformer: Option<Box<dyn Transformer>>,
}

impl<V: Vector + Clone> KMeanRequest<V> {
	pub fn new(k: usize, points: impl IntoIterator<Item = V>) -> Self {
		Self {
			k,
			points: points.into_iter().collect(),
			seed: 0,
			transformer: None,
		}
	}

	/// Set random seed for reproducibility
	pub fn with_seed(mut self, seed: i64) -> Self {
		self.seed = seed;
		self
	}

	/// Map dimension values through `transformer` during assignment
	pub fn with_transformer(mut self, transformer: impl Transformer + 'static) -> Self {
		self.transformer = Some(Box::new(transformer));
		self
	}

	/// Run to convergence and report the full outcome
	pub fn run(&self) -> Result<KMeansOutcome<V>> {
		let n = self.points.len();
		if self.k < MIN_K || self.k >= n {
			return Err(Error::InvalidK { k: self.k, points: n });
		}

		let seed = resolve_seed(self.seed);
		let centroid_indices = seed_centroids(self.k, &self.points, seed)?;
		ui::debug(&format!(
			"Seeded {} centroids from {} points (seed {}): {:?}",
			self.k, n, seed, centroid_indices
		));

		let centroids: Vec<V> = centroid_indices.iter().map(|&i| self.points[i].clone()).collect();
		let is_centroid: HashSet<usize> = centroid_indices.iter().copied().collect();
		let transform = self.transformer.as_deref();

		let mut last = Cluster::new();
		let mut passes = 0;
		loop {
			let current = assign_pass(transform, &self.points, &centroids, &is_centroid)?;
			passes += 1;
			ui::debug(&format!("Pass {}: {} centroids, {} points", passes, current.len(), current.point_count()));

			if clusters_equal(&last, &current) {
				break;
			}
			last = current;
		}

		ui::debug(&format!("Converged after {} passes", passes));

		Ok(KMeansOutcome {
			cluster: last,
			seed,
			centroid_indices,
			passes,
		})
	}
}

/// Result of a converged run
#[derive(Debug, Clone)]
pub struct KMeansOutcome<V> {
	pub cluster: Cluster<V>,
	/// Seed actually used (resolved from the clock when the request had none)
	pub seed: u64,
	/// Indices into the request's points, in selection order
	pub centroid_indices: Vec<usize>,
	/// Assignment passes performed
	pub passes: usize,
}

/// Cluster `request.points` and return the converged assignment
pub fn run_kmeans<V: Vector + Clone>(request: &KMeanRequest<V>) -> Result<Cluster<V>> {
	request.run().map(|outcome| outcome.cluster)
}

/// Time-seeded convenience form
pub fn kmeans<V: Vector + Clone>(k: usize, points: impl IntoIterator<Item = V>) -> Result<Cluster<V>> {
	run_kmeans(&KMeanRequest::new(k, points))
}

/// First `k` indices of a seeded permutation of the points with pairwise distinct signatures
///
/// Duplicates further down the permutation are skipped so that two equal
/// points never share a centroid key.
fn seed_centroids<V: Vector>(k: usize, points: &[V], seed: u64) -> Result<Vec<usize>> {
	let mut rng = StdRng::seed_from_u64(seed);
	let mut order: Vec<usize> = (0..points.len()).collect();
	order.shuffle(&mut rng);

	let mut seen = HashSet::new();
	let picked: Vec<usize> = order
		.into_iter()
		.filter(|&i| seen.insert(points[i].signature()))
		.take(k)
		.collect();

	if picked.len() < k {
		ui::debug(&format!("Only {} distinct points for k={}", picked.len(), k));
		return Err(Error::InvalidK { k, points: points.len() });
	}

	Ok(picked)
}

/// One pass: centroids keep their own key, everything else joins the nearest centroid
fn assign_pass<V: Vector + Clone>(
	transform: Option<&dyn Transformer>,
	points: &[V],
	centroids: &[V],
	is_centroid: &HashSet<usize>,
) -> Result<Cluster<V>> {
	let mut cluster = Cluster::new();

	for (i, point) in points.iter().enumerate() {
		if is_centroid.contains(&i) {
			cluster.insert_centroid(point.clone());
			continue;
		}

		if let Some(closest) = nearest(transform, point, centroids)? {
			cluster.assign(centroids[closest].clone(), point.clone());
		}
	}

	Ok(cluster)
}

/// Index of the closest centroid; ties go to the lowest index, `None` without centroids
pub fn nearest<S, C>(transform: Option<&dyn Transformer>, subject: &S, centroids: &[C]) -> Result<Option<usize>>
where
	S: Vector + ?Sized,
	C: Vector,
{
	let mut best: Option<(usize, f64)> = None;

	for (i, centroid) in centroids.iter().enumerate() {
		let d = transformed_distance(transform, subject, centroid)?;
		if best.map_or(true, |(_, min)| d < min) {
			best = Some((i, d));
		}
	}

	Ok(best.map(|(i, _)| i))
}
