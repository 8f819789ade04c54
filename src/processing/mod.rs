//! Clustering algorithms

pub mod distance;
pub mod kmeans;

pub use distance::{euclidean_distance, transformed_distance};
pub use kmeans::{kmeans, nearest, run_kmeans, KMeanRequest, KMeansOutcome};
