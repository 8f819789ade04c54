//! # kmeans
//!
//! Seedable k-means partitioning over any type that implements [`Vector`].
//! Centroids are drawn from the input points and stay fixed; every other
//! point joins its nearest centroid by (optionally transformed) Euclidean
//! distance. Also ships a USGS earthquake adapter and the `kmeans` CLI.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod processing;
pub mod ui;
pub mod usgs;

pub use crate::core::{clusters_equal, Cluster, Coordinate, Signature, Transformer, Value, Vector};
pub use error::{Error, Result};
pub use processing::{euclidean_distance, kmeans, run_kmeans, transformed_distance, KMeanRequest, KMeansOutcome};
