//! Core domain types

pub mod cluster;
pub mod coordinate;
pub mod signature;
pub mod vector;

pub use cluster::{clusters_equal, Cluster};
pub use coordinate::Coordinate;
pub use signature::Signature;
pub use vector::{quantify, Transformer, Value, Vector};
