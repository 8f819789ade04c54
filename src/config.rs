//! Application configuration and constants

use std::sync::OnceLock;

static CUSTOM_SEED: OnceLock<i64> = OnceLock::new();

// === Clustering ===
pub const MIN_K: usize = 2;
pub const DEFAULT_K: usize = 10;

// === Signatures ===
pub const SIGNATURE_SEPARATOR: &str = "-";

// === Output ===
pub const DEFAULT_PREVIEW: usize = 10;
pub const DISTANCE_PRECISION: usize = 3;

// === Environment ===
pub const SEED_ENV: &str = "KMEANS_SEED";

pub fn set_seed(seed: i64) {
	let _ = CUSTOM_SEED.set(seed);
}

/// Default seed for CLI runs (custom override, then KMEANS_SEED, else 0 = time-based)
pub fn default_seed() -> i64 {
	if let Some(custom) = CUSTOM_SEED.get() {
		crate::ui::debug(&format!("Using custom seed: {}", custom));
		return *custom;
	}

	if let Ok(raw) = std::env::var(SEED_ENV) {
		match raw.trim().parse::<i64>() {
			Ok(seed) => {
				crate::ui::debug(&format!("Using {}: {}", SEED_ENV, seed));
				return seed;
			}
			Err(_) => crate::ui::warn(&format!("Ignoring unparsable {}={}", SEED_ENV, raw)),
		}
	}

	0
}

/// Resolve a configured seed: positive seeds are kept, anything else falls back to wall-clock seconds
pub fn resolve_seed(seed: i64) -> u64 {
	if seed > 0 {
		seed as u64
	} else {
		chrono::Utc::now().timestamp().max(1) as u64
	}
}
