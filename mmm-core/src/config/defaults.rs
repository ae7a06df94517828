//! Default values shared by the config structs.

pub use crate::constants::{DEFAULT_CHAINS, DEFAULT_DRAWS, DEFAULT_TUNE};

pub const DEFAULT_TARGET: &str = "revenue";

/// Default seed for reproducible sampling runs.
pub const DEFAULT_SEED: u64 = 42;
