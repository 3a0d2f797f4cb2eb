//! Randomness configuration.

use serde::{Deserialize, Serialize};

use crate::traits::RngSource;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl RandomConfig {
    /// Build the process random source.
    pub fn source(&self) -> RngSource {
        RngSource::from_seed_option(self.seed)
    }
}
