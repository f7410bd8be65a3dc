use crate::{config::Config, generic::minimal_pcg::MinimalPCG32};

use rand::SeedableRng;

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self::from_config_and_rng(config, MinimalPCG32::from_seed(0_u64.to_le_bytes()))
    }
}
