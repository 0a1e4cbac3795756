use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_N_TRIALS: usize = 10_000;
pub const DEFAULT_SEED: u64 = 0;

/// Per-run simulation settings. The seed is fixed once per run so that
/// identical inputs always reproduce the same batch of trials.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    pub n_trials: usize,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            n_trials: DEFAULT_N_TRIALS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    /// Defaults, with `XGSIM_TRIALS` / `XGSIM_SEED` environment overrides.
    pub fn from_env() -> Self {
        let n_trials = std::env::var("XGSIM_TRIALS")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(DEFAULT_N_TRIALS)
            .max(1);
        let seed = std::env::var("XGSIM_SEED")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_SEED);
        Self { n_trials, seed }
    }

    /// A fresh generator for one simulation run. Each run gets its own
    /// instance; a generator is never shared across concurrent simulations.
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }
}
