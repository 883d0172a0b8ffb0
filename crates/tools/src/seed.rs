//! Runtime seed selection. A CLI-provided seed pins generation; without one
//! a fresh seed is mixed from wall-clock, pid, and a process counter, which
//! deliberately gives up reproducibility.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut state = 0;
    for word in [now_nanos as u64, (now_nanos >> 64) as u64, u64::from(std::process::id()), counter]
    {
        state = fold_word(state, word);
    }
    state
}

/// splitmix64-style step: absorb one word, then avalanche so adjacent
/// timestamps and counter values land far apart.
fn fold_word(state: u64, word: u64) -> u64 {
    let mut value = state.wrapping_add(word).wrapping_add(0x9E37_79B9_7F4A_7C15);
    value = (value ^ (value >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value = (value ^ (value >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
