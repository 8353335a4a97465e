//! Animation drivers - pure state machines, no DOM and no timers
//!
//! Each driver:
//! - holds only presentation-local state, reset by constructing a new value
//! - advances in discrete ticks; the owning component supplies the clock
//! - is deterministic given its inputs (randomness is injected)

pub mod counter;
pub mod field;
pub mod typewriter;

pub use counter::{Counter, group_thousands};
pub use field::{Bounds, IconField};
pub use typewriter::Typewriter;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Entropy-seeded RNG for cosmetic randomness; tests seed `SmallRng` directly.
pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    getrandom::fill(&mut buf).expect("getrandom");
    SmallRng::from_seed(buf)
}
