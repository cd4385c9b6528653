//! Sources of winning numbers.
//!
//! The engine never reaches for a generator directly: it asks a [SpinSource], so
//! production tables draw from entropy while simulations and tests stay reproducible.

use commonware_cryptography::sha256::Sha256;
use commonware_cryptography::Hasher;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use roulette_types::SLOT_COUNT;

/// Produces winning numbers in `0..=36`.
pub trait SpinSource {
    fn spin(&mut self) -> u8;
}

impl<S: SpinSource + ?Sized> SpinSource for Box<S> {
    fn spin(&mut self) -> u8 {
        (**self).spin()
    }
}

/// Uniform spins drawn from any `rand` generator.
#[derive(Clone, Debug)]
pub struct RandomSpin<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RandomSpin<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSpin<StdRng> {
    /// Seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl Default for RandomSpin<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: RngCore> SpinSource for RandomSpin<R> {
    fn spin(&mut self) -> u8 {
        self.rng.gen_range(0..SLOT_COUNT as u8)
    }
}

/// Deterministic spins from a SHA-256 hash chain.
///
/// The chain is keyed by a caller-supplied seed plus a round number, so replaying the
/// same seed reproduces every spin of a simulation.
#[derive(Clone)]
pub struct GameRng {
    state: [u8; 32],
    index: usize,
}

impl GameRng {
    /// Create a new RNG from seed bytes, a round number and a draw number.
    pub fn new(seed: &[u8], round: u64, draw: u32) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(seed);
        hasher.update(&round.to_be_bytes());
        hasher.update(&draw.to_be_bytes());
        Self {
            state: hasher.finalize().0,
            index: 0,
        }
    }

    fn next_byte(&mut self) -> u8 {
        if self.index >= 32 {
            // Rehash to get more bytes
            let mut hasher = Sha256::new();
            hasher.update(&self.state);
            self.state = hasher.finalize().0;
            self.index = 0;
        }
        let result = self.state[self.index];
        self.index += 1;
        result
    }

    /// Get a random value in range [0, max).
    pub fn next_bounded(&mut self, max: u8) -> u8 {
        if max == 0 {
            return 0;
        }
        // Rejection sampling keeps the distribution unbiased.
        let limit = u8::MAX - (u8::MAX % max);
        loop {
            let value = self.next_byte();
            if value < limit {
                return value % max;
            }
        }
    }
}

impl SpinSource for GameRng {
    fn spin(&mut self) -> u8 {
        self.next_bounded(SLOT_COUNT as u8)
    }
}

/// A [SpinSource] that re-keys a [GameRng] every round.
///
/// Round `r` always yields the same number for the same seed, regardless of how many
/// spins earlier rounds consumed.
#[derive(Clone, Debug)]
pub struct SeededSpin {
    seed: Vec<u8>,
    round: u64,
}

impl SeededSpin {
    pub fn new(seed: impl Into<Vec<u8>>) -> Self {
        Self {
            seed: seed.into(),
            round: 0,
        }
    }

    /// Rounds spun so far.
    pub fn round(&self) -> u64 {
        self.round
    }
}

impl SpinSource for SeededSpin {
    fn spin(&mut self) -> u8 {
        let number = GameRng::new(&self.seed, self.round, 0).spin();
        self.round += 1;
        number
    }
}

/// Always lands on the same number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSpin(pub u8);

impl SpinSource for FixedSpin {
    fn spin(&mut self) -> u8 {
        self.0
    }
}
