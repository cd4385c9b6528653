//! Single-table roulette engine.
//!
//! [RouletteEngine] owns the round state: a [Registry] of players and a [Ledger] of
//! bets. Stakes are debited when a bet is placed; a spin draws a number from the
//! table's [SpinSource] and [settle]s every pending bet against it.

mod engine;
mod error;
mod ledger;
mod registry;
mod resolver;
mod rng;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;


pub use engine::{EngineConfig, RouletteEngine, TableLimits};
pub use error::EngineError;
pub use ledger::Ledger;
pub use registry::Registry;
pub use resolver::{settle, KindTotals, Settlement};
pub use rng::{FixedSpin, GameRng, RandomSpin, SeededSpin, SpinSource};
