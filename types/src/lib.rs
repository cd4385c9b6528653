//! Common types used throughout the roulette engine.

pub mod roulette;

pub use roulette::*;
