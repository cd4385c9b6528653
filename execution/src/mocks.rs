//! Deterministic fixtures for tests and dependent crates.

use crate::SpinSource;
use commonware_cryptography::sha256::Sha256;
use commonware_cryptography::Hasher;

/// Replays a fixed sequence of winning numbers, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedSpin {
    script: Vec<u8>,
    next: usize,
}

impl ScriptedSpin {
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            next: 0,
        }
    }

    /// Spins drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl SpinSource for ScriptedSpin {
    fn spin(&mut self) -> u8 {
        if self.script.is_empty() {
            return 0;
        }
        let number = self.script[self.next % self.script.len()];
        self.next += 1;
        number
    }
}

/// Creates seed bytes for a [crate::GameRng] or [crate::SeededSpin] from a test index.
pub fn create_seed(index: u64) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(b"roulette-test-seed");
    hasher.update(&index.to_be_bytes());
    hasher.finalize().0.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_spin_cycles() {
        let mut spin = ScriptedSpin::new(vec![3, 0, 36]);
        let drawn: Vec<u8> = (0..5).map(|_| spin.spin()).collect();
        assert_eq!(drawn, vec![3, 0, 36, 3, 0]);
        assert_eq!(spin.drawn(), 5);
    }

    #[test]
    fn test_create_seed_distinct() {
        assert_eq!(create_seed(1), create_seed(1));
        assert_ne!(create_seed(1), create_seed(2));
        assert_eq!(create_seed(0).len(), 32);
    }
}
