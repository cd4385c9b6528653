/// Number of slots on a single-zero wheel
pub const SLOT_COUNT: usize = 37;

/// Highest number on the wheel
pub const MAX_NUMBER: u8 = 36;

/// Red numbers on a roulette wheel.
pub const RED_NUMBERS: [u8; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

/// Maximum length of a player identifier
pub const MAX_PLAYER_ID_LENGTH: usize = 64;

/// Maximum bets a table's ledger may hold (and so a round result may carry)
pub const MAX_LEDGER_BETS: usize = 4_096;

/// Maximum players a table may seat (and so a round result may carry)
pub const MAX_PLAYERS: usize = 1_024;

/// Default per-round bet cap for a table
pub const DEFAULT_MAX_BETS_PER_ROUND: usize = 512;

/// Default minimum stake for a table
pub const DEFAULT_MIN_BET: u64 = 1;
