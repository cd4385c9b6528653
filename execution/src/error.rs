use roulette_types::InvalidSlot;
use thiserror::Error;

/// Reasons the engine refuses an operation. A refused operation leaves the table
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("player {0} is not registered")]
    PlayerNotRegistered(String),
    #[error("player {0} is already registered")]
    DuplicatePlayer(String),
    #[error("invalid player id {0:?}")]
    InvalidPlayerId(String),
    #[error("bet amount must be positive")]
    InvalidAmount,
    #[error("cannot place bet for {player}: do not have enough funds (balance {balance}, requested {requested})")]
    InsufficientFunds {
        player: String,
        balance: u64,
        requested: u64,
    },
    #[error(transparent)]
    InvalidSlot(#[from] InvalidSlot),
    #[error("bet amount {amount} outside table limits ({min}..={max})")]
    BetLimit { amount: u64, min: u64, max: u64 },
    #[error("round already holds the maximum of {max} bets")]
    TooManyBets { max: usize },
    #[error("ledger is full ({max} bets); reset the round")]
    LedgerFull { max: usize },
    #[error("table already seats the maximum of {max} players")]
    TooManyPlayers { max: usize },
}
