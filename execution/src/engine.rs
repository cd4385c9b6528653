//! The table facade: registration, placement and spins over one shared round state.

use crate::{settle, EngineError, Ledger, RandomSpin, Registry, Settlement, SpinSource};
use rand::rngs::StdRng;
use roulette_types::{
    Bet, BetSpec, InvalidSlot, Player, PlayerSnapshot, PlayerSpec, RoundResult, Slot,
    DEFAULT_MAX_BETS_PER_ROUND, DEFAULT_MIN_BET, MAX_LEDGER_BETS, SLOT_COUNT, WHEEL,
};
use tracing::{debug, info};

/// Stake and volume limits enforced at placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLimits {
    pub min_bet: u64,
    /// `None` leaves stakes bounded only by the player's balance.
    pub max_bet: Option<u64>,
    /// Unsettled bets allowed at once. Settled bets do not count, but the ledger as a
    /// whole never holds more than [MAX_LEDGER_BETS] until the round is reset.
    pub max_bets_per_round: usize,
}

impl Default for TableLimits {
    fn default() -> Self {
        Self {
            min_bet: DEFAULT_MIN_BET,
            max_bet: None,
            max_bets_per_round: DEFAULT_MAX_BETS_PER_ROUND,
        }
    }
}

impl TableLimits {
    fn check(&self, amount: u64, pending: usize, held: usize) -> Result<(), EngineError> {
        let max = self.max_bet.unwrap_or(u64::MAX);
        if amount < self.min_bet || amount > max {
            return Err(EngineError::BetLimit {
                amount,
                min: self.min_bet,
                max,
            });
        }
        if pending >= self.max_bets_per_round {
            return Err(EngineError::TooManyBets {
                max: self.max_bets_per_round,
            });
        }
        if held >= MAX_LEDGER_BETS {
            return Err(EngineError::LedgerFull {
                max: MAX_LEDGER_BETS,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub limits: TableLimits,
}

/// A single roulette table.
///
/// All round state (players and the bet ledger) lives here and is only reachable
/// through these methods. Mutating calls return `&mut Self` so they chain with `?`:
///
/// ```
/// use roulette_execution::{FixedSpin, RouletteEngine};
/// use roulette_types::{BetCategory, BetSpec, PlayerSpec};
///
/// # fn main() -> Result<(), roulette_execution::EngineError> {
/// let mut engine = RouletteEngine::with_source(FixedSpin(17));
/// engine
///     .register_player(PlayerSpec::new("alice", 100))?
///     .place_bet("alice", BetSpec::new(BetCategory::Straight(17), 1))?;
/// let result = engine.spin();
/// assert_eq!(result.players[0].balance, 135);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RouletteEngine<S: SpinSource = RandomSpin<StdRng>> {
    config: EngineConfig,
    source: S,
    registry: Registry,
    ledger: Ledger,
    last_settlement: Option<Settlement>,
}

impl RouletteEngine {
    /// A table with default limits that draws from operating system entropy.
    pub fn new() -> Self {
        Self::with_source(RandomSpin::from_entropy())
    }
}

impl Default for RouletteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SpinSource> RouletteEngine<S> {
    pub fn with_source(source: S) -> Self {
        Self::with_config(EngineConfig::default(), source)
    }

    pub fn with_config(config: EngineConfig, source: S) -> Self {
        Self {
            config,
            source,
            registry: Registry::new(),
            ledger: Ledger::new(),
            last_settlement: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn register_player(&mut self, spec: PlayerSpec) -> Result<&mut Self, EngineError> {
        let player = self.registry.register(spec)?;
        debug!(player = %player.id, balance = player.balance, "registered player");
        Ok(self)
    }

    /// Validate and place a bet, debiting the stake immediately.
    ///
    /// Checks run in a fixed order: player exists, stake is positive, funds cover the
    /// stake, the category value is legal, then table limits (stake bounds, unsettled
    /// bet count, ledger capacity). The first failure is returned and nothing is changed.
    pub fn place_bet(&mut self, player_id: &str, spec: BetSpec) -> Result<&mut Self, EngineError> {
        let player = self
            .registry
            .get(player_id)
            .ok_or_else(|| EngineError::PlayerNotRegistered(player_id.to_string()))?;
        if spec.amount == 0 {
            return Err(EngineError::InvalidAmount);
        }
        if spec.amount > player.balance {
            return Err(EngineError::InsufficientFunds {
                player: player_id.to_string(),
                balance: player.balance,
                requested: spec.amount,
            });
        }
        spec.category.validate()?;
        self.config
            .limits
            .check(spec.amount, self.ledger.pending_count(), self.ledger.len())?;

        let balance = self.registry.debit(player_id, spec.amount)?;
        debug!(
            player = player_id,
            bet = %spec.category,
            amount = spec.amount,
            balance,
            "placed bet"
        );
        self.ledger.append(Bet::new(player_id.to_string(), spec));
        Ok(self)
    }

    /// Draw a number from the spin source and settle every pending bet.
    pub fn spin(&mut self) -> RoundResult {
        // Sources promise 0..=36; fold anything else back onto the wheel.
        let number = self.source.spin() % SLOT_COUNT as u8;
        let slot = Slot::from_number(number).unwrap_or(WHEEL[0]);
        self.settle(slot)
    }

    /// Settle every pending bet against an externally drawn number.
    pub fn spin_to(&mut self, number: u8) -> Result<RoundResult, EngineError> {
        let slot = Slot::from_number(number).ok_or(InvalidSlot::NotOnWheel(number))?;
        Ok(self.settle(slot))
    }

    fn settle(&mut self, slot: Slot) -> RoundResult {
        let settlement = settle(slot, &mut self.ledger, &mut self.registry);
        info!(
            winning = %slot,
            settled = settlement.settled,
            winners = settlement.winners,
            wagered = settlement.wagered,
            returned = settlement.returned,
            "spin settled"
        );
        self.last_settlement = Some(settlement);
        RoundResult {
            winning_number: slot.number(),
            players: self.registry.snapshot(),
            bets: self.ledger.all().to_vec(),
        }
    }

    /// Totals for the bets the most recent spin settled, or `None` before the first spin.
    pub fn last_settlement(&self) -> Option<&Settlement> {
        self.last_settlement.as_ref()
    }

    /// Every bet placed since the last reset, in placement order.
    pub fn bets(&self) -> &[Bet] {
        self.ledger.all()
    }

    /// Bets placed but not yet settled.
    pub fn pending_bets(&self) -> usize {
        self.ledger.pending_count()
    }

    pub fn player(&self, player_id: &str) -> Result<&Player, EngineError> {
        self.registry
            .get(player_id)
            .ok_or_else(|| EngineError::PlayerNotRegistered(player_id.to_string()))
    }

    /// Balances in registration order.
    pub fn players(&self) -> Vec<PlayerSnapshot> {
        self.registry.snapshot()
    }

    /// Start a new round: refund every unsettled stake and empty the ledger.
    ///
    /// Returns the number of bets removed.
    pub fn reset_round(&mut self) -> usize {
        let removed = self.ledger.clear();
        let mut refunded = 0u64;
        for bet in removed.iter().filter(|bet| !bet.is_resolved()) {
            if self.registry.credit(bet.player_id(), bet.amount()).is_ok() {
                refunded = refunded.saturating_add(bet.amount());
            }
        }
        debug!(removed = removed.len(), refunded, "reset round");
        removed.len()
    }
}
