//! Settlement of pending bets against a winning slot.

use crate::{Ledger, Registry};
use roulette_types::{BetKind, Outcome, Slot};
use tracing::warn;

/// Settled bets of one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindTotals {
    pub kind: BetKind,
    pub bets: usize,
    pub wins: usize,
    pub wagered: u64,
    pub returned: u64,
}

/// Totals for the bets a single spin settled. Bets resolved by earlier spins are never
/// included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    pub winning_number: u8,
    /// Bets settled by this spin.
    pub settled: usize,
    pub winners: usize,
    /// Sum of stakes settled by this spin.
    pub wagered: u64,
    /// Sum credited back to players (stakes plus profit on winners).
    pub returned: u64,
    /// Per-kind totals in order of first appearance.
    pub by_kind: Vec<KindTotals>,
}

impl Settlement {
    fn record(&mut self, kind: BetKind, amount: u64, payout: u64) {
        self.settled += 1;
        if payout > 0 {
            self.winners += 1;
        }
        self.wagered = self.wagered.saturating_add(amount);
        self.returned = self.returned.saturating_add(payout);
        let position = match self.by_kind.iter().position(|totals| totals.kind == kind) {
            Some(position) => position,
            None => {
                self.by_kind.push(KindTotals {
                    kind,
                    bets: 0,
                    wins: 0,
                    wagered: 0,
                    returned: 0,
                });
                self.by_kind.len() - 1
            }
        };
        let totals = &mut self.by_kind[position];
        totals.bets += 1;
        if payout > 0 {
            totals.wins += 1;
        }
        totals.wagered = totals.wagered.saturating_add(amount);
        totals.returned = totals.returned.saturating_add(payout);
    }
}

/// Resolve every pending bet in `ledger` against `slot`.
///
/// Winners are credited `stake * (ratio + 1)`; the stake was already debited at
/// placement, so losers need no balance change. Bets that already carry an outcome are
/// left alone, so settling twice never pays twice.
pub fn settle(slot: Slot, ledger: &mut Ledger, registry: &mut Registry) -> Settlement {
    let number = slot.number();
    let mut settlement = Settlement {
        winning_number: number,
        ..Default::default()
    };

    for bet in ledger.pending_mut() {
        let category = bet.category();
        let amount = bet.amount();
        let won = category.covers(number);
        let payout = if won {
            category.total_return(amount)
        } else {
            0
        };

        if payout > 0 {
            if let Err(err) = registry.credit(bet.player_id(), payout) {
                // Placement checks registration, so this only fires on a corrupted table.
                warn!(?err, player = bet.player_id(), payout, "unable to credit winning bet");
            }
        }

        bet.resolve(Outcome {
            winning_number: number,
            won,
            winning_slots: category.winning_slots().unwrap_or_default(),
            payout,
        });
        settlement.record(category.kind(), amount, payout);
    }

    settlement
}
