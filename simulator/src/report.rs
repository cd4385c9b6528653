use roulette_execution::Settlement;
use roulette_types::{BetKind, PlayerSnapshot, SLOT_COUNT};
use serde::Serialize;
use std::{collections::BTreeMap, fmt};

/// Running totals for one bet kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct KindStats {
    pub bets: u64,
    pub wins: u64,
    pub wagered: u64,
    pub returned: u64,
}

impl KindStats {
    /// Player profit (negative when the house is ahead).
    pub fn net(&self) -> i128 {
        self.returned as i128 - self.wagered as i128
    }
}

/// Summary of a simulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub rounds: u64,
    /// Balances at seating.
    pub starting: Vec<PlayerSnapshot>,
    /// Balances after the last round.
    pub players: Vec<PlayerSnapshot>,
    pub wagered: u64,
    pub returned: u64,
    /// Bets the table refused.
    pub skipped: u64,
    pub kinds: BTreeMap<BetKind, KindStats>,
    /// Times each number came up, indexed by number.
    pub hits: Vec<u64>,
}

impl Report {
    pub fn new(starting: Vec<PlayerSnapshot>) -> Self {
        Self {
            rounds: 0,
            players: starting.clone(),
            starting,
            wagered: 0,
            returned: 0,
            skipped: 0,
            kinds: BTreeMap::new(),
            hits: vec![0; SLOT_COUNT],
        }
    }

    /// Fold one spin into the totals.
    pub fn record(&mut self, settlement: &Settlement) {
        self.rounds += 1;
        if let Some(hits) = self.hits.get_mut(settlement.winning_number as usize) {
            *hits += 1;
        }
        for totals in &settlement.by_kind {
            let stats = self.kinds.entry(totals.kind).or_default();
            stats.bets += totals.bets as u64;
            stats.wins += totals.wins as u64;
            stats.wagered = stats.wagered.saturating_add(totals.wagered);
            stats.returned = stats.returned.saturating_add(totals.returned);
        }
        self.wagered = self.wagered.saturating_add(settlement.wagered);
        self.returned = self.returned.saturating_add(settlement.returned);
    }

    /// Share of every wagered unit the house kept.
    pub fn house_edge(&self) -> f64 {
        if self.wagered == 0 {
            return 0.0;
        }
        (self.wagered as f64 - self.returned as f64) / self.wagered as f64
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rounds played: {}", self.rounds)?;
        writeln!(f, "bets skipped:  {}", self.skipped)?;
        writeln!(
            f,
            "wagered: {}  returned: {}  house edge: {:.3}%",
            self.wagered,
            self.returned,
            self.house_edge() * 100.0
        )?;
        writeln!(f)?;
        writeln!(f, "{:<10} {:>10} {:>10}", "player", "start", "end")?;
        for (start, end) in self.starting.iter().zip(&self.players) {
            writeln!(
                f,
                "{:<10} {:>10} {:>10}",
                end.player_id, start.balance, end.balance
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:<10} {:>8} {:>8} {:>12} {:>12}",
            "bet", "placed", "won", "wagered", "net"
        )?;
        for (kind, stats) in &self.kinds {
            writeln!(
                f,
                "{:<10} {:>8} {:>8} {:>12} {:>12}",
                kind.to_string(),
                stats.bets,
                stats.wins,
                stats.wagered,
                stats.net()
            )?;
        }
        writeln!(f)?;
        write!(f, "hits:")?;
        for (number, hits) in self.hits.iter().enumerate() {
            if number % 10 == 0 {
                writeln!(f)?;
            }
            write!(f, " {number:>2}:{hits:<5}")?;
        }
        writeln!(f)
    }
}
