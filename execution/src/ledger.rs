use roulette_types::Bet;

/// Append-only list of the table's bets, in placement order.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    bets: Vec<Bet>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, bet: Bet) {
        self.bets.push(bet);
    }

    pub fn all(&self) -> &[Bet] {
        &self.bets
    }

    pub fn len(&self) -> usize {
        self.bets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    /// Bets still waiting on a spin.
    pub fn pending(&self) -> impl Iterator<Item = &Bet> {
        self.bets.iter().filter(|bet| !bet.is_resolved())
    }

    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    pub(crate) fn pending_mut(&mut self) -> impl Iterator<Item = &mut Bet> {
        self.bets.iter_mut().filter(|bet| !bet.is_resolved())
    }

    /// Empty the ledger, handing back everything it held.
    pub fn clear(&mut self) -> Vec<Bet> {
        std::mem::take(&mut self.bets)
    }
}
