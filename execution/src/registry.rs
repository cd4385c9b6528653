use crate::EngineError;
use roulette_types::{Player, PlayerSnapshot, PlayerSpec, MAX_PLAYERS, MAX_PLAYER_ID_LENGTH};
use std::collections::HashMap;

/// Registered players, kept in registration order with an id index alongside.
///
/// Seats at most [MAX_PLAYERS], so every snapshot fits in a round result.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    players: Vec<Player>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spec: PlayerSpec) -> Result<&Player, EngineError> {
        if spec.player_id.is_empty() || spec.player_id.len() > MAX_PLAYER_ID_LENGTH {
            return Err(EngineError::InvalidPlayerId(spec.player_id));
        }
        if self.index.contains_key(&spec.player_id) {
            return Err(EngineError::DuplicatePlayer(spec.player_id));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(EngineError::TooManyPlayers { max: MAX_PLAYERS });
        }
        let position = self.players.len();
        self.index.insert(spec.player_id.clone(), position);
        self.players.push(spec.into());
        Ok(&self.players[position])
    }

    pub fn get(&self, player_id: &str) -> Option<&Player> {
        self.index.get(player_id).map(|&i| &self.players[i])
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.index.contains_key(player_id)
    }

    fn get_mut(&mut self, player_id: &str) -> Result<&mut Player, EngineError> {
        let i = *self
            .index
            .get(player_id)
            .ok_or_else(|| EngineError::PlayerNotRegistered(player_id.to_string()))?;
        Ok(&mut self.players[i])
    }

    /// Remove `amount` from a balance. Fails without touching the balance if the player
    /// cannot cover it.
    pub fn debit(&mut self, player_id: &str, amount: u64) -> Result<u64, EngineError> {
        let player = self.get_mut(player_id)?;
        if amount > player.balance {
            return Err(EngineError::InsufficientFunds {
                player: player_id.to_string(),
                balance: player.balance,
                requested: amount,
            });
        }
        player.balance -= amount;
        Ok(player.balance)
    }

    pub fn credit(&mut self, player_id: &str, amount: u64) -> Result<u64, EngineError> {
        let player = self.get_mut(player_id)?;
        player.balance = player.balance.saturating_add(amount);
        Ok(player.balance)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Balances in registration order.
    pub fn snapshot(&self) -> Vec<PlayerSnapshot> {
        self.players.iter().map(PlayerSnapshot::from).collect()
    }
}
