use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, ReadRangeExt, Write};
use serde::{Deserialize, Serialize};

use super::{
    read_string, string_encode_size, write_string, Bet, Player, MAX_LEDGER_BETS,
    MAX_NUMBER, MAX_PLAYERS, MAX_PLAYER_ID_LENGTH,
};

/// Read-only view of a player's balance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player_id: String,
    pub balance: u64,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            player_id: player.id.clone(),
            balance: player.balance,
        }
    }
}

impl Write for PlayerSnapshot {
    fn write(&self, writer: &mut impl BufMut) {
        write_string(&self.player_id, writer);
        self.balance.write(writer);
    }
}

impl Read for PlayerSnapshot {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            player_id: read_string(reader, MAX_PLAYER_ID_LENGTH)?,
            balance: u64::read(reader)?,
        })
    }
}

impl EncodeSize for PlayerSnapshot {
    fn encode_size(&self) -> usize {
        string_encode_size(&self.player_id) + self.balance.encode_size()
    }
}

/// Everything observable after a spin: the number, post-settlement balances (in
/// registration order) and the full ledger including earlier resolved bets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winning_number: u8,
    pub players: Vec<PlayerSnapshot>,
    pub bets: Vec<Bet>,
}

impl Write for RoundResult {
    fn write(&self, writer: &mut impl BufMut) {
        self.winning_number.write(writer);
        self.players.write(writer);
        self.bets.write(writer);
    }
}

impl Read for RoundResult {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let winning_number = u8::read(reader)?;
        if winning_number > MAX_NUMBER {
            return Err(Error::Invalid("RoundResult", "winning number out of range"));
        }
        Ok(Self {
            winning_number,
            players: Vec::<PlayerSnapshot>::read_range(reader, 0..=MAX_PLAYERS)?,
            bets: Vec::<Bet>::read_range(reader, 0..=MAX_LEDGER_BETS)?,
        })
    }
}

impl EncodeSize for RoundResult {
    fn encode_size(&self) -> usize {
        self.winning_number.encode_size() + self.players.encode_size() + self.bets.encode_size()
    }
}
