use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, Write};
use serde::{Deserialize, Serialize};

use super::{read_string, string_encode_size, write_string, MAX_PLAYER_ID_LENGTH};

/// Registration request for a new player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub player_id: String,
    pub balance: u64,
}

impl PlayerSpec {
    pub fn new(player_id: impl Into<String>, balance: u64) -> Self {
        Self {
            player_id: player_id.into(),
            balance,
        }
    }
}

/// A registered player and their current balance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub balance: u64,
}

impl From<PlayerSpec> for Player {
    fn from(spec: PlayerSpec) -> Self {
        Self {
            id: spec.player_id,
            balance: spec.balance,
        }
    }
}

impl Write for Player {
    fn write(&self, writer: &mut impl BufMut) {
        write_string(&self.id, writer);
        self.balance.write(writer);
    }
}

impl Read for Player {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            id: read_string(reader, MAX_PLAYER_ID_LENGTH)?,
            balance: u64::read(reader)?,
        })
    }
}

impl EncodeSize for Player {
    fn encode_size(&self) -> usize {
        string_encode_size(&self.id) + self.balance.encode_size()
    }
}
