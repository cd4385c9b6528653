mod bet;
mod codec;
mod constants;
mod player;
mod round;
mod slot;

pub use bet::*;
pub use codec::{read_string, string_encode_size, write_string};
pub use constants::*;
pub use player::*;
pub use round::*;
pub use slot::*;
