use bytes::{Buf, BufMut};
use commonware_codec::{Error, FixedSize, Read, ReadExt, Write};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

use super::{MAX_NUMBER, RED_NUMBERS, SLOT_COUNT};

/// Pocket color. Green is reserved for zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Green => write!(f, "green"),
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// One physical pocket on the wheel.
///
/// Slots are only obtainable from [WHEEL] (or [Slot::from_number]), so the color always
/// agrees with the number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    number: u8,
    color: Color,
}

/// The single-zero wheel, ordered by number.
pub const WHEEL: [Slot; SLOT_COUNT] = build_wheel();

const fn is_red_number(number: u8) -> bool {
    let mut i = 0;
    while i < RED_NUMBERS.len() {
        if RED_NUMBERS[i] == number {
            return true;
        }
        i += 1;
    }
    false
}

const fn build_wheel() -> [Slot; SLOT_COUNT] {
    let mut slots = [Slot {
        number: 0,
        color: Color::Green,
    }; SLOT_COUNT];
    let mut n = 1;
    while n < SLOT_COUNT {
        let number = n as u8;
        slots[n] = Slot {
            number,
            color: if is_red_number(number) {
                Color::Red
            } else {
                Color::Black
            },
        };
        n += 1;
    }
    slots
}

impl Slot {
    /// Look up the slot for `number`, or `None` if it is not on the wheel.
    pub fn from_number(number: u8) -> Option<Self> {
        WHEEL.get(number as usize).copied()
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_zero(&self) -> bool {
        self.number == 0
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    /// Zero is neither odd nor even.
    pub fn is_odd(&self) -> bool {
        self.number % 2 == 1
    }

    pub fn is_even(&self) -> bool {
        !self.is_zero() && self.number % 2 == 0
    }

    /// 1-18
    pub fn is_low(&self) -> bool {
        (1..=18).contains(&self.number)
    }

    /// 19-36
    pub fn is_high(&self) -> bool {
        (19..=MAX_NUMBER).contains(&self.number)
    }

    /// Dozen index: 1 (1-12), 2 (13-24) or 3 (25-36).
    pub fn dozen(&self) -> Option<u8> {
        if self.is_zero() {
            return None;
        }
        Some((self.number - 1) / 12 + 1)
    }

    /// Column index on the layout.
    ///
    /// Column 1: 1, 4, 7, ..., 34
    /// Column 2: 2, 5, 8, ..., 35
    /// Column 3: 3, 6, 9, ..., 36
    pub fn column(&self) -> Option<u8> {
        if self.is_zero() {
            return None;
        }
        Some((self.number - 1) % 3 + 1)
    }

    /// First number of the layout row (street) holding this slot.
    pub fn street(&self) -> Option<u8> {
        if self.is_zero() {
            return None;
        }
        Some(self.number - (self.number - 1) % 3)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.color)
    }
}

// Only the number is read back; the color is re-derived so it can never disagree.
impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawSlot {
            number: u8,
        }

        let raw = RawSlot::deserialize(deserializer)?;
        Slot::from_number(raw.number)
            .ok_or_else(|| de::Error::custom(format!("invalid slot {}", raw.number)))
    }
}

impl Write for Slot {
    fn write(&self, writer: &mut impl BufMut) {
        self.number.write(writer);
    }
}

impl Read for Slot {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let number = u8::read(reader)?;
        Slot::from_number(number).ok_or(Error::Invalid("Slot", "number out of range"))
    }
}

impl FixedSize for Slot {
    const SIZE: usize = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_is_ordered_by_number() {
        for (i, slot) in WHEEL.iter().enumerate() {
            assert_eq!(slot.number() as usize, i);
        }
        assert_eq!(WHEEL.len(), 37);
    }

    #[test]
    fn test_colors() {
        assert_eq!(WHEEL[0].color(), Color::Green);
        assert_eq!(WHEEL.iter().filter(|s| s.is_red()).count(), 18);
        assert_eq!(WHEEL.iter().filter(|s| s.is_black()).count(), 18);

        assert!(WHEEL[1].is_red());
        assert!(WHEEL[32].is_red());
        assert!(WHEEL[2].is_black());
        assert!(WHEEL[10].is_black());
        assert!(WHEEL[11].is_black());
        assert!(WHEEL[19].is_red());
    }

    #[test]
    fn test_zero_has_no_outside_category() {
        let zero = WHEEL[0];
        assert!(!zero.is_odd());
        assert!(!zero.is_even());
        assert!(!zero.is_low());
        assert!(!zero.is_high());
        assert_eq!(zero.dozen(), None);
        assert_eq!(zero.column(), None);
        assert_eq!(zero.street(), None);
    }

    #[test]
    fn test_groupings() {
        assert_eq!(WHEEL[1].dozen(), Some(1));
        assert_eq!(WHEEL[12].dozen(), Some(1));
        assert_eq!(WHEEL[13].dozen(), Some(2));
        assert_eq!(WHEEL[36].dozen(), Some(3));

        assert_eq!(WHEEL[1].column(), Some(1));
        assert_eq!(WHEEL[34].column(), Some(1));
        assert_eq!(WHEEL[35].column(), Some(2));
        assert_eq!(WHEEL[36].column(), Some(3));

        assert_eq!(WHEEL[1].street(), Some(1));
        assert_eq!(WHEEL[3].street(), Some(1));
        assert_eq!(WHEEL[17].street(), Some(16));
        assert_eq!(WHEEL[36].street(), Some(34));
    }

    #[test]
    fn test_from_number_bounds() {
        assert_eq!(Slot::from_number(36).map(|s| s.number()), Some(36));
        assert!(Slot::from_number(37).is_none());
        assert!(Slot::from_number(u8::MAX).is_none());
    }

    #[test]
    fn test_serde_rederives_color() {
        let json = serde_json::to_string(&WHEEL[9]).unwrap();
        assert_eq!(json, r#"{"number":9,"color":"red"}"#);

        // A lying color is ignored in favour of the layout.
        let slot: Slot = serde_json::from_str(r#"{"number":9,"color":"black"}"#).unwrap();
        assert_eq!(slot.color(), Color::Red);

        assert!(serde_json::from_str::<Slot>(r#"{"number":40}"#).is_err());
    }
}
