//! Bet categories, wager specs and resolved bets.
//!
//! Every category owns its value, so an out-of-range Straight or a Dozen index of 4 is
//! representable only until [BetCategory::validate] runs. Placement always validates
//! before funds move.

use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, ReadRangeExt, Write};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

use super::{
    read_string, string_encode_size, write_string, Slot, MAX_NUMBER, MAX_PLAYER_ID_LENGTH,
    SLOT_COUNT, WHEEL,
};

/// Value-less discriminant of a [BetCategory].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetKind {
    Straight = 0,
    Split = 1,
    Street = 2,
    Corner = 3,
    Line = 4,
    Dozen = 5,
    Column = 6,
    Red = 7,
    Black = 8,
    Odd = 9,
    Even = 10,
    Low = 11,
    High = 12,
}

impl BetKind {
    pub const ALL: [BetKind; 13] = [
        BetKind::Straight,
        BetKind::Split,
        BetKind::Street,
        BetKind::Corner,
        BetKind::Line,
        BetKind::Dozen,
        BetKind::Column,
        BetKind::Red,
        BetKind::Black,
        BetKind::Odd,
        BetKind::Even,
        BetKind::Low,
        BetKind::High,
    ];
}

impl fmt::Display for BetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BetKind::Straight => "straight",
            BetKind::Split => "split",
            BetKind::Street => "street",
            BetKind::Corner => "corner",
            BetKind::Line => "line",
            BetKind::Dozen => "dozen",
            BetKind::Column => "column",
            BetKind::Red => "red",
            BetKind::Black => "black",
            BetKind::Odd => "odd",
            BetKind::Even => "even",
            BetKind::Low => "low",
            BetKind::High => "high",
        };
        f.write_str(name)
    }
}

impl Write for BetKind {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for BetKind {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        BetKind::ALL
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidEnum(value))
    }
}

impl FixedSize for BetKind {
    const SIZE: usize = 1;
}

/// A bet value that does not name a legal area of the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum InvalidSlot {
    #[error("invalid slot: {kind} bet requires a value")]
    Missing { kind: BetKind },
    #[error("invalid slot {value} for {kind} bet")]
    OutOfRange { kind: BetKind, value: u8 },
    #[error("invalid slot: {first} and {second} are not adjacent")]
    NotAdjacent { first: u8, second: u8 },
    #[error("invalid slot {0}: not on the wheel")]
    NotOnWheel(u8),
}

/// What a wager is placed on.
///
/// | Category  | Value                                   | Pays |
/// |-----------|-----------------------------------------|------|
/// | Straight  | 0-36                                    | 35:1 |
/// | Split     | two adjacent numbers (0 touches 1-3)    | 17:1 |
/// | Street    | first number of a row (1, 4, ..., 34)   | 11:1 |
/// | Corner    | top-left of a 2x2 block                 | 8:1  |
/// | Line      | first number of two rows (1, 4, ..., 31)| 5:1  |
/// | Dozen     | 1-3                                     | 2:1  |
/// | Column    | 1-3                                     | 2:1  |
/// | Red/Black/Odd/Even/Low/High | none                  | 1:1  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum BetCategory {
    Straight(u8),
    Split(u8, u8),
    Street(u8),
    Corner(u8),
    Line(u8),
    Dozen(u8),
    Column(u8),
    Red,
    Black,
    Odd,
    Even,
    Low,
    High,
}

impl BetCategory {
    /// Build a category from an untyped `{type, value?}` description.
    ///
    /// `second` is only read for splits. Values supplied to categories that take none
    /// are ignored.
    pub fn from_parts(
        kind: BetKind,
        value: Option<u8>,
        second: Option<u8>,
    ) -> Result<Self, InvalidSlot> {
        let required = || value.ok_or(InvalidSlot::Missing { kind });
        let category = match kind {
            BetKind::Straight => BetCategory::Straight(required()?),
            BetKind::Split => {
                let second = second.ok_or(InvalidSlot::Missing { kind })?;
                BetCategory::Split(required()?, second)
            }
            BetKind::Street => BetCategory::Street(required()?),
            BetKind::Corner => BetCategory::Corner(required()?),
            BetKind::Line => BetCategory::Line(required()?),
            BetKind::Dozen => BetCategory::Dozen(required()?),
            BetKind::Column => BetCategory::Column(required()?),
            BetKind::Red => BetCategory::Red,
            BetKind::Black => BetCategory::Black,
            BetKind::Odd => BetCategory::Odd,
            BetKind::Even => BetCategory::Even,
            BetKind::Low => BetCategory::Low,
            BetKind::High => BetCategory::High,
        };
        Ok(category)
    }

    pub fn kind(&self) -> BetKind {
        match self {
            BetCategory::Straight(_) => BetKind::Straight,
            BetCategory::Split(..) => BetKind::Split,
            BetCategory::Street(_) => BetKind::Street,
            BetCategory::Corner(_) => BetKind::Corner,
            BetCategory::Line(_) => BetKind::Line,
            BetCategory::Dozen(_) => BetKind::Dozen,
            BetCategory::Column(_) => BetKind::Column,
            BetCategory::Red => BetKind::Red,
            BetCategory::Black => BetKind::Black,
            BetCategory::Odd => BetKind::Odd,
            BetCategory::Even => BetKind::Even,
            BetCategory::Low => BetKind::Low,
            BetCategory::High => BetKind::High,
        }
    }

    /// Check that the carried value names a legal area of the layout.
    pub fn validate(&self) -> Result<(), InvalidSlot> {
        let kind = self.kind();
        let out_of_range = |value: u8| InvalidSlot::OutOfRange { kind, value };
        match *self {
            BetCategory::Straight(n) => {
                if n > MAX_NUMBER {
                    return Err(out_of_range(n));
                }
            }
            BetCategory::Split(a, b) => {
                if a > MAX_NUMBER {
                    return Err(out_of_range(a));
                }
                if b > MAX_NUMBER {
                    return Err(out_of_range(b));
                }
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let adjacent = if lo == 0 {
                    (1..=3).contains(&hi)
                } else {
                    // Same row neighbour, or the number directly above/below.
                    (hi == lo + 1 && lo % 3 != 0) || hi == lo + 3
                };
                if !adjacent {
                    return Err(InvalidSlot::NotAdjacent {
                        first: a,
                        second: b,
                    });
                }
            }
            BetCategory::Street(s) => {
                if s == 0 || s > 34 || (s - 1) % 3 != 0 {
                    return Err(out_of_range(s));
                }
            }
            BetCategory::Corner(t) => {
                if t == 0 || t > 32 || t % 3 == 0 {
                    return Err(out_of_range(t));
                }
            }
            BetCategory::Line(s) => {
                if s == 0 || s > 31 || (s - 1) % 3 != 0 {
                    return Err(out_of_range(s));
                }
            }
            BetCategory::Dozen(i) | BetCategory::Column(i) => {
                if !(1..=3).contains(&i) {
                    return Err(out_of_range(i));
                }
            }
            BetCategory::Red
            | BetCategory::Black
            | BetCategory::Odd
            | BetCategory::Even
            | BetCategory::Low
            | BetCategory::High => {}
        }
        Ok(())
    }

    /// Whether a ball landing on `number` wins this category.
    ///
    /// Zero belongs to no outside category. The result is only meaningful for a
    /// category that passes [BetCategory::validate].
    pub fn covers(&self, number: u8) -> bool {
        let Some(slot) = Slot::from_number(number) else {
            return false;
        };
        match *self {
            BetCategory::Straight(n) => number == n,
            BetCategory::Split(a, b) => number == a || number == b,
            BetCategory::Street(s) => slot.street() == Some(s),
            BetCategory::Corner(t) => number >= t && matches!(number - t, 0 | 1 | 3 | 4),
            BetCategory::Line(s) => slot
                .street()
                .is_some_and(|row| row == s || row == s.saturating_add(3)),
            BetCategory::Dozen(d) => slot.dozen() == Some(d),
            BetCategory::Column(c) => slot.column() == Some(c),
            BetCategory::Red => slot.is_red(),
            BetCategory::Black => slot.is_black(),
            BetCategory::Odd => slot.is_odd(),
            BetCategory::Even => slot.is_even(),
            BetCategory::Low => slot.is_low(),
            BetCategory::High => slot.is_high(),
        }
    }

    /// Every slot that wins this category, in wheel order.
    pub fn winning_slots(&self) -> Result<Vec<Slot>, InvalidSlot> {
        self.validate()?;
        Ok(WHEEL
            .iter()
            .filter(|slot| self.covers(slot.number()))
            .copied()
            .collect())
    }

    /// Profit multiple on a win (excludes the returned stake).
    pub fn payout_ratio(&self) -> u64 {
        match self {
            BetCategory::Straight(_) => 35,
            BetCategory::Split(..) => 17,
            BetCategory::Street(_) => 11,
            BetCategory::Corner(_) => 8,
            BetCategory::Line(_) => 5,
            BetCategory::Dozen(_) | BetCategory::Column(_) => 2,
            BetCategory::Red
            | BetCategory::Black
            | BetCategory::Odd
            | BetCategory::Even
            | BetCategory::Low
            | BetCategory::High => 1,
        }
    }

    /// Total credited for a winning stake of `amount` (stake plus profit).
    pub fn total_return(&self, amount: u64) -> u64 {
        amount.saturating_mul(self.payout_ratio().saturating_add(1))
    }
}

impl fmt::Display for BetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetCategory::Split(a, b) => write!(f, "split {a}/{b}"),
            BetCategory::Straight(v)
            | BetCategory::Street(v)
            | BetCategory::Corner(v)
            | BetCategory::Line(v)
            | BetCategory::Dozen(v)
            | BetCategory::Column(v) => write!(f, "{} {v}", self.kind()),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

impl Write for BetCategory {
    fn write(&self, writer: &mut impl BufMut) {
        self.kind().write(writer);
        match *self {
            BetCategory::Split(a, b) => {
                a.write(writer);
                b.write(writer);
            }
            BetCategory::Straight(v)
            | BetCategory::Street(v)
            | BetCategory::Corner(v)
            | BetCategory::Line(v)
            | BetCategory::Dozen(v)
            | BetCategory::Column(v) => v.write(writer),
            _ => {}
        }
    }
}

impl Read for BetCategory {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let kind = BetKind::read(reader)?;
        let (value, second) = match kind {
            BetKind::Split => (Some(u8::read(reader)?), Some(u8::read(reader)?)),
            BetKind::Straight
            | BetKind::Street
            | BetKind::Corner
            | BetKind::Line
            | BetKind::Dozen
            | BetKind::Column => (Some(u8::read(reader)?), None),
            _ => (None, None),
        };
        BetCategory::from_parts(kind, value, second)
            .map_err(|_| Error::Invalid("BetCategory", "missing value"))
    }
}

impl EncodeSize for BetCategory {
    fn encode_size(&self) -> usize {
        let values = match self {
            BetCategory::Split(..) => 2,
            BetCategory::Straight(_)
            | BetCategory::Street(_)
            | BetCategory::Corner(_)
            | BetCategory::Line(_)
            | BetCategory::Dozen(_)
            | BetCategory::Column(_) => 1,
            _ => 0,
        };
        BetKind::SIZE + values
    }
}

/// A wager as supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetSpec {
    pub category: BetCategory,
    pub amount: u64,
}

impl BetSpec {
    pub fn new(category: BetCategory, amount: u64) -> Self {
        Self { category, amount }
    }
}

impl Write for BetSpec {
    fn write(&self, writer: &mut impl BufMut) {
        self.category.write(writer);
        self.amount.write(writer);
    }
}

impl Read for BetSpec {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            category: BetCategory::read(reader)?,
            amount: u64::read(reader)?,
        })
    }
}

impl EncodeSize for BetSpec {
    fn encode_size(&self) -> usize {
        self.category.encode_size() + self.amount.encode_size()
    }
}

/// Settlement result attached to a bet after the spin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winning_number: u8,
    pub won: bool,
    pub winning_slots: Vec<Slot>,
    /// Amount credited back to the player (stake plus profit), zero on a loss.
    pub payout: u64,
}

impl Write for Outcome {
    fn write(&self, writer: &mut impl BufMut) {
        self.winning_number.write(writer);
        self.won.write(writer);
        self.winning_slots.write(writer);
        self.payout.write(writer);
    }
}

impl Read for Outcome {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            winning_number: u8::read(reader)?,
            won: bool::read(reader)?,
            winning_slots: Vec::<Slot>::read_range(reader, 0..=SLOT_COUNT)?,
            payout: u64::read(reader)?,
        })
    }
}

impl EncodeSize for Outcome {
    fn encode_size(&self) -> usize {
        self.winning_number.encode_size()
            + self.won.encode_size()
            + self.winning_slots.encode_size()
            + self.payout.encode_size()
    }
}

/// A [BetSpec] bound to a player. The outcome is unset until the round's spin and
/// cannot be replaced once set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    player_id: String,
    spec: BetSpec,
    outcome: Option<Outcome>,
}

impl Bet {
    pub fn new(player_id: String, spec: BetSpec) -> Self {
        Self {
            player_id,
            spec,
            outcome: None,
        }
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn spec(&self) -> &BetSpec {
        &self.spec
    }

    pub fn category(&self) -> BetCategory {
        self.spec.category
    }

    pub fn amount(&self) -> u64 {
        self.spec.amount
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    /// `Some(true)` for a settled winner, `None` before the spin.
    pub fn won(&self) -> Option<bool> {
        self.outcome.as_ref().map(|o| o.won)
    }

    pub fn payout(&self) -> u64 {
        self.outcome.as_ref().map_or(0, |o| o.payout)
    }

    pub fn winning_slots(&self) -> &[Slot] {
        self.outcome
            .as_ref()
            .map_or(&[], |o| o.winning_slots.as_slice())
    }

    /// Attach the outcome. Returns false (and leaves the bet untouched) if it was
    /// already resolved.
    pub fn resolve(&mut self, outcome: Outcome) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(outcome);
        true
    }
}

impl Write for Bet {
    fn write(&self, writer: &mut impl BufMut) {
        write_string(&self.player_id, writer);
        self.spec.write(writer);
        self.outcome.write(writer);
    }
}

impl Read for Bet {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            player_id: read_string(reader, MAX_PLAYER_ID_LENGTH)?,
            spec: BetSpec::read(reader)?,
            outcome: Option::<Outcome>::read(reader)?,
        })
    }
}

impl EncodeSize for Bet {
    fn encode_size(&self) -> usize {
        string_encode_size(&self.player_id) + self.spec.encode_size() + self.outcome.encode_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(category: BetCategory) -> Vec<u8> {
        category
            .winning_slots()
            .expect("valid category")
            .iter()
            .map(|s| s.number())
            .collect()
    }

    #[test]
    fn test_partition_sizes() {
        assert_eq!(numbers(BetCategory::Straight(0)), vec![0]);
        assert_eq!(numbers(BetCategory::Straight(17)), vec![17]);
        for category in [
            BetCategory::Odd,
            BetCategory::Even,
            BetCategory::Red,
            BetCategory::Black,
            BetCategory::Low,
            BetCategory::High,
        ] {
            assert_eq!(numbers(category).len(), 18, "{category}");
        }
        for i in 1..=3 {
            assert_eq!(numbers(BetCategory::Dozen(i)).len(), 12);
            assert_eq!(numbers(BetCategory::Column(i)).len(), 12);
        }
    }

    #[test]
    fn test_even_money_pairs_cover_wheel_once() {
        for (a, b) in [
            (BetCategory::Odd, BetCategory::Even),
            (BetCategory::Red, BetCategory::Black),
            (BetCategory::Low, BetCategory::High),
        ] {
            let mut seen = [0u8; SLOT_COUNT];
            seen[0] += 1;
            for n in numbers(a).into_iter().chain(numbers(b)) {
                seen[n as usize] += 1;
            }
            assert!(seen.iter().all(|&count| count == 1), "{a} + {b} + zero");
        }
    }

    #[test]
    fn test_inside_bets() {
        assert_eq!(numbers(BetCategory::Split(17, 20)), vec![17, 20]);
        assert_eq!(numbers(BetCategory::Split(2, 1)), vec![1, 2]);
        assert_eq!(numbers(BetCategory::Split(0, 3)), vec![0, 3]);
        assert_eq!(numbers(BetCategory::Street(34)), vec![34, 35, 36]);
        assert_eq!(numbers(BetCategory::Corner(1)), vec![1, 2, 4, 5]);
        assert_eq!(numbers(BetCategory::Corner(32)), vec![32, 33, 35, 36]);
        assert_eq!(numbers(BetCategory::Line(31)), vec![31, 32, 33, 34, 35, 36]);
    }

    #[test]
    fn test_zero_only_wins_straight_and_zero_splits() {
        for kind in BetKind::ALL {
            let category = match kind {
                BetKind::Straight => BetCategory::Straight(0),
                BetKind::Split => BetCategory::Split(0, 2),
                _ => continue,
            };
            assert!(category.covers(0));
        }
        for category in [
            BetCategory::Odd,
            BetCategory::Even,
            BetCategory::Red,
            BetCategory::Black,
            BetCategory::Low,
            BetCategory::High,
            BetCategory::Dozen(1),
            BetCategory::Column(1),
            BetCategory::Street(1),
            BetCategory::Line(1),
            BetCategory::Corner(1),
        ] {
            assert!(!category.covers(0), "{category} must lose on zero");
        }
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            BetCategory::Straight(37).validate(),
            Err(InvalidSlot::OutOfRange {
                kind: BetKind::Straight,
                value: 37
            })
        );
        assert!(BetCategory::Straight(45).winning_slots().is_err());
        assert!(BetCategory::Dozen(0).validate().is_err());
        assert!(BetCategory::Dozen(4).validate().is_err());
        assert!(BetCategory::Column(4).validate().is_err());
        assert!(BetCategory::Street(2).validate().is_err());
        assert!(BetCategory::Street(37).validate().is_err());
        assert!(BetCategory::Corner(3).validate().is_err());
        assert!(BetCategory::Corner(33).validate().is_err());
        assert!(BetCategory::Line(34).validate().is_err());
        assert_eq!(
            BetCategory::Split(3, 4).validate(),
            Err(InvalidSlot::NotAdjacent {
                first: 3,
                second: 4
            })
        );
        assert!(BetCategory::Split(0, 4).validate().is_err());
        assert!(BetCategory::Split(36, 39).validate().is_err());
    }

    #[test]
    fn test_invalid_slot_message() {
        let err = BetCategory::Straight(45).validate().unwrap_err();
        assert!(err.to_string().to_lowercase().contains("invalid slot"));
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            BetCategory::from_parts(BetKind::Straight, Some(7), None),
            Ok(BetCategory::Straight(7))
        );
        assert_eq!(
            BetCategory::from_parts(BetKind::Odd, Some(7), None),
            Ok(BetCategory::Odd)
        );
        assert_eq!(
            BetCategory::from_parts(BetKind::Split, Some(7), Some(8)),
            Ok(BetCategory::Split(7, 8))
        );
        assert_eq!(
            BetCategory::from_parts(BetKind::Dozen, None, None),
            Err(InvalidSlot::Missing {
                kind: BetKind::Dozen
            })
        );
        assert!(BetCategory::from_parts(BetKind::Split, Some(7), None).is_err());
    }

    #[test]
    fn test_payouts() {
        assert_eq!(BetCategory::Straight(0).payout_ratio(), 35);
        assert_eq!(BetCategory::Split(1, 2).payout_ratio(), 17);
        assert_eq!(BetCategory::Street(1).payout_ratio(), 11);
        assert_eq!(BetCategory::Corner(1).payout_ratio(), 8);
        assert_eq!(BetCategory::Line(1).payout_ratio(), 5);
        assert_eq!(BetCategory::Dozen(1).payout_ratio(), 2);
        assert_eq!(BetCategory::Column(3).payout_ratio(), 2);
        assert_eq!(BetCategory::Red.payout_ratio(), 1);

        assert_eq!(BetCategory::Straight(0).total_return(1), 36);
        assert_eq!(BetCategory::Odd.total_return(5), 10);
        assert_eq!(BetCategory::Dozen(2).total_return(10), 30);
    }

    #[test]
    fn test_payout_is_fair_against_coverage() {
        // Every category returns 36 units per unit staked across the slots it covers.
        let categories = [
            BetCategory::Straight(5),
            BetCategory::Split(5, 8),
            BetCategory::Street(4),
            BetCategory::Corner(4),
            BetCategory::Line(4),
            BetCategory::Dozen(2),
            BetCategory::Column(2),
            BetCategory::Red,
        ];
        for category in categories {
            let covered = category.winning_slots().unwrap().len() as u64;
            assert_eq!(category.total_return(1) * covered, 36, "{category}");
        }
    }

    #[test]
    fn test_resolve_once() {
        let mut bet = Bet::new("p".to_string(), BetSpec::new(BetCategory::Red, 5));
        assert_eq!(bet.won(), None);
        assert_eq!(bet.payout(), 0);
        assert!(bet.winning_slots().is_empty());

        let outcome = Outcome {
            winning_number: 1,
            won: true,
            winning_slots: BetCategory::Red.winning_slots().unwrap(),
            payout: 10,
        };
        assert!(bet.resolve(outcome.clone()));
        assert!(!bet.resolve(Outcome {
            won: false,
            payout: 0,
            ..outcome
        }));
        assert_eq!(bet.won(), Some(true));
        assert_eq!(bet.payout(), 10);
        assert_eq!(bet.winning_slots().len(), 18);
    }

    #[test]
    fn test_category_json_shape() {
        let json = serde_json::to_string(&BetCategory::Straight(17)).unwrap();
        assert_eq!(json, r#"{"type":"straight","value":17}"#);
        let json = serde_json::to_string(&BetCategory::Red).unwrap();
        assert_eq!(json, r#"{"type":"red"}"#);
        let parsed: BetCategory = serde_json::from_str(r#"{"type":"split","value":[0,1]}"#).unwrap();
        assert_eq!(parsed, BetCategory::Split(0, 1));
    }
}
