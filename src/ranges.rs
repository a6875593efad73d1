use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{AdvisorError, AdvisorResult};
use crate::hand::HandCode;

static RANGES_JSON: &str = include_str!("../data/ranges.json");

pub const TOTAL_COMBOS: u32 = 1326;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Early,
    Middle,
    Late,
}

pub const ALL_POSITIONS: [Position; 3] = [Position::Early, Position::Middle, Position::Late];

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Early => "ep",
            Position::Middle => "mp",
            Position::Late => "lp",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Position::Early => "early position",
            Position::Middle => "middle position",
            Position::Late => "late position",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = AdvisorError;

    /// Accepts the short tags, their long names and the 6-max seat names.
    fn from_str(s: &str) -> AdvisorResult<Position> {
        match s.trim().to_lowercase().as_str() {
            "ep" | "early" | "utg" => Ok(Position::Early),
            "mp" | "middle" | "hj" => Ok(Position::Middle),
            "lp" | "late" | "co" | "btn" => Ok(Position::Late),
            _ => Err(AdvisorError::InvalidValue(format!(
                "unknown position '{}' (expected ep, mp or lp)",
                s.trim()
            ))),
        }
    }
}

#[derive(Deserialize, Debug)]
struct PositionEntry {
    raise: Vec<String>,
    call: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct RangeFile {
    tiers: HashMap<String, Vec<String>>,
    positions: HashMap<String, PositionEntry>,
}

/// Opening and calling sets for one position.
#[derive(Debug, Clone, Default)]
pub struct PositionRange {
    pub raise: HashSet<HandCode>,
    pub call: HashSet<HandCode>,
}

impl PositionRange {
    pub fn in_raise(&self, hand: &HandCode) -> bool {
        self.raise.contains(hand)
    }

    pub fn in_call(&self, hand: &HandCode) -> bool {
        self.call.contains(hand)
    }
}

#[derive(Debug)]
pub struct RangeTable {
    positions: HashMap<Position, PositionRange>,
}

impl RangeTable {
    /// Builds a table from JSON: named tiers of hand codes plus, per
    /// position, the tier names making up its raise and call sets.
    pub fn from_json(json: &str) -> AdvisorResult<RangeTable> {
        let file: RangeFile = serde_json::from_str(json)?;

        let mut tiers: HashMap<&str, Vec<HandCode>> = HashMap::new();
        for (name, hands) in &file.tiers {
            let codes = hands
                .iter()
                .map(|h| h.parse::<HandCode>())
                .collect::<AdvisorResult<Vec<_>>>()?;
            tiers.insert(name.as_str(), codes);
        }

        let union = |names: &[String]| -> AdvisorResult<HashSet<HandCode>> {
            let mut set = HashSet::new();
            for name in names {
                let hands = tiers
                    .get(name.as_str())
                    .ok_or_else(|| AdvisorError::RangeData(format!("unknown tier '{}'", name)))?;
                set.extend(hands.iter().copied());
            }
            Ok(set)
        };

        let mut positions = HashMap::new();
        for (tag, entry) in &file.positions {
            let position: Position = tag.parse()?;
            let range = PositionRange {
                raise: union(&entry.raise)?,
                call: union(&entry.call)?,
            };
            positions.insert(position, range);
        }

        for position in ALL_POSITIONS {
            if !positions.contains_key(&position) {
                return Err(AdvisorError::RangeData(format!(
                    "no ranges for position '{}'",
                    position
                )));
            }
        }

        Ok(RangeTable { positions })
    }

    pub fn get(&self, position: Position) -> &PositionRange {
        // from_json rejects tables missing a position
        &self.positions[&position]
    }
}

static RANGE_TABLE: Lazy<RangeTable> =
    Lazy::new(|| RangeTable::from_json(RANGES_JSON).expect("Failed to parse built-in ranges"));

pub fn range_table() -> &'static RangeTable {
    &RANGE_TABLE
}

pub fn position_range(position: Position) -> &'static PositionRange {
    RANGE_TABLE.get(position)
}

pub fn combo_count(hand: &HandCode) -> u32 {
    if hand.is_pair() {
        6
    } else if hand.is_suited() {
        4
    } else {
        12
    }
}

pub fn total_combos<'a, I>(hands: I) -> u32
where
    I: IntoIterator<Item = &'a HandCode>,
{
    hands.into_iter().map(combo_count).sum()
}

pub fn range_pct<'a, I>(hands: I) -> f64
where
    I: IntoIterator<Item = &'a HandCode>,
{
    total_combos(hands) as f64 / TOTAL_COMBOS as f64 * 100.0
}
