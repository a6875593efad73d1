//! Hole-card normalisation: free text such as `"Ah Kc"` becomes a
//! canonical starting-hand code (`AKo`, `AKs`, `AA`).

use std::fmt;
use std::str::FromStr;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::cards::{parse_card, Card, Rank};
use crate::error::{AdvisorError, AdvisorResult};

static CARD_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[AKQJT2-9][hcds]").expect("card token pattern compiles")
});

/// One of the 169 distinct pre-flop starting hands.
///
/// `high >= low` always holds and pairs are never suited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandCode {
    high: Rank,
    low: Rank,
    suited: bool,
}

impl HandCode {
    pub fn new(r1: Rank, r2: Rank, suited: bool) -> HandCode {
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        HandCode {
            high,
            low,
            suited: suited && high != low,
        }
    }

    /// Builds the code for two hole cards. The higher rank goes first; on a
    /// tie the cards keep the order they were given in.
    pub fn from_cards(c1: Card, c2: Card) -> HandCode {
        let (hi, lo) = if c2.rank > c1.rank { (c2, c1) } else { (c1, c2) };
        HandCode::new(hi.rank, lo.rank, hi.suit == lo.suit)
    }

    pub fn high(&self) -> Rank {
        self.high
    }

    pub fn low(&self) -> Rank {
        self.low
    }

    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    pub fn is_suited(&self) -> bool {
        self.suited
    }
}

impl fmt::Display for HandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hi, lo) = (self.high.to_char(), self.low.to_char());
        if self.is_pair() {
            write!(f, "{}{}", hi, lo)
        } else if self.suited {
            write!(f, "{}{}s", hi, lo)
        } else {
            write!(f, "{}{}o", hi, lo)
        }
    }
}

impl FromStr for HandCode {
    type Err = AdvisorError;

    /// Parses chart notation: `"QQ"`, `"AKs"`, `"T9o"`.
    fn from_str(s: &str) -> AdvisorResult<HandCode> {
        let invalid = || AdvisorError::InvalidHandNotation(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        match chars.as_slice() {
            [a, b] => {
                let (r1, r2) = (Rank::from_char(*a)?, Rank::from_char(*b)?);
                if r1 != r2 {
                    return Err(invalid());
                }
                Ok(HandCode::new(r1, r2, false))
            }
            [a, b, kind] => {
                let (r1, r2) = (Rank::from_char(*a)?, Rank::from_char(*b)?);
                if r1 == r2 {
                    return Err(invalid());
                }
                match kind.to_ascii_lowercase() {
                    's' => Ok(HandCode::new(r1, r2, true)),
                    'o' => Ok(HandCode::new(r1, r2, false)),
                    _ => Err(invalid()),
                }
            }
            _ => Err(invalid()),
        }
    }
}

/// Splits raw input into card tokens: pattern matches first, whitespace
/// separated words if the pattern finds fewer than two.
fn card_tokens(text: &str) -> Vec<&str> {
    let matched: Vec<&str> = CARD_TOKEN.find_iter(text).map(|m| m.as_str()).collect();
    if matched.len() >= 2 {
        matched
    } else {
        text.split_whitespace().collect()
    }
}

/// Parses exactly two hole cards out of free text.
pub fn parse_hole_cards(text: &str) -> AdvisorResult<(Card, Card)> {
    let tokens = card_tokens(text);
    let [first, second] = tokens.as_slice() else {
        return Err(AdvisorError::InvalidHandNotation(text.trim().to_string()));
    };
    let c1 = parse_card(first)?;
    let c2 = parse_card(second)?;
    if c1 == c2 {
        return Err(AdvisorError::DuplicateCard(c1.to_string()));
    }
    Ok((c1, c2))
}

pub fn normalize_hand(text: &str) -> AdvisorResult<HandCode> {
    let (c1, c2) = parse_hole_cards(text)?;
    let code = HandCode::from_cards(c1, c2);
    debug!("normalized {:?} -> {} ({} {})", text, code, c1, c2);
    Ok(code)
}
