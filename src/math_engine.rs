use std::fmt;

use crate::error::{AdvisorError, AdvisorResult};

pub const DECK_SIZE: u32 = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    RuleOf2And4,
    Exact,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::RuleOf2And4 => write!(f, "rule_of_2_4"),
            Method::Exact => write!(f, "exact"),
        }
    }
}

/// Rule of 2 and 4: about 4% per out with two cards to come, 2% with one.
/// Any other count is treated like two cards to come.
pub fn rule_of_2_and_4(outs: u32, cards_left_to_see: u32) -> f64 {
    let per_out = if cards_left_to_see == 1 { 0.02 } else { 0.04 };
    (outs as f64 * per_out).min(1.0)
}

/// Chance of hitting at least one out in `cards_left_to_see` draws from a
/// deck reduced only by the visible cards. Card removal from the outs
/// themselves is not modelled.
pub fn exact_probability_by_outs(
    outs: u32,
    cards_left_to_see: u32,
    visible_cards: u32,
) -> AdvisorResult<f64> {
    if visible_cards
        .checked_add(cards_left_to_see)
        .map_or(true, |n| n > DECK_SIZE)
    {
        return Err(AdvisorError::InvalidValue(format!(
            "cannot draw {} cards with {} already visible",
            cards_left_to_see, visible_cards
        )));
    }
    let deck = (DECK_SIZE - visible_cards) as f64;
    let outs = outs as f64;

    let mut p_no_out = 1.0;
    for i in 0..cards_left_to_see {
        let i = i as f64;
        p_no_out *= ((deck - outs - i) / (deck - i)).max(0.0);
    }
    Ok((1.0 - p_no_out).clamp(0.0, 1.0))
}

pub fn win_probability(
    method: Method,
    outs: u32,
    cards_left_to_see: u32,
    visible_cards: u32,
) -> AdvisorResult<f64> {
    match method {
        Method::RuleOf2And4 => Ok(rule_of_2_and_4(outs, cards_left_to_see)),
        Method::Exact => exact_probability_by_outs(outs, cards_left_to_see, visible_cards),
    }
}

/// Odds against hitting, as `x` in `x:1`. Zero for a certainty and
/// infinite when there is no chance at all.
pub fn odds_against(probability: f64) -> f64 {
    if probability >= 1.0 {
        0.0
    } else if probability <= 0.0 {
        f64::INFINITY
    } else {
        (1.0 - probability) / probability
    }
}

/// Pot odds as `x` in `x:1`: the pot after calling over the call amount.
pub fn pot_odds(pot_size: f64, call_amount: f64) -> AdvisorResult<f64> {
    if call_amount <= 0.0 {
        return Err(AdvisorError::InvalidValue(
            "Call amount must be positive".to_string(),
        ));
    }
    if pot_size < 0.0 {
        return Err(AdvisorError::InvalidValue(
            "Pot size cannot be negative".to_string(),
        ));
    }
    Ok((pot_size + call_amount) / call_amount)
}

pub fn is_favorable(pot_odds: f64, odds_against: f64) -> bool {
    pot_odds >= odds_against
}

/// Share of the final pot a call has to win to break even.
pub fn break_even_equity(pot_size: f64, call_amount: f64) -> AdvisorResult<f64> {
    if call_amount <= 0.0 || pot_size < 0.0 {
        return Err(AdvisorError::InvalidValue(
            "Call must be positive and pot non-negative".to_string(),
        ));
    }
    Ok(call_amount / (pot_size + call_amount))
}

pub fn call_ev(probability: f64, pot_size: f64, call_amount: f64) -> f64 {
    probability * pot_size - (1.0 - probability) * call_amount
}

pub fn format_ratio(ratio: f64) -> String {
    if ratio.is_infinite() {
        "\u{221e}:1".to_string()
    } else {
        format!("{:.2}:1", ratio)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PotComparison {
    pub pot_size: f64,
    pub call_amount: f64,
    pub pot_odds: f64,
    pub break_even: f64,
    pub call_ev: f64,
    pub favorable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutsReport {
    pub outs: u32,
    pub cards_left_to_see: u32,
    pub method: Method,
    pub win_probability: f64,
    pub odds_against: f64,
    /// Present only when there is something to call.
    pub pot: Option<PotComparison>,
}

pub fn evaluate_outs(
    method: Method,
    outs: u32,
    cards_left_to_see: u32,
    visible_cards: u32,
    pot_size: f64,
    call_amount: f64,
) -> AdvisorResult<OutsReport> {
    let win = win_probability(method, outs, cards_left_to_see, visible_cards)?;
    let against = odds_against(win);

    let pot = if call_amount > 0.0 {
        let ratio = pot_odds(pot_size, call_amount)?;
        Some(PotComparison {
            pot_size,
            call_amount,
            pot_odds: ratio,
            break_even: break_even_equity(pot_size, call_amount)?,
            call_ev: call_ev(win, pot_size, call_amount),
            favorable: is_favorable(ratio, against),
        })
    } else {
        None
    };

    Ok(OutsReport {
        outs,
        cards_left_to_see,
        method,
        win_probability: win,
        odds_against: against,
        pot,
    })
}
