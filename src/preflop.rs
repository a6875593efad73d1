use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{AdvisorError, AdvisorResult};
use crate::hand::HandCode;
use crate::ranges::{position_range, Position};

/// Below this many big blinds the advisor only shoves or folds.
pub const SHORT_STACK_BB: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorAction {
    None,
    Raise,
    Call,
    ThreeBet,
}

impl PriorAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorAction::None => "none",
            PriorAction::Raise => "raise",
            PriorAction::Call => "call",
            PriorAction::ThreeBet => "3bet",
        }
    }
}

impl fmt::Display for PriorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PriorAction {
    type Err = AdvisorError;

    fn from_str(s: &str) -> AdvisorResult<PriorAction> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(PriorAction::None),
            "raise" => Ok(PriorAction::Raise),
            "call" | "limp" => Ok(PriorAction::Call),
            "3bet" | "3-bet" => Ok(PriorAction::ThreeBet),
            _ => Err(AdvisorError::InvalidValue(format!(
                "unknown prior action '{}' (expected none, raise, call or 3bet)",
                s.trim()
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Raise,
    Call,
    Fold,
    ThreeBet,
    FourBet,
    AllIn,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Raise => "raise",
            Action::Call => "call",
            Action::Fold => "fold",
            Action::ThreeBet => "3-bet",
            Action::FourBet => "4-bet",
            Action::AllIn => "all-in",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub action: Action,
    pub explanation: String,
}

impl Suggestion {
    fn new(action: Action, explanation: impl Into<String>) -> Suggestion {
        Suggestion {
            action,
            explanation: explanation.into(),
        }
    }
}

/// Accepts a finite, non-negative stack in big blinds.
pub fn validate_stack(stack_size: f64) -> AdvisorResult<f64> {
    if stack_size.is_finite() && stack_size >= 0.0 {
        Ok(stack_size)
    } else {
        Err(AdvisorError::InvalidValue(format!(
            "stack size must be a non-negative number of big blinds, got {}",
            stack_size
        )))
    }
}

/// Recommends a pre-flop action for `hand`.
///
/// `position` and `action_before` are raw tags; anything unrecognised, or a
/// stack that is negative or not a number, yields a fold whose explanation
/// says what was wrong.
pub fn suggest(hand: &HandCode, position: &str, stack_size: f64, action_before: &str) -> Suggestion {
    let Ok(position) = position.parse::<Position>() else {
        return Suggestion::new(
            Action::Fold,
            format!(
                "Unrecognized position '{}' (use ep, mp or lp): folding by default.",
                position.trim()
            ),
        );
    };
    let Ok(prior) = action_before.parse::<PriorAction>() else {
        return Suggestion::new(
            Action::Fold,
            format!(
                "Unrecognized action '{}' (use none, raise, call or 3bet): folding by default.",
                action_before.trim()
            ),
        );
    };
    if validate_stack(stack_size).is_err() {
        return Suggestion::new(
            Action::Fold,
            format!("Unusable stack size '{}': folding by default.", stack_size),
        );
    }
    let suggestion = suggest_for(hand, position, stack_size, prior);
    debug!(
        "{} at {} with {}bb after {} -> {}",
        hand, position, stack_size, prior, suggestion.action
    );
    suggestion
}

pub fn suggest_for(
    hand: &HandCode,
    position: Position,
    stack_size: f64,
    prior: PriorAction,
) -> Suggestion {
    let range = position_range(position);
    let in_raise = range.in_raise(hand);
    let in_call = range.in_call(hand);

    if stack_size.is_nan() || stack_size < SHORT_STACK_BB {
        return if in_raise {
            Suggestion::new(
                Action::AllIn,
                format!(
                    "Short stack ({}bb): shove hands from your {} raising range.",
                    stack_size,
                    position.describe()
                ),
            )
        } else {
            Suggestion::new(
                Action::Fold,
                format!(
                    "Short stack ({}bb): push or fold only and this hand is not strong enough to push.",
                    stack_size
                ),
            )
        };
    }

    match prior {
        PriorAction::None => {
            if in_raise {
                Suggestion::new(
                    Action::Raise,
                    format!("Open raise: hand is in your {} raising range.", position.describe()),
                )
            } else if in_call {
                Suggestion::new(
                    Action::Call,
                    "Speculative hand: limp or call cheaply to see a flop.",
                )
            } else {
                Suggestion::new(
                    Action::Fold,
                    format!("Not strong enough to enter the pot from {}.", position.describe()),
                )
            }
        }
        PriorAction::Raise => {
            if in_raise {
                Suggestion::new(
                    Action::ThreeBet,
                    "Strong hand facing a raise: re-raise for value.",
                )
            } else if in_call {
                Suggestion::new(
                    Action::Call,
                    "Playable hand facing a raise: call and aim to hit the flop hard.",
                )
            } else {
                Suggestion::new(Action::Fold, "Too weak to continue against a raise.")
            }
        }
        PriorAction::Call => {
            if in_raise {
                Suggestion::new(
                    Action::Raise,
                    "Raise to isolate the limpers with a strong hand.",
                )
            } else if in_call {
                Suggestion::new(
                    Action::Call,
                    "Over-limp: multiway pots favor speculative hands.",
                )
            } else {
                Suggestion::new(Action::Fold, "Too weak to join a multiway pot.")
            }
        }
        PriorAction::ThreeBet => {
            if in_raise {
                Suggestion::new(
                    Action::FourBet,
                    "Facing a 3-bet with a top hand: 4-bet for value.",
                )
            } else if in_call {
                Suggestion::new(
                    Action::Call,
                    "Call the 3-bet only with deep stacks and a plan to hit a set or a big draw.",
                )
            } else {
                Suggestion::new(Action::Fold, "Fold to the 3-bet: hand is outside your continuing range.")
            }
        }
    }
}
