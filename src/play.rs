use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use log::warn;

use crate::cards::Card;
use crate::display::{hole_cards_display, print_error, styled_action};
use crate::error::{AdvisorError, AdvisorResult};
use crate::hand::{parse_hole_cards, HandCode};
use crate::journal::{append_entry, unix_timestamp, JournalEntry};
use crate::preflop::{suggest, validate_stack, Suggestion};

pub const PARSE_HINT: &str =
    "Could not parse your hole cards. Make sure to provide them like 'AhKc' or 'Ah Kc'.";

/// One evaluated pre-flop decision.
#[derive(Debug, Clone)]
pub struct Advice {
    pub cards: String,
    pub hole: (Card, Card),
    pub hand: HandCode,
    pub position: String,
    pub stack_size: f64,
    pub action_before: String,
    pub suggestion: Suggestion,
}

impl Advice {
    pub fn journal_entry(&self) -> JournalEntry {
        JournalEntry {
            timestamp: unix_timestamp(),
            cards: self.cards.clone(),
            normalized: self.hand.to_string(),
            position: self.position.clone(),
            stack_size: self.stack_size,
            action_before: self.action_before.clone(),
            suggestion: self.suggestion.action.to_string(),
            explanation: self.suggestion.explanation.clone(),
        }
    }
}

/// Normalises `cards` and looks up the recommendation. Unparseable cards
/// and unusable stacks are errors; bad position or action tags fold instead.
pub fn advise(cards: &str, position: &str, stack_size: f64, action_before: &str) -> AdvisorResult<Advice> {
    let (c1, c2) = parse_hole_cards(cards)?;
    let stack_size = validate_stack(stack_size)?;
    let hand = HandCode::from_cards(c1, c2);
    let suggestion = suggest(&hand, position, stack_size, action_before);
    Ok(Advice {
        cards: cards.trim().to_string(),
        hole: (c1, c2),
        hand,
        position: position.trim().to_string(),
        stack_size,
        action_before: action_before.trim().to_string(),
        suggestion,
    })
}

pub fn write_advice(advice: &Advice, writer: &mut dyn Write) -> io::Result<()> {
    let (c1, c2) = advice.hole;
    writeln!(writer, "{}", "===== Pre-Flop Decision Tool =====".cyan().bold())?;
    writeln!(
        writer,
        "Hole cards: {} ({}) -> Normalized: {}",
        advice.cards,
        hole_cards_display(c1, c2),
        advice.hand.to_string().bold()
    )?;
    writeln!(writer, "Position: {}", advice.position)?;
    writeln!(writer, "Stack size: {}bb", advice.stack_size)?;
    writeln!(writer, "Action before you: {}", advice.action_before)?;
    writeln!(
        writer,
        "Suggested Action: {}",
        styled_action(advice.suggestion.action)
    )?;
    writeln!(writer, "Why: {}", advice.suggestion.explanation)?;
    Ok(())
}

/// User-facing text for an `advise` failure.
pub fn advise_error_message(err: &AdvisorError) -> String {
    match err {
        AdvisorError::InvalidValue(msg) => format!("Invalid input: {}", msg),
        other => format!("{} ({})", PARSE_HINT, other),
    }
}

/// Appends to the journal when a path is configured. Failures are reported
/// but never abort the run.
pub fn record(advice: &Advice, log_path: Option<&Path>) {
    let Some(path) = log_path else {
        return;
    };
    if let Err(e) = append_entry(path, &advice.journal_entry()) {
        warn!("could not write to {}: {}", path.display(), e);
        print_error(&format!("Could not write log file {}: {}", path.display(), e));
    }
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

struct QuitSession;

/// Reads one answer. EOF, a read error or `q` all quit the session.
fn prompt(
    message: &str,
    default: Option<&str>,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<String, QuitSession> {
    if let Some(d) = default {
        write!(writer, "{} [{}]: ", message, d).ok();
    } else {
        write!(writer, "{}: ", message).ok();
    }
    writer.flush().ok();

    let mut line = String::new();
    let answer = match reader.read_line(&mut line) {
        Ok(0) | Err(_) => return Err(QuitSession),
        Ok(_) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                default.unwrap_or("").to_string()
            } else {
                trimmed.to_string()
            }
        }
    };
    if answer.eq_ignore_ascii_case("q") {
        return Err(QuitSession);
    }
    Ok(answer)
}

fn prompt_yn(
    message: &str,
    default: &str,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<bool, QuitSession> {
    let answer = prompt(&format!("{} (y/n)", message), Some(default), reader, writer)?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

// ---------------------------------------------------------------------------
// Interactive session
// ---------------------------------------------------------------------------

pub fn play_command(log_path: Option<&Path>) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    run_interactive_session(&mut reader, &mut writer, log_path);
}

pub fn run_interactive_session(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    log_path: Option<&Path>,
) {
    writeln!(writer).ok();
    writeln!(writer, "{}", "Pre-Flop Advisor: interactive mode".cyan().bold()).ok();
    writeln!(writer, "Type {} at any prompt to quit.\n", "'q'".bold()).ok();

    loop {
        if play_one_hand(reader, writer, log_path).is_err() {
            break;
        }
        match prompt_yn("\nAnother hand?", "y", reader, writer) {
            Ok(true) => continue,
            _ => break,
        }
    }
    writeln!(writer, "\n{}\n", "Good luck at the tables.".cyan().bold()).ok();
}

fn play_one_hand(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    log_path: Option<&Path>,
) -> Result<(), QuitSession> {
    let cards = loop {
        let text = prompt("  Hole cards (e.g. Ah Kc)", None, reader, writer)?;
        match parse_hole_cards(&text) {
            Ok(_) => break text,
            Err(e) => {
                writeln!(writer, "  {} {} ({})", "Error:".red().bold(), PARSE_HINT, e).ok();
            }
        }
    };

    let position = prompt("  Position (ep/mp/lp)", Some("ep"), reader, writer)?;

    let stack_size = loop {
        let text = prompt("  Stack size in bb", Some("100"), reader, writer)?;
        match text.parse::<f64>().ok().map(validate_stack) {
            Some(Ok(v)) => break v,
            _ => {
                writeln!(writer, "  {} '{}' is not a stack size", "Error:".red().bold(), text).ok();
            }
        }
    };

    let action_before = prompt(
        "  Action before you (none/raise/call/3bet)",
        Some("none"),
        reader,
        writer,
    )?;

    match advise(&cards, &position, stack_size, &action_before) {
        Ok(advice) => {
            writeln!(writer).ok();
            write_advice(&advice, writer).ok();
            record(&advice, log_path);
        }
        Err(e) => {
            writeln!(writer, "  {} {}", "Error:".red().bold(), advise_error_message(&e)).ok();
        }
    }
    Ok(())
}
