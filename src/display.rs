use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{Card, Suit, RANKS_DESC};
use crate::hand::HandCode;
use crate::preflop::Action;
use crate::ranges::PositionRange;

/// 13x13 chart of starting hands: suited above the diagonal, offsuit below.
/// Raising hands are red, calling hands green, the rest dimmed.
pub fn range_grid(range: &PositionRange, title: &str) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    for r in RANKS_DESC {
        header.push(Cell::new(r.to_char()).set_alignment(CellAlignment::Center));
    }
    table.set_header(header);

    for (i, &r1) in RANKS_DESC.iter().enumerate() {
        let mut row = vec![Cell::new(r1.to_char().to_string().bold().to_string())];
        for (j, &r2) in RANKS_DESC.iter().enumerate() {
            let hand = HandCode::new(r1, r2, i < j);
            let label = hand.to_string();
            let text = if range.in_raise(&hand) {
                label.red().bold().to_string()
            } else if range.in_call(&hand) {
                label.green().to_string()
            } else {
                label.dimmed().to_string()
            };
            row.push(Cell::new(text).set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }

    format!("  {}\n{}", title.bold(), table)
}

pub fn hole_cards_display(c1: Card, c2: Card) -> String {
    [c1, c2]
        .iter()
        .map(|card| {
            let text = card.pretty();
            match card.suit {
                Suit::Spades => text.white().to_string(),
                Suit::Hearts => text.red().to_string(),
                Suit::Diamonds => text.blue().to_string(),
                Suit::Clubs => text.green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn probability_bar(probability: f64, width: usize) -> String {
    let filled = ((probability.clamp(0.0, 1.0)) * width as f64) as usize;
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.2}%", probability * 100.0);

    if probability >= 0.5 {
        format!("{} {}", bar.green(), pct)
    } else if probability >= 0.25 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.red(), pct)
    }
}

/// Two-column metric table.
pub fn metric_table(rows: &[(&str, String)]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Metric".bold().to_string()).set_alignment(CellAlignment::Left),
        Cell::new("Value").set_alignment(CellAlignment::Right),
    ]);
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label.bold().to_string()),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    table.to_string()
}

pub fn styled_action(action: Action) -> String {
    let label = action.as_str().to_uppercase();
    match action {
        Action::Fold => label.dimmed().bold().to_string(),
        Action::Call => label.green().bold().to_string(),
        _ => label.red().bold().to_string(),
    }
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("  {}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
