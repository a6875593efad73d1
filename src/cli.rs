use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use crate::display::{metric_table, print_error, print_section, probability_bar, range_grid};
use crate::logging;
use crate::math_engine::{evaluate_outs, format_ratio, Method, OutsReport};
use crate::play::{advise, advise_error_message, play_command, record, write_advice};
use crate::ranges::{position_range, range_pct, Position};

pub const FAVORABLE_MSG: &str =
    "=> Pot odds are favorable compared to your odds of hitting (profitable call).";
pub const UNFAVORABLE_MSG: &str =
    "=> Pot odds are NOT favorable compared to your odds of hitting (fold might be better).";
pub const NO_CALL_MSG: &str = "No call amount specified, skipping pot odds comparison.";

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    #[value(name = "rule_of_2_4")]
    RuleOf2And4,
    #[value(name = "exact")]
    Exact,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Method {
        match arg {
            MethodArg::RuleOf2And4 => Method::RuleOf2And4,
            MethodArg::Exact => Method::Exact,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "outs",
    version,
    about = "Calculate outs-based hand probabilities and compare them to pot odds."
)]
struct OutsCli {
    /// Number of outs to hit your draw
    #[arg(long)]
    outs: u32,
    /// Cards left to be dealt (1 for the river only, 2 for turn and river)
    #[arg(
        long = "cards_left_to_see",
        default_value = "2",
        value_parser = clap::value_parser!(u32).range(1..=2)
    )]
    cards_left_to_see: u32,
    /// Current total pot before calling
    #[arg(long = "pot_size", default_value = "0")]
    pot_size: f64,
    /// Amount you need to call to stay in the hand
    #[arg(long = "call_amount", default_value = "0")]
    call_amount: f64,
    /// Cards already seen (5 on the flop: 2 hole + 3 board)
    #[arg(long = "visible_cards", default_value = "5")]
    visible_cards: u32,
    /// How to estimate the chance of improving
    #[arg(long, default_value = "rule_of_2_4")]
    method: MethodArg,
    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser)]
#[command(
    name = "preflop",
    version,
    about = "Simplified pre-flop decision advisor for Texas Hold'em."
)]
struct PreflopCli {
    /// Your two hole cards (e.g. 'Ah Kc' or 'KsKh')
    #[arg(long, required_unless_present = "interactive")]
    cards: Option<String>,
    /// Table position: ep (early), mp (middle), lp (late)
    #[arg(long, default_value = "ep")]
    position: String,
    /// Effective stack in big blinds
    #[arg(long = "stack_size", default_value = "100")]
    stack_size: f64,
    /// Action before you: none, raise, call or 3bet
    #[arg(long = "action_before", default_value = "none")]
    action_before: String,
    /// Prompt for hands one after another
    #[arg(long)]
    interactive: bool,
    /// Append each decision as a CSV line to this file
    #[arg(long)]
    log: Option<PathBuf>,
    /// Show the raise/call chart for the position
    #[arg(long = "show-range")]
    show_range: bool,
    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

// ---------------------------------------------------------------------------
// outs
// ---------------------------------------------------------------------------

pub fn run_outs() {
    let cli = OutsCli::parse();
    dispatch_outs(cli);
}

pub fn run_outs_with_args(args: Vec<String>) {
    let cli = OutsCli::parse_from(args);
    dispatch_outs(cli);
}

fn dispatch_outs(cli: OutsCli) {
    logging::init(cli.verbose);
    let report = match evaluate_outs(
        cli.method.into(),
        cli.outs,
        cli.cards_left_to_see,
        cli.visible_cards,
        cli.pot_size,
        cli.call_amount,
    ) {
        Ok(r) => r,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_outs_report(&report, &mut out) {
        print_error(&e.to_string());
    }
}

pub fn write_outs_report(report: &OutsReport, writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "{}", "===== Poker CLI Results =====".cyan().bold())?;

    let mut rows = vec![
        ("Outs", report.outs.to_string()),
        ("Cards left to see", report.cards_left_to_see.to_string()),
        ("Method", report.method.to_string()),
        ("Win Probability", format!("{:.2}%", report.win_probability * 100.0)),
        ("Odds Against", format_ratio(report.odds_against)),
    ];
    if let Some(pot) = &report.pot {
        rows.push(("Pot Size", format!("{}", pot.pot_size)));
        rows.push(("Call Amount", format!("{}", pot.call_amount)));
        rows.push(("Pot Odds", format_ratio(pot.pot_odds)));
        rows.push(("Break-even Equity", format!("{:.2}%", pot.break_even * 100.0)));
        let ev = format!("{:.2}", pot.call_ev);
        rows.push((
            "EV of Call",
            if pot.call_ev >= 0.0 {
                ev.green().to_string()
            } else {
                ev.red().to_string()
            },
        ));
    }
    writeln!(writer, "{}", metric_table(&rows))?;
    writeln!(writer, "  {}", probability_bar(report.win_probability, 30))?;

    match &report.pot {
        Some(pot) if pot.favorable => writeln!(writer, "{}", FAVORABLE_MSG.green().bold())?,
        Some(_) => writeln!(writer, "{}", UNFAVORABLE_MSG.red().bold())?,
        None => writeln!(writer, "{}", NO_CALL_MSG.dimmed())?,
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// preflop
// ---------------------------------------------------------------------------

pub fn run_preflop() {
    let cli = PreflopCli::parse();
    dispatch_preflop(cli);
}

pub fn run_preflop_with_args(args: Vec<String>) {
    let cli = PreflopCli::parse_from(args);
    dispatch_preflop(cli);
}

fn dispatch_preflop(cli: PreflopCli) {
    logging::init(cli.verbose);

    if cli.show_range {
        cmd_show_range(&cli.position);
    }

    if cli.interactive {
        play_command(cli.log.as_deref());
        return;
    }

    // clap enforces --cards unless --interactive
    let Some(cards) = cli.cards else {
        return;
    };
    cmd_advise(
        &cards,
        &cli.position,
        cli.stack_size,
        &cli.action_before,
        cli.log.as_deref(),
    );
}

fn cmd_advise(
    cards: &str,
    position: &str,
    stack_size: f64,
    action_before: &str,
    log_path: Option<&std::path::Path>,
) {
    let advice = match advise(cards, position, stack_size, action_before) {
        Ok(a) => a,
        Err(e) => {
            print_error(&advise_error_message(&e));
            return;
        }
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_advice(&advice, &mut out) {
        print_error(&e.to_string());
        return;
    }
    record(&advice, log_path);
}

fn cmd_show_range(position: &str) {
    let pos: Position = match position.parse() {
        Ok(p) => p,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };
    let range = position_range(pos);
    println!();
    println!(
        "{}",
        range_grid(
            range,
            &format!("Opening chart: {} ({})", pos.describe(), pos),
        )
    );
    print_section(
        "Coverage",
        &format!(
            "raise {} hands ({:.1}%), call {} hands ({:.1}%)",
            range.raise.len(),
            range_pct(&range.raise),
            range.call.len(),
            range_pct(&range.call),
        ),
    );
    println!();
}
