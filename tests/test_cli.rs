use holdem_advisor::cli::*;
use holdem_advisor::math_engine::{evaluate_outs, Method};

fn report_text(method: Method, outs: u32, cards: u32, pot: f64, call: f64) -> String {
    let report = evaluate_outs(method, outs, cards, 5, pot, call).unwrap();
    let mut out = Vec::new();
    write_outs_report(&report, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_report_basic_rows() {
    let text = report_text(Method::RuleOf2And4, 9, 2, 0.0, 0.0);
    assert!(text.contains("Poker CLI Results"));
    assert!(text.contains("36.00%"));
    assert!(text.contains("1.78:1"));
    assert!(text.contains("rule_of_2_4"));
}

#[test]
fn test_report_without_call() {
    let text = report_text(Method::RuleOf2And4, 9, 2, 100.0, 0.0);
    assert!(text.contains("No call amount specified"));
    assert!(!text.contains("Pot Odds"));
}

#[test]
fn test_report_favorable() {
    let text = report_text(Method::RuleOf2And4, 9, 2, 100.0, 20.0);
    assert!(text.contains("Pot Odds"));
    assert!(text.contains("6.00:1"));
    assert!(text.contains("profitable call"));
    assert!(!text.contains("NOT favorable"));
}

#[test]
fn test_report_unfavorable() {
    let text = report_text(Method::RuleOf2And4, 4, 1, 20.0, 20.0);
    assert!(text.contains("NOT favorable"));
    assert!(!text.contains("profitable call"));
}

#[test]
fn test_favorable_message_iff_pot_odds_cover() {
    for outs in [1, 4, 8, 9, 12, 15] {
        for cards in [1, 2] {
            for (pot, call) in [(10.0, 10.0), (50.0, 10.0), (100.0, 25.0), (300.0, 10.0)] {
                for method in [Method::RuleOf2And4, Method::Exact] {
                    let report = evaluate_outs(method, outs, cards, 5, pot, call).unwrap();
                    let cmp = report.pot.clone().unwrap();
                    let mut out = Vec::new();
                    write_outs_report(&report, &mut out).unwrap();
                    let text = String::from_utf8(out).unwrap();
                    assert_eq!(
                        text.contains("profitable call"),
                        cmp.pot_odds >= report.odds_against,
                        "{} outs, {} cards, pot {} call {}",
                        outs,
                        cards,
                        pot,
                        call
                    );
                }
            }
        }
    }
}

#[test]
fn test_zero_outs_shows_infinite_odds() {
    let text = report_text(Method::Exact, 0, 2, 100.0, 10.0);
    assert!(text.contains("0.00%"));
    assert!(text.contains("\u{221e}:1"));
    assert!(text.contains("NOT favorable"));
}

#[test]
fn test_run_outs_with_args() {
    run_outs_with_args(
        ["outs", "--outs", "9", "--cards_left_to_see", "1", "--pot_size", "50", "--call_amount", "10"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    run_outs_with_args(
        ["outs", "--outs", "8", "--method", "exact", "--visible_cards", "6"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
}

#[test]
fn test_run_preflop_with_args() {
    run_preflop_with_args(
        ["preflop", "--cards", "Ah Kc", "--position", "lp", "--stack_size", "35", "--action_before", "raise"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    // unparseable cards print an error and return
    run_preflop_with_args(
        ["preflop", "--cards", "nonsense"].iter().map(|s| s.to_string()).collect(),
    );
}

#[test]
fn test_run_preflop_logs_to_file() {
    let dir = std::env::temp_dir().join(format!("holdem_cli_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("cli.csv");
    run_preflop_with_args(vec![
        "preflop".to_string(),
        "--cards".to_string(),
        "Js Ts".to_string(),
        "--position".to_string(),
        "mp".to_string(),
        "--log".to_string(),
        path.display().to_string(),
    ]);
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.lines().nth(1).unwrap().contains(",Js Ts,JTs,mp,100,none,raise,"));
}

#[test]
fn test_run_preflop_unusable_stack_is_not_logged() {
    let dir = std::env::temp_dir().join(format!("holdem_cli_nan_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("cli.csv");
    for stack in ["--stack_size=NaN", "--stack_size=-5"] {
        run_preflop_with_args(vec![
            "preflop".to_string(),
            "--cards".to_string(),
            "Ah Ad".to_string(),
            "--action_before".to_string(),
            "raise".to_string(),
            stack.to_string(),
            "--log".to_string(),
            path.display().to_string(),
        ]);
    }
    assert!(!path.exists());
}

#[test]
fn test_logging_init_twice_is_harmless() {
    holdem_advisor::logging::init(false);
    holdem_advisor::logging::init(true);
}

#[test]
fn test_run_preflop_show_range() {
    run_preflop_with_args(
        ["preflop", "--cards", "2c2d", "--show-range", "--position", "lp"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
}
