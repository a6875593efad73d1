use approx::assert_abs_diff_eq;
use holdem_advisor::math_engine::*;

#[test]
fn test_rule_of_2_and_4_two_cards() {
    assert_eq!(rule_of_2_and_4(9, 2), 0.36);
}

#[test]
fn test_rule_of_2_and_4_one_card() {
    assert_eq!(rule_of_2_and_4(9, 1), 0.18);
}

#[test]
fn test_rule_of_2_and_4_other_count_uses_four() {
    assert_abs_diff_eq!(rule_of_2_and_4(5, 3), 0.20, epsilon = 1e-12);
}

#[test]
fn test_rule_of_2_and_4_capped() {
    assert_eq!(rule_of_2_and_4(30, 2), 1.0);
    assert_eq!(rule_of_2_and_4(0, 2), 0.0);
}

#[test]
fn test_exact_flush_draw_on_flop() {
    // 9 outs, 47 unseen, two cards: 1 - 38/47 * 37/46
    let p = exact_probability_by_outs(9, 2, 5).unwrap();
    let expected = 1.0 - (38.0 / 47.0) * (37.0 / 46.0);
    assert_abs_diff_eq!(p, expected, epsilon = 1e-12);
    assert_abs_diff_eq!(p, 0.3497, epsilon = 1e-3);
}

#[test]
fn test_exact_one_card() {
    let p = exact_probability_by_outs(8, 1, 6).unwrap();
    assert_abs_diff_eq!(p, 8.0 / 46.0, epsilon = 1e-12);
}

#[test]
fn test_exact_rejects_impossible_draw() {
    assert!(exact_probability_by_outs(4, 2, 51).is_err());
    assert!(exact_probability_by_outs(4, 1, 51).is_ok());
}

#[test]
fn test_exact_rejects_overflowing_visible_count() {
    assert!(exact_probability_by_outs(9, 2, u32::MAX).is_err());
    assert!(exact_probability_by_outs(9, 1, u32::MAX - 1).is_err());
}

#[test]
fn test_probabilities_always_clamped() {
    for outs in 0..=60 {
        for cards in 1..=2 {
            let r = rule_of_2_and_4(outs, cards);
            assert!((0.0..=1.0).contains(&r), "rule {} {} -> {}", outs, cards, r);
            for visible in [2, 5, 6, 20, 45] {
                let e = exact_probability_by_outs(outs, cards, visible).unwrap();
                assert!(
                    (0.0..=1.0).contains(&e),
                    "exact {} {} {} -> {}",
                    outs,
                    cards,
                    visible,
                    e
                );
            }
        }
    }
}

#[test]
fn test_win_probability_dispatch() {
    assert_eq!(
        win_probability(Method::RuleOf2And4, 9, 2, 5).unwrap(),
        rule_of_2_and_4(9, 2)
    );
    assert_eq!(
        win_probability(Method::Exact, 9, 2, 5).unwrap(),
        exact_probability_by_outs(9, 2, 5).unwrap()
    );
}

#[test]
fn test_odds_against() {
    assert_abs_diff_eq!(odds_against(0.25), 3.0, epsilon = 1e-12);
    assert_eq!(odds_against(1.0), 0.0);
    assert!(odds_against(0.0).is_infinite());
}

#[test]
fn test_pot_odds_basic() {
    assert_abs_diff_eq!(pot_odds(100.0, 20.0).unwrap(), 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(pot_odds(0.0, 10.0).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_pot_odds_invalid() {
    assert!(pot_odds(100.0, 0.0).is_err());
    assert!(pot_odds(-1.0, 10.0).is_err());
}

#[test]
fn test_break_even_equity() {
    assert_abs_diff_eq!(break_even_equity(100.0, 50.0).unwrap(), 1.0 / 3.0, epsilon = 1e-12);
    assert!(break_even_equity(100.0, 0.0).is_err());
}

#[test]
fn test_call_ev_break_even() {
    let p = break_even_equity(100.0, 50.0).unwrap();
    assert_abs_diff_eq!(call_ev(p, 100.0, 50.0), 0.0, epsilon = 1e-9);
    assert!(call_ev(0.5, 100.0, 50.0) > 0.0);
}

#[test]
fn test_favorable_iff_pot_odds_cover() {
    assert!(is_favorable(3.0, 3.0));
    assert!(is_favorable(4.0, 3.0));
    assert!(!is_favorable(2.9, 3.0));
}

#[test]
fn test_format_ratio() {
    assert_eq!(format_ratio(1.777), "1.78:1");
    assert_eq!(format_ratio(f64::INFINITY), "\u{221e}:1");
}

#[test]
fn test_evaluate_outs_without_call() {
    let r = evaluate_outs(Method::RuleOf2And4, 9, 2, 5, 100.0, 0.0).unwrap();
    assert_eq!(r.win_probability, 0.36);
    assert!(r.pot.is_none());
}

#[test]
fn test_evaluate_outs_with_call() {
    let r = evaluate_outs(Method::RuleOf2And4, 9, 2, 5, 100.0, 20.0).unwrap();
    let pot = r.pot.unwrap();
    assert_abs_diff_eq!(pot.pot_odds, 6.0, epsilon = 1e-12);
    assert!(pot.favorable);

    let r = evaluate_outs(Method::RuleOf2And4, 4, 1, 5, 20.0, 20.0).unwrap();
    assert!(!r.pot.unwrap().favorable);
}

#[test]
fn test_evaluate_outs_propagates_errors() {
    assert!(evaluate_outs(Method::Exact, 9, 2, 52, 10.0, 5.0).is_err());
    assert!(evaluate_outs(Method::RuleOf2And4, 9, 2, 5, -10.0, 5.0).is_err());
}
