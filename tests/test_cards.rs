use holdem_advisor::cards::*;
use holdem_advisor::error::AdvisorError;

#[test]
fn test_card_creation() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.rank, Rank::Ace);
    assert_eq!(c.suit, Suit::Spades);
}

#[test]
fn test_invalid_rank() {
    assert!(matches!(Rank::from_char('X'), Err(AdvisorError::InvalidRank('X'))));
    assert!(Rank::from_char('1').is_err());
}

#[test]
fn test_invalid_suit() {
    assert!(matches!(Suit::from_char('x'), Err(AdvisorError::InvalidSuit('x'))));
}

#[test]
fn test_rank_case_insensitive() {
    assert_eq!(Rank::from_char('a').unwrap(), Rank::Ace);
    assert_eq!(Rank::from_char('t').unwrap(), Rank::Ten);
}

#[test]
fn test_rank_values() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::King.value(), 13);
    assert!(Rank::Ace > Rank::King);
}

#[test]
fn test_card_str() {
    let c = Card::new(Rank::King, Suit::Diamonds);
    assert_eq!(format!("{}", c), "Kd");
}

#[test]
fn test_card_pretty() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.pretty(), "A\u{2660}");
}

#[test]
fn test_parse_card() {
    let c = parse_card("Ah").unwrap();
    assert_eq!(c, Card::new(Rank::Ace, Suit::Hearts));
    let c = parse_card(" tC ").unwrap();
    assert_eq!(c, Card::new(Rank::Ten, Suit::Clubs));
}

#[test]
fn test_parse_card_wrong_length() {
    assert!(matches!(
        parse_card("10h"),
        Err(AdvisorError::InvalidCardNotation(_))
    ));
    assert!(parse_card("A").is_err());
}

#[test]
fn test_ranks_desc_order() {
    assert_eq!(RANKS_DESC.len(), 13);
    assert_eq!(RANKS_DESC[0], Rank::Ace);
    assert_eq!(RANKS_DESC[12], Rank::Two);
    assert!(RANKS_DESC.windows(2).all(|w| w[0] > w[1]));
}
