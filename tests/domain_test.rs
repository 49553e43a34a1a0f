//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use blackjack_engine::domain::*;
use blackjack_engine::engine::RandomSource;

/// shuffle ничего не делает => колода остаётся в исходном порядке.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

fn cards(tokens: &[&str]) -> Vec<Card> {
    parse_cards(tokens).expect("valid card tokens")
}

fn hand(tokens: &[&str]) -> Hand {
    Hand {
        cards: cards(tokens),
    }
}

/// Card: Display + FromStr.
#[test]
fn card_display_and_parse() {
    let ten_hearts: Card = "10H".parse().unwrap();
    assert_eq!(ten_hearts, Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!(ten_hearts.to_string(), "10H");

    let ace_spades: Card = "AS".parse().unwrap();
    assert_eq!(ace_spades, Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(ace_spades.to_string(), "AS");

    assert_eq!(Card::new(Rank::Queen, Suit::Diamonds).to_string(), "QD");
    assert_eq!(Card::new(Rank::Seven, Suit::Clubs).to_string(), "7C");
}

#[test]
fn card_parse_rejects_bad_tokens() {
    assert!(matches!("".parse::<Card>(), Err(CardParseError::TooShort(_))));
    assert!(matches!("H".parse::<Card>(), Err(CardParseError::TooShort(_))));
    assert!(matches!(
        "1H".parse::<Card>(),
        Err(CardParseError::InvalidRank { .. })
    ));
    assert!(matches!(
        "11S".parse::<Card>(),
        Err(CardParseError::InvalidRank { .. })
    ));
    assert!(matches!(
        "AX".parse::<Card>(),
        Err(CardParseError::InvalidSuit { suit: 'X', .. })
    ));
    // только верхний регистр
    assert!("ah".parse::<Card>().is_err());
    assert!("10".parse::<Card>().is_err());
    assert!("A♠".parse::<Card>().is_err());
}

#[test]
fn parse_cards_stops_on_first_bad_token() {
    let err = parse_cards(&["AS", "ZZ", "KH"]).unwrap_err();
    assert_eq!(
        err,
        CardParseError::InvalidRank {
            token: "ZZ".to_string(),
            rank: "Z".to_string(),
        }
    );
}

#[test]
fn rank_values() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Nine.value(), 9);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 10);
    assert_eq!(Rank::Queen.value(), 10);
    assert_eq!(Rank::King.value(), 10);
    assert_eq!(Rank::Ace.value(), 11);
}

/// Подсчёт очков: тузы понижаются не больше, чем их есть в руке.
#[test]
fn hand_value_with_aces() {
    assert_eq!(hand_value(&cards(&["AS", "AH", "9D"])), 21);
    assert_eq!(hand_value(&cards(&["AS", "AH"])), 12);
    assert_eq!(hand_value(&cards(&["AS", "AH", "AD", "AC"])), 14);
    assert_eq!(hand_value(&cards(&["AS", "6H"])), 17);
    assert_eq!(hand_value(&cards(&["AS", "6H", "9C"])), 16);
    assert_eq!(hand_value(&cards(&["KS", "QH", "5C"])), 25);
    assert_eq!(hand_value(&cards(&["AS", "KH", "QC", "5D"])), 26);
    assert_eq!(hand_value(&[]), 0);
}

#[test]
fn blackjack_is_exactly_two_cards_on_21() {
    assert!(is_blackjack(&cards(&["AS", "KH"])));
    assert!(is_blackjack(&cards(&["10D", "AC"])));
    assert!(!is_blackjack(&cards(&["AS", "5H", "5D"])));
    assert_eq!(hand_value(&cards(&["AS", "5H", "5D"])), 21);
    assert!(!is_blackjack(&cards(&["KS", "QH"])));
}

#[test]
fn soft_and_busted_hands() {
    assert!(is_soft_hand(&cards(&["AS", "6H"])));
    assert!(!is_soft_hand(&cards(&["AS", "6H", "9C"])));
    assert!(!is_soft_hand(&cards(&["KS", "7H"])));
    assert!(is_soft_hand(&cards(&["AS", "AH"])));

    assert!(is_busted(&cards(&["KS", "QH", "2C"])));
    assert!(!is_busted(&cards(&["KS", "AH"])));
}

#[test]
fn hand_display_and_pairs() {
    let h = hand(&["10H", "JS"]);
    assert_eq!(h.to_string(), "10H, JS");
    assert_eq!(h.len(), 2);
    assert!(h.is_pair_by_value());
    assert!(!hand(&["9H", "10S"]).is_pair_by_value());
    assert!(!hand(&["8H", "8S", "8D"]).is_pair_by_value());
}

#[test]
fn status_display_and_mirror() {
    assert_eq!(HandStatus::Waiting.to_string(), "waiting");
    assert_eq!(HandStatus::Resolved.to_string(), "resolved");
    assert_eq!(HandStatus::Won.mirrored(), HandStatus::Lost);
    assert_eq!(HandStatus::Lost.mirrored(), HandStatus::Won);
    assert_eq!(HandStatus::Busted.mirrored(), HandStatus::Won);
    assert_eq!(HandStatus::Tied.mirrored(), HandStatus::Tied);
}

/// Deck: стандартная колода 52 карты, все уникальны.
#[test]
fn deck_standard_52_basic_properties() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);
    assert!(!deck.is_empty());

    let set: HashSet<_> = deck.cards.iter().collect();
    assert_eq!(set.len(), 52);

    // Первая карта – двойка червей, последняя – туз пик.
    assert_eq!(deck.cards.front(), Some(&Card::new(Rank::Two, Suit::Hearts)));
    assert_eq!(deck.cards.back(), Some(&Card::new(Rank::Ace, Suit::Spades)));
}

#[test]
fn deck_reset_repopulates_after_dealing() {
    let mut deck = Deck::from_cards(cards(&["AS", "KH"]));
    deck.reset(&mut DummyRng);
    assert_eq!(deck, Deck::standard_52());
}

#[test]
fn deck_deals_fifo_until_empty() {
    let mut deck = Deck::from_cards(cards(&["AS", "KH", "2D"]));

    assert_eq!(deck.deal(), Ok(Card::new(Rank::Ace, Suit::Spades)));
    assert_eq!(deck.deal(), Ok(Card::new(Rank::King, Suit::Hearts)));
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.deal(), Ok(Card::new(Rank::Two, Suit::Diamonds)));

    assert!(deck.is_empty());
    assert_eq!(deck.deal(), Err(EmptyDeck));
    assert_eq!(deck.len(), 0);
}

#[test]
fn deck_replace_clear_and_display() {
    let mut deck = Deck::standard_52();
    deck.replace(cards(&["AS", "KH", "2D"]));
    assert_eq!(deck.to_string(), "Deck: AS, KH, 2D");

    deck.clear();
    assert!(deck.is_empty());
    assert_eq!(deck.to_string(), "Deck: (empty)");
}

/// Сплит по стоимости, а не по рангу.
#[test]
fn player_split_eligibility() {
    let mut p = Player::new();
    p.main_hand = hand(&["10H", "10S"]);
    assert!(p.can_split());

    p.main_hand = hand(&["10H", "JS"]);
    assert!(p.can_split());

    p.main_hand = hand(&["9H", "10S"]);
    assert!(!p.can_split());
    assert_eq!(p.split(), Err(SplitRefusal::NotAPair));
    assert!(!p.has_split());
}

#[test]
fn player_split_moves_second_card() {
    let mut p = Player::new();
    p.add_card("8H".parse().unwrap(), HandSelector::Main);
    p.add_card("8D".parse().unwrap(), HandSelector::Main);

    assert_eq!(p.split(), Ok(()));
    assert!(p.has_split());
    assert_eq!(p.main_hand, hand(&["8H"]));
    assert_eq!(p.split_hand, Some(hand(&["8D"])));

    p.add_card("3S".parse().unwrap(), HandSelector::Main);
    p.add_card("8S".parse().unwrap(), HandSelector::Split);
    assert_eq!(p.hand_value(HandSelector::Main), 11);
    assert_eq!(p.hand_value(HandSelector::Split), 16);

    // Второй сплит запрещён, даже если снова пара.
    p.main_hand = hand(&["8H", "8C"]);
    assert_eq!(p.split(), Err(SplitRefusal::AlreadySplit));
}

#[test]
fn player_without_split_ignores_split_selector() {
    let mut p = Player::new();
    p.add_card("AS".parse().unwrap(), HandSelector::Split);
    assert_eq!(p.main_hand, hand(&["AS"]));
    assert!(p.hand(HandSelector::Split).is_none());

    p.set_status(HandSelector::Split, HandStatus::Won);
    assert_eq!(p.status(HandSelector::Split), None);

    p.switch_to_split_hand();
    assert_eq!(p.active(), HandSelector::Main);
}

#[test]
fn player_inspect_formats() {
    let mut p = Player::new();
    p.main_hand = hand(&["AS", "2D"]);
    p.set_status(HandSelector::Main, HandStatus::Playing);
    assert_eq!(p.inspect(), "Player (13): AS, 2D (playing)");

    p.main_hand = hand(&["8H", "8D"]);
    p.split().unwrap();
    p.add_card("3S".parse().unwrap(), HandSelector::Main);
    p.add_card("2H".parse().unwrap(), HandSelector::Split);
    p.set_status(HandSelector::Split, HandStatus::Waiting);
    assert_eq!(
        p.inspect(),
        "Player (11): 8H, 3S (playing)\nPlayer (10): 8D, 2H (waiting)"
    );
}

#[test]
fn dealer_hides_hole_card_while_waiting() {
    let mut d = Dealer::new();
    assert_eq!(d.inspect(false), "Dealer (? + ?): ? (waiting)");

    d.add_card("KH".parse().unwrap());
    d.add_card("3C".parse().unwrap());
    assert_eq!(d.inspect(false), "Dealer (? + 3): ?, 3C (waiting)");

    d.set_status(HandStatus::Won);
    assert_eq!(d.inspect(false), "Dealer (13): KH, 3C (won)");

    // Игрок сплитовал, а дорожка сплита ещё ждёт.
    d.set_split_status(HandStatus::Waiting);
    assert_eq!(d.inspect(true), "Dealer (? + 3): ?, 3C (won, waiting)");

    d.set_split_status(HandStatus::Lost);
    assert_eq!(d.inspect(true), "Dealer (13): KH, 3C (won, lost)");
}

#[test]
fn dealer_blackjack_and_tracks() {
    let mut d = Dealer::new();
    d.add_card("AS".parse().unwrap());
    d.add_card("QH".parse().unwrap());
    assert!(d.has_blackjack());
    assert_eq!(d.hand_value(), 21);

    d.set_track_status(HandSelector::Split, HandStatus::Tied);
    assert_eq!(d.split_status(), Some(HandStatus::Tied));
    assert_eq!(d.status(), HandStatus::Waiting);

    d.set_both(HandStatus::Busted);
    assert_eq!(d.status(), HandStatus::Busted);
    assert_eq!(d.split_status(), Some(HandStatus::Busted));
}
