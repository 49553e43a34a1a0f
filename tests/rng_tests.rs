use std::collections::HashSet;

use blackjack_engine::domain::{Card, Deck};
use blackjack_engine::engine::BlackjackEngine;
use blackjack_engine::infra::{DeterministicRng, SystemRng};

fn shuffled(seed: u64) -> Deck {
    let mut deck = Deck::default();
    deck.reset(&mut DeterministicRng::from_seed(seed));
    deck
}

#[test]
fn same_seed_same_deck() {
    assert_eq!(shuffled(42), shuffled(42));
}

#[test]
fn different_seeds_give_different_orders() {
    assert_ne!(shuffled(1), shuffled(2));
}

#[test]
fn shuffle_keeps_all_52_cards() {
    let deck = shuffled(7);
    assert_eq!(deck.len(), 52);
    assert_ne!(deck, Deck::standard_52());

    let seen: HashSet<Card> = deck.cards.iter().copied().collect();
    let all: HashSet<Card> = Deck::standard_52().cards.iter().copied().collect();
    assert_eq!(seen, all);
}

#[test]
fn system_rng_preserves_cards() {
    let mut deck = Deck::standard_52();
    deck.shuffle(&mut SystemRng);

    let mut sorted: Vec<Card> = deck.cards.iter().copied().collect();
    let mut expected: Vec<Card> = Deck::standard_52().cards.into_iter().collect();
    sorted.sort_by_key(|c| (c.suit as u8, c.rank));
    expected.sort_by_key(|c| (c.suit as u8, c.rank));
    assert_eq!(sorted, expected);
}

/// Два движка с одним seed играют одинаковые раунды.
#[test]
fn seeded_engines_replay_identically() {
    let mut a = BlackjackEngine::with_rng(DeterministicRng::from_seed(2024));
    let mut b = BlackjackEngine::with_rng(DeterministicRng::from_seed(2024));

    for engine in [&mut a, &mut b] {
        engine.set_deck(Vec::new());
        engine.deal(Vec::new());
        engine.hit();
    }

    assert_eq!(a.inspect_player(), b.inspect_player());
    assert_eq!(a.inspect_dealer(), b.inspect_dealer());
    assert_eq!(a.deck(), b.deck());
}
