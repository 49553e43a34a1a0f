use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Максимум очков до перебора.
pub const BLACKJACK: u8 = 21;

/// Очки руки: тузы сначала по 11, затем понижаются до 1 (по одному на туз),
/// пока сумма больше 21.
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut total: u32 = 0;
    let mut soft_aces = 0u32;

    for card in cards {
        if card.is_ace() {
            soft_aces += 1;
        }
        total += u32::from(card.value());
    }

    while total > u32::from(BLACKJACK) && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    total.min(u32::from(u8::MAX)) as u8
}

/// Есть ли в руке туз, который всё ещё считается за 11.
pub fn is_soft_hand(cards: &[Card]) -> bool {
    let hard: u32 = cards
        .iter()
        .map(|c| if c.is_ace() { 1 } else { u32::from(c.value()) })
        .sum();
    cards.iter().any(Card::is_ace) && hard + 10 == u32::from(hand_value(cards))
}

pub fn is_busted(cards: &[Card]) -> bool {
    hand_value(cards) > BLACKJACK
}

/// Блэкджек – ровно две карты на 21.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) == BLACKJACK
}

/// Статус руки (или дорожки дилера против этой руки).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HandStatus {
    /// Ход ещё не дошёл до этой руки / дилер ждёт.
    Waiting,
    /// Игрок действует этой рукой.
    Playing,
    /// Перебор.
    Busted,
    Won,
    Lost,
    Tied,
    /// Игрок остановился, сравнения с дилером ещё не было.
    Resolved,
}

impl HandStatus {
    /// Статус, который получает дилер, когда рука игрока закончилась с `self`.
    pub fn mirrored(self) -> HandStatus {
        match self {
            HandStatus::Won => HandStatus::Lost,
            HandStatus::Lost | HandStatus::Busted => HandStatus::Won,
            other => other,
        }
    }
}

impl fmt::Display for HandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandStatus::Waiting => "waiting",
            HandStatus::Playing => "playing",
            HandStatus::Busted => "busted",
            HandStatus::Won => "won",
            HandStatus::Lost => "lost",
            HandStatus::Tied => "tied",
            HandStatus::Resolved => "resolved",
        };
        f.write_str(s)
    }
}

/// Какая из рук игрока имеется в виду.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HandSelector {
    Main,
    Split,
}

/// Исходы по двум дорожкам: основная рука и (после сплита) вторая.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outcomes {
    pub main: HandStatus,
    pub split: Option<HandStatus>,
}

impl Outcomes {
    pub fn new(main: HandStatus) -> Self {
        Self { main, split: None }
    }

    pub fn get(&self, selector: HandSelector) -> Option<HandStatus> {
        match selector {
            HandSelector::Main => Some(self.main),
            HandSelector::Split => self.split,
        }
    }

    pub fn set(&mut self, selector: HandSelector, status: HandStatus) {
        match selector {
            HandSelector::Main => self.main = status,
            HandSelector::Split => self.split = Some(status),
        }
    }
}

/// Рука – упорядоченный набор карт.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Две карты одинаковой стоимости (10 и K тоже подходят).
    pub fn is_pair_by_value(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.value() == b.value())
    }
}

impl fmt::Display for Hand {
    /// Карты через запятую: `AS, 10H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
