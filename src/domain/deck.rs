use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Попытка взять карту из пустой колоды.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("the deck is empty")]
pub struct EmptyDeck;

/// Колода карт. Раздаётся по FIFO: первой уходит карта, добавленная первой.
/// Перемешивание делает вызывающий код через `RandomSource`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: VecDeque<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 2..A, Diamonds 2..A, Clubs 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = VecDeque::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Колода ровно из переданных карт, в том же порядке.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck {
            cards: cards.into(),
        }
    }

    /// Снова 52 стандартные карты, перемешанные.
    pub fn reset<R: RandomSource>(&mut self, rng: &mut R) {
        *self = Self::standard_52();
        self.shuffle(rng);
    }

    /// Заменить содержимое колоды.
    pub fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards.into();
    }

    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Взять карту с верха колоды.
    pub fn deal(&mut self) -> Result<Card, EmptyDeck> {
        self.cards.pop_front().ok_or(EmptyDeck)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("Deck: (empty)");
        }
        f.write_str("Deck: ")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
