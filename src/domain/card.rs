use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
    Spades,   // ♠
}

impl Suit {
    /// Порядок мастей в стандартной колоде.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

/// Ранг карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Очки ранга в блэкджеке. Туз всегда 11 – понижение до 1 делает подсчёт руки.
    pub const fn value(self) -> u8 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            r => r as u8,
        }
    }
}

/// Карта из стандартной 52-карточной колоды.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }
}

/// Ошибка разбора токена карты ("10H", "AS").
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("card token `{0}` is too short, expected <RANK><SUIT>")]
    TooShort(String),

    #[error("invalid rank `{rank}` in card token `{token}`")]
    InvalidRank { token: String, rank: String },

    #[error("invalid suit `{suit}` in card token `{token}`")]
    InvalidSuit { token: String, suit: char },
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("J"),
            Rank::Queen => f.write_str("Q"),
            Rank::King => f.write_str("K"),
            Rank::Ace => f.write_str("A"),
            r => write!(f, "{}", *r as u8),
        }
    }
}

impl fmt::Display for Card {
    /// Формат вида `10H`, `AS`, `7C`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Rank {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(()),
        };
        Ok(rank)
    }
}

/// Парсинг токена вида "10H", "AS" (только верхний регистр).
/// Масть – последний символ, ранг – всё, что перед ней.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_ch = match chars.next_back() {
            Some(ch) if !chars.as_str().is_empty() => ch,
            _ => return Err(CardParseError::TooShort(s.to_string())),
        };
        let rank_str = chars.as_str();

        let rank = rank_str
            .parse::<Rank>()
            .map_err(|_| CardParseError::InvalidRank {
                token: s.to_string(),
                rank: rank_str.to_string(),
            })?;

        let suit = match suit_ch {
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            'S' => Suit::Spades,
            _ => {
                return Err(CardParseError::InvalidSuit {
                    token: s.to_string(),
                    suit: suit_ch,
                })
            }
        };

        Ok(Card { rank, suit })
    }
}

/// Разобрать список токенов целиком: либо все карты, либо первая ошибка.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, CardParseError> {
    tokens.iter().map(|t| t.as_ref().parse::<Card>()).collect()
}
