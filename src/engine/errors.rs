use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ход игрока, для которого не хватило карт.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerMove {
    Hit,
    DoubleDown,
}

impl fmt::Display for PlayerMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerMove::Hit => f.write_str("hit"),
            PlayerMove::DoubleDown => f.write_str("double down"),
        }
    }
}

/// Ошибки игрового состояния. Не пробрасываются наружу: движок запоминает
/// последнюю и отдаёт её через `inspect error`.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameError {
    #[error("The deck is empty and thus cards cannot be dealt.")]
    EmptyDeck,

    #[error("The deck is empty, cannot {0}.")]
    DeckExhausted(PlayerMove),

    #[error("Not enough cards to deal.")]
    InsufficientCards,

    #[error("Not enough cards to split.")]
    InsufficientCardsToSplit,

    #[error("Game not set up correctly.")]
    GameNotStarted,

    #[error("Cannot split hand.")]
    CannotSplit,

    #[error("Hand has already been split.")]
    AlreadySplit,

    #[error("Double down is only allowed on the initial hand of two cards.")]
    DoubleDownNotAllowed,
}
