use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::errors::CommandError;
use crate::engine::{BlackjackEngine, RandomSource};

/// Что можно посмотреть командой `inspect`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InspectTarget {
    Deck,
    Player,
    Dealer,
    Error,
}

impl FromStr for InspectTarget {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deck" => Ok(InspectTarget::Deck),
            "player" => Ok(InspectTarget::Player),
            "dealer" => Ok(InspectTarget::Dealer),
            "error" => Ok(InspectTarget::Error),
            other => Err(CommandError::UnknownInspectTarget(other.to_string())),
        }
    }
}

impl fmt::Display for InspectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InspectTarget::Deck => "deck",
            InspectTarget::Player => "player",
            InspectTarget::Dealer => "dealer",
            InspectTarget::Error => "error",
        };
        f.write_str(s)
    }
}

/// Текстовое состояние выбранной части сессии. Ничего не меняет,
/// последнюю ошибку не сбрасывает.
pub fn inspect<R: RandomSource>(engine: &BlackjackEngine<R>, target: InspectTarget) -> String {
    match target {
        InspectTarget::Deck => engine.inspect_deck(),
        InspectTarget::Player => engine.inspect_player(),
        InspectTarget::Dealer => engine.inspect_dealer(),
        InspectTarget::Error => engine.inspect_error(),
    }
}
