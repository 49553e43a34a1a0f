use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::round::Round;
use crate::engine::config::EngineConfig;
use crate::engine::errors::GameError;
use crate::engine::hand_history::RoundHistory;
use crate::engine::{BlackjackEngine, RandomSource};

/// Снэпшот сессии: всё, что нужно, чтобы восстановить `BlackjackEngine`.
/// RNG в снэпшот не входит – его даёт тот, кто восстанавливает.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub config: EngineConfig,
    pub deck: Option<Deck>,
    pub round: Option<Round>,
    pub last_error: Option<GameError>,
    pub history: RoundHistory,
}

impl GameSnapshot {
    /// Упаковать живой движок в снэпшот.
    pub fn from_engine<R: RandomSource>(engine: &BlackjackEngine<R>) -> Self {
        Self {
            config: engine.config.clone(),
            deck: engine.deck.clone(),
            round: engine.round.clone(),
            last_error: engine.last_error.clone(),
            history: engine.history.clone(),
        }
    }

    /// Развернуть снэпшот обратно в движок с заданным RNG.
    pub fn into_engine<R: RandomSource>(self, rng: R) -> BlackjackEngine<R> {
        BlackjackEngine {
            config: self.config,
            deck: self.deck,
            round: self.round,
            last_error: self.last_error,
            history: self.history,
            rng,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
