use serde::{Deserialize, Serialize};

use crate::domain::dealer::Dealer;
use crate::domain::player::Player;

/// Текущий раунд: игрок и дилер. Каждая новая раздача создаёт новый раунд.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub player: Player,
    pub dealer: Dealer,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }
}
