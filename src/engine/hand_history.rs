use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::{HandSelector, HandStatus};

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Начальная раздача: по две карты игроку и дилеру.
    RoundDealt {
        player: Vec<Card>,
        dealer: Vec<Card>,
    },

    /// Игрок получил карту в руку `hand`.
    PlayerDrew { hand: HandSelector, card: Card },

    /// Дилер добрал карту.
    DealerDrew { card: Card, value: u8 },

    /// Основная рука разделена.
    HandSplit { main: Vec<Card>, split: Vec<Card> },

    /// Игрок остановился рукой `hand`.
    PlayerStood { hand: HandSelector },

    /// Дабл: одна карта и рука закрыта.
    DoubledDown { hand: HandSelector, card: Card },

    /// Рука сравнена с дилером.
    HandSettled {
        hand: HandSelector,
        player_value: u8,
        dealer_value: u8,
        status: HandStatus,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история текущего раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &RoundEventKind> {
        self.events.iter().map(|e| &e.kind)
    }
}
