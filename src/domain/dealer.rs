use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::{Hand, HandSelector, HandStatus, Outcomes};

/// Дилер: одна рука, но два исхода – против основной руки игрока
/// и против его сплит-руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dealer {
    pub hand: Hand,
    pub status: Outcomes,
}

impl Dealer {
    pub fn new() -> Self {
        Self {
            hand: Hand::new(),
            status: Outcomes::new(HandStatus::Waiting),
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub fn hand_value(&self) -> u8 {
        self.hand.value()
    }

    pub fn is_soft(&self) -> bool {
        self.hand.is_soft()
    }

    pub fn has_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    pub fn status(&self) -> HandStatus {
        self.status.main
    }

    pub fn split_status(&self) -> Option<HandStatus> {
        self.status.split
    }

    pub fn set_status(&mut self, status: HandStatus) {
        self.status.main = status;
    }

    pub fn set_split_status(&mut self, status: HandStatus) {
        self.status.split = Some(status);
    }

    /// Выставить обе дорожки сразу.
    pub fn set_both(&mut self, status: HandStatus) {
        self.set_status(status);
        self.set_split_status(status);
    }

    pub fn set_track_status(&mut self, selector: HandSelector, status: HandStatus) {
        self.status.set(selector, status);
    }

    /// Закрытая карта остаётся закрытой, пока хоть одна нужная дорожка в `waiting`.
    pub fn is_hole_card_hidden(&self, player_has_split: bool) -> bool {
        self.status.main == HandStatus::Waiting
            || (player_has_split && self.status.split == Some(HandStatus::Waiting))
    }

    /// `Dealer (? + 10): ?, KH (waiting)` пока игра идёт,
    /// `Dealer (20): QS, KH (won[, lost])` после.
    pub fn inspect(&self, player_has_split: bool) -> String {
        let mut out = String::from("Dealer (");

        if self.is_hole_card_hidden(player_has_split) {
            match self.hand.cards.get(1) {
                Some(up) => out.push_str(&format!("? + {}): ?, {}", up.value(), up)),
                None => out.push_str("? + ?): ?"),
            }
        } else {
            out.push_str(&format!("{}): {}", self.hand.value(), self.hand));
        }

        out.push_str(&format!(" ({}", self.status.main));
        if player_has_split {
            let split = self.status.split.map(|s| s.to_string()).unwrap_or_default();
            out.push_str(&format!(", {split}"));
        }
        out.push(')');
        out
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}
