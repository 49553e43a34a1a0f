use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::{Hand, HandSelector, HandStatus, Outcomes};

/// Почему сплит сейчас невозможен.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitRefusal {
    AlreadySplit,
    NotAPair,
}

/// Игрок за столом: основная рука и, после сплита, вторая.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub main_hand: Hand,
    /// `Some` ровно тогда, когда сплит уже был.
    pub split_hand: Option<Hand>,
    pub status: Outcomes,
    /// Рука, которой игрок сейчас действует.
    pub active: HandSelector,
}

impl Player {
    pub fn new() -> Self {
        Self {
            main_hand: Hand::new(),
            split_hand: None,
            status: Outcomes::new(HandStatus::Waiting),
            active: HandSelector::Main,
        }
    }

    pub fn has_split(&self) -> bool {
        self.split_hand.is_some()
    }

    pub fn active(&self) -> HandSelector {
        self.active
    }

    pub fn hand(&self, selector: HandSelector) -> Option<&Hand> {
        match selector {
            HandSelector::Main => Some(&self.main_hand),
            HandSelector::Split => self.split_hand.as_ref(),
        }
    }

    pub fn hand_value(&self, selector: HandSelector) -> u8 {
        self.hand(selector).map(Hand::value).unwrap_or(0)
    }

    pub fn has_blackjack(&self, selector: HandSelector) -> bool {
        self.hand(selector).is_some_and(Hand::is_blackjack)
    }

    /// В сплит-руку карта идёт, только если сплит уже был.
    pub fn add_card(&mut self, card: Card, selector: HandSelector) {
        match (selector, self.split_hand.as_mut()) {
            (HandSelector::Split, Some(split)) => split.add_card(card),
            _ => self.main_hand.add_card(card),
        }
    }

    /// Ровно две карты одинаковой стоимости в основной руке.
    pub fn can_split(&self) -> bool {
        self.main_hand.is_pair_by_value()
    }

    /// Вторая карта основной руки уходит в новую сплит-руку.
    pub fn split(&mut self) -> Result<(), SplitRefusal> {
        if self.has_split() {
            return Err(SplitRefusal::AlreadySplit);
        }
        if !self.can_split() {
            return Err(SplitRefusal::NotAPair);
        }
        let second = self
            .main_hand
            .cards
            .pop()
            .ok_or(SplitRefusal::NotAPair)?;
        self.split_hand = Some(Hand { cards: vec![second] });
        Ok(())
    }

    pub fn switch_to_split_hand(&mut self) {
        if self.has_split() {
            self.active = HandSelector::Split;
        }
    }

    pub fn status(&self, selector: HandSelector) -> Option<HandStatus> {
        self.status.get(selector)
    }

    /// Статус сплит-руки без сплита игнорируется.
    pub fn set_status(&mut self, selector: HandSelector, status: HandStatus) {
        if selector == HandSelector::Split && !self.has_split() {
            return;
        }
        self.status.set(selector, status);
    }

    /// `Player (13): AS, 2D (playing)`, со второй строкой для сплит-руки.
    pub fn inspect(&self) -> String {
        let mut out = render_line(&self.main_hand, Some(self.status.main));
        if let Some(split) = &self.split_hand {
            out.push('\n');
            out.push_str(&render_line(split, self.status.split));
        }
        out
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

fn render_line(hand: &Hand, status: Option<HandStatus>) -> String {
    let status = status.map(|s| s.to_string()).unwrap_or_default();
    format!("Player ({}): {} ({})", hand.value(), hand, status)
}
