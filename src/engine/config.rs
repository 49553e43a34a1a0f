use serde::{Deserialize, Serialize};

/// Правила стола, которые движок позволяет менять.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Дилер добирает, пока у него меньше этого значения.
    pub dealer_stands_on: u8,
    /// Добирает ли дилер на мягких 17.
    pub dealer_hits_soft_17: bool,
    /// Минимум карт в колоде для начальной раздачи. Значения меньше 4
    /// не действуют: раздача всегда требует четыре карты.
    pub min_cards_to_deal: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            dealer_hits_soft_17: false,
            min_cards_to_deal: 4,
        }
    }
}

impl EngineConfig {
    /// Вариант "dealer hits soft 17".
    pub fn hits_soft_17() -> Self {
        Self {
            dealer_hits_soft_17: true,
            ..Self::default()
        }
    }
}
