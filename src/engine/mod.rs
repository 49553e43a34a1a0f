//! Движок блэкджека: раздача, ходы игрока, автоигра дилера, итоги.
//!
//! Высокоуровневый объект: `BlackjackEngine`
//! Основные операции:
//!   - `set_deck` / `deal` – колода и начальная раздача
//!   - `hit` / `stand` / `split` / `double_down` – ходы игрока
//!   - `inspect_*` – текстовое состояние колоды, игрока, дилера, ошибки

pub mod config;
pub mod dealer_play;
pub mod errors;
pub mod game_loop;
pub mod hand_history;

pub use config::EngineConfig;
pub use errors::{GameError, PlayerMove};
pub use game_loop::BlackjackEngine;
pub use hand_history::{RoundEvent, RoundEventKind, RoundHistory};

/// Источник случайности для тасовки колоды. Реализации – в `infra::rng`.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
