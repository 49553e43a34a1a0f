//! Движок правил блэкджека: один игрок против дилера.
//!
//! Слои:
//! - `domain` – карты, колода, подсчёт очков, игрок, дилер;
//! - `engine` – состояние сессии и переходы (deal/hit/stand/split/double-down);
//! - `api` – команды от внешнего парсера и их выполнение;
//! - `infra` – реализации RNG;
//! - `state` – сериализуемый снэпшот сессии.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod state;

pub use api::{execute, execute_raw, Command, CommandError, InspectTarget, RawArg, RawCommand};
pub use engine::{BlackjackEngine, EngineConfig, GameError};
pub use state::GameSnapshot;
