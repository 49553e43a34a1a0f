//! Внешний API движка.
//!
//! Здесь описываются:
//! - команды (commands.rs) – сырая команда от парсера, типизированная `Command`, диспетчер;
//! - запросы (queries.rs) – `inspect`, только чтение;
//! - ошибки (errors.rs) – ошибки входных данных, прерывающие команду.

pub mod commands;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use errors::*;
pub use queries::*;
