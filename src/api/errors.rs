use thiserror::Error;

use crate::domain::card::CardParseError;

/// Ошибки входной команды. В отличие от `GameError` они прерывают команду:
/// это ошибка интеграции, а не ход игры.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid card token: {0}")]
    InvalidCardToken(#[from] CardParseError),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("command `{command}` expects {expected} argument(s), got {got}")]
    WrongArity {
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("command `{0}` expects atom arguments")]
    ExpectedAtom(String),

    #[error("command `{0}` expects sub-command arguments")]
    ExpectedCommand(String),

    #[error("unknown inspect target `{0}`")]
    UnknownInspectTarget(String),
}
