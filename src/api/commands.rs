use serde::{Deserialize, Serialize};

use crate::api::errors::CommandError;
use crate::api::queries::{inspect, InspectTarget};
use crate::domain::card::{parse_cards, Card};
use crate::engine::{BlackjackEngine, RandomSource};

/// Команда в том виде, в каком её отдаёт внешний парсер: имя и аргументы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawCommand {
    pub name: String,
    pub args: Vec<RawArg>,
}

/// Аргумент сырой команды: атом (`AS`, `player`) или вложенная команда (для `do`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RawArg {
    Atom(String),
    Call(RawCommand),
}

impl RawCommand {
    pub fn new(name: impl Into<String>, args: Vec<RawArg>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Команда только с атомами: `RawCommand::atoms("deal", &["AS", "KH"])`.
    pub fn atoms(name: impl Into<String>, atoms: &[&str]) -> Self {
        Self::new(
            name,
            atoms.iter().map(|a| RawArg::Atom((*a).to_string())).collect(),
        )
    }
}

/// Типизированная команда движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Выполнить подкоманды по порядку.
    Do(Vec<Command>),
    /// Задать колоду (пусто – стандартная перемешанная).
    Deck(Vec<Card>),
    /// Раздать, опционально заменив колоду.
    Deal(Vec<Card>),
    Hit,
    Stand,
    Split,
    DoubleDown,
    Inspect(InspectTarget),
}

impl Command {
    /// Проверить и типизировать сырую команду.
    pub fn parse(raw: &RawCommand) -> Result<Command, CommandError> {
        let name = raw.name.as_str();
        match name {
            "do" => raw
                .args
                .iter()
                .map(|arg| match arg {
                    RawArg::Call(sub) => Command::parse(sub),
                    RawArg::Atom(_) => Err(CommandError::ExpectedCommand(name.to_string())),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Command::Do),
            "deck" => Ok(Command::Deck(parse_cards(&atoms(raw)?)?)),
            "deal" => Ok(Command::Deal(parse_cards(&atoms(raw)?)?)),
            "hit" => no_args(raw, Command::Hit),
            "stand" => no_args(raw, Command::Stand),
            "split" => no_args(raw, Command::Split),
            "double-down" | "doubleDown" => no_args(raw, Command::DoubleDown),
            "inspect" => {
                let args = atoms(raw)?;
                match args.as_slice() {
                    [target] => Ok(Command::Inspect(target.parse()?)),
                    _ => Err(CommandError::WrongArity {
                        command: name.to_string(),
                        expected: 1,
                        got: args.len(),
                    }),
                }
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn atoms(raw: &RawCommand) -> Result<Vec<&str>, CommandError> {
    raw.args
        .iter()
        .map(|arg| match arg {
            RawArg::Atom(atom) => Ok(atom.as_str()),
            RawArg::Call(_) => Err(CommandError::ExpectedAtom(raw.name.clone())),
        })
        .collect()
}

fn no_args(raw: &RawCommand, command: Command) -> Result<Command, CommandError> {
    if raw.args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::WrongArity {
            command: raw.name.clone(),
            expected: 0,
            got: raw.args.len(),
        })
    }
}

/// Выполнить типизированную команду. Игровые ошибки не возвращаются как `Err` –
/// они записываются в движок и видны через `inspect error`.
pub fn execute<R: RandomSource>(engine: &mut BlackjackEngine<R>, command: &Command) -> String {
    match command {
        Command::Do(commands) => commands
            .iter()
            .map(|c| execute(engine, c))
            .filter(|out| !out.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Deck(cards) => engine.set_deck(cards.clone()),
        Command::Deal(cards) => engine.deal(cards.clone()),
        Command::Hit => engine.hit(),
        Command::Stand => engine.stand(),
        Command::Split => engine.split(),
        Command::DoubleDown => engine.double_down(),
        Command::Inspect(target) => inspect(engine, *target),
    }
}

/// Разобрать и выполнить сырую команду. Ошибка разбора прерывает всю команду
/// (включая все подкоманды `do`) до того, как движок что-либо изменит.
pub fn execute_raw<R: RandomSource>(
    engine: &mut BlackjackEngine<R>,
    raw: &RawCommand,
) -> Result<String, CommandError> {
    let command = Command::parse(raw)?;
    log::debug!("executing {command:?}");
    Ok(execute(engine, &command))
}
