//! Maps terminal lines to controller messages.
//!
//! A line starting with `/` is a command; anything else is typed into the
//! question input followed by Enter. Command arguments are taken verbatim
//! after the single separating space.

use qa_core::{Msg, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Command {
    let Some(command) = line.strip_prefix('/') else {
        if line.is_empty() {
            return Command::Dispatch(Vec::new());
        }
        return Command::Dispatch(vec![
            Msg::QuestionInputChanged(line.to_string()),
            Msg::EnterPressed(Phase::Question),
        ]);
    };

    let (word, argument) = match command.split_once(' ') {
        Some((word, argument)) => (word, argument),
        None => (command, ""),
    };

    match word {
        "analyze" | "topic" => Command::Dispatch(vec![
            Msg::ContextInputChanged(argument.to_string()),
            Msg::ContextSubmitted,
        ]),
        "ask" => Command::Dispatch(vec![
            Msg::QuestionInputChanged(argument.to_string()),
            Msg::QuestionSubmitted,
        ]),
        "context" => Command::Dispatch(vec![Msg::ContextInputChanged(argument.to_string())]),
        "question" => Command::Dispatch(vec![Msg::QuestionInputChanged(argument.to_string())]),
        "submit" => Command::Dispatch(vec![Msg::EnterPressed(Phase::Context)]),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}
