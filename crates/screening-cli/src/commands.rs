//! Console commands and how they drive the session.

use std::str::FromStr;

use screening_core::models::instrument::{Axis, InstrumentId};
use screening_session::assessment::Assessment;
use screening_session::error::SessionError;

pub const HELP: &str = "\
commands:
  faq | npi | gds | cdr     choose an instrument
  start | back              begin the chosen instrument / return to the list
  <n>                       pick option n for the current question
  freq <n> | sev <n>        pick frequency / severity option n (NPI)
  next | prev               move between questions
  submit                    complete the instrument
  predict                   request the assessment once all four are done
  restart                   start a new assessment after a result
  status | help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(InstrumentId),
    Start,
    Back,
    /// Zero-based option index, with the axis for dual-axis domains.
    Answer { axis: Option<Axis>, option: usize },
    Next,
    Previous,
    Submit,
    Predict,
    Restart,
    Status,
    Help,
    Quit,
}

fn option_index(word: &str) -> eyre::Result<usize> {
    match word.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(eyre::eyre!("expected an option number, got '{word}'")),
    }
}

impl FromStr for Command {
    type Err = eyre::Report;

    fn from_str(line: &str) -> eyre::Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            ["start"] => Command::Start,
            ["back"] => Command::Back,
            ["next" | "n"] => Command::Next,
            ["prev" | "previous" | "p"] => Command::Previous,
            ["submit"] => Command::Submit,
            ["predict"] => Command::Predict,
            ["restart"] => Command::Restart,
            ["status"] | [] => Command::Status,
            ["help" | "?"] => Command::Help,
            ["quit" | "exit" | "q"] => Command::Quit,
            ["select", name] => Command::Select(name.parse()?),
            [axis, n] => Command::Answer {
                axis: Some(axis.parse()?),
                option: option_index(n)?,
            },
            [word] => match word.parse::<InstrumentId>() {
                Ok(id) => Command::Select(id),
                Err(_) => Command::Answer {
                    axis: None,
                    option: option_index(word)?,
                },
            },
            _ => return Err(eyre::eyre!("unrecognised command: {line}")),
        };
        Ok(command)
    }
}

/// What the console should do after a command was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Redraw the current screen.
    Render,
    /// Show a short notice, then redraw.
    Notice(String),
    /// Kick off the scoring request.
    Predict,
    Help,
    Quit,
}

/// Apply a synchronous command. Prediction is only signalled here; the
/// caller runs it so the console stays usable while it is in flight.
pub fn apply(assessment: &mut Assessment, command: Command) -> Result<Effect, SessionError> {
    let refused = |what: &str| Effect::Notice(format!("{what} is not available right now"));

    let effect = match command {
        Command::Select(id) if assessment.is_completed(id) => {
            Effect::Notice(format!("{id} is already complete"))
        }
        Command::Select(id) => {
            if assessment.select(id) {
                Effect::Render
            } else {
                refused("selecting an instrument")
            }
        }
        Command::Start => {
            if assessment.start() {
                Effect::Render
            } else {
                refused("start")
            }
        }
        Command::Back => {
            if assessment.back() {
                Effect::Render
            } else {
                refused("back")
            }
        }
        Command::Answer { axis, option } => {
            assessment.answer_option(axis, option)?;
            Effect::Render
        }
        Command::Next if assessment.on_last_question() => {
            Effect::Notice("this is the last question: submit to complete".to_string())
        }
        Command::Next => {
            if assessment.next() {
                Effect::Render
            } else {
                Effect::Notice("answer this question before moving on".to_string())
            }
        }
        Command::Previous => {
            if assessment.previous() {
                Effect::Render
            } else {
                refused("previous")
            }
        }
        Command::Submit => {
            if assessment.submit() {
                Effect::Render
            } else {
                Effect::Notice("every question must be answered before submitting".to_string())
            }
        }
        Command::Predict if assessment.is_predicting() => {
            Effect::Notice("processing…".to_string())
        }
        Command::Predict if assessment.can_predict() => Effect::Predict,
        Command::Predict => refused("predict"),
        Command::Restart => {
            if assessment.restart() {
                Effect::Render
            } else {
                refused("restart")
            }
        }
        Command::Status => Effect::Render,
        Command::Help => Effect::Help,
        Command::Quit => Effect::Quit,
    };
    Ok(effect)
}
