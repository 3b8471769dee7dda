//! Plain-text screens for each phase of the session.

use std::fmt;

use screening_core::models::answer::Answer;
use screening_core::models::instrument::Axis;
use screening_instruments::instrument;
use screening_instruments::questions::{AnswerOption, OptionSet};
use screening_session::assessment::{Assessment, Phase};

const BAR_WIDTH: usize = 20;

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn write_options(
    f: &mut fmt::Formatter<'_>,
    options: &[AnswerOption],
    selected: Option<&str>,
) -> fmt::Result {
    for (i, option) in options.iter().enumerate() {
        let marker = if selected == Some(option.value.as_str()) { '*' } else { ' ' };
        writeln!(f, "  {marker} {}. {}", i + 1, option.label)?;
    }
    Ok(())
}

/// The screen for the assessment's current phase.
pub struct Screen<'a>(pub &'a Assessment);

impl Screen<'_> {
    fn selecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = self.0;
        writeln!(f, "Select a test to take:")?;
        for id in assessment.available_instruments() {
            writeln!(
                f,
                "  {:<4} {} ({}% answered)",
                id.as_str().to_lowercase(),
                instrument(id).name(),
                assessment.progress_of(id).display_percent()
            )?;
        }
        let done: Vec<_> = assessment.completed().iter().map(|id| id.as_str()).collect();
        if !done.is_empty() {
            writeln!(f, "Completed: {}", done.join(", "))?;
        }
        Ok(())
    }

    fn active(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = self.0;
        let Some(view) = assessment.current_question() else {
            return Ok(());
        };
        let definition = instrument(view.instrument);
        let unit = if view.instrument.shape().keyed_by_domain() { "Domain" } else { "Question" };
        if let Some(progress) = assessment.progress() {
            writeln!(
                f,
                "{}  {} {}% Complete",
                definition.name(),
                progress_bar(progress.display_percent()),
                progress.display_percent()
            )?;
        }
        writeln!(f, "{unit} {} of {}", view.position(), view.total)?;
        writeln!(f, "{}", view.question.prompt)?;

        match &view.question.options {
            OptionSet::Single { options } => {
                let selected = view.answer.as_ref().and_then(Answer::as_scalar);
                write_options(f, options, selected)?;
            }
            OptionSet::Axes { frequency, severity } => {
                let pair = view.answer.as_ref().and_then(Answer::as_pair);
                writeln!(f, " Frequency (freq <n>):")?;
                write_options(f, frequency, pair.and_then(|p| p.get(Axis::Frequency)))?;
                writeln!(f, " Severity (sev <n>):")?;
                write_options(f, severity, pair.and_then(|p| p.get(Axis::Severity)))?;
            }
        }

        let mut controls = Vec::new();
        if assessment.can_go_previous() {
            controls.push("prev");
        }
        if assessment.on_last_question() {
            if assessment.can_submit() {
                controls.push("submit");
            }
        } else if assessment.can_go_next() {
            controls.push("next");
        }
        if !controls.is_empty() {
            writeln!(f, "[{}]", controls.join(" | "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = self.0;
        match assessment.phase() {
            Phase::Selecting => self.selecting(f),
            Phase::Intro(id) => {
                let definition = instrument(id);
                writeln!(f, "{}", definition.name())?;
                writeln!(f, "{}", definition.intro())?;
                writeln!(f, "Type 'start' to begin or 'back' to return to the list.")
            }
            Phase::Active(_) => self.active(f),
            Phase::AllComplete => {
                writeln!(f, "All Tests Completed!")?;
                if assessment.is_predicting() {
                    return writeln!(f, "Processing...");
                }
                if let Some(error) = assessment.last_error() {
                    writeln!(f, "The last request did not go through ({error}).")?;
                }
                writeln!(f, "Type 'predict' to generate the assessment.")
            }
            Phase::ResultReady => {
                writeln!(f, "Assessment Result")?;
                if let Some(result) = assessment.result() {
                    writeln!(f, "{}", result.text)?;
                }
                writeln!(f, "Type 'restart' to start a new assessment.")
            }
        }
    }
}

pub fn render(assessment: &Assessment) -> String {
    Screen(assessment).to_string()
}
