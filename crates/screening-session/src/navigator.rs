//! Cursor over the active instrument's question list.

use screening_core::models::answer::AnswerSet;
use screening_core::models::instrument::InstrumentId;
use screening_instruments::questions::QuestionDescriptor;
use screening_instruments::{instrument, validator};

use crate::progress::Progress;

/// Tracks which instrument is open, whether its questions have been started,
/// and the current question index.
///
/// The cursor is always `0` when no instrument is active and otherwise stays
/// within `0..question_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    active: Option<InstrumentId>,
    cursor: usize,
    started: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<InstrumentId> {
        self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Open `id` on its intro view.
    pub fn select(&mut self, id: InstrumentId) {
        self.active = Some(id);
        self.cursor = 0;
        self.started = false;
    }

    /// Leave the intro view and show the first question.
    pub fn start(&mut self) {
        if self.active.is_some() {
            self.started = true;
            self.cursor = 0;
        }
    }

    /// Close the active instrument.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn question_count(&self) -> usize {
        self.active
            .map(|id| instrument(id).question_count())
            .unwrap_or(0)
    }

    pub fn current_question(&self) -> Option<&'static QuestionDescriptor> {
        if !self.started {
            return None;
        }
        instrument(self.active?).questions().get(self.cursor)
    }

    pub fn is_last_question(&self) -> bool {
        self.started && self.cursor + 1 == self.question_count()
    }

    pub fn can_go_next(&self, answers: &AnswerSet) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        self.started
            && self.cursor + 1 < self.question_count()
            && validator::is_question_answered(instrument(id), answers, self.cursor)
    }

    pub fn can_go_previous(&self) -> bool {
        self.started && self.cursor > 0
    }

    /// Advance one question. No-op unless the current question is answered
    /// and is not the last one.
    pub fn next(&mut self, answers: &AnswerSet) -> bool {
        if !self.can_go_next(answers) {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Step back one question. No-op on the first question.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn progress(&self, answers: &AnswerSet) -> Option<Progress> {
        let definition = instrument(self.active?);
        Some(Progress::new(
            definition.answered_count(answers),
            definition.question_count(),
        ))
    }

    /// Every question of the active instrument is answered.
    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        self.active
            .is_some_and(|id| instrument(id).is_complete(answers))
    }
}
