//! The session state machine.
//!
//! Global phases:
//!
//! ```text
//! selecting --select(I)--> intro(I) --start--> active(I) --submit--> selecting
//!     ^                       |                                          |
//!     +--------back-----------+                   (all four complete)    v
//! selecting <--restart-- result_ready <--predict-- all_complete <--------+
//! ```
//!
//! Every transition that is not permitted in the current phase is a no-op
//! returning `false`. Nothing in here reports an incomplete instrument as an
//! error: the `can_*` predicates exist so the caller can disable controls.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use screening_core::models::answer::{Answer, AnswerSet};
use screening_core::models::instrument::{AnswerShape, Axis, InstrumentId};
use screening_core::models::scoring::{ScoringRequest, ScoringResponse};
use screening_core::models::store::AnswerStore;
use screening_instruments::error::InstrumentError;
use screening_instruments::instrument;
use screening_instruments::questions::QuestionDescriptor;

use crate::error::{ScoringError, SessionError};
use crate::navigator::Navigator;
use crate::progress::Progress;
use crate::requester::{Prediction, ResultRequester};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "phase", content = "instrument", rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    /// No instrument open and at least one still to do.
    Selecting,
    /// Instrument chosen, intro shown, questions not yet started.
    Intro(InstrumentId),
    /// Answering questions.
    Active(InstrumentId),
    /// All four instruments submitted; prediction may be requested.
    AllComplete,
    /// The scoring service has answered.
    ResultReady,
}

/// What a UI needs to render the current question.
#[derive(Debug, Clone)]
pub struct QuestionView {
    pub instrument: InstrumentId,
    /// Zero-based cursor.
    pub index: usize,
    pub total: usize,
    pub question: &'static QuestionDescriptor,
    pub answer: Option<Answer>,
}

impl QuestionView {
    /// 1-based position, as in "Question 3 of 10".
    pub fn position(&self) -> usize {
        self.index + 1
    }
}

/// One user's run through the four instruments.
#[derive(Debug, Clone)]
pub struct Assessment {
    id: Uuid,
    created_at: jiff::Timestamp,
    answers: AnswerStore,
    completed: BTreeSet<InstrumentId>,
    navigator: Navigator,
    requester: ResultRequester,
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new()
    }
}

impl Assessment {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: jiff::Timestamp::now(),
            answers: AnswerStore::new(),
            completed: BTreeSet::new(),
            navigator: Navigator::new(),
            requester: ResultRequester::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> jiff::Timestamp {
        self.created_at
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn completed(&self) -> &BTreeSet<InstrumentId> {
        &self.completed
    }

    pub fn is_completed(&self, id: InstrumentId) -> bool {
        self.completed.contains(&id)
    }

    pub fn active_instrument(&self) -> Option<InstrumentId> {
        self.navigator.active()
    }

    pub fn cursor(&self) -> usize {
        self.navigator.cursor()
    }

    pub fn phase(&self) -> Phase {
        if self.requester.result().is_some() {
            return Phase::ResultReady;
        }
        match self.navigator.active() {
            Some(id) if self.navigator.started() => Phase::Active(id),
            Some(id) => Phase::Intro(id),
            None if self.completed.len() == InstrumentId::ALL.len() => Phase::AllComplete,
            None => Phase::Selecting,
        }
    }

    /// Instruments still offered for selection, in catalog order.
    pub fn available_instruments(&self) -> Vec<InstrumentId> {
        InstrumentId::ALL
            .into_iter()
            .filter(|id| !self.completed.contains(id))
            .collect()
    }

    // ── Selection ────────────────────────────────────────────────────────────

    pub fn select(&mut self, id: InstrumentId) -> bool {
        if self.phase() != Phase::Selecting || self.completed.contains(&id) {
            return false;
        }
        self.navigator.select(id);
        info!(session_id = %self.id, instrument = %id, "instrument selected");
        true
    }

    /// Return from the intro view to the selection list.
    pub fn back(&mut self) -> bool {
        if !matches!(self.phase(), Phase::Intro(_)) {
            return false;
        }
        self.navigator.reset();
        true
    }

    pub fn start(&mut self) -> bool {
        let Phase::Intro(id) = self.phase() else {
            return false;
        };
        self.navigator.start();
        info!(session_id = %self.id, instrument = %id, "instrument started");
        true
    }

    // ── Answering ────────────────────────────────────────────────────────────

    pub fn current_question(&self) -> Option<QuestionView> {
        let id = self.navigator.active()?;
        let question = self.navigator.current_question()?;
        Some(QuestionView {
            instrument: id,
            index: self.navigator.cursor(),
            total: instrument(id).question_count(),
            question,
            answer: self.answers.get(id, &question.key).cloned(),
        })
    }

    fn active_question(&self) -> Result<(InstrumentId, &'static QuestionDescriptor), SessionError> {
        match (self.phase(), self.navigator.current_question()) {
            (Phase::Active(id), Some(question)) => Ok((id, question)),
            _ => Err(SessionError::NoActiveQuestion),
        }
    }

    /// Answer the current question of a scalar or scalar-mapped instrument.
    pub fn answer(&mut self, value: &str) -> Result<(), SessionError> {
        let (id, question) = self.active_question()?;
        instrument(id).validate_answer(&question.key, None, value)?;
        self.answers.set_scalar(id, question.key.as_str(), value);
        debug!(session_id = %self.id, instrument = %id, key = %question.key, value, "answer recorded");
        Ok(())
    }

    /// Answer one axis of the current domain of a dual-axis instrument.
    pub fn answer_axis(&mut self, axis: Axis, value: &str) -> Result<(), SessionError> {
        let (id, question) = self.active_question()?;
        instrument(id).validate_answer(&question.key, Some(axis), value)?;
        self.answers
            .set_dual_axis(id, question.key.as_str(), axis, value);
        debug!(session_id = %self.id, instrument = %id, key = %question.key, %axis, value, "answer recorded");
        Ok(())
    }

    /// Answer the current question by option position rather than value.
    pub fn answer_option(&mut self, axis: Option<Axis>, index: usize) -> Result<(), SessionError> {
        let (id, question) = self.active_question()?;
        let value = question
            .options_for(axis)
            .and_then(|options| options.get(index))
            .map(|option| option.value.as_str())
            .ok_or_else(|| InstrumentError::InvalidOption {
                instrument: id,
                key: question.key.clone(),
                axis,
                value: format!("#{}", index + 1),
            })?;
        match (id.shape(), axis) {
            (AnswerShape::DualAxis, Some(axis)) => self.answer_axis(axis, value),
            _ => self.answer(value),
        }
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    fn active_answers(&self) -> Option<&AnswerSet> {
        self.navigator.active().map(|id| self.answers.answers(id))
    }

    pub fn can_go_next(&self) -> bool {
        self.active_answers()
            .is_some_and(|answers| self.navigator.can_go_next(answers))
    }

    pub fn can_go_previous(&self) -> bool {
        self.navigator.can_go_previous()
    }

    pub fn on_last_question(&self) -> bool {
        self.navigator.is_last_question()
    }

    pub fn next(&mut self) -> bool {
        let Some(id) = self.navigator.active() else {
            return false;
        };
        self.navigator.next(self.answers.answers(id))
    }

    pub fn previous(&mut self) -> bool {
        self.navigator.previous()
    }

    pub fn progress(&self) -> Option<Progress> {
        self.navigator.progress(self.active_answers()?)
    }

    /// Progress of any instrument, open or not.
    pub fn progress_of(&self, id: InstrumentId) -> Progress {
        let definition = instrument(id);
        Progress::new(
            definition.answered_count(self.answers.answers(id)),
            definition.question_count(),
        )
    }

    // ── Submission ───────────────────────────────────────────────────────────

    pub fn can_submit(&self) -> bool {
        matches!(self.phase(), Phase::Active(_))
            && self
                .active_answers()
                .is_some_and(|answers| self.navigator.is_complete(answers))
    }

    /// Mark the active instrument complete and return to selection.
    /// Rejected while any of its questions is unanswered.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        let Some(id) = self.navigator.active() else {
            return false;
        };
        self.completed.insert(id);
        self.navigator.reset();
        info!(
            session_id = %self.id,
            instrument = %id,
            completed = self.completed.len(),
            "instrument completed"
        );
        true
    }

    // ── Prediction ───────────────────────────────────────────────────────────

    pub fn can_predict(&self) -> bool {
        self.phase() == Phase::AllComplete && !self.requester.is_pending()
    }

    pub fn is_predicting(&self) -> bool {
        self.requester.is_pending()
    }

    /// Claim the single-flight guard and build the request payload.
    /// `None` if prediction is not allowed or one is already in flight.
    pub fn begin_prediction(&mut self) -> Option<ScoringRequest> {
        if self.phase() != Phase::AllComplete || !self.requester.try_begin() {
            return None;
        }
        info!(session_id = %self.id, "requesting prediction");
        Some(ScoringRequest::from(&self.answers))
    }

    pub fn finish_prediction(&mut self, outcome: Result<ScoringResponse, ScoringError>) {
        self.requester.finish(outcome);
    }

    pub fn result(&self) -> Option<&Prediction> {
        self.requester.result()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.requester.last_error()
    }

    // ── Restart ──────────────────────────────────────────────────────────────

    /// Discard everything and begin a fresh session. Only offered once a
    /// result has been received.
    pub fn restart(&mut self) -> bool {
        if self.phase() != Phase::ResultReady {
            return false;
        }
        let previous = self.id;
        self.answers.clear_all();
        self.completed.clear();
        self.navigator.reset();
        self.requester.reset();
        self.id = Uuid::new_v4();
        self.created_at = jiff::Timestamp::now();
        info!(previous_session_id = %previous, session_id = %self.id, "session restarted");
        true
    }
}
