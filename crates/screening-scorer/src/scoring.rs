use screening_core::models::answer::{Answer, AnswerSet};
use screening_core::models::instrument::{Axis, InstrumentId};
use screening_core::models::scoring::ScoringRequest;
use screening_instruments::questions::QuestionDescriptor;
use screening_instruments::questions_for;

const FAQ_CUTOFF: u32 = 9;
const NPI_CUTOFF: u32 = 12;
const GDS_CUTOFF: u32 = 5;
const CDR_CUTOFF: f64 = 2.0;

/// Per-instrument totals. Missing or non-canonical answers count as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    /// Sum of the 10 activity ratings, 0–30.
    pub faq: u32,
    /// Sum of frequency × severity over the 12 domains, 0–144.
    pub npi: u32,
    /// Count of depressive answers, 0–15.
    pub gds: u32,
    /// Sum of the 6 domain ratings ("sum of boxes"), 0–18.
    pub cdr: f64,
}

/// The value stored for `question`, if it is one of the options offered.
/// Only canonical values are scored, which keeps every total within its range.
fn canonical<'a>(
    question: &QuestionDescriptor,
    axis: Option<Axis>,
    value: Option<&'a str>,
) -> Option<&'a str> {
    value.filter(|v| question.accepts(axis, v))
}

fn int_value(question: &QuestionDescriptor, axis: Option<Axis>, value: Option<&str>) -> u32 {
    canonical(question, axis, value)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

fn scalar<'a>(answers: &'a AnswerSet, key: &str) -> Option<&'a str> {
    answers.get(key).and_then(Answer::as_scalar)
}

fn sum_scalar(request: &ScoringRequest, id: InstrumentId) -> u32 {
    let answers = request.answers(id);
    questions_for(id)
        .iter()
        .map(|q| int_value(q, None, scalar(answers, &q.key)))
        .sum()
}

impl Scores {
    pub fn from_request(request: &ScoringRequest) -> Self {
        let npi: u32 = questions_for(InstrumentId::Npi)
            .iter()
            .filter_map(|q| {
                let pair = request.npi.get(&q.key).and_then(Answer::as_pair)?;
                let frequency = int_value(q, Some(Axis::Frequency), pair.get(Axis::Frequency));
                let severity = int_value(q, Some(Axis::Severity), pair.get(Axis::Severity));
                Some(frequency * severity)
            })
            .sum();

        let cdr = questions_for(InstrumentId::Cdr)
            .iter()
            .filter_map(|q| canonical(q, None, scalar(&request.cdr, &q.key)))
            .filter_map(|v| v.parse::<f64>().ok())
            .fold(0.0, |total, v| total + v);

        Self {
            faq: sum_scalar(request, InstrumentId::Faq),
            npi,
            gds: sum_scalar(request, InstrumentId::Gds),
            cdr,
        }
    }

    /// Any instrument above its cut-off.
    pub fn is_likely(&self) -> bool {
        self.faq > FAQ_CUTOFF
            || self.npi > NPI_CUTOFF
            || self.gds > GDS_CUTOFF
            || self.cdr > CDR_CUTOFF
    }

    pub fn summary(&self) -> String {
        let verdict = if self.is_likely() {
            "Likely Alzheimer's"
        } else {
            "Unlikely Alzheimer's"
        };
        // `{:?}` keeps the decimal point on whole CDR sums ("3.0").
        format!(
            "{verdict} (FAQ: {}, NPI: {}, GDS: {}, CDR: {:?})",
            self.faq, self.npi, self.gds, self.cdr
        )
    }
}
