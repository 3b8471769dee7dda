use screening_core::models::instrument::InstrumentId;

use crate::Instrument;
use crate::questions::{AnswerOption, OptionSet, QuestionDescriptor};

/// CDR: Clinical Dementia Rating.
/// 6 domains rated on the 0 / 0.5 / 1 / 2 / 3 scale. Keyed by domain name.
pub struct Cdr;

pub const DOMAINS: [&str; 6] = [
    "Memory",
    "Orientation",
    "Judgment & Problem Solving",
    "Community Affairs",
    "Home & Hobbies",
    "Personal Care",
];

impl Instrument for Cdr {
    fn id(&self) -> InstrumentId {
        InstrumentId::Cdr
    }

    fn name(&self) -> &str {
        "Clinical Dementia Rating"
    }

    fn questions(&self) -> &[QuestionDescriptor] {
        static QUESTIONS: std::sync::LazyLock<Vec<QuestionDescriptor>> =
            std::sync::LazyLock::new(|| {
                // "Questionable" sits half a step above "None"; the rest are whole steps.
                let options = AnswerOption::list(&[
                    ("None", "0"),
                    ("Questionable", "0.5"),
                    ("Mild", "1"),
                    ("Moderate", "2"),
                    ("Severe", "3"),
                ]);

                DOMAINS
                    .iter()
                    .map(|domain| QuestionDescriptor {
                        key: domain.to_string(),
                        prompt: domain.to_string(),
                        options: OptionSet::Single {
                            options: options.clone(),
                        },
                    })
                    .collect()
            });
        &QUESTIONS
    }
}
