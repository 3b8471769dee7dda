use screening_core::models::instrument::InstrumentId;

use crate::Instrument;
use crate::questions::{AnswerOption, OptionSet, QuestionDescriptor};

/// NPI: Neuropsychiatric Inventory.
/// 12 behavioral domains, each rated for frequency (1–4) and severity (1–3).
/// Keyed by domain name.
pub struct Npi;

pub const DOMAINS: [&str; 12] = [
    "Delusions",
    "Hallucinations",
    "Agitation/Aggression",
    "Depression/Dysphoria",
    "Anxiety",
    "Elation/Euphoria",
    "Apathy/Indifference",
    "Disinhibition",
    "Irritability/Lability",
    "Aberrant Motor Behavior",
    "Nighttime Behavior Disturbances",
    "Appetite/Eating",
];

impl Instrument for Npi {
    fn id(&self) -> InstrumentId {
        InstrumentId::Npi
    }

    fn name(&self) -> &str {
        "Neuropsychiatric Inventory"
    }

    fn questions(&self) -> &[QuestionDescriptor] {
        static QUESTIONS: std::sync::LazyLock<Vec<QuestionDescriptor>> =
            std::sync::LazyLock::new(|| {
                let frequency = AnswerOption::list(&[
                    ("Occasionally", "1"),
                    ("Often", "2"),
                    ("Frequently", "3"),
                    ("Very Frequently", "4"),
                ]);
                let severity =
                    AnswerOption::list(&[("Mild", "1"), ("Moderate", "2"), ("Severe", "3")]);

                DOMAINS
                    .iter()
                    .map(|domain| QuestionDescriptor {
                        key: domain.to_string(),
                        prompt: domain.to_string(),
                        options: OptionSet::Axes {
                            frequency: frequency.clone(),
                            severity: severity.clone(),
                        },
                    })
                    .collect()
            });
        &QUESTIONS
    }
}
