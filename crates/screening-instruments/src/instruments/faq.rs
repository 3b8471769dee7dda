use screening_core::models::instrument::InstrumentId;

use crate::Instrument;
use crate::questions::{AnswerOption, OptionSet, QuestionDescriptor};

/// FAQ: Functional Activities Questionnaire.
/// 10 everyday activities, each rated 0 (normal) to 3 (dependent). Keys `Q1`..`Q10`.
pub struct Faq;

const ITEMS: [&str; 10] = [
    "Writing checks, paying bills, balancing checkbook",
    "Assembling tax records, business affairs, papers",
    "Shopping alone for clothes, household necessities, groceries",
    "Playing a game of skill, working on a hobby",
    "Heating water, making a cup of coffee, turning off stove after use",
    "Preparing a balanced meal",
    "Keeping track of current events",
    "Paying attention to, understanding, discussing TV, book, magazine",
    "Remembering appointments, family occasions, holidays, medications",
    "Traveling out of neighborhood, driving, arranging transport",
];

impl Instrument for Faq {
    fn id(&self) -> InstrumentId {
        InstrumentId::Faq
    }

    fn name(&self) -> &str {
        "Functional Activities Questionnaire"
    }

    fn questions(&self) -> &[QuestionDescriptor] {
        static QUESTIONS: std::sync::LazyLock<Vec<QuestionDescriptor>> =
            std::sync::LazyLock::new(|| {
                let options = AnswerOption::list(&[
                    ("Normal", "0"),
                    ("Has difficulty but does by self", "1"),
                    ("Requires assistance", "2"),
                    ("Dependent", "3"),
                ]);

                ITEMS
                    .iter()
                    .enumerate()
                    .map(|(i, prompt)| QuestionDescriptor {
                        key: format!("Q{}", i + 1),
                        prompt: prompt.to_string(),
                        options: OptionSet::Single {
                            options: options.clone(),
                        },
                    })
                    .collect()
            });
        &QUESTIONS
    }
}
