use screening_core::models::instrument::InstrumentId;

use crate::Instrument;
use crate::questions::{AnswerOption, OptionSet, QuestionDescriptor};

/// GDS-15: Geriatric Depression Scale, short form.
/// 15 yes/no questions recorded as "1"/"0". Keys `Q1`..`Q15`.
pub struct Gds;

const ITEMS: [&str; 15] = [
    "Are you basically satisfied with your life?",
    "Have you dropped many of your activities and interests?",
    "Do you feel that your life is empty?",
    "Do you often get bored?",
    "Are you hopeful about the future?",
    "Are you bothered by thoughts you can\u{2019}t get out of your head?",
    "Are you in good spirits most of the time?",
    "Are you afraid that something bad is going to happen to you?",
    "Do you feel happy most of the time?",
    "Do you often feel helpless?",
    "Do you prefer to stay at home, rather than going out and doing new things?",
    "Do you feel you have more problems with memory than most?",
    "Do you think it is wonderful to be alive now?",
    "Do you feel pretty worthless the way you are now?",
    "Do you feel full of energy?",
];

impl Instrument for Gds {
    fn id(&self) -> InstrumentId {
        InstrumentId::Gds
    }

    fn name(&self) -> &str {
        "Geriatric Depression Scale"
    }

    fn questions(&self) -> &[QuestionDescriptor] {
        static QUESTIONS: std::sync::LazyLock<Vec<QuestionDescriptor>> =
            std::sync::LazyLock::new(|| {
                let options = AnswerOption::list(&[("No", "0"), ("Yes", "1")]);

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
