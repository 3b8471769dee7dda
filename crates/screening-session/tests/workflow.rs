use screening_core::models::answer::Answer;
use screening_core::models::instrument::{Axis, InstrumentId};
use screening_core::models::scoring::ScoringResponse;
use screening_session::assessment::{Assessment, Phase};
use screening_session::error::{ScoringError, SessionError};
use screening_session::requester::ResultRequester;

/// Walk an instrument from selection to submission, picking the first option
/// of every question.
fn complete(assessment: &mut Assessment, id: InstrumentId) {
    assert!(assessment.select(id));
    assert!(assessment.start());
    loop {
        if id == InstrumentId::Npi {
            assessment.answer_option(Some(Axis::Frequency), 0).unwrap();
            assessment.answer_option(Some(Axis::Severity), 0).unwrap();
        } else {
            assessment.answer_option(None, 0).unwrap();
        }
        if assessment.on_last_question() {
            break;
        }
        assert!(assessment.next());
    }
    assert!(assessment.submit());
}

fn all_complete() -> Assessment {
    let mut assessment = Assessment::new();
    for id in InstrumentId::ALL {
        complete(&mut assessment, id);
    }
    assessment
}

#[test]
fn new_session_is_selecting_with_everything_available() {
    let assessment = Assessment::new();
    assert_eq!(assessment.phase(), Phase::Selecting);
    assert_eq!(assessment.available_instruments(), InstrumentId::ALL.to_vec());
    assert!(assessment.answers().is_empty());
    assert!(!assessment.can_predict());
}

#[test]
fn select_start_and_back() {
    let mut assessment = Assessment::new();
    assert!(!assessment.start());

    assert!(assessment.select(InstrumentId::Gds));
    assert_eq!(assessment.phase(), Phase::Intro(InstrumentId::Gds));
    assert!(assessment.current_question().is_none());
    assert!(!assessment.select(InstrumentId::Faq));

    assert!(assessment.back());
    assert_eq!(assessment.phase(), Phase::Selecting);

    assert!(assessment.select(InstrumentId::Faq));
    assert!(assessment.start());
    assert_eq!(assessment.phase(), Phase::Active(InstrumentId::Faq));
    assert!(!assessment.back());
}

#[test]
fn answers_are_rejected_outside_an_active_question() {
    let mut assessment = Assessment::new();
    assert!(matches!(
        assessment.answer("1"),
        Err(SessionError::NoActiveQuestion)
    ));

    assessment.select(InstrumentId::Faq);
    assert!(matches!(
        assessment.answer("1"),
        Err(SessionError::NoActiveQuestion)
    ));
}

#[test]
fn non_canonical_values_are_rejected() {
    let mut assessment = Assessment::new();
    assessment.select(InstrumentId::Cdr);
    assessment.start();

    assert!(matches!(
        assessment.answer("4"),
        Err(SessionError::InvalidAnswer(_))
    ));
    assert!(matches!(
        assessment.answer_axis(Axis::Severity, "1"),
        Err(SessionError::InvalidAnswer(_))
    ));
    assert!(assessment.answer_option(None, 5).is_err());
    assert!(assessment.answers().answers(InstrumentId::Cdr).is_empty());
}

#[test]
fn cdr_options_store_clinical_values() {
    let mut assessment = Assessment::new();
    assessment.select(InstrumentId::Cdr);
    assessment.start();

    let expected = ["0", "0.5", "1", "2", "3"];
    for (index, value) in expected.iter().enumerate() {
        assessment.answer_option(None, index).unwrap();
        assert_eq!(
            assessment.answers().get(InstrumentId::Cdr, "Memory"),
            Some(&Answer::Scalar(value.to_string()))
        );
    }
}

#[test]
fn submit_is_rejected_while_incomplete() {
    let mut assessment = Assessment::new();
    assessment.select(InstrumentId::Gds);
    assessment.start();
    assessment.answer("1").unwrap();

    let before_answers = assessment.answers().clone();
    assert!(!assessment.can_submit());
    assert!(!assessment.submit());
    assert_eq!(assessment.phase(), Phase::Active(InstrumentId::Gds));
    assert!(assessment.completed().is_empty());
    assert_eq!(assessment.answers(), &before_answers);
}

#[test]
fn faq_end_to_end() {
    let mut assessment = Assessment::new();
    assessment.select(InstrumentId::Faq);
    assessment.start();

    assessment.answer("1").unwrap();
    assert_eq!(assessment.progress().unwrap().percent(), 10.0);
    assert!(!assessment.can_submit());

    for i in 1..10 {
        assert!(assessment.next());
        let value = (i % 4).to_string();
        assessment.answer(&value).unwrap();
    }
    assert_eq!(assessment.progress().unwrap().percent(), 100.0);

    assert!(assessment.submit());
    assert!(assessment.is_completed(InstrumentId::Faq));
    assert_eq!(assessment.active_instrument(), None);
    assert_eq!(assessment.phase(), Phase::Selecting);
    assert!(!assessment.available_instruments().contains(&InstrumentId::Faq));
}

#[test]
fn completed_instruments_cannot_be_reselected() {
    let mut assessment = Assessment::new();
    complete(&mut assessment, InstrumentId::Cdr);
    assert!(!assessment.select(InstrumentId::Cdr));
    assert_eq!(assessment.phase(), Phase::Selecting);
    assert_eq!(assessment.progress_of(InstrumentId::Cdr).display_percent(), 100);
}

#[test]
fn predict_requires_all_four_instruments() {
    let mut assessment = Assessment::new();
    for id in [InstrumentId::Faq, InstrumentId::Npi, InstrumentId::Gds] {
        complete(&mut assessment, id);
        assert!(!assessment.can_predict());
        assert!(assessment.begin_prediction().is_none());
    }

    complete(&mut assessment, InstrumentId::Cdr);
    assert_eq!(assessment.phase(), Phase::AllComplete);
    assert!(assessment.available_instruments().is_empty());
    assert!(assessment.can_predict());
}

#[test]
fn prediction_payload_carries_every_answer() {
    let mut assessment = all_complete();
    let request = assessment.begin_prediction().unwrap();

    assert_eq!(request.faq.len(), 10);
    assert_eq!(request.npi.len(), 12);
    assert_eq!(request.gds.len(), 15);
    assert_eq!(request.cdr.len(), 6);

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["FAQ"]["Q10"], "0");
    assert_eq!(json["NPI"]["Anxiety"]["frequency"], "1");
    assert_eq!(json["NPI"]["Anxiety"]["severity"], "1");
    assert_eq!(json["CDR"]["Personal Care"], "0");
}

#[test]
fn second_begin_while_pending_is_refused() {
    let mut assessment = all_complete();
    assert!(assessment.begin_prediction().is_some());
    assert!(assessment.is_predicting());
    assert!(!assessment.can_predict());
    assert!(assessment.begin_prediction().is_none());
}

#[test]
fn failed_prediction_leaves_predict_available() {
    let mut assessment = all_complete();
    assessment.begin_prediction().unwrap();
    assessment.finish_prediction(Err(ScoringError::Transport("connection refused".into())));

    assert!(!assessment.is_predicting());
    assert!(assessment.result().is_none());
    assert_eq!(assessment.phase(), Phase::AllComplete);
    assert!(assessment.can_predict());
    assert!(assessment.last_error().unwrap().contains("connection refused"));

    assessment.begin_prediction().unwrap();
    assert!(assessment.last_error().is_none());
}

#[test]
fn restart_after_result_resets_the_session() {
    let mut assessment = all_complete();
    assert!(!assessment.restart());

    let first_id = assessment.id();
    assessment.begin_prediction().unwrap();
    assessment.finish_prediction(Ok(ScoringResponse {
        result: "Unlikely Alzheimer's".to_string(),
    }));
    assert_eq!(assessment.phase(), Phase::ResultReady);
    assert_eq!(assessment.result().unwrap().text, "Unlikely Alzheimer's");
    assert!(assessment.begin_prediction().is_none());

    assert!(assessment.restart());
    assert_eq!(assessment.phase(), Phase::Selecting);
    assert!(assessment.answers().is_empty());
    assert!(assessment.completed().is_empty());
    assert_eq!(assessment.active_instrument(), None);
    assert!(assessment.result().is_none());
    assert!(!assessment.is_predicting());
    assert_ne!(assessment.id(), first_id);
}

#[test]
fn requester_refuses_once_a_result_is_held() {
    let mut requester = ResultRequester::default();
    assert!(requester.try_begin());
    assert!(!requester.try_begin());

    requester.finish(Ok(ScoringResponse {
        result: "Likely Alzheimer's".to_string(),
    }));
    assert!(!requester.is_pending());
    assert_eq!(requester.result().unwrap().text, "Likely Alzheimer's");
    assert!(!requester.try_begin());
    assert!(!requester.is_pending());

    requester.reset();
    assert!(requester.result().is_none());
    assert!(requester.try_begin());
}
