use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use questionnaire_bot::questionnaire::engine::{QuestionnaireEngine, Step};
use questionnaire_bot::questionnaire::{Question, QuestionnaireDefinition};
use questionnaire_bot::sheets::export::{build_row, export_run, header_columns};
use questionnaire_bot::sheets::AnswerSink;
use teloxide::types::{ChatId, UserId};

/// In-memory sink with the same header contract as the real spreadsheet:
/// the header row is written only while the store is empty.
#[derive(Default)]
struct RecordingSink {
    rows: Mutex<Vec<Vec<String>>>,
}

impl RecordingSink {
    async fn rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl AnswerSink for RecordingSink {
    async fn ensure_header(&self, columns: &[String]) -> Result<()> {
        let mut rows = self.rows.lock().await;
        if rows.is_empty() {
            rows.push(columns.to_vec());
        }
        Ok(())
    }

    async fn append_row(&self, values: &[String]) -> Result<()> {
        self.rows.lock().await.push(values.to_vec());
        Ok(())
    }
}

fn two_question_definition() -> QuestionnaireDefinition {
    QuestionnaireDefinition::new(vec![
        Question::multiple_choice(
            "favorite_color",
            "What's your favorite color?",
            vec!["Red".to_owned(), "Blue".to_owned()],
        ),
        Question::open_ended("note", "Anything to add?"),
    ])
}

fn complete_run(engine: &mut QuestionnaireEngine, user: UserId, chat: ChatId, text: &str) -> Step {
    engine.start(user, chat);
    engine.record_choice_answer(user, &[0]).expect("session is active");
    engine.record_text_answer(user, text).expect("session is active")
}

#[test]
fn test_header_columns_follow_definition_order() {
    let definition = two_question_definition();
    assert_eq!(
        header_columns(&definition),
        vec!["Timestamp", "User ID", "favorite_color", "note"]
    );
}

#[tokio::test]
async fn test_exported_row_resolves_choice_labels() {
    let definition = two_question_definition();
    let mut engine = QuestionnaireEngine::new(Arc::new(definition.clone()));
    let sink = RecordingSink::default();

    let step = complete_run(&mut engine, UserId(7), ChatId(100), "hello");
    let run = match step {
        Step::Complete(run) => run,
        Step::Ask { .. } => panic!("expected completion"),
    };

    export_run(&sink, &definition, &run).await.unwrap();

    let rows = sink.rows().await;
    assert_eq!(rows.len(), 2, "header plus one answer row");
    assert_eq!(rows[0], vec!["Timestamp", "User ID", "favorite_color", "note"]);

    let row = &rows[1];
    assert_eq!(row.len(), 4);
    assert_eq!(row[1], "7");
    // The stored index 0 comes out as the option label.
    assert_eq!(row[2], "Red");
    assert_eq!(row[3], "hello");

    // And the engine no longer holds anything for the user.
    assert!(!engine.has_session(UserId(7)));
    assert!(!engine.has_answers(UserId(7)));
}

#[tokio::test]
async fn test_header_is_written_only_once() {
    let definition = two_question_definition();
    let mut engine = QuestionnaireEngine::new(Arc::new(definition.clone()));
    let sink = RecordingSink::default();

    for (user, text) in [(UserId(1), "first"), (UserId(2), "second")] {
        let step = complete_run(&mut engine, user, ChatId(100), text);
        let run = match step {
            Step::Complete(run) => run,
            Step::Ask { .. } => panic!("expected completion"),
        };
        export_run(&sink, &definition, &run).await.unwrap();
    }

    let rows = sink.rows().await;
    assert_eq!(rows.len(), 3, "one header, two answer rows");
    assert_eq!(rows[0][0], "Timestamp");
    assert_eq!(rows[1][3], "first");
    assert_eq!(rows[2][3], "second");
}

#[test]
fn test_build_row_handles_missing_and_bad_answers() {
    let definition = two_question_definition();
    let mut engine = QuestionnaireEngine::new(Arc::new(definition.clone()));

    // Only the first question gets answered before we force completion by
    // answering the second with an out-of-range option index.
    engine.start(UserId(9), ChatId(100));
    engine.record_choice_answer(UserId(9), &[5]).expect("session is active");
    let step = engine.record_text_answer(UserId(9), "note text").expect("session is active");
    let run = match step {
        Step::Complete(run) => run,
        Step::Ask { .. } => panic!("expected completion"),
    };

    let row = build_row(&definition, &run, "2024-03-09 18:05:07".to_owned());
    assert_eq!(row[0], "2024-03-09 18:05:07");
    assert_eq!(row[1], "9");
    // Index 5 does not exist among the options: empty cell, not a panic.
    assert_eq!(row[2], "");
    assert_eq!(row[3], "note text");
}
