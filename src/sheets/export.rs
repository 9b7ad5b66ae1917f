//! Turning a completed questionnaire run into spreadsheet cells.

use anyhow::Result;
use chrono::Utc;

use crate::questionnaire::engine::CompletedRun;
use crate::questionnaire::QuestionnaireDefinition;
use crate::utils::datetime::format_row_timestamp;

use super::AnswerSink;

/// Header row: timestamp, user id, then one column per question id in
/// definition order.
pub fn header_columns(definition: &QuestionnaireDefinition) -> Vec<String> {
    let mut columns = vec!["Timestamp".to_owned(), "User ID".to_owned()];
    columns.extend(definition.questions().iter().map(|q| q.id.clone()));
    columns
}

/// One row for a completed run.
///
/// Answers land in definition order; multiple-choice answers are resolved
/// from stored option index to label text here, so the sheet never sees raw
/// indices. Unanswered or unresolvable questions become empty cells.
pub fn build_row(
    definition: &QuestionnaireDefinition,
    run: &CompletedRun,
    timestamp: String,
) -> Vec<String> {
    let mut row = vec![timestamp, run.user_id.0.to_string()];
    for question in definition.questions() {
        let cell = run
            .answers
            .get(&question.id)
            .map(|raw| question.resolve_answer(raw))
            .unwrap_or_default();
        row.push(cell);
    }
    row
}

/// Flush one completed run: header first (written only when the sheet is
/// empty), then the answer row. Not retried on failure.
pub async fn export_run(
    sink: &dyn AnswerSink,
    definition: &QuestionnaireDefinition,
    run: &CompletedRun,
) -> Result<()> {
    sink.ensure_header(&header_columns(definition)).await?;
    let row = build_row(definition, run, format_row_timestamp(&Utc::now()));
    sink.append_row(&row).await
}
