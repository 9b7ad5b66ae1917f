//! Update dispatch: one branch per incoming event kind.

pub mod message;
pub mod poll_answer;
pub mod poll_update;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;

use crate::bot::commands::Command;
use crate::bot::HandlerResult;
use crate::questionnaire::engine::Step;
use crate::questionnaire::QuestionKind;
use crate::sheets::export::export_run;
use crate::state::AppState;
use crate::utils::logging::log_sheet_error;

/// Message sent when the last question has been answered.
pub const COMPLETION_MESSAGE: &str = "Thank you for completing the questionnaire!";

/// Build the update handler tree.
///
/// Every inbound update is routed by kind to exactly one endpoint: bot
/// commands, messages carrying a poll object (the preview echo), plain text
/// (questionnaire replies), poll answers, and poll state updates. Anything
/// else falls through and is dropped by the dispatcher.
pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    let command_branch = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(message::command_handler);

    let poll_message_branch = Update::filter_message()
        .filter(|msg: Message| msg.poll().is_some())
        .endpoint(message::poll_echo_handler);

    // Plain text only: commands were consumed above, and unknown
    // slash-commands must not be mistaken for questionnaire answers.
    let text_branch = Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| !text.starts_with('/')).unwrap_or(false))
        .endpoint(message::text_answer_handler);

    let poll_answer_branch = Update::filter_poll_answer().endpoint(poll_answer::poll_answer_handler);

    let poll_update_branch = Update::filter_poll().endpoint(poll_update::poll_update_handler);

    dptree::entry()
        .branch(command_branch)
        .branch(poll_message_branch)
        .branch(text_branch)
        .branch(poll_answer_branch)
        .branch(poll_update_branch)
}

/// Perform one engine step: emit the question or the completion message.
///
/// The completion flush is deliberately not retried; a failed append is
/// logged and that run's answers are gone (they were already removed from
/// the in-memory store).
pub(crate) async fn run_step(bot: &Bot, state: &AppState, step: Step) -> HandlerResult {
    match step {
        Step::Ask { chat_id, question } => match question.kind {
            QuestionKind::MultipleChoice { options } => {
                bot.send_poll(chat_id, question.prompt, options)
                    .is_anonymous(false)
                    .allows_multiple_answers(false)
                    .await?;
            }
            QuestionKind::OpenEnded => {
                bot.send_message(chat_id, question.prompt).await?;
            }
        },
        Step::Complete(run) => {
            bot.send_message(run.chat_id, COMPLETION_MESSAGE).await?;
            if let Err(error) = export_run(state.sheets.as_ref(), &state.definition, &run).await {
                log_sheet_error("export_run", &error.to_string());
            }
        }
    }
    Ok(())
}
