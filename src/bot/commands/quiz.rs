use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::PollType;

use crate::bot::HandlerResult;
use crate::state::AppState;
use crate::utils::logging::log_command_error;

const QUIZ_QUESTION: &str = "How many eggs do you need for a cake?";
const QUIZ_OPTIONS: [&str; 4] = ["1", "2", "4", "20"];
const QUIZ_CORRECT_OPTION: u8 = 2;

/// `/quiz`: reply with the demonstration quiz and start tracking it.
///
/// The quiz closes when the platform-reported total voter count reaches the
/// target (see the poll-update handler); no per-answer counting happens here.
pub async fn handle_quiz(bot: Bot, msg: Message, state: Arc<AppState>) -> HandlerResult {
    let options: Vec<String> = QUIZ_OPTIONS.iter().map(|s| (*s).to_owned()).collect();

    let sent = bot
        .send_poll(msg.chat.id, QUIZ_QUESTION, options)
        .type_(PollType::Quiz)
        .correct_option_id(QUIZ_CORRECT_OPTION)
        .reply_to_message_id(msg.id)
        .await?;

    match sent.poll() {
        Some(poll) => {
            let mut polls = state.polls.lock().await;
            polls.register_quiz(poll.id.clone(), msg.chat.id, sent.id);
        }
        None => {
            log_command_error("quiz", "unknown", 0, msg.chat.id.0, "sent message carried no poll");
        }
    }
    Ok(())
}
