use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::HandlerResult;
use crate::state::AppState;
use crate::utils::logging::log_command_error;

const SURVEY_QUESTION: &str = "How are you?";
const SURVEY_OPTIONS: [&str; 4] = ["Good", "Really good", "Fantastic", "Great"];

/// `/poll`: send the demonstration survey and start tracking it.
///
/// The survey is non-anonymous and allows multiple answers; every incoming
/// answer event is announced and counted, and the poll is stopped when the
/// count reaches the target (see the poll-answer handler).
pub async fn handle_poll(bot: Bot, msg: Message, state: Arc<AppState>) -> HandlerResult {
    let options: Vec<String> = SURVEY_OPTIONS.iter().map(|s| (*s).to_owned()).collect();

    let sent = bot
        .send_poll(msg.chat.id, SURVEY_QUESTION, options.clone())
        .is_anonymous(false)
        .allows_multiple_answers(true)
        .await?;

    match sent.poll() {
        Some(poll) => {
            let mut polls = state.polls.lock().await;
            polls.register_survey(poll.id.clone(), msg.chat.id, sent.id, options);
        }
        None => {
            // The API answered with something that is not a poll message;
            // without a poll id there is nothing to track.
            log_command_error("poll", "unknown", 0, msg.chat.id.0, "sent message carried no poll");
        }
    }
    Ok(())
}
