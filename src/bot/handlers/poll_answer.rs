use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::html;

use crate::bot::HandlerResult;
use crate::polls::TARGET_VOTER_COUNT;
use crate::state::AppState;
use crate::utils::logging::{log_ignored_event, log_system_event};

use super::run_step;

/// Route an incoming poll-answer event.
///
/// A poll answer can belong to a tracked survey (announce the vote, count
/// it, close the poll at the target) or to the voter's questionnaire run
/// (record the choice and advance). Events matching neither are stale
/// references — polls from a previous process lifetime — and are ignored.
pub async fn poll_answer_handler(bot: Bot, answer: PollAnswer, state: Arc<AppState>) -> HandlerResult {
    let vote = {
        let mut polls = state.polls.lock().await;
        polls.record_survey_answer(&answer.poll_id, &answer.option_ids, TARGET_VOTER_COUNT)
    };
    if let Some(vote) = vote {
        let mention = html::user_mention_or_link(&answer.user);
        bot.send_message(vote.chat_id, format!("{} feels {}!", mention, vote.summary))
            .parse_mode(ParseMode::Html)
            .await?;
        if let Some(message_id) = vote.close {
            bot.stop_poll(vote.chat_id, message_id).await?;
            log_system_event("survey_closed", Some(&answer.poll_id));
        }
        return Ok(());
    }

    let step = {
        let mut engine = state.engine.lock().await;
        engine.record_choice_answer(answer.user.id, &answer.option_ids)
    };
    match step {
        Some(step) => run_step(&bot, &state, step).await,
        None => {
            log_ignored_event("poll_answer", &answer.poll_id);
            Ok(())
        }
    }
}
