use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::Poll;

use crate::bot::HandlerResult;
use crate::polls::TARGET_VOTER_COUNT;
use crate::state::AppState;
use crate::utils::logging::log_system_event;

/// Route an incoming poll state update.
///
/// Only quizzes care about these: the platform reports the aggregate voter
/// count, and the quiz is stopped the moment it reaches the target. Updates
/// for polls that are already closed carry no work, and unknown poll ids are
/// stale references from a previous process lifetime; both are ignored.
pub async fn poll_update_handler(bot: Bot, poll: Poll, state: Arc<AppState>) -> HandlerResult {
    let close = {
        let polls = state.polls.lock().await;
        polls.quiz_close_target(&poll.id, poll.is_closed, poll.total_voter_count, TARGET_VOTER_COUNT)
    };
    if let Some((chat_id, message_id)) = close {
        bot.stop_poll(chat_id, message_id).await?;
        log_system_event("quiz_closed", Some(&poll.id));
    }
    Ok(())
}
