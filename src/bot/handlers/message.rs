use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{KeyboardRemove, ReplyMarkup};
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{self, Command};
use crate::bot::HandlerResult;
use crate::state::AppState;
use crate::utils::logging::{log_command_start, log_command_success, log_ignored_event};

use super::run_step;

/// Route a parsed bot command to its handler.
pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
) -> HandlerResult {
    let username = msg.from().and_then(|u| u.username.as_deref()).unwrap_or("unknown");
    let user_id = msg.from().map(|u| u.id.0).unwrap_or(0);
    log_command_start(cmd.name(), username, user_id, msg.chat.id.0);

    let command = cmd.name();
    match cmd {
        Command::Start => {
            match msg.from() {
                Some(user) => {
                    let step = {
                        let mut engine = state.engine.lock().await;
                        engine.start(user.id, msg.chat.id)
                    };
                    run_step(&bot, &state, step).await?;
                }
                // Channel posts have no sender; a questionnaire needs one.
                None => log_ignored_event("command", "start without a sender"),
            }
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Poll => {
            commands::poll::handle_poll(bot, msg.clone(), Arc::clone(&state)).await?;
        }
        Command::Quiz => {
            commands::quiz::handle_quiz(bot, msg.clone(), Arc::clone(&state)).await?;
        }
        Command::Preview => {
            commands::preview::handle_preview(bot, msg.clone()).await?;
        }
    }

    log_command_success(command, username, user_id, msg.chat.id.0);
    Ok(())
}

/// A plain text message: treated as the answer to the question last asked.
///
/// Users who text the bot without an active questionnaire run (or before any
/// question was asked) are ignored; the engine refuses such events without
/// touching state.
pub async fn text_answer_handler(bot: Bot, msg: Message, state: Arc<AppState>) -> HandlerResult {
    let (user, text) = match (msg.from(), msg.text()) {
        (Some(user), Some(text)) => (user, text),
        _ => return Ok(()),
    };

    let step = {
        let mut engine = state.engine.lock().await;
        engine.record_text_answer(user.id, text)
    };
    match step {
        Some(step) => run_step(&bot, &state, step).await,
        None => {
            log_ignored_event("text", "no active questionnaire session");
            Ok(())
        }
    }
}

/// A message carrying a poll object: echo it back as a closed poll.
///
/// Only the question text and option labels are copied; every other setting
/// of the original poll is irrelevant once the copy is closed.
pub async fn poll_echo_handler(bot: Bot, msg: Message) -> HandlerResult {
    let poll = match msg.poll() {
        Some(poll) => poll,
        None => return Ok(()),
    };

    let options: Vec<String> = poll.options.iter().map(|option| option.text.clone()).collect();
    bot.send_poll(msg.chat.id, poll.question.clone(), options)
        .is_closed(true)
        .reply_markup(ReplyMarkup::KeyboardRemove(KeyboardRemove::new()))
        .await?;
    Ok(())
}
