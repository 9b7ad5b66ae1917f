use teloxide::prelude::*;
use teloxide::types::{
    ButtonRequest, KeyboardButton, KeyboardButtonPollType, KeyboardMarkup, ReplyMarkup,
};

use crate::bot::HandlerResult;

/// `/preview`: offer a reply-keyboard button that lets the user construct a
/// poll of their own. The bot echoes whatever poll comes back as a closed
/// preview (see the poll-message handler). No state is kept.
pub async fn handle_preview(bot: Bot, msg: Message) -> HandlerResult {
    // No poll type restriction: the user picks quiz or regular themselves.
    let button = KeyboardButton::new("Press me!")
        .request(ButtonRequest::Poll(KeyboardButtonPollType::Any));
    let keyboard = KeyboardMarkup::new(vec![vec![button]]).one_time_keyboard(true);

    bot.send_message(
        msg.chat.id,
        "Press the button to let the bot generate a preview for your poll",
    )
    .reply_markup(ReplyMarkup::Keyboard(keyboard))
    .await?;
    Ok(())
}
