use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardMarkup, MessageId, ParseMode};
use teloxide::{ApiError, RequestError};
use tracing::warn;

use super::{HandlerResult, ScheduleController};
use crate::bot::keyboards::token_keyboard;
use crate::error::ScheduleError;
use crate::schedule::controller::group_from_message_text;
use crate::schedule::{Reply, ScheduleLocale};
use crate::utils::logging::{log_callback, log_request_rejected};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    controller: Arc<ScheduleController>,
) -> HandlerResult {
    let user_id = q.from.id.0;
    let username = q.from.username.as_deref().unwrap_or("unknown");

    let Some(data) = q.data.as_deref() else {
        bot.answer_callback_query(q.id.clone())
            .text(controller.locale().malformed_request)
            .show_alert(true)
            .await?;
        return Ok(());
    };
    log_callback(data, username, user_id, q.message.as_ref().map(|m| m.chat.id.0));

    // The rendered schedule starts with the group name, which is all the
    // context a navigation button needs besides its own offsets.
    let shown_group = q
        .message
        .as_ref()
        .and_then(|m| m.text())
        .and_then(group_from_message_text);

    let reply = match controller.handle_token(data, shown_group).await {
        Ok(reply) => reply,
        Err(e) => {
            if !matches!(e, ScheduleError::LookupFailure(_)) {
                log_request_rejected("callback", &e.to_string(), user_id);
            }
            bot.answer_callback_query(q.id.clone())
                .text(controller.locale().error_text(&e))
                .show_alert(true)
                .await?;
            return Ok(());
        }
    };

    if let Some(msg) = &q.message {
        apply_reply(&bot, msg.chat.id, msg.id, reply, controller.locale()).await?;
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}

/// Shows `reply` in place of the message whose button was pressed. A prompt
/// that can no longer be deleted is left alone so the press still gets answered.
pub async fn apply_reply(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    reply: Reply,
    locale: &ScheduleLocale,
) -> Result<(), RequestError> {
    match reply {
        Reply::Schedule(schedule) => {
            let keyboard = token_keyboard(&schedule.attached_tokens, locale);
            edit_message(bot, chat_id, message_id, schedule.markup_text, keyboard).await
        }
        Reply::Confirmation(prompt) => {
            let keyboard = token_keyboard(&prompt.attached_tokens, locale);
            edit_message(bot, chat_id, message_id, prompt.markup_text, keyboard).await
        }
        Reply::Dismiss => {
            if let Err(e) = bot.delete_message(chat_id, message_id).await {
                // Telegram refuses to delete messages older than 48 hours.
                warn!("Could not dismiss prompt {} in chat {}: {}", message_id.0, chat_id.0, e);
            }
            Ok(())
        }
    }
}

/// Replaces the text and buttons of a message. Pressing "current week" while
/// it is already shown produces identical content, which Telegram rejects.
async fn edit_message(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: String,
    keyboard: InlineKeyboardMarkup,
) -> Result<(), RequestError> {
    let result = bot
        .edit_message_text(chat_id, message_id, text)
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard)
        .await;

    match result {
        Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(e) => Err(e),
    }
}
