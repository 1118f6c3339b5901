use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;

use super::{HandlerResult, ScheduleController};
use crate::bot::commands::Command;
use crate::bot::keyboards::token_keyboard;
use crate::error::ScheduleError;
use crate::schedule::Reply;
use crate::utils::logging::{log_command_start, log_request_rejected};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    controller: Arc<ScheduleController>,
) -> HandlerResult {
    if let Some(user) = msg.from() {
        let username = user.username.as_deref().unwrap_or("unknown");
        log_command_start(command_name(&cmd), username, user.id.0, msg.chat.id.0);
    }

    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            bot.send_message(msg.chat.id, controller.locale().start_prompt).await?;
        }
    }
    Ok(())
}

/// Treats any plain text as a group name to look up.
pub async fn text_handler(
    bot: Bot,
    msg: Message,
    controller: Arc<ScheduleController>,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let user_id = msg.from().map(|user| user.id.0).unwrap_or(0);

    match controller.handle_text(text).await {
        Ok(Reply::Confirmation(prompt)) => {
            bot.send_message(msg.chat.id, prompt.markup_text)
                .parse_mode(ParseMode::Html)
                .reply_markup(token_keyboard(&prompt.attached_tokens, controller.locale()))
                .await?;
        }
        Ok(Reply::Schedule(schedule)) => {
            bot.send_message(msg.chat.id, schedule.markup_text)
                .parse_mode(ParseMode::Html)
                .reply_markup(token_keyboard(&schedule.attached_tokens, controller.locale()))
                .await?;
        }
        Ok(Reply::Dismiss) => {}
        Err(e) => {
            if !matches!(e, ScheduleError::LookupFailure(_)) {
                log_request_rejected("group search", &e.to_string(), user_id);
            }
            bot.send_message(msg.chat.id, controller.locale().error_text(&e)).await?;
        }
    }

    Ok(())
}

fn command_name(cmd: &Command) -> &'static str {
    match cmd {
        Command::Help => "/help",
        Command::Start => "/start",
    }
}
