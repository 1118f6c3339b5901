pub mod callback;
pub mod message;

use std::sync::Arc;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::database::connection::DatabaseManager;
use crate::schedule::NavigationController;

/// Controller wired to the SQLite backend.
pub type ScheduleController = NavigationController<DatabaseManager>;

/// Error type shared by every endpoint in the dispatcher tree.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of a dispatcher endpoint.
pub type HandlerResult = Result<(), HandlerError>;

pub struct BotHandler {
    pub controller: Arc<ScheduleController>,
}

impl BotHandler {
    pub fn new(controller: Arc<ScheduleController>) -> Self {
        Self { controller }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let for_commands = self.controller.clone();
        let for_text = self.controller.clone();
        let for_callbacks = self.controller.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let controller = for_commands.clone();
                        async move { message::command_handler(bot, msg, cmd, controller).await }
                    }),
            )
            .branch(Update::filter_message().endpoint(move |bot, msg| {
                let controller = for_text.clone();
                async move { message::text_handler(bot, msg, controller).await }
            }))
            .branch(Update::filter_callback_query().endpoint(move |bot, q| {
                let controller = for_callbacks.clone();
                async move { callback::callback_handler(bot, q, controller).await }
            }))
    }
}
