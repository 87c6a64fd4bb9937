//! Telegram update handlers.
//!
//! Each handler is a small adapter: it pulls what it needs out of the update,
//! then calls into `lookbot-core` for the actual work.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use lookbot_core::domain::ChatId;

use crate::router::AppState;

mod commands;
mod photo;

pub async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        if text.starts_with('/') {
            return commands::handle_command(msg, state).await;
        }
    }

    if msg.photo().is_some() {
        return photo::handle_photo(bot, msg, state).await;
    }

    // Anything else: nudge towards sending a photo.
    let _ = state
        .messenger
        .send_text(
            ChatId(msg.chat.id.0),
            "Надішли мені фото людини в одязі - знайду схожі речі на Tokopedia!",
        )
        .await;

    Ok(())
}
