use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use lookbot_core::{domain::ChatId, formatter};

use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat_id = ChatId(msg.chat.id.0);

    let (cmd, _args) = parse_command(text);
    let reply = match cmd.as_str() {
        "start" => formatter::format_start_message(),
        "help" => formatter::format_help_message(),
        _ => "Не знаю такої команди. Спробуй /help.",
    };

    if let Err(e) = state.messenger.send_text(chat_id, reply).await {
        tracing::error!(error = %e, command = %cmd, "failed to answer command");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_slash_and_bot_name() {
        assert_eq!(parse_command("/start"), ("start".to_string(), String::new()));
        assert_eq!(
            parse_command("/help@lookbot extra words"),
            ("help".to_string(), "extra words".to_string())
        );
    }
}
