use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use teloxide::{net::Download, prelude::*, types::Message};

use lookbot_core::{
    domain::ChatId,
    formatter,
    messaging::{
        outbound,
        types::{ChatAction, MessengerLimits},
    },
    Error,
};

use crate::router::AppState;

static PHOTO_COUNTER: AtomicUsize = AtomicUsize::new(1);

async fn download_photo(
    bot: &Bot,
    state: &AppState,
    photos: &[teloxide::types::PhotoSize],
) -> anyhow::Result<Vec<u8>> {
    // Last size is the largest (best quality).
    let best = photos
        .last()
        .ok_or_else(|| anyhow::anyhow!("no photo sizes"))?;
    let file = bot.get_file(best.file.id.clone()).await?;

    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let n = PHOTO_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = state.cfg.temp_dir.join(format!("photo_{ts}_{n}.jpg"));

    let downloaded = {
        let mut dst = tokio::fs::File::create(&path).await?;
        bot.download_file(&file.path, &mut dst).await
    };

    // Remove the temp file whether or not the download succeeded.
    let bytes = consume_temp_file(&path).await;
    downloaded?;
    Ok(bytes?)
}

/// Read the file and remove it, even when the read fails.
async fn consume_temp_file(path: &std::path::Path) -> std::io::Result<Vec<u8>> {
    let bytes = tokio::fs::read(path).await;
    let _ = tokio::fs::remove_file(path).await;
    bytes
}

pub async fn handle_photo(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(photos) = msg.photo() else {
        return Ok(());
    };
    let chat_id = ChatId(msg.chat.id.0);
    let user_id = msg.from().map(|u| u.id.0).unwrap_or_default();

    tracing::info!(user_id, "received photo");

    let notice = state
        .messenger
        .send_text(chat_id, formatter::format_processing_message())
        .await
        .ok();
    let _ = state
        .messenger
        .send_chat_action(chat_id, ChatAction::UploadPhoto)
        .await;

    let photo_bytes = match download_photo(&bot, &state, photos).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(error = %e, "photo download failed");
            if let Some(n) = notice {
                let _ = state.messenger.delete_message(n).await;
            }
            let _ = state
                .messenger
                .send_text(chat_id, &formatter::format_error_message(None))
                .await;
            return Ok(());
        }
    };

    tracing::info!(bytes = photo_bytes.len(), "photo downloaded");

    let limits = MessengerLimits {
        max_message_len: state.cfg.telegram_message_limit,
        max_caption_len: state.cfg.telegram_caption_limit,
    };

    match state.analyzer.analyze(&photo_bytes).await {
        Ok(analysis) => {
            let response =
                formatter::format_analysis_response(&analysis, &state.cfg.tokopedia_base_url);
            if let Some(n) = notice {
                let _ = state.messenger.delete_message(n).await;
            }

            // Send the formatted response together with the original photo.
            if let Err(e) = outbound::send_photo_report(
                state.messenger.as_ref(),
                chat_id,
                &photo_bytes,
                &response,
                limits,
            )
            .await
            {
                tracing::error!(error = %e, "failed to deliver analysis response");
            } else {
                tracing::info!("sent analysis response with photo");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "image analysis failed");
            if let Some(n) = notice {
                let _ = state.messenger.delete_message(n).await;
            }
            let reply = match &e {
                Error::Analysis { reason, .. } => {
                    format!("Ой, щось пішло не так при аналізі фото! Помилка: {reason}")
                }
                _ => formatter::format_error_message(None),
            };
            let _ = outbound::send_text_report(state.messenger.as_ref(), chat_id, &reply, limits)
                .await;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_path(prefix: &str) -> std::path::PathBuf {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let pid = std::process::id();
        std::path::PathBuf::from(format!("/tmp/lookbot-{prefix}-{pid}-{ts}.jpg"))
    }

    #[tokio::test]
    async fn consume_temp_file_reads_and_removes() {
        let path = tmp_path("consume-ok");
        tokio::fs::write(&path, b"jpeg bytes").await.unwrap();

        let bytes = consume_temp_file(&path).await.unwrap();
        assert_eq!(bytes, b"jpeg bytes");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn consume_temp_file_surfaces_read_errors_without_leftovers() {
        let path = tmp_path("consume-missing");
        assert!(consume_temp_file(&path).await.is_err());
        assert!(!path.exists());
    }
}
