//! Outbound delivery: fits a formatted response into the transport's payload
//! limits using the chunker, then sends it through the messaging port.

use crate::{
    chunker,
    domain::ChatId,
    messaging::{port::MessagingPort, types::MessengerLimits},
    Result,
};

/// Send a photo reply: the formatted text goes into the caption as far as it
/// fits, the rest follows as ordinary text messages.
pub async fn send_photo_report(
    api: &dyn MessagingPort,
    chat_id: ChatId,
    photo: &[u8],
    text: &str,
    limits: MessengerLimits,
) -> Result<()> {
    let (caption, follow_ups) =
        chunker::split_for_caption(text, limits.max_caption_len, limits.max_message_len);

    api.send_photo(chat_id, photo, Some(&caption)).await?;
    for chunk in follow_ups {
        api.send_text(chat_id, &chunk).await?;
    }

    Ok(())
}

/// Send a plain text reply, split into as many messages as the limit requires.
pub async fn send_text_report(
    api: &dyn MessagingPort,
    chat_id: ChatId,
    text: &str,
    limits: MessengerLimits,
) -> Result<()> {
    for chunk in chunker::split(text, limits.max_message_len) {
        api.send_text(chat_id, &chunk).await?;
    }
    Ok(())
}
