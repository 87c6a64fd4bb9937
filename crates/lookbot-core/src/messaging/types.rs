/// Outgoing "chat action" (typing indicator, etc).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
    UploadPhoto,
}

/// Per-message payload limits of a messenger implementation.
///
/// Telegram: 4096 characters for a text message, 1024 for a photo caption.
#[derive(Clone, Copy, Debug)]
pub struct MessengerLimits {
    pub max_message_len: usize,
    pub max_caption_len: usize,
}

/// Capabilities / limits of a messenger implementation.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    pub supports_photos: bool,
    pub supports_chat_actions: bool,
    pub limits: MessengerLimits,
}
