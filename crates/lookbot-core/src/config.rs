use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{errors::Error, Result};

/// Typed configuration, constructed once at process start and shared via
/// `Arc`. No global mutable state.
#[derive(Clone, Debug)]
pub struct Config {
    // Credentials
    pub telegram_bot_token: String,
    pub gemini_api_key: String,

    // Analysis
    pub gemini_model: String,
    pub gemini_timeout: Duration,

    // Links
    pub tokopedia_base_url: String,

    // Reference data
    pub lookbook_path: PathBuf,

    // Runtime
    pub temp_dir: PathBuf,

    // Telegram limits
    pub telegram_message_limit: usize,
    pub telegram_caption_limit: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        // Required env vars
        let telegram_bot_token = env_str("TELEGRAM_BOT_API").unwrap_or_default();
        if telegram_bot_token.trim().is_empty()
            || telegram_bot_token == "YOUR_TELEGRAM_BOT_TOKEN_HERE"
        {
            return Err(Error::Config(
                "TELEGRAM_BOT_API environment variable is required".to_string(),
            ));
        }

        let gemini_api_key = env_str("GEMINI_API_KEY").unwrap_or_default();
        if gemini_api_key.trim().is_empty() {
            return Err(Error::Config(
                "GEMINI_API_KEY environment variable is required".to_string(),
            ));
        }

        let gemini_model = env_str("GEMINI_MODEL").unwrap_or_else(|| "gemini-2.5-pro".to_string());
        let gemini_timeout = Duration::from_millis(env_u64("GEMINI_TIMEOUT_MS").unwrap_or(60_000));

        let tokopedia_base_url = env_str("TOKOPEDIA_BASE_URL")
            .unwrap_or_else(|| "https://www.tokopedia.com/search?q=".to_string());

        let lookbook_path = env_path("LOOKBOOK_PATH")
            .unwrap_or_else(|| PathBuf::from("beach-party-tokopedia-looks.json"));

        let temp_dir = PathBuf::from(env_str("TEMP_DIR").unwrap_or("/tmp/lookbot".to_string()));
        fs::create_dir_all(&temp_dir)?;

        // Telegram documents 4096 chars per message and 1024 per caption.
        let telegram_message_limit = env_usize("TELEGRAM_MESSAGE_LIMIT").unwrap_or(4096);
        let telegram_caption_limit = env_usize("TELEGRAM_CAPTION_LIMIT").unwrap_or(1024);

        Ok(Self {
            telegram_bot_token,
            gemini_api_key,
            gemini_model,
            gemini_timeout,
            tokopedia_base_url,
            lookbook_path,
            temp_dir,
            telegram_message_limit,
            telegram_caption_limit,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn env_usize(key: &str) -> Option<usize> {
    env_str(key).and_then(|s| s.trim().parse::<usize>().ok())
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).map(PathBuf::from)
}
