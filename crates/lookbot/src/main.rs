use std::sync::Arc;

use lookbot_core::{config::Config, lookbook::Lookbook, ports::ImageAnalyzer};
use lookbot_gemini::{prompt, GeminiClient};

#[tokio::main]
async fn main() -> Result<(), lookbot_core::Error> {
    lookbot_core::logging::init("lookbot")?;

    let cfg = Arc::new(Config::load()?);

    let lookbook = Lookbook::load(&cfg.lookbook_path)?;
    let analysis_prompt = prompt::analysis_prompt(&lookbook.reference_examples());

    let analyzer: Arc<dyn ImageAnalyzer> = Arc::new(GeminiClient::new(
        &cfg.gemini_api_key,
        &cfg.gemini_model,
        cfg.gemini_timeout,
        analysis_prompt,
    )?);

    tracing::info!(model = %cfg.gemini_model, "starting lookbot");

    lookbot_telegram::router::run_polling(cfg, analyzer)
        .await
        .map_err(|e| lookbot_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
