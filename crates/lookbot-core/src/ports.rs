use async_trait::async_trait;

use crate::{analysis::Analysis, Result};

/// Port to the image-understanding service.
///
/// The Gemini adapter is the first implementation. Takes raw JPEG bytes,
/// returns the parsed analysis or a typed failure (`Error::Analysis` when
/// the service answered with something unusable).
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    async fn analyze(&self, image: &[u8]) -> Result<Analysis>;
}
