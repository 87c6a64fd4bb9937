//! Gemini adapter (image analysis).
//!
//! Calls the public `v1beta models/{model}:generateContent` endpoint with the
//! analysis prompt and the photo as inline JPEG data, then parses the model's
//! JSON answer into the core analysis types.

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

use lookbot_core::{
    analysis::{parse_analysis, Analysis},
    errors::Error,
    ports::ImageAnalyzer,
    Result,
};

pub mod prompt;

const API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Debug)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    prompt: String,
    http: reqwest::Client,
}

// ============== Wire Types ==============

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: &'static str,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: std::time::Duration,
        prompt: String,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::External(format!("gemini http client build: {e}")))?;

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            prompt,
            http,
        })
    }

    /// Send the prompt + image and return the raw model text.
    async fn generate(&self, image: &[u8]) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part {
                        text: Some(self.prompt.clone()),
                        inline_data: None,
                    },
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: "image/jpeg",
                            data: base64::engine::general_purpose::STANDARD.encode(image),
                        }),
                    },
                ],
            }],
        };

        let url = format!(
            "{API_ENDPOINT}/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let resp = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::External(format!("gemini request error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::External(format!(
                "gemini generateContent failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| Error::External(format!("gemini json error: {e}")))?;

        let text = extract_text(&parsed);
        if text.trim().is_empty() {
            return Err(Error::External(
                "gemini returned no candidate text".to_string(),
            ));
        }

        Ok(text)
    }
}

fn extract_text(resp: &GenerateContentResponse) -> String {
    resp.candidates
        .iter()
        .filter_map(|c| c.content.as_ref())
        .flat_map(|c| &c.parts)
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .join("")
}

#[async_trait]
impl ImageAnalyzer for GeminiClient {
    async fn analyze(&self, image: &[u8]) -> Result<Analysis> {
        tracing::info!(model = %self.model, bytes = image.len(), "analyzing image");
        let raw = self.generate(image).await?;
        let analysis = parse_analysis(&raw)?;
        tracing::info!(people = analysis.people.len(), "analysis parsed");
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_inline_data() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part {
                        text: Some("опиши одяг".to_string()),
                        inline_data: None,
                    },
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: "image/jpeg",
                            data: base64::engine::general_purpose::STANDARD.encode(b"jpeg"),
                        }),
                    },
                ],
            }],
        };

        let v = serde_json::to_value(&request).unwrap();
        assert_eq!(v["contents"][0]["role"], "user");
        assert_eq!(v["contents"][0]["parts"][0]["text"], "опиши одяг");
        assert_eq!(
            v["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/jpeg"
        );
        // The text part must not carry an inlineData key and vice versa.
        assert!(v["contents"][0]["parts"][0].get("inlineData").is_none());
        assert!(v["contents"][0]["parts"][1].get("text").is_none());
    }

    #[test]
    fn extracts_candidate_text() {
        let raw = r#"{
          "candidates": [
            {"content": {"parts": [{"text": "{\"people\""}, {"text": ": []}"}]}}
          ]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(extract_text(&resp), r#"{"people": []}"#);
    }

    #[test]
    fn empty_candidates_extract_to_empty_text() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(&resp), "");
    }
}
