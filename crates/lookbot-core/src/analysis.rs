//! Typed model of the image-analysis result.
//!
//! The analysis service returns free text that is expected to be JSON; it
//! often arrives wrapped in a markdown code fence. Parse failures are a real
//! outcome (`Error::Analysis`), not a silent fallback value.

use serde::Deserialize;

use crate::{errors::Error, Result};

/// Result of analyzing one photo.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub people: Vec<Person>,
}

/// One person detected on the photo.
#[derive(Clone, Debug, Deserialize)]
pub struct Person {
    /// Short Ukrainian description of the person.
    #[serde(default)]
    pub description_ua: Option<String>,
    #[serde(default)]
    pub items: Vec<ClothingItem>,
}

/// One clothing item with its Tokopedia search query.
#[derive(Clone, Debug, Deserialize)]
pub struct ClothingItem {
    /// Ukrainian display name.
    #[serde(default)]
    pub name_ua: Option<String>,
    /// Indonesian search query for Tokopedia.
    #[serde(default)]
    pub search_query_id: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Accessory,
    Footwear,
    Headwear,
    #[serde(other)]
    Other,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.people.iter().all(|p| p.items.is_empty())
    }
}

const RAW_PREVIEW_LEN: usize = 300;

/// Parse the raw model output into an [`Analysis`].
pub fn parse_analysis(raw: &str) -> Result<Analysis> {
    let cleaned = strip_code_fences(raw.trim());
    serde_json::from_str::<Analysis>(cleaned).map_err(|e| Error::Analysis {
        reason: format!("response is not valid analysis JSON: {e}"),
        raw: preview(raw),
    })
}

/// Remove a surrounding ```json ... ``` fence if the model added one.
fn strip_code_fences(text: &str) -> &str {
    let mut t = text;
    if let Some(rest) = t.strip_prefix("```json") {
        t = rest;
    } else if let Some(rest) = t.strip_prefix("```") {
        t = rest;
    }
    if let Some(rest) = t.strip_suffix("```") {
        t = rest;
    }
    t.trim()
}

fn preview(s: &str) -> String {
    if s.chars().count() <= RAW_PREVIEW_LEN {
        return s.to_string();
    }
    format!("{}...", s.chars().take(RAW_PREVIEW_LEN).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
      "people": [
        {
          "description_ua": "Хлопець у пляжному луці",
          "items": [
            {
              "name_ua": "Біла сорочка з квітами",
              "search_query_id": "Kemeja pria putih motif bunga murah",
              "category": "top"
            },
            {
              "name_ua": "Чорні шорти",
              "search_query_id": "Celana pendek pria hitam polos murah",
              "category": "bottom"
            }
          ]
        }
      ]
    }"#;

    #[test]
    fn parses_plain_json() {
        let a = parse_analysis(SAMPLE).unwrap();
        assert_eq!(a.people.len(), 1);
        assert_eq!(a.people[0].items.len(), 2);
        assert_eq!(a.people[0].items[0].category, Some(Category::Top));
    }

    #[test]
    fn parses_json_wrapped_in_markdown_fence() {
        let fenced = format!("```json\n{SAMPLE}\n```");
        let a = parse_analysis(&fenced).unwrap();
        assert_eq!(a.people.len(), 1);
    }

    #[test]
    fn unknown_category_falls_back_to_other() {
        let raw = r#"{"people":[{"items":[{"name_ua":"x","category":"swimwear"}]}]}"#;
        let a = parse_analysis(raw).unwrap();
        assert_eq!(a.people[0].items[0].category, Some(Category::Other));
    }

    #[test]
    fn malformed_response_is_an_explicit_error() {
        let err = parse_analysis("Sorry, I cannot analyze this image.").unwrap_err();
        match err {
            Error::Analysis { raw, .. } => assert!(raw.contains("Sorry")),
            other => panic!("expected analysis error, got {other:?}"),
        }
    }

    #[test]
    fn long_raw_response_is_truncated_in_the_error() {
        let raw = "not json ".repeat(200);
        let err = parse_analysis(&raw).unwrap_err();
        match err {
            Error::Analysis { raw, .. } => {
                assert!(raw.ends_with("..."));
                assert!(raw.chars().count() <= RAW_PREVIEW_LEN + 3);
            }
            other => panic!("expected analysis error, got {other:?}"),
        }
    }

    #[test]
    fn empty_people_list_is_empty_analysis() {
        let a = parse_analysis(r#"{"people": []}"#).unwrap();
        assert!(a.is_empty());
    }
}
