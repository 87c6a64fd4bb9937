//! Reference data: curated beach-party looks with known-good Tokopedia
//! queries. Used for few-shot examples in the analysis prompt and for query
//! refinement.

use std::path::Path;

use serde::Deserialize;

use crate::Result;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Lookbook {
    #[serde(default)]
    looks: Looks,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct Looks {
    #[serde(default)]
    male_unisex: Vec<Look>,
    #[serde(default)]
    female: Vec<Look>,
    #[serde(default)]
    accessories: Vec<Accessory>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Look {
    pub name: String,
    #[serde(default)]
    pub searches: Vec<Search>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Search {
    pub query: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Accessory {
    pub name_ua: String,
    pub query: String,
}

impl Lookbook {
    /// Load the lookbook from disk. A missing file is not an error: the bot
    /// still works, the prompt just carries no reference examples.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "lookbook file not found, using empty lookbook");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let lookbook = serde_json::from_str(&contents)?;
        Ok(lookbook)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Few-shot example lines for the analysis prompt: a handful of looks
    /// from each group, one query per look.
    pub fn reference_examples(&self) -> String {
        let mut examples = Vec::new();

        for look in self.looks.male_unisex.iter().take(3) {
            if let Some(search) = look.searches.first() {
                examples.push(format!("- {} -> \"{}\"", look.name, search.query));
            }
        }
        for look in self.looks.female.iter().take(3) {
            if let Some(search) = look.searches.first() {
                examples.push(format!("- {} -> \"{}\"", look.name, search.query));
            }
        }
        for acc in self.looks.accessories.iter().take(5) {
            examples.push(format!("- {} -> \"{}\"", acc.name_ua, acc.query));
        }

        examples.join("\n")
    }

    /// Look up a curated query matching `query` (exact query match, or the
    /// query appearing in an accessory's Ukrainian name).
    pub fn find_similar(&self, query: &str) -> Option<&str> {
        let query_lower = query.to_lowercase();

        // Accessories first: they carry a direct query.
        for acc in &self.looks.accessories {
            if acc.query.to_lowercase() == query_lower {
                return Some(&acc.query);
            }
            if acc.name_ua.to_lowercase().contains(&query_lower) {
                return Some(&acc.query);
            }
        }

        for look in self.looks.male_unisex.iter().chain(&self.looks.female) {
            for search in &look.searches {
                if search.query.to_lowercase() == query_lower {
                    return Some(&search.query);
                }
            }
        }

        None
    }

    pub fn accessory_suggestions(&self, count: usize) -> &[Accessory] {
        let n = count.min(self.looks.accessories.len());
        &self.looks.accessories[..n]
    }
}
