//! Tokopedia search-link building.

/// Build a Tokopedia search URL for an Indonesian query.
///
/// The query is fully percent-encoded (no characters exempt), matching how
/// Tokopedia's search page expects its `q` parameter.
pub fn search_url(base_url: &str, query: &str) -> String {
    format!("{base_url}{}", urlencoding::encode(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.tokopedia.com/search?q=";

    #[test]
    fn encodes_spaces_and_specials() {
        let url = search_url(BASE, "Kemeja pria putih & murah");
        assert_eq!(
            url,
            "https://www.tokopedia.com/search?q=Kemeja%20pria%20putih%20%26%20murah"
        );
    }

    #[test]
    fn plain_query_passes_through() {
        assert_eq!(search_url(BASE, "topi"), format!("{BASE}topi"));
    }
}
