use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    page: Option<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    domain: Option<String>,
}

/// One hostname per search hit, taken from `results[].page.domain`.
pub fn parse(body: &[u8]) -> Result<Vec<String>, serde_json::Error> {
    let resp: SearchResponse = serde_json::from_slice(body)?;
    Ok(resp
        .results
        .into_iter()
        .filter_map(|r| r.page.and_then(|p| p.domain))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_domains_in_order() {
        let body = br#"{"total":3,"results":[
            {"page":{"domain":"www.example.com","url":"https://www.example.com/"}},
            {"task":{"uuid":"x"}},
            {"page":{"domain":"cdn.example.com"}},
            {"page":{"domain":"www.example.com"}}
        ]}"#;
        assert_eq!(parse(body).unwrap(), vec!["www.example.com", "cdn.example.com", "www.example.com"]);
    }

    #[test]
    fn truncated_body() {
        assert!(parse(br#"{"results":[{"page":"#).is_err());
    }
}
