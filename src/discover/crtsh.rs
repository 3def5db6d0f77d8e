use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CrtShEntry {
    #[serde(default)]
    name_value: Option<String>,
}

/// crt.sh returns an array of certificate entries.
pub fn parse(body: &[u8]) -> Result<Vec<String>, serde_json::Error> {
    let entries: Vec<CrtShEntry> = serde_json::from_slice(body)?;
    let mut out = Vec::new();
    for entry in entries {
        if let Some(nv) = entry.name_value {
            // name_value can contain multiple names separated by newlines
            out.extend(nv.split('\n').filter(|n| !n.is_empty()).map(str::to_string));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_multi_name_certificates() {
        let body = br#"[
            {"id": 1, "name_value": "a.example.com\nb.example.com"},
            {"id": 2, "name_value": "c.example.com\n"},
            {"id": 3}
        ]"#;
        assert_eq!(parse(body).unwrap(), vec!["a.example.com", "b.example.com", "c.example.com"]);
    }

    #[test]
    fn keeps_duplicates_and_wildcards() {
        let body = br#"[{"name_value": "*.example.com"}, {"name_value": "*.example.com"}]"#;
        assert_eq!(parse(body).unwrap(), vec!["*.example.com", "*.example.com"]);
    }

    #[test]
    fn html_error_page_is_an_error() {
        assert!(parse(b"<html>502 Bad Gateway</html>").is_err());
    }
}
