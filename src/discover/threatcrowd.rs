use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DomainReport {
    #[serde(default)]
    subdomains: Option<Vec<String>>,
}

pub fn parse(body: &[u8]) -> Result<Vec<String>, serde_json::Error> {
    let report: DomainReport = serde_json::from_slice(body)?;
    Ok(report.subdomains.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subdomains_verbatim() {
        let body = br#"{"response_code":"1","subdomains":["mail.example.com","","Dev.Example.com "]}"#;
        assert_eq!(parse(body).unwrap(), vec!["mail.example.com", "", "Dev.Example.com "]);
    }

    #[test]
    fn missing_or_null_field() {
        assert!(parse(br#"{"response_code":"0"}"#).unwrap().is_empty());
        assert!(parse(br#"{"subdomains":null}"#).unwrap().is_empty());
    }

    #[test]
    fn wrong_shape() {
        assert!(parse(br#"["a.example.com"]"#).is_err());
        assert!(parse(br#"{"subdomains":"a.example.com"}"#).is_err());
    }
}
