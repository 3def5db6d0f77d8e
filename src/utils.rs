use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ScanError;

// optional scheme, optional userinfo, optional "www." (any case), then the host,
// which must run to the end of input or to ':', '/' or '?'
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*://)?(?:[^@/\s]+@)?(?i:www\.)?([^:/?@\s]+)(?:[:/?]|$)")
        .expect("domain regex is valid")
});

/// Read the first whitespace-delimited token from `reader`; empty when there is none.
pub fn read_target<R: BufRead>(mut reader: R) -> std::io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.split_whitespace().next().unwrap_or_default().to_string())
}

/// Pull the bare hostname out of a URL or loose domain string.
///
/// `https://user@www.example.com:8080/path?q=1` becomes `example.com`.
pub fn extract_domain(input: &str) -> Result<String, ScanError> {
    let invalid = || ScanError::InvalidUrlFormat { input: input.to_string() };
    let trimmed = input.trim();
    let caps = DOMAIN_RE.captures(trimmed).ok_or_else(invalid)?;
    let host = caps.get(1).ok_or_else(invalid)?;
    // a bare scheme ("https://") must not be mistaken for a host
    if trimmed[host.end()..].starts_with("://") {
        return Err(invalid());
    }
    let host = host.as_str();
    if !host.chars().any(|c| c.is_alphanumeric()) {
        return Err(invalid());
    }
    Ok(host.to_string())
}
