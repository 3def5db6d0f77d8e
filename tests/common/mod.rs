#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use subhunter::config::{ScanConfig, SourceEndpoints};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DOMAIN: &str = "example.com";

pub fn threatcrowd_body() -> Value {
    json!({
        "response_code": "1",
        "subdomains": ["mail.example.com", "dev.example.com"]
    })
}

pub fn crtsh_body() -> Value {
    json!([
        {"id": 11, "name_value": "a.example.com\nb.example.com"},
        {"id": 12, "name_value": "mail.example.com"}
    ])
}

pub fn urlscan_body() -> Value {
    json!({
        "total": 2,
        "results": [
            {"page": {"domain": "www.example.com", "url": "https://www.example.com/"}},
            {"page": {"domain": "cdn.example.com"}}
        ]
    })
}

/// Hostnames the three canned bodies encode, in source order.
pub fn expected_union() -> Vec<&'static str> {
    vec![
        "mail.example.com",
        "dev.example.com",
        "a.example.com",
        "b.example.com",
        "mail.example.com",
        "www.example.com",
        "cdn.example.com",
    ]
}

/// Endpoint templates pointing at the mock server.
pub fn endpoints(server: &MockServer) -> SourceEndpoints {
    let base = server.uri();
    SourceEndpoints {
        threatcrowd: format!("{base}/threatcrowd/report/?domain={{domain}}"),
        crtsh: format!("{base}/crtsh/?q=%25.{{domain}}&output=json"),
        urlscan: format!("{base}/urlscan/search/?q=domain:{{domain}}"),
    }
}

pub fn config(server: &MockServer) -> ScanConfig {
    ScanConfig {
        request_timeout_secs: 5,
        scan_timeout_secs: 10,
        endpoints: Some(endpoints(server)),
        ..ScanConfig::default()
    }
}

pub async fn mount_threatcrowd(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/threatcrowd/report/"))
        .and(query_param("domain", DOMAIN))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mount_crtsh(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/crtsh/"))
        .and(query_param("q", format!("%.{DOMAIN}")))
        .and(query_param("output", "json"))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mount_urlscan(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/urlscan/search/"))
        .and(query_param("q", format!("domain:{DOMAIN}")))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mock server answering all three sources with the canned bodies.
pub async fn healthy_server() -> MockServer {
    let server = MockServer::start().await;
    mount_threatcrowd(&server, ResponseTemplate::new(200).set_body_json(threatcrowd_body())).await;
    mount_crtsh(&server, ResponseTemplate::new(200).set_body_json(crtsh_body())).await;
    mount_urlscan(&server, ResponseTemplate::new(200).set_body_json(urlscan_body())).await;
    server
}

pub fn slow(body: Value, delay: Duration) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body).set_delay(delay)
}

pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("subhunter-it-{}-{}", std::process::id(), name));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
