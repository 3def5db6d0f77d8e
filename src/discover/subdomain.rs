use bytes::Bytes;
use reqwest::Client;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::concurrent::{dedup_preserving_order, ResultSet};
use crate::config::{FetchPolicy, ScanConfig};
use crate::discover::{ParseFn, Source, SourceRegistry};
use crate::errors::ScanError;
use crate::http_client;
use crate::utils::extract_domain;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Ok(usize),
    FetchFailed(String),
    ParseFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOutcome {
    pub source: Source,
    pub status: SourceStatus,
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    /// What the user typed.
    pub input: String,
    pub domain: String,
    pub records: Vec<String>,
    /// One entry per queried source, in registry order.
    pub sources: Vec<SourceOutcome>,
}

impl ScanReport {
    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.sources.iter().filter(|o| !matches!(o.status, SourceStatus::Ok(_)))
    }
}

/// Queries every registered source for one domain and merges what they return.
pub struct SubdomainScanner {
    cfg: ScanConfig,
    registry: SourceRegistry,
    client: Client,
}

impl SubdomainScanner {
    pub fn new(cfg: ScanConfig) -> Result<Self, ScanError> {
        let registry = SourceRegistry::from_endpoints(&cfg.endpoints());
        Self::with_registry(cfg, registry)
    }

    pub fn with_registry(cfg: ScanConfig, registry: SourceRegistry) -> Result<Self, ScanError> {
        let client = http_client::build_client(&cfg)?;
        Ok(Self { cfg, registry, client })
    }

    pub async fn scan(&self, input: &str) -> Result<ScanReport, ScanError> {
        self.scan_with_cancel(input, CancellationToken::new()).await
    }

    /// Run a scan bounded by the configured scan timeout.
    ///
    /// Cancelling `token` or hitting the deadline drops the in-flight task sets,
    /// which aborts every outstanding request.
    pub async fn scan_with_cancel(
        &self,
        input: &str,
        token: CancellationToken,
    ) -> Result<ScanReport, ScanError> {
        let domain = extract_domain(input)?;
        tracing::info!(input, domain = %domain, sources = self.registry.len(), "Starting subdomain scan");

        let secs = self.cfg.scan_timeout_secs;
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::warn!(domain = %domain, "scan cancelled");
                Err(ScanError::Cancelled)
            }
            res = tokio::time::timeout(self.cfg.scan_timeout(), self.run(input, domain.clone())) => {
                res.unwrap_or_else(|_| {
                    tracing::error!(domain = %domain, secs, "scan timed out");
                    Err(ScanError::Timeout { secs })
                })
            }
        }
    }

    async fn run(&self, input: &str, domain: String) -> Result<ScanReport, ScanError> {
        let fetched = self.fetch_all(&domain).await?;

        let mut outcomes = Vec::new();
        let mut bodies = Vec::new();
        let mut first_failure = None;
        for (source, res) in fetched {
            match res {
                Ok(body) => bodies.push((source, body)),
                Err(e) => {
                    tracing::error!(%source, error = %e, "fetch failed");
                    outcomes.push(SourceOutcome {
                        source,
                        status: SourceStatus::FetchFailed(e.to_string()),
                    });
                    first_failure.get_or_insert(e);
                }
            }
        }

        if let Some(err) = first_failure {
            match self.cfg.fetch_policy {
                FetchPolicy::FailScan => return Err(err),
                // nothing answered, so there is nothing to be best-effort about
                FetchPolicy::BestEffort if bodies.is_empty() => return Err(err),
                FetchPolicy::BestEffort => {
                    tracing::warn!(
                        failed = outcomes.len(),
                        remaining = bodies.len(),
                        "continuing with the sources that answered"
                    );
                }
            }
        }

        let results = ResultSet::new();
        outcomes.extend(self.parse_all(bodies, &results).await?);
        outcomes.sort_by_key(|o| o.source);

        let mut records = results.into_records();
        if self.cfg.dedup {
            records = dedup_preserving_order(records);
        }
        tracing::info!(domain = %domain, total = records.len(), "scan finished");

        Ok(ScanReport {
            input: input.to_string(),
            domain,
            records,
            sources: outcomes,
        })
    }

    /// Fire one GET per source and wait for all of them.
    async fn fetch_all(&self, domain: &str) -> Result<Vec<(Source, Result<Bytes, ScanError>)>, ScanError> {
        let mut tasks = JoinSet::new();
        for spec in self.registry.specs() {
            let client = self.client.clone();
            let source = spec.source;
            let url = spec.url_for(domain);
            tasks.spawn(async move {
                let res = http_client::fetch_body(&client, source, &url).await;
                (source, res)
            });
        }

        let mut out = Vec::with_capacity(self.registry.len());
        while let Some(joined) = tasks.join_next().await {
            out.push(joined?);
        }
        out.sort_by_key(|(source, _)| *source);
        Ok(out)
    }

    /// Parse every fetched body in its own task. Returns only after each
    /// parser has committed to `results` or reported its failure.
    async fn parse_all(
        &self,
        bodies: Vec<(Source, Bytes)>,
        results: &ResultSet,
    ) -> Result<Vec<SourceOutcome>, ScanError> {
        let mut tasks = JoinSet::new();
        for (source, body) in bodies {
            let Some(parse) = self.registry.get(source).map(|s| s.parse) else {
                continue;
            };
            let results = results.clone();
            tasks.spawn(async move { parse_source(source, parse, &body, &results) });
        }

        let mut outcomes = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            outcomes.push(joined?);
        }
        Ok(outcomes)
    }
}

fn parse_source(source: Source, parse: ParseFn, body: &[u8], results: &ResultSet) -> SourceOutcome {
    let status = match parse(body) {
        Ok(hosts) => {
            let count = hosts.len();
            results.commit(source, hosts);
            tracing::info!(%source, count, "parsed response");
            SourceStatus::Ok(count)
        }
        Err(e) => {
            let err = ScanError::ParseFailed { provider: source, reason: e.to_string() };
            tracing::warn!(error = %err, "skipping source");
            SourceStatus::ParseFailed(e.to_string())
        }
    };
    SourceOutcome { source, status }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_failure_commits_nothing() {
        let results = ResultSet::new();
        let outcome = parse_source(Source::CrtSh, crate::discover::crtsh::parse, b"not json", &results);
        assert!(matches!(outcome.status, SourceStatus::ParseFailed(_)));
        assert!(results.is_empty());
    }

    #[test]
    fn parse_success_commits_hosts() {
        let results = ResultSet::new();
        let body = br#"{"subdomains":["a.example.com","b.example.com"]}"#;
        let outcome = parse_source(Source::ThreatCrowd, crate::discover::threatcrowd::parse, body, &results);
        assert_eq!(outcome.status, SourceStatus::Ok(2));
        assert_eq!(results.count_for(Source::ThreatCrowd), 2);
    }

    #[tokio::test]
    async fn invalid_input_fails_before_any_request() {
        let scanner = SubdomainScanner::new(ScanConfig::default()).unwrap();
        let err = scanner.scan("???").await.unwrap_err();
        assert!(matches!(err, ScanError::InvalidUrlFormat { .. }));
    }

    #[tokio::test]
    async fn cancelled_token_stops_scan() {
        let scanner = SubdomainScanner::new(ScanConfig::default()).unwrap();
        let token = CancellationToken::new();
        token.cancel();
        let err = scanner.scan_with_cancel("example.com", token).await.unwrap_err();
        assert!(matches!(err, ScanError::Cancelled));
    }
}
