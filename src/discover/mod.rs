pub mod crtsh;
pub mod subdomain;
pub mod threatcrowd;
pub mod urlscan;

use std::fmt;

use crate::config::SourceEndpoints;

/// Decodes one source's raw response body into hostnames.
pub type ParseFn = fn(&[u8]) -> Result<Vec<String>, serde_json::Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
    ThreatCrowd,
    CrtSh,
    UrlScan,
}

impl Source {
    pub fn name(&self) -> &'static str {
        match self {
            Source::ThreatCrowd => "ThreatCrowd",
            Source::CrtSh => "Crt.sh",
            Source::UrlScan => "URLScan",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A source's endpoint template paired with the parser for its response shape.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub source: Source,
    pub template: String,
    pub parse: ParseFn,
}

impl SourceSpec {
    pub fn url_for(&self, domain: &str) -> String {
        self.template.replace("{domain}", domain)
    }
}

/// Ordered set of sources queried by a scan.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    specs: Vec<SourceSpec>,
}

impl SourceRegistry {
    pub fn from_endpoints(endpoints: &SourceEndpoints) -> Self {
        Self {
            specs: vec![
                SourceSpec {
                    source: Source::ThreatCrowd,
                    template: endpoints.threatcrowd.clone(),
                    parse: threatcrowd::parse,
                },
                SourceSpec {
                    source: Source::CrtSh,
                    template: endpoints.crtsh.clone(),
                    parse: crtsh::parse,
                },
                SourceSpec {
                    source: Source::UrlScan,
                    template: endpoints.urlscan.clone(),
                    parse: urlscan::parse,
                },
            ],
        }
    }

    pub fn specs(&self) -> &[SourceSpec] {
        &self.specs
    }

    pub fn get(&self, source: Source) -> Option<&SourceSpec> {
        self.specs.iter().find(|s| s.source == source)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::from_endpoints(&SourceEndpoints::default())
    }
}
