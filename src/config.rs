use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::errors::ScanError;

/// What to do when one of the sources does not answer with 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPolicy {
    /// Any failed fetch fails the whole scan.
    #[default]
    FailScan,
    /// Keep going with whichever sources answered.
    BestEffort,
}

/// Endpoint templates; `{domain}` is replaced with the extracted domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceEndpoints {
    pub threatcrowd: String,
    pub crtsh: String,
    pub urlscan: String,
}

impl Default for SourceEndpoints {
    fn default() -> Self {
        Self {
            threatcrowd: "http://ci-www.threatcrowd.org/searchApi/v2/domain/report/?domain={domain}".into(),
            crtsh: "https://crt.sh/?q=%25.{domain}&output=json".into(),
            urlscan: "https://urlscan.io/api/v1/search/?q=domain:{domain}".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub request_timeout_secs: u64,
    pub scan_timeout_secs: u64,
    pub fetch_policy: FetchPolicy,
    pub dedup: bool,
    pub user_agent: String,
    pub out_dir: PathBuf,
    pub endpoints: Option<SourceEndpoints>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 20,
            scan_timeout_secs: 60,
            fetch_policy: FetchPolicy::FailScan,
            dedup: false,
            user_agent: "Mozilla/5.0".into(),
            out_dir: PathBuf::from("."),
            endpoints: None,
        }
    }
}

impl ScanConfig {
    /// Load a JSON config file. Keys that are absent keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ScanError> {
        let failed = |reason: String| ScanError::Config { path: path.to_path_buf(), reason };
        let data = std::fs::read_to_string(path).map_err(|e| failed(e.to_string()))?;
        serde_json::from_str(&data).map_err(|e| failed(e.to_string()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn scan_timeout(&self) -> Duration {
        Duration::from_secs(self.scan_timeout_secs)
    }

    pub fn endpoints(&self) -> SourceEndpoints {
        self.endpoints.clone().unwrap_or_default()
    }
}
