pub mod concurrent;
pub mod config;
pub mod discover;
pub mod errors;
pub mod http_client;
pub mod output;
pub mod utils;

pub use crate::discover::subdomain::{ScanReport, SourceOutcome, SourceStatus, SubdomainScanner};
pub use crate::errors::ScanError;
