use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::discover::subdomain::ScanReport;
use crate::errors::ScanError;
use crate::output::{format_record, output_file_name, write_subdomains};

/// Console lines of a finished run plus its outcome.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub lines: Vec<String>,
    /// Results file, when it was written.
    pub saved_to: Option<PathBuf>,
    pub success: bool,
}

impl RunSummary {
    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Turn a scan result into console output and persist it under `out_dir`.
///
/// Results are listed before the file is written, so they are still shown
/// when the write fails.
pub fn finish_scan(input: &str, result: Result<ScanReport, ScanError>, out_dir: &Path) -> RunSummary {
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "scan aborted");
            return RunSummary {
                lines: vec![String::new(), format!("Failed to find subdomains of {}", input)],
                saved_to: None,
                success: false,
            };
        }
    };

    let mut lines = vec![String::new(), format!("Subdomains of {} found!", input), String::new()];
    lines.extend(report.records.iter().map(|h| format_record(h)));
    lines.push(String::new());

    let path = out_dir.join(output_file_name(&report.domain));
    match write_subdomains(&path, &report.records) {
        Ok(()) => {
            lines.push(format!("Subdomains saved to '{}'", path.display()));
            RunSummary { lines, saved_to: Some(path), success: true }
        }
        Err(e) => {
            tracing::error!(error = %e, "could not persist results");
            lines.push(format!("Failed to save subdomains to file: {}", e));
            RunSummary { lines, saved_to: None, success: false }
        }
    }
}
