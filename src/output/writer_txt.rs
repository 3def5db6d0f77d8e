use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::ScanError;

pub fn format_record(host: &str) -> String {
    format!("http://{}", host)
}

pub fn output_file_name(domain: &str) -> String {
    format!("{}_subdomains.txt", domain)
}

/// Write one `http://<host>` line per record, replacing any existing file.
pub fn write_subdomains(path: &Path, records: &[String]) -> Result<(), ScanError> {
    let failed = |source| ScanError::FileWriteFailed { path: path.to_path_buf(), source };
    let f = File::create(path).map_err(failed)?;
    let mut w = BufWriter::new(f);
    for host in records {
        writeln!(w, "{}", format_record(host)).map_err(failed)?;
    }
    w.flush().map_err(failed)?;
    Ok(())
}
