pub mod report;
pub mod writer_txt;

pub use report::finish_scan;
pub use report::RunSummary;
pub use writer_txt::format_record;
pub use writer_txt::output_file_name;
pub use writer_txt::write_subdomains;
