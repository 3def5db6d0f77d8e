use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target domain or URL (e.g. example.com or https://www.example.com/path). Prompted for when omitted
    pub target: Option<String>,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Per-request timeout in seconds (default: 20)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Whole-scan timeout in seconds (default: 60)
    #[arg(long)]
    pub scan_timeout: Option<u64>,

    /// Keep results from the sources that answered when another one fails
    #[arg(long, default_value_t = false)]
    pub best_effort: bool,

    /// Drop repeated hostnames from the output
    #[arg(long, default_value_t = false)]
    pub dedup: bool,

    /// Directory the results file is written to (default: current directory)
    #[arg(short = 'o', long)]
    pub out: Option<String>,

    /// JSON config file (timeouts, policy, endpoint templates)
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
