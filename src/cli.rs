//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use arxiv_fetch_core::fetch::{
    ARXIV_ABS_BASE_URL, ARXIV_PDF_BASE_URL, CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS,
    TIMEOUT_RANGE_SECS,
};

/// Download articles from arXiv given the article id, optionally print and/or save the PDF.
#[derive(Parser, Debug)]
#[command(name = "arxiv-fetch")]
#[command(author, version, about)]
pub struct Args {
    /// Article(s) to download: comma-separated ids like YYMM.NNNNN,YYMM.NNNNN,
    /// or a file whose lines contain the article ids
    #[arg(short, long)]
    pub input: String,

    /// Directory to save the downloaded PDFs into (created if missing);
    /// nothing is written to disk if unspecified
    #[arg(short, long, value_name = "DIR")]
    pub save: Option<PathBuf>,

    /// Print each PDF on the default CUPS printer
    #[arg(short, long)]
    pub print: bool,

    /// Option passed to the print service as `-o KEY=VALUE` (repeatable)
    #[arg(long = "print-option", value_name = "KEY=VALUE", value_parser = parse_print_option)]
    pub print_options: Vec<String>,

    /// Keep going when an article fails instead of aborting the batch
    #[arg(short = 'k', long)]
    pub keep_going: bool,

    /// HTTP connect timeout in seconds (1-3600)
    #[arg(long, default_value_t = CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(TIMEOUT_RANGE_SECS))]
    pub connect_timeout: u64,

    /// HTTP request timeout in seconds (1-3600)
    #[arg(long, default_value_t = READ_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(TIMEOUT_RANGE_SECS))]
    pub read_timeout: u64,

    /// Base URL of abstract pages
    #[arg(long, env = "ARXIV_ABS_BASE_URL", default_value = ARXIV_ABS_BASE_URL, hide = true)]
    pub abs_base_url: String,

    /// Base URL of PDF documents
    #[arg(long, env = "ARXIV_PDF_BASE_URL", default_value = ARXIV_PDF_BASE_URL, hide = true)]
    pub pdf_base_url: String,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

fn parse_print_option(raw: &str) -> Result<String, String> {
    match raw.split_once('=') {
        Some((key, _)) if !key.trim().is_empty() => Ok(raw.to_string()),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
