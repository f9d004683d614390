//! dirsize - list a directory's children sorted by their recursive size.
//!
//! Usage:
//!   dirsize list --root PATH --sort asc|desc   Print the sorted listing
//!   dirsize list ... --format json             Print entries as JSON
//!   dirsize serve [--addr HOST:PORT]           Serve the HTML page and JSON API
//!   dirsize --help                             Show help

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dirsize_core::{Entry, Listing, ScanRequest};
use dirsize_scan::DirScanner;
use dirsize_web::ServerConfig;

#[derive(Parser)]
#[command(
    name = "dirsize",
    version,
    about = "List a directory's children sorted by size",
    long_about = "dirsize sizes every file and subdirectory directly inside a directory \
                  and lists them by size.\n\n\
                  Use `dirsize list` for terminal output or `dirsize serve` for the \
                  HTML page and JSON API."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a directory and print its children by size
    List {
        /// Directory to scan
        #[arg(long)]
        root: Option<String>,

        /// Sort direction: asc or desc
        #[arg(long)]
        sort: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Serve the HTML page and JSON API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:9015")]
        addr: SocketAddr,

        /// Statistics collector URL (reporting is off when omitted)
        #[arg(long)]
        stats_url: Option<String>,

        /// Directory served under /web/static/
        #[arg(long, default_value = "web/static")]
        static_dir: PathBuf,

        /// Seconds in-flight requests get after Ctrl-C
        #[arg(long, default_value_t = 5)]
        shutdown_timeout: u64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Command::List { root, sort, format } => {
            run_list(root.as_deref(), sort.as_deref(), format)?;
        }
        Command::Serve {
            addr,
            stats_url,
            static_dir,
            shutdown_timeout,
        } => {
            let mut builder = ServerConfig::builder();
            builder
                .addr(addr)
                .static_dir(static_dir)
                .shutdown_timeout(Duration::from_secs(shutdown_timeout));
            if let Some(url) = stats_url {
                builder.stats_url(url);
            }
            let config = builder.build().context("Invalid server configuration")?;
            run_serve(config)?;
        }
    }

    Ok(())
}

/// Scan and print a listing.
///
/// Invalid parameters and unreadable roots are reported on stdout and end
/// the command normally.
fn run_list(root: Option<&str>, sort: Option<&str>, format: OutputFormat) -> Result<()> {
    let request = match ScanRequest::parse(root, sort) {
        Ok(request) => request,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let scanner = DirScanner::new().context("Failed to start scanner")?;
    let listing = match scanner.run(&request) {
        Ok(listing) => listing,
        Err(err) => {
            println!("Failed to read directory: {err}");
            return Ok(());
        }
    };

    info!(
        root = %request.root.display(),
        entries = listing.len(),
        total = %humansize::format_size(listing.total_size(), humansize::DECIMAL),
        elapsed = ?listing.duration,
        "scan complete"
    );

    match format {
        OutputFormat::Text => print_listing(&listing),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&listing.entries)?);
        }
    }

    Ok(())
}

fn run_serve(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime
        .block_on(dirsize_web::serve(config))
        .context("Server failed")?;

    Ok(())
}

fn print_listing(listing: &Listing) {
    for entry in &listing.entries {
        println!("{}", format_entry(entry));
    }
    println!("elapsed {:?}", listing.duration);
}

/// One output line: `folder [name] <value> <unit>` or `file name <value> <unit>`.
fn format_entry(entry: &Entry) -> String {
    let size = entry.human_size();
    if entry.is_dir() {
        format!("folder [{}] {}", entry.name, size)
    } else {
        format!("file {} {}", entry.name, size)
    }
}

fn setup_logging(verbose: bool) {
    let default = if verbose {
        "dirsize=debug,dirsize_scan=debug,dirsize_web=debug,warn"
    } else {
        "dirsize=info,dirsize_scan=info,dirsize_web=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
