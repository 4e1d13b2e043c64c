//! dbExpression docs CLI.
//!
//! Provides commands for:
//! - `nav`: Resolve breadcrumb and previous/next links for a page
//! - `check`: Validate the navigation tree
//! - `toc`: Print the on-page table of contents of a markdown file
//! - `sitemap`: Write `sitemap.xml` and `robots.txt`

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs, SitemapArgs, TocArgs};
use output::Output;

/// dbExpression docs - navigation and site tooling.
#[derive(Parser)]
#[command(name = "dbex-docs", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show navigation links for a page.
    Nav(NavArgs),
    /// Validate the navigation tree.
    Check(CheckArgs),
    /// Print the table of contents of a markdown page.
    Toc(TocArgs),
    /// Write sitemap.xml and robots.txt.
    Sitemap(SitemapArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Nav(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Toc(args) => args.execute(),
        Commands::Sitemap(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
