//! segtext: header-delimited text segmentation for markdown and pandoc documents.
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use segtext::config::{self, Overrides};
use segtext::input::{self, FormatKind};
use segtext::{filter, output, segment};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "segtext", version)]
#[command(about = "Split documents into header-delimited text segments", long_about = None)]
struct Args {
    /// Document to segment; stdin when absent or `-`. In filter mode, the pandoc target format
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Reader to use instead of guessing from the file extension
    #[arg(long, value_enum)]
    from: Option<FormatKind>,

    /// Where to write the segments
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the segments to stdout instead of writing a file
    #[arg(long, conflicts_with = "filter")]
    stdout: bool,

    /// Include each segment's heading in the output
    #[arg(long)]
    annotate: bool,

    /// Spaces per indentation level in the written JSON
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Run as a pandoc JSON filter: AST in on stdin, unchanged AST out on stdout
    #[arg(long)]
    filter: bool,

    /// Log progress to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cfg = config::Config::load();
    let settings = cfg.resolve(Overrides {
        output: args.output.clone(),
        indent: args.indent,
        annotate: args.annotate,
    });

    if filter::is_filter_mode(args.filter) {
        if let Some(target) = &args.path {
            debug!(target = %target.display(), "pandoc target format");
        }
        if args.from.is_some_and(|kind| kind != FormatKind::Pandoc) {
            warn!("--from is ignored in filter mode; pandoc sends JSON");
        }
        filter::run(io::stdin().lock(), io::stdout().lock(), &settings)
            .context("pandoc filter failed")?;
        return Ok(());
    }

    let path = args.path.as_deref();
    let kind = input::detect_format(path, args.from, &cfg.markdown_extensions);
    let source = input::read_source(path).with_context(|| describe("read", path))?;
    let document = input::parse(&source, kind).with_context(|| describe("parse", path))?;

    let segments = segment(&document);
    info!(segments = segments.len(), "segmented document");

    if args.stdout {
        let json = output::render(&segments, settings.layout, settings.indent)?;
        println!("{json}");
    } else {
        output::write(&settings.output, &segments, settings.layout, settings.indent)
            .with_context(|| format!("failed to write {}", settings.output.display()))?;
    }
    Ok(())
}

fn describe(action: &str, path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("failed to {action} {}", path.display()),
        None => format!("failed to {action} stdin"),
    }
}
