// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use seqpat::{
    analyze, contains, load_all, longest_common_substring, longest_palindrome, occurrences,
    FileSource, SequenceSource,
};

mod cli;
use cli::display::{self, ReportView, TextView};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays parseable.
fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("SEQPAT_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let colors = !cli.no_color && !cli.json && display::use_colors();

    let output = match &cli.command {
        Commands::Contains {
            haystack,
            needle,
            all,
        } => {
            let haystack = read(haystack)?;
            let needle = read(needle)?;
            if *all {
                let positions = occurrences(&haystack, &needle);
                if cli.json {
                    to_json(&positions)?
                } else {
                    display::occurrences_line(&positions, colors)
                }
            } else {
                let result = contains(&haystack, &needle);
                if cli.json {
                    to_json(&result)?
                } else {
                    display::match_line(&result, colors)
                }
            }
        }

        Commands::Palindrome { file } => {
            let result = longest_palindrome(&read(file)?);
            if cli.json {
                to_json(&TextView::from(&result))?
            } else {
                display::palindrome_line(&result)
            }
        }

        Commands::Common { a, b } => {
            let result = longest_common_substring(&read(a)?, &read(b)?);
            if cli.json {
                to_json(&TextView::from(&result))?
            } else {
                display::common_line(&result)
            }
        }

        Commands::Report {
            targets,
            patterns,
            lenient,
        } => {
            let targets = load_files(targets, *lenient).context("loading targets")?;
            let patterns = load_files(patterns, *lenient).context("loading patterns")?;
            let report = analyze(&targets, &patterns);
            if cli.json {
                to_json(&ReportView::from(&report))?
            } else {
                display::report_lines(&report, colors).join("\n")
            }
        }
    };

    println!("{}", output);
    Ok(())
}

fn read(path: &Path) -> Result<Vec<u8>> {
    let bytes = FileSource::new(path).load()?;
    debug!(path = %path.display(), len = bytes.len(), "read input");
    Ok(bytes)
}

fn load_files(paths: &[PathBuf], lenient: bool) -> Result<Vec<Vec<u8>>> {
    let sources: Vec<FileSource> = paths.iter().map(FileSource::new).collect();
    Ok(load_all(&sources, lenient)?)
}

#[cfg(feature = "serde_json")]
fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing output")
}

#[cfg(not(feature = "serde_json"))]
fn to_json<T: Serialize>(_value: &T) -> Result<String> {
    anyhow::bail!("JSON output requires the `serde_json` feature")
}
