// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the seqpat command-line interface.
//!
//! One subcommand per analysis, plus `report`, which runs all three over a set
//! of target files and pattern files the way a batch job would. Inputs are read
//! as raw bytes; positions in the output are 1-based.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seqpat",
    about = "Substring containment, longest palindrome, and longest common substring",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise log verbosity (-v debug, -vv trace). `SEQPAT_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Never color the output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether NEEDLE's content occurs in HAYSTACK's content
    Contains {
        /// File to search in
        haystack: PathBuf,

        /// File whose content is searched for
        needle: PathBuf,

        /// Report every occurrence instead of only the first
        #[arg(long)]
        all: bool,
    },

    /// Find the longest palindromic substring of a file
    Palindrome {
        /// Input file
        file: PathBuf,
    },

    /// Find the longest substring shared by two files
    Common {
        /// First input; the reported span refers to this file
        a: PathBuf,

        /// Second input
        b: PathBuf,
    },

    /// Run all three analyses over targets and patterns
    ///
    /// Part 1 checks every pattern against every target (target-major order),
    /// Part 2 reports each target's longest palindrome, and Part 3 the longest
    /// common substring of the first two targets.
    Report {
        /// Target file (repeatable)
        #[arg(short, long = "target", required = true)]
        targets: Vec<PathBuf>,

        /// Pattern file (repeatable)
        #[arg(short, long = "pattern")]
        patterns: Vec<PathBuf>,

        /// Treat unreadable files as empty instead of failing
        #[arg(long)]
        lenient: bool,
    },
}
