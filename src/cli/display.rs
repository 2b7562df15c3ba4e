// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for seqpat results.
//!
//! The plain-text format is line oriented and stable: `true <pos>` / `false` for
//! containment, `<start> <end> <text>` for spans. Color only decorates the
//! `true`/`false` keyword and the section headers, so stripping escapes always
//! gives the same text a pipeline would see.
//!
//! # Theme detection order
//!
//! 1. `SEQPAT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::borrow::Cow;
use std::sync::OnceLock;

use seqpat::{CommonSubstringResult, MatchResult, PalindromeResult, Position, Report, Span};
use serde::Serialize;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SEQPAT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(CYAN);

/// Should stdout be colored? Respects `NO_COLOR` and pipes.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(colors: bool, color: fn() -> String, bold: bool, text: &str) -> String {
    if !colors {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, color(), text, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// TEXT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// `true <pos>` or `false`.
pub fn match_line(result: &MatchResult, colors: bool) -> String {
    match result.position() {
        Some(position) => format!("{} {}", paint(colors, GREEN, false, "true"), position),
        None => paint(colors, RED, false, "false"),
    }
}

/// `true <pos> <pos> ...` or `false`.
pub fn occurrences_line(positions: &[Position], colors: bool) -> String {
    if positions.is_empty() {
        return paint(colors, RED, false, "false");
    }
    let joined: Vec<String> = positions.iter().map(Position::to_string).collect();
    format!("{} {}", paint(colors, GREEN, false, "true"), joined.join(" "))
}

/// `<start> <end> <text>`.
pub fn span_line(span: Span, text: &str) -> String {
    format!("{} {} {}", span.start(), span.end(), text)
}

pub fn palindrome_line(result: &PalindromeResult) -> String {
    span_line(result.span, &result.text_lossy())
}

pub fn common_line(result: &CommonSubstringResult) -> String {
    span_line(result.span, &result.text_lossy())
}

/// The three-part report, one line per result.
pub fn report_lines(report: &Report, colors: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.containment.len() + report.palindromes.len() + 4);

    lines.push(paint(colors, CYAN, true, "Part 1:"));
    lines.extend(
        report
            .containment
            .iter()
            .map(|pair| match_line(&pair.result, colors)),
    );

    lines.push(paint(colors, CYAN, true, "Part 2:"));
    lines.extend(report.palindromes.iter().map(palindrome_line));

    lines.push(paint(colors, CYAN, true, "Part 3:"));
    if let Some(common) = &report.common {
        lines.push(common_line(common));
    }

    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// JSON VIEWS
// ═══════════════════════════════════════════════════════════════════════════

/// A span plus its text decoded for humans.
#[derive(Debug, Serialize)]
pub struct TextView<'a> {
    pub span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_span: Option<Span>,
    pub text: Cow<'a, str>,
}

impl<'a> From<&'a PalindromeResult> for TextView<'a> {
    fn from(result: &'a PalindromeResult) -> Self {
        TextView {
            span: result.span,
            other_span: None,
            text: result.text_lossy(),
        }
    }
}

impl<'a> From<&'a CommonSubstringResult> for TextView<'a> {
    fn from(result: &'a CommonSubstringResult) -> Self {
        TextView {
            span: result.span,
            other_span: Some(result.other_span),
            text: result.text_lossy(),
        }
    }
}

/// JSON shape of a [`Report`].
#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    pub containment: &'a [seqpat::PairOutcome],
    pub palindromes: Vec<TextView<'a>>,
    pub common: Option<TextView<'a>>,
}

impl<'a> From<&'a Report> for ReportView<'a> {
    fn from(report: &'a Report) -> Self {
        ReportView {
            containment: &report.containment,
            palindromes: report.palindromes.iter().map(TextView::from).collect(),
            common: report.common.as_ref().map(TextView::from),
        }
    }
}
