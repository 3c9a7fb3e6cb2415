//! Report renderer
//!
//! Pure text assembly over already-validated results: banner header,
//! executive summary, per-source tally in first-seen order, numbered key
//! findings with wrapped analysis, numbered detailed sources with wrapped
//! content, closing banner. No I/O, no failure path; the only
//! non-deterministic input is the explicitly passed timestamp.

use crate::types::AnalyzedResult;
use crate::utils::wrap_indented;
use chrono::{DateTime, Local};
use std::fmt::Write as _;

const BANNER_WIDTH: usize = 80;
const WRAP_WIDTH: usize = 75;
const HANGING_INDENT: &str = "   ";
const URL_DISPLAY_LEN: usize = 60;

/// Render the report stamped with the current local time.
pub fn render(query: &str, results: &[AnalyzedResult]) -> String {
    render_at(query, results, Local::now())
}

/// Render the report with an explicit generation timestamp.
pub fn render_at(query: &str, results: &[AnalyzedResult], generated: DateTime<Local>) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut report = String::new();

    let _ = write!(
        report,
        "\n{banner}\nTRUSTED SOURCES RESEARCH REPORT\n{banner}\n\n\
         Query: {query}\n\
         Generated: {timestamp}\n\
         Sources: {count} trusted sources\n\n\
         {banner}\n\n",
        timestamp = generated.format("%Y-%m-%d %H:%M:%S"),
        count = results.len(),
    );

    let _ = write!(
        report,
        "EXECUTIVE SUMMARY\n-----------------\n\
         This report analyzes {count} sources from trusted platforms including\n\
         academic databases, Wikipedia, and verified repositories to provide reliable\n\
         information about {query}.\n\n\
         SOURCE BREAKDOWN\n----------------\n",
        count = results.len(),
    );

    for (source, count) in source_tally(results) {
        let _ = writeln!(report, "• {source}: {count} sources");
    }

    report.push_str("\nKEY FINDINGS\n------------\n");
    for (i, result) in results.iter().enumerate() {
        let _ = write!(
            report,
            "\n{n}. [{source}] {title}\n{indent}{analysis}\n",
            n = i + 1,
            source = result.source,
            title = result.title,
            indent = HANGING_INDENT,
            analysis = wrap_indented(&result.analysis, WRAP_WIDTH, HANGING_INDENT),
        );
    }

    report.push_str("\nDETAILED SOURCES\n----------------\n");
    for (i, result) in results.iter().enumerate() {
        let _ = write!(
            report,
            "\nSource {n}: {title}\nPlatform: {source}\nURL: {url}\n\n\
             Content Summary:\n{content}\n",
            n = i + 1,
            title = result.title,
            source = result.source,
            url = display_url(&result.url),
            content = wrap_indented(&result.content, WRAP_WIDTH, HANGING_INDENT),
        );
    }

    let _ = write!(
        report,
        "\n{banner}\n\
         Report generated using trusted, accessible sources\n\
         Avoiding paywalls and bot-detection issues\n\
         {banner}\n",
    );

    report
}

/// Count records per source, preserving first-seen order.
fn source_tally(results: &[AnalyzedResult]) -> Vec<(&str, usize)> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for result in results {
        match tally.iter_mut().find(|(name, _)| *name == result.source) {
            Some((_, count)) => *count += 1,
            None => tally.push((&result.source, 1)),
        }
    }
    tally
}

fn display_url(url: &str) -> String {
    if url.chars().count() > URL_DISPLAY_LEN {
        format!(
            "{}...",
            crate::utils::truncate_chars(url, URL_DISPLAY_LEN)
        )
    } else {
        url.to_string()
    }
}
