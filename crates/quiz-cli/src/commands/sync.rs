//! Sync command implementation
//!
//! Validates `config.json` against the catalog tree and repairs it when the
//! two disagree.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use quiz_core::{CatalogStats, CatalogSync, Issue, SyncOptions, SyncReport, SyncStatus};
use quiz_fs::NormalizedPath;

use crate::error::Result;

/// Categories with at most this many quizzes get their quizzes listed.
const LIST_QUIZZES_UP_TO: usize = 5;

/// Run the sync command
///
/// Validates first and only writes `config.json` when something is out of
/// step. A run that still finds inconsistencies after writing is reported
/// but does not fail.
pub fn run_sync(path: &Path) -> Result<()> {
    let root = NormalizedPath::new(path);
    let engine = CatalogSync::new(root);
    let mut out = io::stdout().lock();

    writeln!(
        out,
        "{} Validating {} against {}...",
        "=>".blue().bold(),
        engine.config_path().as_str().cyan(),
        engine.root().as_str().cyan()
    )?;

    let report = engine.sync(SyncOptions {
        skip_if_clean: true,
    })?;

    write_report(&mut out, &report)?;
    Ok(())
}

fn write_report(out: &mut impl Write, report: &SyncReport) -> io::Result<()> {
    if !report.issues.is_empty() {
        writeln!(out, "{} Inconsistencies found:", "DRIFTED".yellow().bold())?;
        write_issues(out, &report.issues)?;
        writeln!(out)?;
    }

    match report.status {
        SyncStatus::AlreadyConsistent => {
            writeln!(
                out,
                "{} Configuration already matches the catalog. No changes needed.",
                "OK".green().bold()
            )?;
        }
        SyncStatus::NoCategoriesFound => {
            writeln!(
                out,
                "{} No quiz categories found. Configuration left unchanged.",
                "WARN".yellow().bold()
            )?;
        }
        SyncStatus::Updated => {
            write_changes(out, report)?;
            write_stats(out, &report.stats)?;
            writeln!(out)?;
            writeln!(
                out,
                "{} Configuration validated and repaired.",
                "OK".green().bold()
            )?;
            writeln!(out, "Reload the quiz page (F5) to see the changes.")?;
        }
        SyncStatus::NeedsManualReview => {
            write_changes(out, report)?;
            writeln!(
                out,
                "{} Inconsistencies remain after repair. Manual review required:",
                "ERROR".red().bold()
            )?;
            write_issues(out, &report.remaining)?;
        }
    }
    Ok(())
}

fn write_issues(out: &mut impl Write, issues: &[Issue]) -> io::Result<()> {
    for issue in issues {
        writeln!(out, "   {} {}", "!".yellow(), issue)?;
    }
    Ok(())
}

fn write_changes(out: &mut impl Write, report: &SyncReport) -> io::Result<()> {
    if report.changes.is_empty() {
        return Ok(());
    }
    writeln!(out, "{} Applied changes:", "=>".blue().bold())?;
    for change in &report.changes {
        writeln!(out, "   {} {}", "+".green(), change)?;
    }
    writeln!(out)
}

fn write_stats(out: &mut impl Write, stats: &CatalogStats) -> io::Result<()> {
    writeln!(out, "{}", "Statistics:".bold())?;
    writeln!(out, "   Categories: {}", stats.category_count())?;
    writeln!(out, "   Quizzes:    {}", stats.total_quizzes)?;
    writeln!(out)?;
    writeln!(out, "{}", "Categories:".bold())?;
    for category in &stats.categories {
        writeln!(
            out,
            "   {} {}: {} quiz",
            category.icon.dimmed(),
            category.name,
            category.quizzes.len()
        )?;
        if category.quizzes.len() <= LIST_QUIZZES_UP_TO {
            for quiz in &category.quizzes {
                writeln!(out, "      - {}", quiz)?;
            }
        }
    }
    Ok(())
}
