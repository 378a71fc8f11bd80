use std::fmt;

use qualis_types::CheckOutcome;

use super::badge::{BadgeTone, heading, outcome_tone, padded};
use crate::presentation::formatters::text::{column_width, pad};
use crate::presentation::view_models::{
    CreateView, ReportViewModel, ResultRowViewModel, ValidateViewModel, ViewMode,
};

const MISSING: &str = "-";

// --------------------------------------------------------
// Report View
// --------------------------------------------------------

impl CreateView for ReportViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ReportView { data: self, mode })
    }
}

struct ReportView<'a> {
    data: &'a ReportViewModel,
    mode: ViewMode,
}

impl<'a> ReportView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = &self.data.summary;
        writeln!(
            f,
            "{} total={} passed={} failed={}",
            self.data.job_id, summary.total_checks, summary.passed_checks, summary.failed_checks
        )
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}  {}", heading("Job"), self.data.job_id)?;
        writeln!(f, "{} {}", heading("Data"), self.data.data_ref)?;
        writeln!(f)
    }

    fn render_cards(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = &self.data.summary;
        let cards = [
            ("Total Checks", summary.total_checks, BadgeTone::Accent),
            ("Passed", summary.passed_checks, BadgeTone::Positive),
            ("Failed", summary.failed_checks, BadgeTone::Negative),
        ];

        for (title, _, _) in &cards {
            write!(f, "  {}", pad(title, 14))?;
        }
        writeln!(f)?;
        for (_, count, tone) in &cards {
            write!(f, "  {}", padded(&count.to_string(), 14, *tone))?;
        }
        writeln!(f)?;
        writeln!(f)
    }

    fn render_issues(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.issues.is_empty() {
            return Ok(());
        }

        writeln!(f, "{}", heading("Summary issues:"))?;
        for issue in &self.data.issues {
            writeln!(f, "  - {}", issue)?;
        }
        writeln!(f)
    }

    fn render_results(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", heading("Detailed Results"))?;

        if self.data.results.is_empty() {
            writeln!(f, "No check results.")?;
            return Ok(());
        }

        let rows = &self.data.results;
        let verbose = self.mode == ViewMode::Verbose;
        let check_w = column_width("CHECK", rows.iter().map(|r| r.label.as_str()));
        let column_w = column_width("COLUMN", rows.iter().map(|r| r.column.as_str()));
        let outcome_w = column_width("OUTCOME", rows.iter().map(|r| r.outcome.as_str()));
        let type_w = column_width("TYPE", rows.iter().map(|r| r.check_type.as_str()));

        write!(f, "{}  {}  ", pad("CHECK", check_w), pad("COLUMN", column_w))?;
        if verbose {
            write!(f, "{}  ", pad("TYPE", type_w))?;
        }
        writeln!(f, "{}  DETAILS", pad("OUTCOME", outcome_w))?;

        let mut rule_w = check_w + column_w + outcome_w + 13;
        if verbose {
            rule_w += type_w + 2;
        }
        writeln!(f, "{}", "-".repeat(rule_w))?;

        for row in rows {
            write!(f, "{}  {}  ", pad(&row.label, check_w), pad(&row.column, column_w))?;
            if verbose {
                write!(f, "{}  ", pad(&row.check_type, type_w))?;
            }
            writeln!(
                f,
                "{}  {}",
                padded(&row.outcome, outcome_w, row_tone(row)),
                row.details.as_deref().unwrap_or(MISSING)
            )?;
        }

        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        self.render_cards(f)?;
        self.render_issues(f)?;
        self.render_results(f)
    }
}

fn row_tone(row: &ResultRowViewModel) -> BadgeTone {
    outcome_tone(&CheckOutcome::from(row.outcome.as_str()))
}

impl<'a> fmt::Display for ReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}

// --------------------------------------------------------
// Validate View
// --------------------------------------------------------

impl CreateView for ValidateViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ValidateView { data: self })
    }
}

struct ValidateView<'a> {
    data: &'a ValidateViewModel,
}

impl<'a> fmt::Display for ValidateView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = &self.data.summary;
        let tally = &self.data.tally;

        writeln!(f, "{}  {}", heading("Job"), self.data.job_id)?;
        writeln!(f)?;
        writeln!(f, "{:<8}  {:<10}  ACTUAL", "", "DECLARED")?;
        writeln!(
            f,
            "{:<8}  {:<10}  {}",
            "Total", summary.total_checks, tally.total()
        )?;
        writeln!(
            f,
            "{:<8}  {:<10}  {}",
            "Passed", summary.passed_checks, tally.passed
        )?;
        writeln!(
            f,
            "{:<8}  {:<10}  {}",
            "Failed", summary.failed_checks, tally.failed
        )?;
        if tally.unrecognized > 0 {
            writeln!(f, "{:<8}  {:<10}  {}", "Other", "-", tally.unrecognized)?;
        }

        if !self.data.issues.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", heading("Issues:"))?;
            for issue in &self.data.issues {
                writeln!(f, "  - {}", issue)?;
            }
        }

        Ok(())
    }
}
