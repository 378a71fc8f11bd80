use std::fmt;

use qualis_engine::format_number;

use super::badge::{
    BadgeTone, check_status_label, check_status_tone, heading, layer_tone, paint, padded,
    trend_arrow, trend_tone,
};
use crate::presentation::formatters::chart::bar;
use crate::presentation::formatters::text::{column_width, pad};
use crate::presentation::formatters::time::format_minute;
use crate::presentation::view_models::{CreateView, DataObjectViewModel, ViewMode};

const BAR_WIDTH: usize = 30;
/// Width of `yyyy-MM-dd HH:mm`
const TIMESTAMP_WIDTH: usize = 16;

impl CreateView for DataObjectViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DataObjectView { data: self, mode })
    }
}

struct DataObjectView<'a> {
    data: &'a DataObjectViewModel,
    mode: ViewMode,
}

impl<'a> DataObjectView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tally = &self.data.tally;
        writeln!(
            f,
            "{} passed={} warning={} failed={}",
            self.data.id, tally.passed, tally.warning, tally.failed
        )
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{}  {}  [{}]",
            heading(&self.data.name),
            self.data.version,
            paint(self.data.layer.as_str(), layer_tone(&self.data.layer))
        )?;
        writeln!(f, "{}", self.data.description)?;
        writeln!(f)
    }

    fn render_tallies(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tally = &self.data.tally;
        let cards = [
            ("Passed", tally.passed, BadgeTone::Positive),
            ("Warning", tally.warning, BadgeTone::Caution),
            ("Failed", tally.failed, BadgeTone::Negative),
        ];

        for (title, _, _) in &cards {
            write!(f, "  {}", pad(title, 10))?;
        }
        writeln!(f)?;
        for (_, count, tone) in &cards {
            write!(f, "  {}", padded(&count.to_string(), 10, *tone))?;
        }
        writeln!(f)?;
        writeln!(f)
    }

    fn render_metrics(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", heading("Quality Metrics"))?;

        let metrics = &self.data.metrics;
        if metrics.is_empty() {
            writeln!(f, "No metrics.")?;
            return writeln!(f);
        }

        let name_w = column_width("", metrics.iter().map(|m| m.name.as_str()));
        let value_w = column_width("", metrics.iter().map(|m| m.value.as_str()));

        for metric in metrics {
            let trend = format!("{} {}", trend_arrow(&metric.trend), metric.trend);
            writeln!(
                f,
                "  {}  {}  {}",
                pad(&metric.name, name_w),
                pad(&metric.value, value_w),
                paint(&trend, trend_tone(&metric.trend))
            )?;
        }
        writeln!(f)
    }

    fn render_checks(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", heading("Checks"))?;

        let checks = &self.data.checks;
        if checks.is_empty() {
            writeln!(f, "No checks.")?;
            return writeln!(f);
        }

        let name_w = column_width("NAME", checks.iter().map(|c| c.name.as_str()));
        let status_w = column_width("STATUS", checks.iter().map(|c| check_status_label(&c.status)));

        write!(f, "{}  {}  ", pad("NAME", name_w), pad("STATUS", status_w))?;
        if self.mode == ViewMode::Verbose {
            writeln!(f, "{}  ID", pad("TIMESTAMP", TIMESTAMP_WIDTH))?;
        } else {
            writeln!(f, "TIMESTAMP")?;
        }

        for check in checks {
            write!(
                f,
                "{}  {}  {}",
                pad(&check.name, name_w),
                padded(
                    check_status_label(&check.status),
                    status_w,
                    check_status_tone(&check.status)
                ),
                format_minute(check.timestamp)
            )?;
            if self.mode == ViewMode::Verbose {
                write!(f, "  {}", check.id)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }

    fn render_chart(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", heading("Metric Chart"))?;

        let points = &self.data.chart;
        if points.is_empty() {
            return writeln!(f, "Nothing to plot.");
        }

        let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
        let name_w = column_width("", points.iter().map(|p| p.name.as_str()));

        for point in points {
            writeln!(
                f,
                "  {}  {}  {}",
                pad(&point.name, name_w),
                paint(&bar(point.value, max, BAR_WIDTH), BadgeTone::Accent),
                format_number(point.value)
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for DataObjectView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Standard | ViewMode::Verbose => {
                self.render_header(f)?;
                self.render_tallies(f)?;
                self.render_metrics(f)?;
                self.render_checks(f)?;
                self.render_chart(f)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_data_object;
    use qualis_runtime::sample_dashboard;
    use qualis_testing::fixtures;

    #[test]
    fn test_sample_object_detail() -> anyhow::Result<()> {
        let data = sample_dashboard();
        let object = data
            .find_data_object("do-2")
            .ok_or_else(|| anyhow::anyhow!("do-2 missing"))?;
        let text = present_data_object(object)
            .content
            .create_view(ViewMode::Standard)
            .to_string();

        assert!(text.contains("orders"));
        assert!(text.contains("Completeness"));
        assert!(text.contains("↑ up"));
        assert!(text.contains("2024-06-01 10:00"));
        assert!(text.contains("99.8"));
        Ok(())
    }

    #[test]
    fn test_version_printed_verbatim() -> anyhow::Result<()> {
        let mut document = fixtures::dashboard_document();
        document["data"]["dataObjects"][0]["version"] = "v2.0.1".into();
        let data = fixtures::to_dashboard(&document)?;

        let text = present_data_object(&data.data_objects[0])
            .content
            .create_view(ViewMode::Standard)
            .to_string();

        assert!(text.contains("v2.0.1"));
        assert!(!text.contains("vv2.0.1"));
        Ok(())
    }

    #[test]
    fn test_unknown_layer_and_trend_render_raw() -> anyhow::Result<()> {
        let mut document = fixtures::dashboard_document();
        document["data"]["dataObjects"][0]["layer"] = "Bronze".into();
        document["data"]["dataObjects"][0]["qualityMetrics"][0]["trend"] = "sideways".into();
        let data = fixtures::to_dashboard(&document)?;

        let text = present_data_object(&data.data_objects[0])
            .content
            .create_view(ViewMode::Standard)
            .to_string();

        assert!(text.contains("Bronze"));
        assert!(text.contains("· sideways"));
        Ok(())
    }

    #[test]
    fn test_minimal_tallies() -> anyhow::Result<()> {
        let data = fixtures::to_dashboard(&fixtures::dashboard_document())?;
        let text = present_data_object(&data.data_objects[0])
            .content
            .create_view(ViewMode::Minimal)
            .to_string();
        assert_eq!(text, "do-9 passed=1 warning=0 failed=1\n");
        Ok(())
    }
}
