use std::fmt;

use qualis_engine::relative_time;

use super::badge::{
    agent_status_tone, heading, layer_tone, padded, run_status_label, run_status_tone,
};
use crate::presentation::formatters::text::{column_width, pad, truncate};
use crate::presentation::formatters::time::format_timestamp;
use crate::presentation::view_models::{
    CreateView, DashboardViewModel, DataObjectSummaryViewModel, HistoryViewModel, ViewMode,
};

// --------------------------------------------------------
// Dashboard View
// --------------------------------------------------------

impl CreateView for DashboardViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DashboardView { data: self, mode })
    }
}

struct DashboardView<'a> {
    data: &'a DashboardViewModel,
    mode: ViewMode,
}

impl<'a> DashboardView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for object in &self.data.data_objects {
            writeln!(f, "{}", object.id)?;
        }
        Ok(())
    }

    fn render_agents(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", heading("Agents"))?;

        let agents = &self.data.agents;
        if agents.is_empty() {
            writeln!(f, "No agents.")?;
            return Ok(());
        }

        let name_w = column_width("NAME", agents.iter().map(|a| a.name.as_str()));
        let status_w = column_width("STATUS", agents.iter().map(|a| a.status.as_str()));

        writeln!(f, "{}  {}  LAST RUN", pad("NAME", name_w), pad("STATUS", status_w))?;
        for agent in agents {
            writeln!(
                f,
                "{}  {}  {}",
                pad(&agent.name, name_w),
                padded(agent.status.as_str(), status_w, agent_status_tone(&agent.status)),
                relative_time(agent.last_run, self.data.reference)
            )?;
        }
        Ok(())
    }

    fn render_objects(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", heading("Data Objects"))?;

        let objects = &self.data.data_objects;
        if objects.is_empty() {
            writeln!(f, "No data objects.")?;
            return Ok(());
        }

        let id_w = column_width("ID", objects.iter().map(|o| o.id.as_str()));
        let name_w = column_width("NAME", objects.iter().map(|o| o.name.as_str()));
        let version_w = column_width("VERSION", objects.iter().map(|o| o.version.as_str()));
        let layer_w = column_width("LAYER", objects.iter().map(|o| o.layer.as_str()));

        writeln!(
            f,
            "{}  {}  {}  {}  CHECKS",
            pad("ID", id_w),
            pad("NAME", name_w),
            pad("VERSION", version_w),
            pad("LAYER", layer_w)
        )?;

        for object in objects {
            writeln!(
                f,
                "{}  {}  {}  {}  {}",
                pad(&object.id, id_w),
                pad(&object.name, name_w),
                pad(&object.version, version_w),
                padded(object.layer.as_str(), layer_w, layer_tone(&object.layer)),
                tally_summary(object)
            )?;
            if self.mode == ViewMode::Verbose {
                writeln!(f, "    {}", truncate(&object.description, 76))?;
            }
        }
        Ok(())
    }
}

fn tally_summary(object: &DataObjectSummaryViewModel) -> String {
    let tally = &object.tally;
    let mut text = format!(
        "{} passed, {} warning, {} failed",
        tally.passed, tally.warning, tally.failed
    );
    if tally.unrecognized > 0 {
        text.push_str(&format!(", {} other", tally.unrecognized));
    }
    text
}

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Standard | ViewMode::Verbose => {
                self.render_agents(f)?;
                writeln!(f)?;
                self.render_objects(f)
            }
        }
    }
}

// --------------------------------------------------------
// History View
// --------------------------------------------------------

impl CreateView for HistoryViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(HistoryView { data: self, mode })
    }
}

struct HistoryView<'a> {
    data: &'a HistoryViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for HistoryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let runs = &self.data.runs;

        if self.mode == ViewMode::Minimal {
            for run in runs {
                writeln!(f, "{}", run.id)?;
            }
            return Ok(());
        }

        if runs.is_empty() {
            writeln!(f, "No runs recorded.")?;
            return Ok(());
        }

        let times: Vec<String> = runs.iter().map(|r| format_timestamp(r.timestamp)).collect();
        let time_w = column_width("TIMESTAMP", times.iter().map(String::as_str));
        let agent_w = column_width("AGENT", runs.iter().map(|r| r.agent_name.as_str()));
        let status_w = column_width("STATUS", runs.iter().map(|r| run_status_label(&r.status)));
        let duration_w = column_width("DURATION", runs.iter().map(|r| r.duration.as_str()));

        write!(
            f,
            "{}  {}  {}  {}  DATA OBJECT",
            pad("TIMESTAMP", time_w),
            pad("AGENT", agent_w),
            pad("STATUS", status_w),
            pad("DURATION", duration_w)
        )?;
        if self.mode == ViewMode::Verbose {
            write!(f, "  RUN")?;
        }
        writeln!(f)?;

        for (run, time) in runs.iter().zip(&times) {
            write!(
                f,
                "{}  {}  {}  {}  {} {}",
                pad(time, time_w),
                pad(&run.agent_name, agent_w),
                padded(run_status_label(&run.status), status_w, run_status_tone(&run.status)),
                pad(&run.duration, duration_w),
                run.data_object_id,
                run.data_object_version
            )?;
            if self.mode == ViewMode::Verbose {
                write!(f, "  {}", run.id)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
