use std::fmt;

use super::badge::heading;
use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, CreateView, GuidanceViewModel, ViewMode,
};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let file_state = if self.data.exists { "" } else { " (not found)" };
        writeln!(f, "Config file:      {}{}", self.data.path.display(), file_state)?;
        writeln!(f, "report_source:    {}", self.data.report_source)?;
        writeln!(
            f,
            "dashboard_source: {}",
            self.data
                .dashboard_source
                .as_deref()
                .unwrap_or("(built-in sample catalog)")
        )
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Wrote {}", self.data.path.display())?;
        writeln!(f, "report_source = {:?}", self.data.report_source)
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", heading("qualis: data-quality report viewer"))?;
        writeln!(f)?;
        if self.data.config_exists {
            writeln!(f, "Using config {}", self.data.config_path.display())
        } else {
            writeln!(
                f,
                "No config at {}; defaults apply.",
                self.data.config_path.display()
            )
        }
    }
}
