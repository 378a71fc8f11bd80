use qualis_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, GuidanceViewModel,
    StatusBadge,
};

pub fn present_config(
    path: &Path,
    exists: bool,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.to_path_buf(),
        exists,
        report_source: config.report_source.clone(),
        dashboard_source: config.dashboard_source.clone(),
    };

    let result = CommandResultViewModel::new(content);

    if exists {
        result.with_badge(StatusBadge::success("Configuration loaded"))
    } else {
        result
            .with_badge(StatusBadge::info("No config file, using defaults"))
            .with_suggestion(Guidance::new("Create one").with_command("qualis config init"))
    }
}

pub fn present_config_init(
    path: &Path,
    config: &Config,
    overwritten: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.to_path_buf(),
        report_source: config.report_source.clone(),
        overwritten,
    };

    let label = if overwritten {
        "Config file replaced with defaults"
    } else {
        "Config file created"
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(label))
        .with_suggestion(Guidance::new("View the latest report").with_command("qualis report"))
}

pub fn present_guidance(
    config_path: &Path,
    config_exists: bool,
) -> CommandResultViewModel<GuidanceViewModel> {
    let content = GuidanceViewModel {
        config_path: config_path.to_path_buf(),
        config_exists,
    };

    let mut result = CommandResultViewModel::new(content);

    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Write a config file pointing at your report")
                .with_command("qualis config init"),
        );
    }

    result
        .with_suggestion(Guidance::new("View the latest report").with_command("qualis report"))
        .with_suggestion(
            Guidance::new("Check the summary against the results").with_command("qualis validate"),
        )
        .with_suggestion(
            Guidance::new("Browse agents and data objects").with_command("qualis dashboard"),
        )
}
