//! Status badges: every enumerated value maps to a tone and a label.
//!
//! Values the producer sent that this build does not know keep their raw
//! text and get the neutral tone.

use owo_colors::{OwoColorize, Stream};
use qualis_types::{AgentStatus, CheckOutcome, CheckStatus, DataLayer, RunStatus, Trend};

use crate::presentation::formatters::text::pad;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Caution,
    Negative,
    Accent,
    Neutral,
}

pub fn outcome_tone(outcome: &CheckOutcome) -> BadgeTone {
    match outcome {
        CheckOutcome::Pass => BadgeTone::Positive,
        CheckOutcome::Fail => BadgeTone::Negative,
        _ => BadgeTone::Neutral,
    }
}

pub fn check_status_tone(status: &CheckStatus) -> BadgeTone {
    match status {
        CheckStatus::Passed => BadgeTone::Positive,
        CheckStatus::Warning => BadgeTone::Caution,
        CheckStatus::Failed => BadgeTone::Negative,
        _ => BadgeTone::Neutral,
    }
}

pub fn run_status_tone(status: &RunStatus) -> BadgeTone {
    match status {
        RunStatus::Success => BadgeTone::Positive,
        RunStatus::Failed => BadgeTone::Negative,
        RunStatus::Running => BadgeTone::Accent,
        _ => BadgeTone::Neutral,
    }
}

pub fn agent_status_tone(status: &AgentStatus) -> BadgeTone {
    match status {
        AgentStatus::Active => BadgeTone::Positive,
        _ => BadgeTone::Neutral,
    }
}

pub fn layer_tone(layer: &DataLayer) -> BadgeTone {
    match layer {
        DataLayer::Raw => BadgeTone::Caution,
        DataLayer::Defined => BadgeTone::Accent,
        DataLayer::Derived => BadgeTone::Positive,
        _ => BadgeTone::Neutral,
    }
}

pub fn trend_tone(trend: &Trend) -> BadgeTone {
    match trend {
        Trend::Up => BadgeTone::Positive,
        Trend::Down => BadgeTone::Negative,
        _ => BadgeTone::Neutral,
    }
}

pub fn trend_arrow(trend: &Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Stable => "→",
        _ => "·",
    }
}

pub fn check_status_label(status: &CheckStatus) -> &str {
    match status {
        CheckStatus::Passed => "Passed",
        CheckStatus::Warning => "Warning",
        CheckStatus::Failed => "Failed",
        CheckStatus::Unrecognized(raw) => raw,
    }
}

pub fn run_status_label(status: &RunStatus) -> &str {
    match status {
        RunStatus::Success => "Success",
        RunStatus::Failed => "Failed",
        RunStatus::Running => "Running",
        RunStatus::Unrecognized(raw) => raw,
    }
}

/// Colour `text` for the tone. Plain text when colour is off.
pub fn paint(text: &str, tone: BadgeTone) -> String {
    match tone {
        BadgeTone::Positive => text.if_supports_color(Stream::Stdout, |t| t.green()).to_string(),
        BadgeTone::Caution => text.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string(),
        BadgeTone::Negative => text.if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
        BadgeTone::Accent => text.if_supports_color(Stream::Stdout, |t| t.cyan()).to_string(),
        BadgeTone::Neutral => text.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string(),
    }
}

/// Pad to `width` first so escape codes do not upset column alignment.
pub fn padded(text: &str, width: usize, tone: BadgeTone) -> String {
    paint(&pad(text, width), tone)
}

pub fn heading(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.bold()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_values_are_neutral() {
        assert_eq!(
            outcome_tone(&CheckOutcome::from("skipped")),
            BadgeTone::Neutral
        );
        assert_eq!(
            check_status_tone(&CheckStatus::from("Flaky")),
            BadgeTone::Neutral
        );
        assert_eq!(run_status_tone(&RunStatus::from("queued")), BadgeTone::Neutral);
        assert_eq!(layer_tone(&DataLayer::from("Bronze")), BadgeTone::Neutral);
        assert_eq!(trend_tone(&Trend::from("sideways")), BadgeTone::Neutral);
        assert_eq!(trend_arrow(&Trend::from("sideways")), "·");
    }

    #[test]
    fn test_unknown_values_keep_raw_text() {
        assert_eq!(check_status_label(&CheckStatus::from("Flaky")), "Flaky");
        assert_eq!(run_status_label(&RunStatus::from("queued")), "queued");
    }

    #[test]
    fn test_legacy_spellings_share_a_tone() {
        assert_eq!(
            check_status_tone(&CheckStatus::from("Passed")),
            check_status_tone(&CheckStatus::from("pass"))
        );
        assert_eq!(run_status_label(&RunStatus::from("Failed")), "Failed");
    }
}
