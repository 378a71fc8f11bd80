//! # Presentation Layer
//!
//! Output logic for the CLI, following an MVVM split so that the
//! derived-view computations in `qualis_engine` never format text.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!  (loads data)    (converter)        (raw data)       (driver)   ==(Text)==> [ View ]
//! ```
//!
//! ## Rules
//!
//! * View models hold raw data (counts, timestamps, enum values), never
//!   pre-formatted strings. `--format json` serializes them directly and
//!   is a stable contract.
//! * `ViewMode` sets information density only. Minimal is one line or
//!   one id per line, for scripts.
//! * Enumerated values from the producer go through `views::badge`;
//!   unknown values keep their raw text and the neutral tone.
//!
//! ## Directory guide
//!
//! * `view_models/`: serializable contracts plus `CommandResultViewModel`
//! * `presenters/`: domain data -> view model, badges and tips
//! * `views/`: `CreateView` impls, text layout
//! * `formatters/`: timestamps, padding, chart bars
//! * `renderers/`: the console driver

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::ViewMode;
