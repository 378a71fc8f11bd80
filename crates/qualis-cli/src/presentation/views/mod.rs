// Views turn view models into text. Each view model gets its Display
// through `CreateView`; JSON output never reaches this module.

pub mod badge;
mod config;
mod dashboard;
mod object;
mod report;
