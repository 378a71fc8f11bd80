// Engine module - pure derived-view computations over the report model.
// Nothing here performs IO or holds state; every function is deterministic
// in its inputs (time-dependent helpers take `now` explicitly).

pub mod chart;
pub mod consistency;
pub mod label;
pub mod tally;
pub mod time;

pub use chart::{ChartPoint, chart_series, chart_value};
pub use consistency::{ConsistencyIssue, ConsistencyReport, check_consistency};
pub use label::{check_label, format_number};
pub use tally::{CheckTally, OutcomeTally, tally_checks, tally_outcomes};
pub use time::relative_time;
