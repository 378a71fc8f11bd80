pub mod chart;
pub mod text;
pub mod time;
