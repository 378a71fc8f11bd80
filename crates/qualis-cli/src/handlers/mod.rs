pub mod config;
pub mod context;
pub mod dashboard;
pub mod history;
mod load;
pub mod object;
pub mod report;
pub mod validate;

pub use context::HandlerContext;
