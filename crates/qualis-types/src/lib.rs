pub mod catalog;
pub mod check;
pub mod error;
pub mod report;
mod wire;

pub use catalog::*;
pub use check::CheckDefinition;
pub use error::{Error, Result};
pub use report::*;
