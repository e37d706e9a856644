// Demonstration and output modules used by the `genops` binary
pub mod formatters;
pub mod showcase;

pub use formatters::{render, OutputFormat};
pub use showcase::{Comparison, Report};
