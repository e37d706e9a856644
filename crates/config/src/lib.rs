//! Configuration for the genops demonstration
//!
//! A [`ShowcaseConfig`] holds the inputs the demonstration runs the generic
//! operations over. Its defaults reproduce the classic examples
//! (`[1, 2, 3, 4, 5]`, filter `> 3`, fold from `0`, chain `x3` then `> 10`);
//! [`ConfigLoader`] layers a `genops.json` file and `GENOPS_*` environment
//! variables on top.

pub mod config;
pub mod loader;


pub use config::{ShowcaseConfig, ShowcaseConfigBuilder};
pub use loader::{ConfigLoader, ConfigSource};
