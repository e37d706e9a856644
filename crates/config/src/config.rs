//! The demonstration's input configuration
//!
//! `ShowcaseConfig` is plain data, built once at startup and read by the
//! showcase. Every field has a default so a partial `genops.json` only needs
//! to name what it changes.

use genops_core::{Error, Result, SequenceExt};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Inputs for the demonstration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Sequence every sequence operation runs over
    pub values: Vec<i64>,

    /// Values strictly greater than this survive the filter
    pub filter_threshold: i64,

    /// Starting accumulator for the fold
    pub fold_initial: i64,

    /// Multiplier for the first step of the chain
    pub chain_multiplier: i64,

    /// Filter threshold for the second step of the chain
    pub chain_threshold: i64,

    /// Mapping used by the keyed transform, kept in insertion order
    pub entries: IndexMap<String, i64>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            values: vec![1, 2, 3, 4, 5],
            filter_threshold: 3,
            fold_initial: 0,
            chain_multiplier: 3,
            chain_threshold: 10,
            entries: IndexMap::from([
                ("one".to_string(), 1),
                ("two".to_string(), 2),
                ("three".to_string(), 3),
            ]),
        }
    }
}

impl ShowcaseConfig {
    /// Start a builder from the defaults
    pub fn builder() -> ShowcaseConfigBuilder {
        ShowcaseConfigBuilder::new()
    }

    /// Check that the arithmetic the showcase performs cannot overflow.
    ///
    /// The chain multiplies every value by `chain_multiplier` and the fold sums
    /// every value onto `fold_initial`; both must stay within `i64`.
    pub fn validate(&self) -> Result<()> {
        let multiplier = self.chain_multiplier;
        let overflowing = self.values.fold(None, |found, value| {
            found.or_else(|| value.checked_mul(multiplier).is_none().then_some(*value))
        });
        if let Some(value) = overflowing {
            return Err(Error::configuration(format!(
                "value {value} multiplied by chain_multiplier {multiplier} overflows i64"
            )));
        }

        let sum = self.values.fold(Some(self.fold_initial), |acc, value| {
            acc.and_then(|total| total.checked_add(*value))
        });
        if sum.is_none() {
            return Err(Error::configuration(format!(
                "sum of values starting from fold_initial {} overflows i64",
                self.fold_initial
            )));
        }

        Ok(())
    }
}

/// Builder for [`ShowcaseConfig`], starting from the defaults
#[derive(Debug, Clone, Default)]
pub struct ShowcaseConfigBuilder {
    config: ShowcaseConfig,
}

impl ShowcaseConfigBuilder {
    /// Create a builder holding the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input values
    pub fn values(mut self, values: Vec<i64>) -> Self {
        self.config.values = values;
        self
    }

    /// Set the filter threshold
    pub fn filter_threshold(mut self, threshold: i64) -> Self {
        self.config.filter_threshold = threshold;
        self
    }

    /// Set the fold's initial accumulator
    pub fn fold_initial(mut self, initial: i64) -> Self {
        self.config.fold_initial = initial;
        self
    }

    /// Set the chain multiplier
    pub fn chain_multiplier(mut self, multiplier: i64) -> Self {
        self.config.chain_multiplier = multiplier;
        self
    }

    /// Set the chain threshold
    pub fn chain_threshold(mut self, threshold: i64) -> Self {
        self.config.chain_threshold = threshold;
        self
    }

    /// Replace the keyed entries
    pub fn entries(mut self, entries: IndexMap<String, i64>) -> Self {
        self.config.entries = entries;
        self
    }

    /// Add or replace a single keyed entry
    pub fn entry(mut self, key: impl Into<String>, value: i64) -> Self {
        self.config.entries.insert(key.into(), value);
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<ShowcaseConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
