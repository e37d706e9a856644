//! Side-by-side comparison of the generic operations with the standard library
//!
//! Each step runs one of the hand-written operations from `genops_core` and
//! the equivalent `Iterator` adapter over the same input, then records both
//! outputs and whether they agree.

use genops_config::ShowcaseConfig;
use genops_core::prelude::*;
use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

/// One custom operation next to its standard-library counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub name: String,
    /// `Debug` rendering of the custom operation's output
    pub custom: String,
    /// `Debug` rendering of the standard library's output
    pub builtin: String,
    pub matches: bool,
}

impl Comparison {
    /// Compare two typed outputs and keep their renderings
    pub fn new<T>(name: impl Into<String>, custom: T, builtin: T) -> Self
    where
        T: PartialEq + Debug,
    {
        let comparison = Self {
            name: name.into(),
            custom: format!("{custom:?}"),
            builtin: format!("{builtin:?}"),
            matches: custom == builtin,
        };
        debug!(
            name = %comparison.name,
            matches = comparison.matches,
            custom = %comparison.custom,
            builtin = %comparison.builtin,
            "Compared outputs"
        );
        comparison
    }
}

/// All comparisons from one showcase run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub comparisons: Vec<Comparison>,
}

impl Report {
    pub fn push(&mut self, comparison: Comparison) {
        self.comparisons.push(comparison);
    }

    pub fn len(&self) -> usize {
        self.comparisons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }

    /// Number of comparisons whose outputs agree
    pub fn matching(&self) -> usize {
        self.comparisons.fold(0, |count, comparison| {
            if comparison.matches {
                count + 1
            } else {
                count
            }
        })
    }

    pub fn all_match(&self) -> bool {
        self.matching() == self.len()
    }
}

/// Run every comparison over the configured inputs.
///
/// Assumes `config` passed [`ShowcaseConfig::validate`], so the chain's
/// multiplication and the fold's sum cannot overflow.
pub fn run(config: &ShowcaseConfig) -> Report {
    let values = &config.values;
    let mut report = Report::default();

    report.push(Comparison::new(
        "transform to string",
        values.transform(ToString::to_string),
        values.iter().map(ToString::to_string).collect::<Vec<_>>(),
    ));

    let threshold = config.filter_threshold;
    report.push(Comparison::new(
        format!("filter > {threshold}"),
        values.filter(|value| *value > threshold),
        values
            .iter()
            .filter(|value| **value > threshold)
            .copied()
            .collect::<Vec<_>>(),
    ));

    let initial = config.fold_initial;
    report.push(Comparison::new(
        format!("fold + from {initial}"),
        values.fold(initial, |acc, value| acc + value),
        values.iter().fold(initial, |acc, value| acc + value),
    ));

    report.push(Comparison::new(
        "transform entries to key=value",
        config
            .entries
            .transform_entries(|key, value| format!("{key}={value}")),
        config
            .entries
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>(),
    ));

    let multiplier = config.chain_multiplier;
    let chain_threshold = config.chain_threshold;
    report.push(Comparison::new(
        format!("chain x{multiplier}, > {chain_threshold}, to string"),
        values
            .transform(|value| value * multiplier)
            .filter(|value| *value > chain_threshold)
            .transform(ToString::to_string),
        values
            .iter()
            .map(|value| value * multiplier)
            .filter(|value| *value > chain_threshold)
            .map(|value| value.to_string())
            .collect::<Vec<_>>(),
    ));

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_matches_classic_examples() {
        let report = run(&ShowcaseConfig::default());

        assert_eq!(report.len(), 5);
        assert!(report.all_match());

        let rendered: Vec<(&str, &str)> = report
            .comparisons
            .iter()
            .map(|c| (c.name.as_str(), c.custom.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("transform to string", r#"["1", "2", "3", "4", "5"]"#),
                ("filter > 3", "[4, 5]"),
                ("fold + from 0", "15"),
                ("transform entries to key=value", r#"["one=1", "two=2", "three=3"]"#),
                ("chain x3, > 10, to string", r#"["12", "15"]"#),
            ]
        );
    }

    #[test]
    fn test_empty_values_still_compare() {
        let config = ShowcaseConfig::builder()
            .values(Vec::new())
            .fold_initial(9)
            .build()
            .unwrap();

        let report = run(&config);

        assert!(report.all_match());
        assert_eq!(report.comparisons[0].custom, "[]");
        assert_eq!(report.comparisons[2].custom, "9");
    }

    #[test]
    fn test_mismatch_is_counted() {
        let mut report = Report::default();
        report.push(Comparison::new("same", vec![1, 2], vec![1, 2]));
        report.push(Comparison::new("different", vec![1, 2], vec![2, 1]));

        assert_eq!(report.matching(), 1);
        assert!(!report.all_match());
        assert!(!report.comparisons[1].matches);
    }

    #[test]
    fn test_empty_report_trivially_matches() {
        let report = Report::default();
        assert!(report.is_empty());
        assert!(report.all_match());
    }
}
