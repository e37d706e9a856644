//! Constants shared across the genops crates

/// Configuration file looked up in the working directory
pub const CONFIG_FILENAME: &str = "genops.json";

/// Explicit path to a configuration file
pub const GENOPS_CONFIG_VAR: &str = "GENOPS_CONFIG";

/// Comma separated list of input values, e.g. `1,2,3`
pub const GENOPS_VALUES_VAR: &str = "GENOPS_VALUES";

/// Threshold used by the filter demonstration
pub const GENOPS_FILTER_THRESHOLD_VAR: &str = "GENOPS_FILTER_THRESHOLD";

/// Initial accumulator used by the fold demonstration
pub const GENOPS_FOLD_INITIAL_VAR: &str = "GENOPS_FOLD_INITIAL";

/// Multiplier applied in the chained demonstration
pub const GENOPS_CHAIN_MULTIPLIER_VAR: &str = "GENOPS_CHAIN_MULTIPLIER";

/// Threshold applied in the chained demonstration
pub const GENOPS_CHAIN_THRESHOLD_VAR: &str = "GENOPS_CHAIN_THRESHOLD";

/// `tracing_subscriber::EnvFilter` directive for the binary's logs
pub const GENOPS_LOG_VAR: &str = "GENOPS_LOG";

/// Every variable that can override configuration values
pub const OVERRIDE_VARS: &[&str] = &[
    GENOPS_VALUES_VAR,
    GENOPS_FILTER_THRESHOLD_VAR,
    GENOPS_FOLD_INITIAL_VAR,
    GENOPS_CHAIN_MULTIPLIER_VAR,
    GENOPS_CHAIN_THRESHOLD_VAR,
];
