//! Constants shared across the evaluation pipeline.

/// Comparator value for a positive scored above a negative.
pub const PAIR_WIN: f64 = 1.0;

/// Comparator value for a positive and a negative with equal scores.
pub const PAIR_TIE: f64 = 0.5;

/// Comparator value for a positive scored below a negative.
pub const PAIR_LOSS: f64 = 0.0;

/// Number of pairwise comparisons above which the quadratic kernel logs a
/// debug notice about its cost.
pub const LARGE_PAIR_COUNT: usize = 50_000_000;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "roc_auc.toml";

/// Prefix of environment variables read by `RocAucConfig::load_from_environment`.
pub const ENV_PREFIX: &str = "ROC_AUC_";
