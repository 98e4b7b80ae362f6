//! Configuration management for ROC AUC evaluation.
//!
//! [`RocAucConfig`] carries every flag that steers the pipeline. It is built
//! through [`ConfigBuilder`], loaded from a TOML/JSON file, or read from
//! `ROC_AUC_*` environment variables; all three paths share the same validation.

pub mod core;
pub mod validation;

pub use self::core::{ConfigBuilder, RocAucConfig};
pub use validation::{ConfigValidator, Diagnostic, DiagnosticKind};
