//! Core infrastructure shared by every stage of the pipeline.
//!
//! - [`types`]: score/label aliases, averaging and activation enums, result type
//! - [`constants`]: comparator values and defaults
//! - [`error`]: error taxonomy and the crate `Result` alias

pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::{Result, RocAucError};
pub use types::*;
