//! Core data types for ROC AUC evaluation.
//!
//! The scalar aliases match the ones used by the boosting code that produces
//! the scores, so predictions can be passed in without conversion.

use crate::core::error::{Result, RocAucError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Predicted confidence type.
/// 32-bit float, same width as model outputs.
pub type Score = f32;

/// Ground-truth label type.
/// Stored as a float so that indicator matrices and class indices share a container.
pub type Label = f32;

/// Class index within a multi-class score matrix.
pub type ClassIndex = usize;

/// Averaging policy applied to multi-class inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Average {
    /// Unweighted mean of per-class AUC values
    Macro,
    /// Mean of per-class AUC values weighted by positive count
    Weighted,
    /// Single AUC over every (sample, class) pair flattened together
    Micro,
    /// Per-class AUC values, no aggregation
    None,
}

impl Default for Average {
    fn default() -> Self {
        Average::Macro
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Average::Macro => write!(f, "macro"),
            Average::Weighted => write!(f, "weighted"),
            Average::Micro => write!(f, "micro"),
            Average::None => write!(f, "none"),
        }
    }
}

impl FromStr for Average {
    type Err = RocAucError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "macro" => Ok(Average::Macro),
            "weighted" => Ok(Average::Weighted),
            "micro" => Ok(Average::Micro),
            "none" => Ok(Average::None),
            _ => Err(RocAucError::unsupported_average(s)),
        }
    }
}

/// Activation applied to scores before ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Scores are ranked as given
    None,
    /// Row-wise softmax over the class axis (multi-channel input only)
    Softmax,
    /// Elementwise logistic sigmoid
    Sigmoid,
}

impl Default for Activation {
    fn default() -> Self {
        Activation::None
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::None => write!(f, "none"),
            Activation::Softmax => write!(f, "softmax"),
            Activation::Sigmoid => write!(f, "sigmoid"),
        }
    }
}

impl Activation {
    /// Resolve the two independent transform flags into one activation.
    pub fn from_flags(add_softmax: bool, add_sigmoid: bool) -> Result<Self> {
        match (add_softmax, add_sigmoid) {
            (true, true) => Err(RocAucError::ConflictingTransform),
            (true, false) => Ok(Activation::Softmax),
            (false, true) => Ok(Activation::Sigmoid),
            (false, false) => Ok(Activation::None),
        }
    }
}

/// Result of one ROC AUC computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AucResult {
    /// Single value for binary input or an aggregated multi-class average
    Scalar(f64),
    /// One value per class, in class order
    PerClass(Vec<f64>),
}

impl AucResult {
    /// Scalar view of the result. Per-class results collapse to their unweighted mean.
    pub fn value(&self) -> f64 {
        match self {
            AucResult::Scalar(v) => *v,
            AucResult::PerClass(values) => {
                if values.is_empty() {
                    f64::NAN
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
        }
    }

    /// Returns the scalar, or `None` for per-class results.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            AucResult::Scalar(v) => Some(*v),
            AucResult::PerClass(_) => None,
        }
    }

    /// Returns the per-class values, or `None` for scalar results.
    pub fn per_class(&self) -> Option<&[f64]> {
        match self {
            AucResult::Scalar(_) => None,
            AucResult::PerClass(values) => Some(values),
        }
    }
}

impl fmt::Display for AucResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AucResult::Scalar(v) => write!(f, "{:.6}", v),
            AucResult::PerClass(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:.6}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}
