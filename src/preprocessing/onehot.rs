//! One-hot expansion of class-index labels.

use crate::core::error::{Result, RocAucError};
use crate::core::types::Label;
use ndarray::{Array2, ArrayView1};

/// Expands class indices into `(batch, n_classes)` indicator columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneHotEncoder {
    n_classes: usize,
}

impl OneHotEncoder {
    /// Create an encoder for `n_classes` classes
    pub fn new(n_classes: usize) -> Self {
        Self { n_classes }
    }

    /// Number of output columns
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Encode class indices.
    ///
    /// Every label must be a non-negative integer below `n_classes`; anything
    /// else is an [`RocAucError::InvalidLabel`] at the offending sample.
    pub fn encode(&self, labels: &ArrayView1<'_, Label>) -> Result<Array2<Label>> {
        let mut encoded = Array2::zeros((labels.len(), self.n_classes));
        for (i, &label) in labels.iter().enumerate() {
            let class = self
                .class_index(label)
                .ok_or_else(|| RocAucError::invalid_label(i, label as f64))?;
            encoded[[i, class]] = 1.0;
        }
        Ok(encoded)
    }

    fn class_index(&self, label: Label) -> Option<usize> {
        if !label.is_finite() || label < 0.0 || label.fract() != 0.0 {
            return None;
        }
        let class = label as usize;
        (class < self.n_classes).then_some(class)
    }
}

/// Encode `labels` into `n_classes` indicator columns.
pub fn one_hot(labels: &ArrayView1<'_, Label>, n_classes: usize) -> Result<Array2<Label>> {
    OneHotEncoder::new(n_classes).encode(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_encode() {
        let labels = arr1(&[0.0f32, 2.0, 1.0, 2.0]);
        let encoded = one_hot(&labels.view(), 3).unwrap();
        assert_eq!(
            encoded,
            arr2(&[
                [1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ])
        );
    }

    #[test]
    fn test_rows_have_single_indicator() {
        let labels = arr1(&[3.0f32, 0.0, 4.0, 1.0]);
        let encoded = OneHotEncoder::new(5).encode(&labels.view()).unwrap();
        for row in encoded.rows() {
            assert_eq!(row.sum(), 1.0);
        }
    }

    #[test]
    fn test_out_of_range_label() {
        let labels = arr1(&[0.0f32, 3.0]);
        let err = one_hot(&labels.view(), 3).unwrap_err();
        assert!(matches!(err, RocAucError::InvalidLabel { index: 1, .. }));
    }

    #[test]
    fn test_fractional_and_negative_labels() {
        let labels = arr1(&[0.5f32]);
        assert!(one_hot(&labels.view(), 2).is_err());

        let labels = arr1(&[-1.0f32]);
        assert!(one_hot(&labels.view(), 2).is_err());

        let labels = arr1(&[f32::NAN]);
        assert!(one_hot(&labels.view(), 2).is_err());
    }
}
