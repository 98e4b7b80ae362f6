//! Rank normalization of raw score and label arrays.
//!
//! Accepts rank-1 `(batch,)` and rank-2 `(batch, channels)` arrays and produces
//! a fixed-rank [`Channels`] value. A trailing singleton channel is collapsed
//! here and nowhere else.

use crate::core::error::Result;
use crate::shape_error;
use ndarray::{Array1, Array2, ArrayViewD, Ix1, Ix2};

/// Array normalized to either one channel or several.
#[derive(Debug, Clone, PartialEq)]
pub enum Channels<A> {
    /// `(batch,)`, including `(batch, 1)` inputs after squeezing
    Single(Array1<A>),
    /// `(batch, channels)` with at least two channels
    Multi(Array2<A>),
}

impl<A> Channels<A> {
    /// Number of samples
    pub fn batch_size(&self) -> usize {
        match self {
            Channels::Single(a) => a.len(),
            Channels::Multi(m) => m.nrows(),
        }
    }

    /// Number of channels
    pub fn num_channels(&self) -> usize {
        match self {
            Channels::Single(_) => 1,
            Channels::Multi(m) => m.ncols(),
        }
    }

    /// Whether the array has a single channel
    pub fn is_single(&self) -> bool {
        matches!(self, Channels::Single(_))
    }
}

/// Validate the rank of `array` and collapse a trailing singleton channel.
///
/// `name` is used in error messages ("scores", "labels").
pub fn normalize<A: Clone>(array: ArrayViewD<'_, A>, name: &str) -> Result<Channels<A>> {
    let shape = array.shape().to_vec();
    let channels = match array.ndim() {
        1 => {
            let v = array
                .into_dimensionality::<Ix1>()
                .map_err(|e| shape_error!("{}: {}", name, e))?;
            Channels::Single(v.to_owned())
        }
        2 => {
            let m = array
                .into_dimensionality::<Ix2>()
                .map_err(|e| shape_error!("{}: {}", name, e))?;
            if m.ncols() == 0 {
                return Err(shape_error!("{} have zero channels: shape {:?}", name, shape));
            }
            if m.ncols() == 1 {
                Channels::Single(m.column(0).to_owned())
            } else {
                Channels::Multi(m.to_owned())
            }
        }
        ndim => {
            return Err(shape_error!(
                "{} should be of shape (batch_size, n_classes) or (batch_size,), got rank {} with shape {:?}",
                name,
                ndim,
                shape
            ))
        }
    };

    if channels.batch_size() == 0 {
        return Err(shape_error!("{} are empty", name));
    }

    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RocAucError;
    use ndarray::{arr1, arr2, Array3, IxDyn};

    #[test]
    fn test_rank_one_is_single() {
        let a = arr1(&[0.1f32, 0.2, 0.3]);
        let c = normalize(a.view().into_dyn(), "scores").unwrap();
        assert_eq!(c, Channels::Single(a));
    }

    #[test]
    fn test_trailing_singleton_is_squeezed() {
        let a = arr2(&[[0.1f32], [0.2], [0.3]]);
        let c = normalize(a.view().into_dyn(), "scores").unwrap();
        assert_eq!(c, Channels::Single(arr1(&[0.1, 0.2, 0.3])));
        assert_eq!(c.num_channels(), 1);
    }

    #[test]
    fn test_multi_channel() {
        let a = arr2(&[[0.1f32, 0.9], [0.6, 0.4]]);
        let c = normalize(a.view().into_dyn(), "scores").unwrap();
        assert!(!c.is_single());
        assert_eq!(c.batch_size(), 2);
        assert_eq!(c.num_channels(), 2);
    }

    #[test]
    fn test_rank_three_rejected() {
        let a = Array3::<f32>::zeros((2, 2, 2));
        let err = normalize(a.view().into_dyn(), "scores").unwrap_err();
        assert!(matches!(err, RocAucError::Shape { .. }));
        assert!(err.to_string().contains("rank 3"));
    }

    #[test]
    fn test_rank_zero_rejected() {
        let a = ndarray::ArrayD::<f32>::zeros(IxDyn(&[]));
        let err = normalize(a.view(), "labels").unwrap_err();
        assert!(matches!(err, RocAucError::Shape { .. }));
    }

    #[test]
    fn test_empty_batch_rejected() {
        let a = Array1::<f32>::zeros(0);
        assert!(matches!(
            normalize(a.view().into_dyn(), "scores"),
            Err(RocAucError::Shape { .. })
        ));
    }

    #[test]
    fn test_zero_channels_rejected() {
        let a = Array2::<f32>::zeros((3, 0));
        assert!(matches!(
            normalize(a.view().into_dyn(), "scores"),
            Err(RocAucError::Shape { .. })
        ));
    }
}
