//! Golden-ratio constant.

// External dependencies
use num_traits::Float;

/// The golden ratio `(1 + sqrt(5)) / 2`, the limit of consecutive-term
/// ratios of the two-term addition relation.
#[inline]
pub fn golden_ratio<T: Float>() -> T {
    (T::one() + T::from(5.0).unwrap().sqrt()) / T::from(2.0).unwrap()
}
