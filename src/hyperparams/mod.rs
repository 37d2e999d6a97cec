//! Hyperparameter encoders
//!
//! Each hyperparameter owns the encoding of its values into a fixed-width
//! numeric block and back. The [`Tunable`](crate::tunable::Tunable)
//! composes them but never looks inside an encoding.

mod boolean;
mod categorical;
mod numerical;

use ndarray::{Array2, ArrayView2};
use rand::RngCore;

use crate::error::Result;
use crate::value::Value;

pub use boolean::BooleanHyperParam;
pub use categorical::CategoricalHyperParam;
pub use numerical::{FloatHyperParam, IntHyperParam};

/// A single tunable hyperparameter.
///
/// Implementations encode a column of typed values into an `[n, K]` numeric
/// block suitable for an optimizer, decode such blocks back into typed
/// values, and sample valid values. `K` is the encoding width reported by
/// [`dimensions`](HyperParam::dimensions).
///
/// The trait is object-safe so a `Tunable` can hold a heterogeneous set of
/// encoders behind `Box<dyn HyperParam>`.
pub trait HyperParam: std::fmt::Debug + Send + Sync {
    /// Number of numeric columns this hyperparameter occupies (K >= 1)
    fn dimensions(&self) -> usize;

    /// Encode a column of values into an `[n, K]` block.
    ///
    /// Fails with an encoding error when a value is of the wrong variant or
    /// outside this hyperparameter's domain.
    fn transform(&self, values: &[Value]) -> Result<Array2<f64>>;

    /// Decode an `[n, K]` block back into a column of `n` typed values.
    fn inverse_transform(&self, block: ArrayView2<'_, f64>) -> Result<Vec<Value>>;

    /// Sample `n` valid values
    fn sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<Value>;
}
