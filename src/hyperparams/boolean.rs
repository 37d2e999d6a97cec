//! Boolean hyperparameter

use ndarray::{Array2, ArrayView2};
use rand::{Rng, RngCore};

use crate::error::{Result, TuningError};
use crate::value::Value;

use super::HyperParam;

/// Boolean hyperparameter, encoded as a single 0/1 column.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanHyperParam;

impl BooleanHyperParam {
    /// Create a new boolean hyperparameter
    pub fn new() -> Self {
        Self
    }
}

impl HyperParam for BooleanHyperParam {
    fn dimensions(&self) -> usize {
        1
    }

    fn transform(&self, values: &[Value]) -> Result<Array2<f64>> {
        let mut out = Array2::zeros((values.len(), 1));
        for (i, value) in values.iter().enumerate() {
            match value {
                Value::Bool(v) => out[[i, 0]] = if *v { 1.0 } else { 0.0 },
                other => {
                    return Err(TuningError::Encoding(format!(
                        "expected a boolean, got {other:?}"
                    )))
                }
            }
        }
        Ok(out)
    }

    fn inverse_transform(&self, block: ArrayView2<'_, f64>) -> Result<Vec<Value>> {
        if block.ncols() != 1 {
            return Err(TuningError::Shape(format!(
                "boolean block expects 1 column, got {}",
                block.ncols()
            )));
        }
        Ok(block.column(0).iter().map(|v| Value::Bool(*v >= 0.5)).collect())
    }

    fn sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<Value> {
        (0..n).map(|_| Value::Bool(rng.random::<f64>() < 0.5)).collect()
    }
}
