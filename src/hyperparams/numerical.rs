//! Integer and float hyperparameters
//!
//! Both encode by min-max normalization into [0, 1], the scale a
//! downstream optimizer expects, and decode by denormalizing and clamping
//! back into range.

use ndarray::{Array2, ArrayView2};
use rand::{Rng, RngCore};

use crate::error::{Result, TuningError};
use crate::value::Value;

use super::HyperParam;

/// Integer hyperparameter over an inclusive range.
#[derive(Debug, Clone, Copy)]
pub struct IntHyperParam {
    min: i64,
    max: i64,
}

impl IntHyperParam {
    /// Create an integer hyperparameter over `[min, max]`
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min >= max {
            return Err(TuningError::Configuration(format!(
                "invalid integer range [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    fn span(&self) -> f64 {
        (self.max - self.min) as f64
    }
}

impl HyperParam for IntHyperParam {
    fn dimensions(&self) -> usize {
        1
    }

    fn transform(&self, values: &[Value]) -> Result<Array2<f64>> {
        let mut out = Array2::zeros((values.len(), 1));
        for (i, value) in values.iter().enumerate() {
            let v = value.as_int().ok_or_else(|| {
                TuningError::Encoding(format!("expected an integer, got {value:?}"))
            })?;
            if v < self.min || v > self.max {
                return Err(TuningError::Encoding(format!(
                    "{v} outside range [{}, {}]",
                    self.min, self.max
                )));
            }
            out[[i, 0]] = (v - self.min) as f64 / self.span();
        }
        Ok(out)
    }

    fn inverse_transform(&self, block: ArrayView2<'_, f64>) -> Result<Vec<Value>> {
        if block.ncols() != 1 {
            return Err(TuningError::Shape(format!(
                "integer block expects 1 column, got {}",
                block.ncols()
            )));
        }
        Ok(block
            .column(0)
            .iter()
            .map(|raw| {
                let v = (raw * self.span() + self.min as f64).round() as i64;
                Value::Int(v.clamp(self.min, self.max))
            })
            .collect())
    }

    fn sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<Value> {
        let range = (self.max - self.min + 1) as f64;
        (0..n)
            .map(|_| {
                let offset = (rng.random::<f64>() * range).floor() as i64;
                Value::Int((self.min + offset).min(self.max))
            })
            .collect()
    }
}

/// Float hyperparameter over an inclusive range.
#[derive(Debug, Clone, Copy)]
pub struct FloatHyperParam {
    min: f64,
    max: f64,
}

impl FloatHyperParam {
    /// Create a float hyperparameter over `[min, max]`
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(TuningError::Configuration(format!(
                "invalid float range [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }
}

impl HyperParam for FloatHyperParam {
    fn dimensions(&self) -> usize {
        1
    }

    fn transform(&self, values: &[Value]) -> Result<Array2<f64>> {
        let mut out = Array2::zeros((values.len(), 1));
        for (i, value) in values.iter().enumerate() {
            let v = value.as_float().ok_or_else(|| {
                TuningError::Encoding(format!("expected a float, got {value:?}"))
            })?;
            if !v.is_finite() || v < self.min || v > self.max {
                return Err(TuningError::Encoding(format!(
                    "{v} outside range [{}, {}]",
                    self.min, self.max
                )));
            }
            out[[i, 0]] = (v - self.min) / (self.max - self.min);
        }
        Ok(out)
    }

    fn inverse_transform(&self, block: ArrayView2<'_, f64>) -> Result<Vec<Value>> {
        if block.ncols() != 1 {
            return Err(TuningError::Shape(format!(
                "float block expects 1 column, got {}",
                block.ncols()
            )));
        }
        Ok(block
            .column(0)
            .iter()
            .map(|raw| {
                let v = raw * (self.max - self.min) + self.min;
                Value::Float(v.clamp(self.min, self.max))
            })
            .collect())
    }

    fn sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<Value> {
        (0..n)
            .map(|_| Value::Float(self.min + rng.random::<f64>() * (self.max - self.min)))
            .collect()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_int_round_trip(min in -100i64..0, max in 1i64..100, offset in 0u64..50) {
            let ihp = IntHyperParam::new(min, max).expect("valid range");
            let v = min + (offset as i64) % (max - min + 1);
            let block = ihp.transform(&[Value::Int(v)]).expect("encodes");
            let decoded = ihp.inverse_transform(block.view()).expect("decodes");
            prop_assert_eq!(decoded, vec![Value::Int(v)]);
        }

        #[test]
        fn prop_int_sample_valid(min in -100i64..0, max in 1i64..100) {
            let ihp = IntHyperParam::new(min, max).expect("valid range");
            let mut rng = rand::rng();
            for value in ihp.sample(20, &mut rng) {
                let v = value.as_int().expect("integer sample");
                prop_assert!(v >= min && v <= max);
            }
        }

        #[test]
        fn prop_float_transform_unit_interval(low in -100.0f64..0.0, high in 1.0f64..100.0, t in 0.0f64..1.0) {
            let fhp = FloatHyperParam::new(low, high).expect("valid range");
            let v = low + t * (high - low);
            let block = fhp.transform(&[Value::Float(v)]).expect("encodes");
            prop_assert!(block[[0, 0]] >= 0.0 && block[[0, 0]] <= 1.0);
        }

        #[test]
        fn prop_float_sample_valid(low in -100.0f64..0.0, high in 1.0f64..100.0) {
            let fhp = FloatHyperParam::new(low, high).expect("valid range");
            let mut rng = rand::rng();
            for value in fhp.sample(20, &mut rng) {
                let v = value.as_float().expect("float sample");
                prop_assert!(v >= low && v <= high);
            }
        }
    }
}
