//! Categorical hyperparameter

use ndarray::{Array2, ArrayView2};
use rand::{Rng, RngCore};

use crate::error::{Result, TuningError};
use crate::value::Value;

use super::HyperParam;

/// Numeric layout of a categorical encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    /// Choice i encodes as the single column value `i`
    Index,
    /// Choice i encodes as a one-hot row of width `choices.len()`
    OneHot,
}

/// Categorical hyperparameter over a fixed set of string choices.
///
/// The default encoding is the choice index (width 1); `one_hot` widens
/// the block to one column per choice. Values outside the choice set are
/// rejected, never silently mapped.
#[derive(Debug, Clone)]
pub struct CategoricalHyperParam {
    choices: Vec<String>,
    encoding: Encoding,
}

impl CategoricalHyperParam {
    /// Create an index-encoded categorical hyperparameter
    pub fn new<S: Into<String>>(choices: Vec<S>) -> Result<Self> {
        Self::with_encoding(choices, Encoding::Index)
    }

    /// Create a one-hot encoded categorical hyperparameter
    pub fn one_hot<S: Into<String>>(choices: Vec<S>) -> Result<Self> {
        Self::with_encoding(choices, Encoding::OneHot)
    }

    fn with_encoding<S: Into<String>>(choices: Vec<S>, encoding: Encoding) -> Result<Self> {
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        if choices.is_empty() {
            return Err(TuningError::Configuration(
                "categorical hyperparameter needs at least one choice".to_string(),
            ));
        }
        for (i, choice) in choices.iter().enumerate() {
            if choices[..i].contains(choice) {
                return Err(TuningError::Configuration(format!(
                    "duplicate categorical choice {choice:?}"
                )));
            }
        }
        Ok(Self { choices, encoding })
    }

    /// The choice set, in encoding order
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    fn index_of(&self, value: &Value) -> Result<usize> {
        let s = value.as_str().ok_or_else(|| {
            TuningError::Encoding(format!("expected a categorical value, got {value:?}"))
        })?;
        self.choices
            .iter()
            .position(|c| c == s)
            .ok_or_else(|| TuningError::Encoding(format!("unknown category {s:?}")))
    }
}

impl HyperParam for CategoricalHyperParam {
    fn dimensions(&self) -> usize {
        match self.encoding {
            Encoding::Index => 1,
            Encoding::OneHot => self.choices.len(),
        }
    }

    fn transform(&self, values: &[Value]) -> Result<Array2<f64>> {
        let mut out = Array2::zeros((values.len(), self.dimensions()));
        for (i, value) in values.iter().enumerate() {
            let idx = self.index_of(value)?;
            match self.encoding {
                Encoding::Index => out[[i, 0]] = idx as f64,
                Encoding::OneHot => out[[i, idx]] = 1.0,
            }
        }
        Ok(out)
    }

    fn inverse_transform(&self, block: ArrayView2<'_, f64>) -> Result<Vec<Value>> {
        if block.ncols() != self.dimensions() {
            return Err(TuningError::Shape(format!(
                "categorical block expects {} column(s), got {}",
                self.dimensions(),
                block.ncols()
            )));
        }

        block
            .rows()
            .into_iter()
            .map(|row| {
                let idx = match self.encoding {
                    Encoding::Index => {
                        let raw = row[0].round();
                        if raw < 0.0 || raw >= self.choices.len() as f64 {
                            return Err(TuningError::Encoding(format!(
                                "category index {} out of range",
                                row[0]
                            )));
                        }
                        raw as usize
                    }
                    Encoding::OneHot => {
                        // Argmax tolerates soft one-hot rows from an optimizer.
                        let mut best = 0;
                        for (j, v) in row.iter().enumerate() {
                            if *v > row[best] {
                                best = j;
                            }
                        }
                        best
                    }
                };
                Ok(Value::Categorical(self.choices[idx].clone()))
            })
            .collect()
    }

    fn sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<Value> {
        (0..n)
            .map(|_| {
                let idx = (rng.random::<f64>() * self.choices.len() as f64).floor() as usize;
                let idx = idx.min(self.choices.len() - 1);
                Value::Categorical(self.choices[idx].clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn cat_dog() -> CategoricalHyperParam {
        CategoricalHyperParam::new(vec!["cat", "dog"]).expect("valid choices")
    }

    #[test]
    fn test_categorical_new_empty() {
        let result = CategoricalHyperParam::new(Vec::<String>::new());
        assert!(matches!(result, Err(TuningError::Configuration(_))));
    }

    #[test]
    fn test_categorical_new_duplicate() {
        let result = CategoricalHyperParam::new(vec!["cat", "cat"]);
        assert!(matches!(result, Err(TuningError::Configuration(_))));
    }

    #[test]
    fn test_categorical_index_transform() {
        let chp = cat_dog();
        assert_eq!(chp.dimensions(), 1);

        let block = chp
            .transform(&[Value::from("cat"), Value::from("dog")])
            .expect("known categories encode");
        assert_eq!(block, array![[0.0], [1.0]]);
    }

    #[test]
    fn test_categorical_unknown_category() {
        let chp = cat_dog();
        let result = chp.transform(&[Value::from("bird")]);
        assert!(matches!(result, Err(TuningError::Encoding(_))));
    }

    #[test]
    fn test_categorical_wrong_variant() {
        let chp = cat_dog();
        let result = chp.transform(&[Value::Int(0)]);
        assert!(matches!(result, Err(TuningError::Encoding(_))));
    }

    #[test]
    fn test_categorical_index_inverse_transform() {
        let chp = cat_dog();
        let block = array![[1.0], [0.0]];
        let values = chp.inverse_transform(block.view()).expect("decodes");
        assert_eq!(values, vec![Value::from("dog"), Value::from("cat")]);
    }

    #[test]
    fn test_categorical_index_inverse_out_of_range() {
        let chp = cat_dog();
        let block = array![[5.0]];
        let result = chp.inverse_transform(block.view());
        assert!(matches!(result, Err(TuningError::Encoding(_))));
    }

    #[test]
    fn test_categorical_one_hot() {
        let chp = CategoricalHyperParam::one_hot(vec!["relu", "gelu", "swish"])
            .expect("valid choices");
        assert_eq!(chp.dimensions(), 3);

        let block = chp
            .transform(&[Value::from("gelu"), Value::from("relu")])
            .expect("encodes");
        assert_eq!(block, array![[0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);

        let values = chp.inverse_transform(block.view()).expect("decodes");
        assert_eq!(values, vec![Value::from("gelu"), Value::from("relu")]);
    }

    #[test]
    fn test_categorical_one_hot_soft_rows() {
        let chp = CategoricalHyperParam::one_hot(vec!["relu", "gelu"]).expect("valid choices");
        let block = array![[0.2, 0.7], [0.9, 0.1]];
        let values = chp.inverse_transform(block.view()).expect("decodes");
        assert_eq!(values, vec![Value::from("gelu"), Value::from("relu")]);
    }

    #[test]
    fn test_categorical_sample() {
        let chp = cat_dog();
        let mut rng = rand::rng();
        for value in chp.sample(50, &mut rng) {
            let s = value.as_str().expect("categorical sample");
            assert!(chp.choices().contains(&s.to_string()));
        }
    }
}
