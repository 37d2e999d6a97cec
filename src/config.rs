//! Declarative tunable definitions
//!
//! A `TunableConfig` is the serializable description of a search space:
//! an ordered list of named hyperparameter definitions. It exists so a
//! space can live in a JSON/YAML experiment file instead of code.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TuningError};
use crate::hyperparams::{
    BooleanHyperParam, CategoricalHyperParam, FloatHyperParam, HyperParam, IntHyperParam,
};
use crate::tunable::Tunable;

/// A single hyperparameter definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParamKind {
    /// Boolean knob
    Bool,
    /// Integer over an inclusive range
    Int { min: i64, max: i64 },
    /// Float over an inclusive range
    Float { min: f64, max: f64 },
    /// Categorical over fixed choices; `one_hot` widens the encoding to
    /// one column per choice
    Categorical {
        choices: Vec<String>,
        #[serde(default)]
        one_hot: bool,
    },
}

impl ParamKind {
    /// Build the hyperparameter this definition describes
    pub fn build(&self) -> Result<Box<dyn HyperParam>> {
        Ok(match self {
            ParamKind::Bool => Box::new(BooleanHyperParam::new()),
            ParamKind::Int { min, max } => Box::new(IntHyperParam::new(*min, *max)?),
            ParamKind::Float { min, max } => Box::new(FloatHyperParam::new(*min, *max)?),
            ParamKind::Categorical { choices, one_hot } => {
                if *one_hot {
                    Box::new(CategoricalHyperParam::one_hot(choices.clone())?)
                } else {
                    Box::new(CategoricalHyperParam::new(choices.clone())?)
                }
            }
        })
    }
}

/// A named hyperparameter definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamConfig {
    pub name: String,
    #[serde(flatten)]
    pub kind: ParamKind,
}

/// An ordered, serializable search-space definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TunableConfig {
    pub params: Vec<ParamConfig>,
}

impl TunableConfig {
    /// Parse a definition from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| TuningError::Configuration(e.to_string()))
    }

    /// Build a `Tunable` with the listed column order
    pub fn build(&self) -> Result<Tunable> {
        let mut tunable = Tunable::new();
        for param in &self.params {
            if tunable.get(&param.name).is_some() {
                return Err(TuningError::Configuration(format!(
                    "duplicate hyperparameter name {:?}",
                    param.name
                )));
            }
            tunable.add(&param.name, param.kind.build()?);
        }
        Ok(tunable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFINITION: &str = r#"{
        "params": [
            {"name": "use_bias", "type": "bool"},
            {"name": "batch_size", "type": "int", "min": 8, "max": 128},
            {"name": "lr", "type": "float", "min": 1e-5, "max": 1e-1},
            {"name": "act", "type": "categorical", "choices": ["relu", "gelu"], "one_hot": true}
        ]
    }"#;

    #[test]
    fn test_from_json_and_build() {
        let config = TunableConfig::from_json(DEFINITION).expect("valid definition");
        let tunable = config.build().expect("buildable definition");

        assert_eq!(tunable.names(), ["use_bias", "batch_size", "lr", "act"]);
        // 1 + 1 + 1 + one-hot over 2 choices
        assert_eq!(tunable.dimensions(), 5);
    }

    #[test]
    fn test_from_json_invalid_text() {
        let result = TunableConfig::from_json("not json");
        assert!(matches!(result, Err(TuningError::Configuration(_))));
    }

    #[test]
    fn test_build_duplicate_name() {
        let config = TunableConfig {
            params: vec![
                ParamConfig {
                    name: "lr".to_string(),
                    kind: ParamKind::Bool,
                },
                ParamConfig {
                    name: "lr".to_string(),
                    kind: ParamKind::Bool,
                },
            ],
        };
        assert!(matches!(
            config.build(),
            Err(TuningError::Configuration(_))
        ));
    }

    #[test]
    fn test_build_invalid_range() {
        let config = TunableConfig {
            params: vec![ParamConfig {
                name: "batch_size".to_string(),
                kind: ParamKind::Int { min: 8, max: 8 },
            }],
        };
        assert!(matches!(
            config.build(),
            Err(TuningError::Configuration(_))
        ));
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = TunableConfig::from_json(DEFINITION).expect("valid definition");
        let json = serde_json::to_string(&config).unwrap();
        let parsed = TunableConfig::from_json(&json).expect("round trips");
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_one_hot_defaults_to_false() {
        let config = TunableConfig::from_json(
            r#"{"params": [{"name": "act", "type": "categorical", "choices": ["a", "b"]}]}"#,
        )
        .expect("valid definition");
        let tunable = config.build().expect("buildable");
        assert_eq!(tunable.dimensions(), 1);
    }
}
