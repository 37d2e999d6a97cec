//! # afinar
//!
//! Hyperparameter tuning primitives: typed search spaces with a lossless
//! numeric encode/decode boundary.
//!
//! The core type is [`Tunable`], which composes an ordered set of named
//! hyperparameters (boolean, categorical, integer, float) into one flat
//! numeric space. `transform` encodes human-facing typed values into a
//! `[batch, width]` matrix for a downstream optimizer, `inverse_transform`
//! decodes the optimizer's proposals back into typed values, and `sample`
//! draws valid configurations. The search strategy itself (surrogates,
//! acquisition functions) lives outside this crate and only sees the
//! numeric matrix.
//!
//! # Example
//!
//! ```
//! use afinar::{BooleanHyperParam, CategoricalHyperParam, IntHyperParam, Tunable, Value};
//!
//! let mut tunable = Tunable::new();
//! tunable.add("use_bias", Box::new(BooleanHyperParam::new()));
//! tunable.add(
//!     "act",
//!     Box::new(CategoricalHyperParam::new(vec!["relu", "gelu"]).unwrap()),
//! );
//! tunable.add("batch_size", Box::new(IntHyperParam::new(8, 128).unwrap()));
//!
//! let matrix = tunable
//!     .transform(vec![Value::Bool(true), Value::from("relu"), Value::Int(8)])
//!     .unwrap();
//! assert_eq!(matrix.shape(), &[1, 3]);
//!
//! let decoded = tunable.inverse_transform(&matrix).unwrap();
//! assert_eq!(decoded.row(0).unwrap()[0], Value::Bool(true));
//! ```
//!
//! # References
//!
//! \[1\] Bergstra & Bengio (2012) - Random Search for Hyper-Parameter
//! Optimization

pub mod config;
pub mod error;
pub mod hyperparams;
pub mod table;
pub mod tunable;
pub mod value;

pub use config::{ParamConfig, ParamKind, TunableConfig};
pub use error::{Result, TuningError};
pub use hyperparams::{
    BooleanHyperParam, CategoricalHyperParam, FloatHyperParam, HyperParam, IntHyperParam,
};
pub use table::Table;
pub use tunable::{Tunable, TunableValues};
pub use value::Value;
