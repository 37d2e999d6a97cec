//! Typed hyperparameter values

use serde::{Deserialize, Serialize};

/// A single typed hyperparameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Categorical(String),
}

impl Value {
    /// Get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as float (widens int losslessly)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Categorical(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Categorical(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Categorical(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bool() {
        let v = Value::Bool(true);
        assert_eq!(v.as_bool(), Some(true));
        assert_eq!(v.as_int(), None);
        assert_eq!(v.as_float(), None);
        assert_eq!(v.as_str(), None);
    }

    #[test]
    fn test_value_int() {
        let v = Value::Int(42);
        assert_eq!(v.as_int(), Some(42));
        assert_eq!(v.as_float(), Some(42.0));
        assert_eq!(v.as_bool(), None);
    }

    #[test]
    fn test_value_float() {
        let v = Value::Float(0.5);
        assert_eq!(v.as_float(), Some(0.5));
        assert_eq!(v.as_int(), None);
    }

    #[test]
    fn test_value_categorical() {
        let v = Value::Categorical("relu".to_string());
        assert_eq!(v.as_str(), Some("relu"));
        assert_eq!(v.as_float(), None);
    }

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(7i64), Value::Int(7));
        assert_eq!(Value::from(0.25), Value::Float(0.25));
        assert_eq!(Value::from("cat"), Value::Categorical("cat".to_string()));
        assert_eq!(
            Value::from("dog".to_string()),
            Value::Categorical("dog".to_string())
        );
    }

    #[test]
    fn test_value_serde() {
        for v in [
            Value::Bool(true),
            Value::Int(42),
            Value::Float(0.5),
            Value::Categorical("relu".to_string()),
        ] {
            let json = serde_json::to_string(&v).unwrap();
            let parsed: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(v, parsed);
        }
    }
}
