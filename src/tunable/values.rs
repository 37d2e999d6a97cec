//! Accepted input shapes for `Tunable::transform`

use std::collections::HashMap;

use crate::table::Table;
use crate::value::Value;

/// The shapes a batch of configurations may arrive in.
///
/// Callers rarely name this type: every variant has a `From` impl from the
/// natural Rust shape, and `transform` takes `impl Into<TunableValues>`.
/// Making the shape an explicit union keeps the normalization step at the
/// boundary and the core working on one canonical columnar layout.
#[derive(Debug, Clone, PartialEq)]
pub enum TunableValues {
    /// One configuration as a name -> value mapping
    Mapping(HashMap<String, Value>),
    /// A batch of configurations, each a name -> value mapping
    Mappings(Vec<HashMap<String, Value>>),
    /// One configuration as positional values in `names` order
    Row(Vec<Value>),
    /// A batch of positional configurations, each in `names` order
    Rows(Vec<Vec<Value>>),
    /// A batch as named columns
    Table(Table),
}

impl From<HashMap<String, Value>> for TunableValues {
    fn from(values: HashMap<String, Value>) -> Self {
        TunableValues::Mapping(values)
    }
}

impl From<Vec<HashMap<String, Value>>> for TunableValues {
    fn from(values: Vec<HashMap<String, Value>>) -> Self {
        TunableValues::Mappings(values)
    }
}

impl From<Vec<Value>> for TunableValues {
    fn from(values: Vec<Value>) -> Self {
        TunableValues::Row(values)
    }
}

impl From<Vec<Vec<Value>>> for TunableValues {
    fn from(values: Vec<Vec<Value>>) -> Self {
        TunableValues::Rows(values)
    }
}

impl From<Table> for TunableValues {
    fn from(values: Table) -> Self {
        TunableValues::Table(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mapping() {
        let mut map = HashMap::new();
        map.insert("lr".to_string(), Value::Float(0.01));
        assert!(matches!(
            TunableValues::from(map),
            TunableValues::Mapping(_)
        ));
    }

    #[test]
    fn test_from_row_and_rows() {
        assert!(matches!(
            TunableValues::from(vec![Value::Int(1)]),
            TunableValues::Row(_)
        ));
        assert!(matches!(
            TunableValues::from(vec![vec![Value::Int(1)]]),
            TunableValues::Rows(_)
        ));
    }

    #[test]
    fn test_from_table() {
        let table = Table::new(vec!["a".to_string()], vec![vec![Value::Int(1)]])
            .expect("valid table");
        assert!(matches!(TunableValues::from(table), TunableValues::Table(_)));
    }
}
