//! The `Tunable`: a composite encoder over a fixed hyperparameter set
//!
//! A `Tunable` owns an ordered, name-unique collection of hyperparameters
//! and presents them to an optimizer as one flat numeric space: `transform`
//! concatenates each hyperparameter's `[n, K]` block in `names` order,
//! `inverse_transform` splits a proposal matrix back along the same
//! offsets, and `sample` draws full configurations.
//!
//! # Toyota Way: Jidoka
//!
//! Quality is built in at the boundary: malformed shapes, missing names,
//! and unrepresentable values are rejected where they enter, never carried
//! forward as NaN placeholders.

mod values;


use std::collections::{HashMap, HashSet};

use ndarray::{concatenate, s, Array, Array2, Axis, Dimension, Ix2};
use rand::Rng;

use crate::error::{Result, TuningError};
use crate::hyperparams::HyperParam;
use crate::table::Table;
use crate::value::Value;

pub use values::TunableValues;

/// A fixed, ordered set of named hyperparameters.
///
/// Column order in the numeric encoding is frozen at construction: either
/// the insertion order of [`add`](Tunable::add) calls or the explicit list
/// given to [`with_names`](Tunable::with_names). The `Tunable` holds no
/// search state and is immutable once populated, so sharing `&Tunable`
/// across a tuning loop's workers is safe.
#[derive(Debug, Default)]
pub struct Tunable {
    params: HashMap<String, Box<dyn HyperParam>>,
    names: Vec<String>,
}

impl Tunable {
    /// Create an empty tunable
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hyperparameter; insertion order fixes its column position.
    ///
    /// Re-adding an existing name replaces the hyperparameter but keeps
    /// its original position.
    pub fn add(&mut self, name: &str, param: Box<dyn HyperParam>) {
        if self.params.insert(name.to_string(), param).is_none() {
            self.names.push(name.to_string());
        }
    }

    /// Create a tunable with an explicit column ordering.
    ///
    /// `names` must be exactly the map's key set: same length, no
    /// duplicates, every name present.
    pub fn with_names(
        params: HashMap<String, Box<dyn HyperParam>>,
        names: Vec<String>,
    ) -> Result<Self> {
        if names.len() != params.len() {
            return Err(TuningError::Configuration(format!(
                "{} names for {} hyperparameters",
                names.len(),
                params.len()
            )));
        }
        let unique: HashSet<&String> = names.iter().collect();
        if unique.len() != names.len() {
            return Err(TuningError::Configuration(
                "duplicate names in ordering".to_string(),
            ));
        }
        for name in &names {
            if !params.contains_key(name) {
                return Err(TuningError::Configuration(format!(
                    "name {name:?} has no hyperparameter"
                )));
            }
        }
        Ok(Self { params, names })
    }

    /// Hyperparameter names, in column order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of hyperparameters
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the tunable has no hyperparameters
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get a hyperparameter by name
    pub fn get(&self, name: &str) -> Option<&dyn HyperParam> {
        self.params.get(name).map(AsRef::as_ref)
    }

    /// Total width of the numeric encoding (sum of each K, in `names` order)
    pub fn dimensions(&self) -> usize {
        self.names
            .iter()
            .filter_map(|name| self.params.get(name))
            .map(|p| p.dimensions())
            .sum()
    }

    /// Encode a batch of configurations into a `[batch, total_width]` matrix.
    ///
    /// Accepts any [`TunableValues`] shape; see that type for the accepted
    /// forms. The output column blocks always appear in `names` order.
    pub fn transform<V: Into<TunableValues>>(&self, values: V) -> Result<Array2<f64>> {
        if self.is_empty() {
            return Err(TuningError::EmptySpace);
        }

        let columns = self.normalize(values.into())?;
        let batch = columns[0].len();

        let mut blocks = Vec::with_capacity(self.names.len());
        for (name, column) in self.names.iter().zip(&columns) {
            let param = self.param(name)?;
            let block = param.transform(column).map_err(|e| e.in_param(name))?;
            if block.nrows() != batch || block.ncols() != param.dimensions() {
                return Err(TuningError::Shape(format!(
                    "{name} produced a {}x{} block, expected {batch}x{}",
                    block.nrows(),
                    block.ncols(),
                    param.dimensions()
                )));
            }
            blocks.push(block);
        }

        let views: Vec<_> = blocks.iter().map(|b| b.view()).collect();
        concatenate(Axis(1), &views).map_err(|e| TuningError::Shape(e.to_string()))
    }

    /// Decode a `[batch, total_width]` matrix back into a table of typed
    /// values, one column per hyperparameter, row order preserved.
    ///
    /// The input must be 2-D; a flat vector is ambiguous (one row or one
    /// column?) and is rejected rather than guessed.
    pub fn inverse_transform<D: Dimension>(&self, values: &Array<f64, D>) -> Result<Table> {
        if self.is_empty() {
            return Err(TuningError::EmptySpace);
        }
        if values.ndim() != 2 {
            return Err(TuningError::Shape(format!(
                "expected a 2-d matrix, got {} dimension(s)",
                values.ndim()
            )));
        }
        let matrix = values
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|e| TuningError::Shape(e.to_string()))?;
        if matrix.ncols() != self.dimensions() {
            return Err(TuningError::Shape(format!(
                "expected {} columns, got {}",
                self.dimensions(),
                matrix.ncols()
            )));
        }

        let mut columns = Vec::with_capacity(self.names.len());
        let mut offset = 0;
        for name in &self.names {
            let param = self.param(name)?;
            let width = param.dimensions();
            let block = matrix.slice(s![.., offset..offset + width]);
            let column = param.inverse_transform(block).map_err(|e| e.in_param(name))?;
            columns.push(column);
            offset += width;
        }

        Table::new(self.names.clone(), columns)
    }

    /// Sample `n` configurations using the thread RNG.
    ///
    /// Each hyperparameter samples independently; configuration `i` takes
    /// the i-th draw of every column. Per-value validity is guaranteed,
    /// joint cross-hyperparameter constraints are the caller's concern.
    pub fn sample(&self, n: usize) -> Result<Table> {
        let mut rng = rand::rng();
        self.sample_with(n, &mut rng)
    }

    /// Sample `n` configurations from an explicit RNG
    pub fn sample_with<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Table> {
        if self.is_empty() {
            return Err(TuningError::EmptySpace);
        }
        if n == 0 {
            return Err(TuningError::EmptyBatch);
        }

        let mut columns = Vec::with_capacity(self.names.len());
        for name in &self.names {
            columns.push(self.param(name)?.sample(n, &mut *rng));
        }
        Table::new(self.names.clone(), columns)
    }

    fn param(&self, name: &str) -> Result<&dyn HyperParam> {
        self.params
            .get(name)
            .map(AsRef::as_ref)
            .ok_or_else(|| TuningError::MissingParam(name.to_string()))
    }

    /// Normalize any accepted input shape into one column per name, all
    /// columns the common batch length.
    fn normalize(&self, values: TunableValues) -> Result<Vec<Vec<Value>>> {
        match values {
            TunableValues::Mapping(map) => self
                .names
                .iter()
                .map(|name| {
                    map.get(name)
                        .map(|v| vec![v.clone()])
                        .ok_or_else(|| TuningError::MissingParam(name.clone()))
                })
                .collect(),
            TunableValues::Mappings(maps) => {
                if maps.is_empty() {
                    return Err(TuningError::EmptyBatch);
                }
                self.names
                    .iter()
                    .map(|name| {
                        let hits: Vec<Option<&Value>> =
                            maps.iter().map(|m| m.get(name)).collect();
                        if hits.iter().all(Option::is_none) {
                            return Err(TuningError::MissingParam(name.clone()));
                        }
                        // A name present in some rows but not others leaves a
                        // hole no encoder can represent.
                        hits.into_iter()
                            .map(|hit| {
                                hit.cloned().ok_or_else(|| {
                                    TuningError::Encoding(format!(
                                        "{name}: undefined value in batch"
                                    ))
                                })
                            })
                            .collect()
                    })
                    .collect()
            }
            TunableValues::Row(row) => {
                if row.len() != self.names.len() {
                    return Err(TuningError::Shape(format!(
                        "row has {} values, expected {}",
                        row.len(),
                        self.names.len()
                    )));
                }
                Ok(row.into_iter().map(|v| vec![v]).collect())
            }
            TunableValues::Rows(rows) => {
                if rows.is_empty() {
                    return Err(TuningError::EmptyBatch);
                }
                let mut columns = vec![Vec::with_capacity(rows.len()); self.names.len()];
                for row in rows {
                    if row.len() != self.names.len() {
                        return Err(TuningError::Shape(format!(
                            "row has {} values, expected {}",
                            row.len(),
                            self.names.len()
                        )));
                    }
                    for (column, value) in columns.iter_mut().zip(row) {
                        column.push(value);
                    }
                }
                Ok(columns)
            }
            TunableValues::Table(table) => {
                if table.is_empty() {
                    return Err(TuningError::EmptyBatch);
                }
                self.names
                    .iter()
                    .map(|name| {
                        table
                            .column(name)
                            .map(<[Value]>::to_vec)
                            .ok_or_else(|| TuningError::MissingParam(name.clone()))
                    })
                    .collect()
            }
        }
    }
}
