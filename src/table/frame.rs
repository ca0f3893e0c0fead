//! Date-indexed, column-ordered numeric frame shared by every table type.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use chrono::NaiveDate;

use crate::error::SchemaError;

/// An ordered mapping from column key to a fixed-length numeric sequence,
/// paired with a shared date index.
///
/// Invariants, checked once by [`Frame::new`]:
/// - the date index is strictly increasing (sorted, no duplicates),
/// - every column has exactly one value per date,
/// - column keys are unique,
/// - every value is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<K> {
    dates: Vec<NaiveDate>,
    keys: Vec<K>,
    values: Vec<Vec<f64>>,
}

impl<K> Frame<K>
where
    K: Clone + Eq + Hash + Display,
{
    /// Builds a frame, validating the index and every column.
    ///
    /// `name` prefixes the `field` of any returned [`SchemaError`].
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` naming the offending date, key or cell.
    pub fn new(
        name: &str,
        dates: Vec<NaiveDate>,
        columns: Vec<(K, Vec<f64>)>,
    ) -> Result<Self, SchemaError> {
        for pair in dates.windows(2) {
            if pair[1] == pair[0] {
                return Err(SchemaError::new(
                    format!("{name}.index"),
                    format!("duplicate date {}", pair[1]),
                ));
            }
            if pair[1] < pair[0] {
                return Err(SchemaError::new(
                    format!("{name}.index"),
                    format!("dates must be ascending, {} follows {}", pair[1], pair[0]),
                ));
            }
        }

        let mut seen = HashSet::with_capacity(columns.len());
        let mut keys = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());
        for (key, column) in columns {
            if !seen.insert(key.clone()) {
                return Err(SchemaError::new(
                    format!("{name}[{key}]"),
                    "duplicate column",
                ));
            }
            check_column(name, &key, &dates, &column)?;
            keys.push(key);
            values.push(column);
        }

        Ok(Self {
            dates,
            keys,
            values,
        })
    }

    /// Returns a new frame with one more column appended last.
    ///
    /// The caller has already checked that `key` is absent.
    pub(crate) fn with_column(
        &self,
        name: &str,
        key: K,
        column: Vec<f64>,
    ) -> Result<Self, SchemaError> {
        check_column(name, &key, &self.dates, &column)?;
        let mut out = self.clone();
        out.keys.push(key);
        out.values.push(column);
        Ok(out)
    }

    /// Builds a frame from parts that are valid by construction
    /// (derived from an already-validated frame).
    pub(crate) fn from_parts(dates: Vec<NaiveDate>, keys: Vec<K>, values: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        Self {
            dates,
            keys,
            values,
        }
    }

    /// Shared date index.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Column keys in table order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.keys.len()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Values of the column named `key`, if present.
    pub fn column(&self, key: &K) -> Option<&[f64]> {
        self.position(key).map(|i| self.values[i].as_slice())
    }

    /// Iterates `(key, values)` pairs in table order.
    pub fn columns(&self) -> impl Iterator<Item = (&K, &[f64])> {
        self.keys
            .iter()
            .zip(self.values.iter().map(Vec::as_slice))
    }

    /// Sum across every column for one row.
    pub fn row_sum(&self, row: usize) -> f64 {
        self.values.iter().map(|column| column[row]).sum()
    }

    /// Sum of every cell in one column, or `None` when the key is absent.
    pub fn column_sum(&self, key: &K) -> Option<f64> {
        self.column(key).map(|values| values.iter().sum())
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }
}

fn check_column<K: Display>(
    name: &str,
    key: &K,
    dates: &[NaiveDate],
    column: &[f64],
) -> Result<(), SchemaError> {
    if column.len() != dates.len() {
        return Err(SchemaError::new(
            format!("{name}[{key}]"),
            format!(
                "column has {} values but the index has {} dates",
                column.len(),
                dates.len()
            ),
        ));
    }
    if let Some((row, value)) = column.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SchemaError::new(
            format!("{name}[{key}]"),
            format!("non-numeric value {value} on {}", dates[row]),
        ));
    }
    Ok(())
}
