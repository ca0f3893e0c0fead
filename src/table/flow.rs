use chrono::NaiveDate;

use super::{Frame, StationCode};
use crate::error::{EnaError, SchemaError};

const NAME: &str = "flow";

/// Daily flow series (m³/s) keyed by station code.
///
/// Measured columns are validated as finite and non-negative on
/// construction. Columns appended by [`FlowTable::with_column`] come from
/// operator accounting rules and templates; those only need to be finite,
/// since artificial stations can carry negative net flows.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowTable {
    frame: Frame<StationCode>,
}

impl FlowTable {
    /// Builds a flow table from measured series.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` if the index is unsorted or duplicated, a code
    /// repeats, a column length differs from the index, or a cell is
    /// non-numeric or negative.
    pub fn new(
        dates: Vec<NaiveDate>,
        columns: Vec<(StationCode, Vec<f64>)>,
    ) -> Result<Self, SchemaError> {
        let frame = Frame::new(NAME, dates, columns)?;
        for (code, values) in frame.columns() {
            if let Some(row) = values.iter().position(|v| *v < 0.0) {
                return Err(SchemaError::new(
                    format!("{NAME}[{code}]"),
                    format!(
                        "negative flow {} on {}",
                        values[row],
                        frame.dates()[row]
                    ),
                ));
            }
        }
        Ok(Self { frame })
    }

    /// Returns a new table with `values` appended as station `code`.
    ///
    /// # Errors
    ///
    /// Returns [`EnaError::DuplicateColumn`] if `code` already exists, or a
    /// schema error if `values` does not match the index or is non-finite.
    pub fn with_column(&self, code: StationCode, values: Vec<f64>) -> Result<Self, EnaError> {
        if self.frame.contains(&code) {
            return Err(EnaError::DuplicateColumn { code });
        }
        let frame = self.frame.with_column(NAME, code, values)?;
        Ok(Self { frame })
    }

    /// Values for `code`, failing when the station is missing.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` naming the missing station.
    pub fn require(&self, code: StationCode) -> Result<&[f64], SchemaError> {
        self.frame.column(&code).ok_or_else(|| {
            SchemaError::new(format!("{NAME}[{code}]"), "required station is missing")
        })
    }

    pub fn column(&self, code: StationCode) -> Option<&[f64]> {
        self.frame.column(&code)
    }

    pub fn dates(&self) -> &[NaiveDate] {
        self.frame.dates()
    }

    pub fn len(&self) -> usize {
        self.frame.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// Station codes in column order.
    pub fn codes(&self) -> &[StationCode] {
        self.frame.keys()
    }

    pub fn as_frame(&self) -> &Frame<StationCode> {
        &self.frame
    }
}
