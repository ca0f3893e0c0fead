use chrono::NaiveDate;

use super::{Frame, GroupLabel, StationCode};
use crate::error::SchemaError;

/// Energy equivalent (MWmed) per station, indexed like the source flow table.
#[derive(Debug, Clone, PartialEq)]
pub struct EnaTable {
    frame: Frame<StationCode>,
    excluded: Vec<StationCode>,
}

impl EnaTable {
    /// Builds an ENA table from precomputed series (e.g. read back from disk).
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` on any index or column violation.
    pub fn new(
        dates: Vec<NaiveDate>,
        columns: Vec<(StationCode, Vec<f64>)>,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            frame: Frame::new("ena", dates, columns)?,
            excluded: Vec::new(),
        })
    }

    pub(crate) fn from_frame(frame: Frame<StationCode>, excluded: Vec<StationCode>) -> Self {
        Self { frame, excluded }
    }

    /// Flow stations dropped because no productivity coefficient was known.
    pub fn excluded(&self) -> &[StationCode] {
        &self.excluded
    }

    pub fn codes(&self) -> &[StationCode] {
        self.frame.keys()
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

    pub fn as_frame(&self) -> &Frame<StationCode> {
        &self.frame
    }
}

/// ENA summed by group label.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedEnaTable {
    frame: Frame<GroupLabel>,
    excluded: Vec<StationCode>,
}

impl GroupedEnaTable {
    pub(crate) fn from_frame(frame: Frame<GroupLabel>, excluded: Vec<StationCode>) -> Self {
        Self { frame, excluded }
    }

    /// ENA stations left out because the grouping had no entry for them.
    pub fn excluded(&self) -> &[StationCode] {
        &self.excluded
    }

    /// Group labels in first-seen order.
    pub fn labels(&self) -> &[GroupLabel] {
        self.frame.keys()
    }

    pub fn column(&self, label: &str) -> Option<&[f64]> {
        self.frame.column(&GroupLabel::from(label))
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

    pub fn as_frame(&self) -> &Frame<GroupLabel> {
        &self.frame
    }
}
