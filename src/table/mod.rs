//! Validated, immutable tables consumed and produced by the pipeline stages.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SchemaError;

/// Computed energy tables (per station and per group).
pub mod ena;
/// Measured and derived flow series.
pub mod flow;
pub mod frame;
/// Station → group label mapping.
pub mod grouping;
/// Monthly reference flow cycle.
pub mod hydrogram;
/// Station → productivity coefficient mapping.
pub mod productivity;

pub use ena::{EnaTable, GroupedEnaTable};
pub use flow::FlowTable;
pub use frame::Frame;
pub use grouping::GroupingMap;
pub use hydrogram::HydrogramTemplate;
pub use productivity::ProductivityTable;

/// Numeric identifier of a station (posto), unique within a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct StationCode(u32);

impl StationCode {
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for StationCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StationCode {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| SchemaError::new("codigo", format!("\"{s}\" is not a numeric station code")))
    }
}

/// Label of a station group (e.g. a subsystem or basin name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupLabel(String);

impl GroupLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for GroupLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
