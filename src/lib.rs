//! Flow to ENA (Energia Natural Afluente) pipeline following the Brazilian
//! grid operator's accounting rules.

pub mod config;
pub mod error;
/// CSV import and export.
pub mod io;
pub mod pipeline;
pub mod report;
/// Operator rules deriving artificial and naturalized stations.
pub mod rules;
pub mod runner;
pub mod table;

pub use error::{EnaError, Result, SchemaError};
pub use pipeline::{
    ENA_CONVERSION_FACTOR, UnknownCodePolicy, add_artificial_flows, aggregate,
    aggregate_with_policy, calculate_ena,
};
pub use rules::{Basin, apply_basins};
pub use table::{
    EnaTable, FlowTable, GroupLabel, GroupedEnaTable, GroupingMap, HydrogramTemplate,
    ProductivityTable, StationCode,
};
