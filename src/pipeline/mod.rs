//! The three composable stages: artificial-flow injection, ENA calculation
//! and group aggregation.

pub mod aggregate;
pub mod ena;
pub mod inject;

pub use aggregate::{Aggregator, UnknownCodePolicy};
pub use ena::{ENA_CONVERSION_FACTOR, EnaCalculator};
pub use inject::ArtificialFlowInjector;

use crate::error::{Result, SchemaError};
use crate::table::{
    EnaTable, FlowTable, GroupedEnaTable, GroupingMap, HydrogramTemplate, ProductivityTable,
    StationCode,
};

/// Appends artificial station `target_code` to `flow`, taking each date's
/// value from `template` by calendar month.
///
/// # Errors
///
/// Returns [`EnaError::DuplicateColumn`](crate::EnaError::DuplicateColumn)
/// when `target_code` already exists in `flow`.
pub fn add_artificial_flows(
    flow: &FlowTable,
    template: &HydrogramTemplate,
    target_code: StationCode,
) -> Result<FlowTable> {
    ArtificialFlowInjector.inject(flow, template, target_code)
}

/// Converts `flow` into ENA; see [`EnaCalculator::calculate`].
pub fn calculate_ena(flow: &FlowTable, productivity: &ProductivityTable) -> EnaTable {
    EnaCalculator.calculate(flow, productivity)
}

/// Sums `ena` by group, excluding stations that `grouping` does not map.
pub fn aggregate(ena: &EnaTable, grouping: &GroupingMap) -> GroupedEnaTable {
    aggregate::group_columns(ena, grouping)
}

/// Sums `ena` by group with an explicit policy for unmapped stations.
///
/// # Errors
///
/// Returns a `SchemaError` under [`UnknownCodePolicy::Reject`] when a
/// station is missing from `grouping`.
pub fn aggregate_with_policy(
    ena: &EnaTable,
    grouping: &GroupingMap,
    policy: UnknownCodePolicy,
) -> std::result::Result<GroupedEnaTable, SchemaError> {
    Aggregator::new(policy).aggregate(ena, grouping)
}
