//! Summation of ENA columns into station groups.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use super::ena::join;
use crate::error::SchemaError;
use crate::table::{EnaTable, Frame, GroupLabel, GroupedEnaTable, GroupingMap};

/// What to do with an ENA station that has no grouping entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCodePolicy {
    /// Leave the station out and list it in [`GroupedEnaTable::excluded`].
    #[default]
    Exclude,
    /// Fail with a `SchemaError` naming the first unmapped station.
    Reject,
}

/// Sums ENA columns row-wise by group label.
#[derive(Debug, Default, Clone, Copy)]
pub struct Aggregator {
    pub policy: UnknownCodePolicy,
}

impl Aggregator {
    pub fn new(policy: UnknownCodePolicy) -> Self {
        Self { policy }
    }

    /// Groups `ena` columns by their label in `grouping`.
    ///
    /// Labels appear in first-seen order while scanning `ena` columns left to
    /// right. Grouping entries for stations absent from `ena` are ignored.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` only under [`UnknownCodePolicy::Reject`], when
    /// an ENA station has no grouping entry.
    pub fn aggregate(
        &self,
        ena: &EnaTable,
        grouping: &GroupingMap,
    ) -> Result<GroupedEnaTable, SchemaError> {
        if self.policy == UnknownCodePolicy::Reject {
            if let Some(code) = ena.codes().iter().find(|c| grouping.label(**c).is_none()) {
                return Err(SchemaError::new(
                    format!("agrupamento[{code}]"),
                    "ENA station has no group",
                ));
            }
        }
        Ok(group_columns(ena, grouping))
    }
}

/// Sums `ena` columns per label, excluding stations `grouping` does not map.
pub(crate) fn group_columns(ena: &EnaTable, grouping: &GroupingMap) -> GroupedEnaTable {
    let rows = ena.len();
    let mut labels: Vec<GroupLabel> = Vec::new();
    let mut sums: Vec<Vec<f64>> = Vec::new();
    let mut slots: HashMap<&GroupLabel, usize> = HashMap::new();
    let mut excluded = Vec::new();

    for (code, series) in ena.as_frame().columns() {
        let Some(label) = grouping.label(*code) else {
            excluded.push(*code);
            continue;
        };

        let slot = *slots.entry(label).or_insert_with(|| {
            labels.push(label.clone());
            sums.push(vec![0.0; rows]);
            sums.len() - 1
        });
        for (acc, value) in sums[slot].iter_mut().zip(series) {
            *acc += value;
        }
    }

    if !excluded.is_empty() {
        warn!(
            count = excluded.len(),
            codes = %join(&excluded),
            "stations without group excluded from aggregation"
        );
    }
    debug!(groups = labels.len(), rows, "aggregated ENA");

    let frame = Frame::from_parts(ena.dates().to_vec(), labels, sums);
    GroupedEnaTable::from_frame(frame, excluded)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::table::StationCode;

    fn ena() -> EnaTable {
        let dates = (1..=2)
            .map(|d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap())
            .collect();
        EnaTable::new(
            dates,
            vec![
                (StationCode::new(10), vec![1.0, 2.0]),
                (StationCode::new(20), vec![10.0, 20.0]),
                (StationCode::new(30), vec![100.0, 200.0]),
            ],
        )
        .unwrap()
    }

    fn grouping(pairs: &[(u32, &str)]) -> GroupingMap {
        GroupingMap::new(
            pairs
                .iter()
                .map(|(code, label)| (StationCode::new(*code), GroupLabel::from(*label))),
        )
        .unwrap()
    }

    #[test]
    fn sums_members_of_each_group() {
        let grouped = Aggregator::default()
            .aggregate(&ena(), &grouping(&[(10, "SE"), (20, "S"), (30, "SE")]))
            .unwrap();
        assert_eq!(grouped.column("SE"), Some(&[101.0, 202.0][..]));
        assert_eq!(grouped.column("S"), Some(&[10.0, 20.0][..]));
    }

    #[test]
    fn labels_follow_first_seen_order() {
        let grouped = Aggregator::default()
            .aggregate(&ena(), &grouping(&[(30, "A"), (20, "B"), (10, "C")]))
            .unwrap();
        let labels: Vec<&str> = grouped.labels().iter().map(GroupLabel::as_str).collect();
        assert_eq!(labels, ["C", "B", "A"]);
    }

    #[test]
    fn excludes_unmapped_stations_by_default() {
        let grouped = Aggregator::default()
            .aggregate(&ena(), &grouping(&[(10, "SE")]))
            .unwrap();
        assert_eq!(grouped.excluded(), &[StationCode::new(20), StationCode::new(30)]);
        assert_eq!(grouped.labels().len(), 1);
    }

    #[test]
    fn reject_policy_fails_on_unmapped_station() {
        let err = Aggregator::new(UnknownCodePolicy::Reject)
            .aggregate(&ena(), &grouping(&[(10, "SE"), (30, "SE")]))
            .unwrap_err();
        assert_eq!(err.field, "agrupamento[20]");
    }

    #[test]
    fn ignores_grouping_entries_absent_from_ena() {
        let grouped = Aggregator::new(UnknownCodePolicy::Reject)
            .aggregate(
                &ena(),
                &grouping(&[(10, "SE"), (20, "SE"), (30, "SE"), (999, "N")]),
            )
            .unwrap();
        assert!(grouped.column("N").is_none());
        assert_eq!(grouped.column("SE"), Some(&[111.0, 222.0][..]));
    }
}
