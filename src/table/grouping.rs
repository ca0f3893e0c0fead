use std::collections::HashMap;

use super::{GroupLabel, StationCode};
use crate::error::SchemaError;

/// Station → group label mapping used by the aggregator.
///
/// Several stations may share a label. Each station belongs to exactly one
/// group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingMap {
    entries: Vec<(StationCode, GroupLabel)>,
    index: HashMap<StationCode, usize>,
}

impl GroupingMap {
    /// # Errors
    ///
    /// Returns a `SchemaError` if a station appears twice or a label is blank.
    /// The CSV reader drops blank-label rows before they get here.
    pub fn new(
        entries: impl IntoIterator<Item = (StationCode, GroupLabel)>,
    ) -> Result<Self, SchemaError> {
        let mut map = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for (code, label) in entries {
            if label.as_str().trim().is_empty() {
                return Err(SchemaError::new(
                    format!("agrupamento[{code}]"),
                    "group label is empty",
                ));
            }
            if map.index.insert(code, map.entries.len()).is_some() {
                return Err(SchemaError::new(
                    format!("agrupamento[{code}]"),
                    "station mapped to more than one group",
                ));
            }
            map.entries.push((code, label));
        }
        Ok(map)
    }

    pub fn label(&self, code: StationCode) -> Option<&GroupLabel> {
        self.index.get(&code).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StationCode, &GroupLabel)> {
        self.entries.iter().map(|(code, label)| (*code, label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_stations_share_a_label() {
        let map = GroupingMap::new([
            (StationCode::new(1), GroupLabel::from("SE")),
            (StationCode::new(2), GroupLabel::from("SE")),
        ])
        .unwrap();
        assert_eq!(map.label(StationCode::new(2)).map(GroupLabel::as_str), Some("SE"));
    }

    #[test]
    fn rejects_station_in_two_groups() {
        let err = GroupingMap::new([
            (StationCode::new(1), GroupLabel::from("SE")),
            (StationCode::new(1), GroupLabel::from("S")),
        ])
        .unwrap_err();
        assert_eq!(err.field, "agrupamento[1]");
    }

    #[test]
    fn rejects_blank_label() {
        assert!(GroupingMap::new([(StationCode::new(1), GroupLabel::from("  "))]).is_err());
    }
}
