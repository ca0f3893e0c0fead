use std::collections::HashMap;

use super::StationCode;
use crate::error::SchemaError;

/// Productivity coefficient per station, in MW per m³/s.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductivityTable {
    entries: Vec<(StationCode, f64)>,
    index: HashMap<StationCode, usize>,
}

impl ProductivityTable {
    /// Builds the table, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` on a duplicate code or a coefficient that is
    /// not a finite positive number.
    pub fn new(
        entries: impl IntoIterator<Item = (StationCode, f64)>,
    ) -> Result<Self, SchemaError> {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for (code, coefficient) in entries {
            if !coefficient.is_finite() || coefficient <= 0.0 {
                return Err(SchemaError::new(
                    format!("produtibilidade[{code}]"),
                    format!("coefficient must be > 0, got {coefficient}"),
                ));
            }
            if table.index.insert(code, table.entries.len()).is_some() {
                return Err(SchemaError::new(
                    format!("produtibilidade[{code}]"),
                    "duplicate station code",
                ));
            }
            table.entries.push((code, coefficient));
        }
        Ok(table)
    }

    pub fn get(&self, code: StationCode) -> Option<f64> {
        self.index.get(&code).map(|&i| self.entries[i].1)
    }

    /// `(code, coefficient)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (StationCode, f64)> + '_ {
        self.entries.iter().copied()
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
    fn rejects_zero_coefficient() {
        let err = ProductivityTable::new([(StationCode::new(1), 0.0)]).unwrap_err();
        assert_eq!(err.field, "produtibilidade[1]");
    }

    #[test]
    fn rejects_negative_coefficient() {
        assert!(ProductivityTable::new([(StationCode::new(1), -0.5)]).is_err());
    }

    #[test]
    fn rejects_nan_coefficient() {
        assert!(ProductivityTable::new([(StationCode::new(1), f64::NAN)]).is_err());
    }

    #[test]
    fn rejects_duplicate_code() {
        let err = ProductivityTable::new([(StationCode::new(6), 0.3), (StationCode::new(6), 0.4)])
            .unwrap_err();
        assert!(err.message.contains("duplicate"));
    }

    #[test]
    fn looks_up_by_code() {
        let table = ProductivityTable::new([(StationCode::new(6), 0.3), (StationCode::new(1), 0.9)])
            .unwrap();
        assert_eq!(table.get(StationCode::new(1)), Some(0.9));
        assert_eq!(table.get(StationCode::new(2)), None);
        assert_eq!(table.len(), 2);
    }
}
