use chrono::{Datelike, NaiveDate};

use crate::error::SchemaError;

/// Reference flow for each calendar month, used to synthesize artificial
/// stations and as the Belo Monte diversion threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydrogramTemplate {
    monthly: [f64; 12],
}

impl HydrogramTemplate {
    /// Builds the template from `(month, flow)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` unless the months are exactly 1–12 with no
    /// duplicates and every flow is finite and non-negative.
    pub fn new(entries: impl IntoIterator<Item = (u32, f64)>) -> Result<Self, SchemaError> {
        let mut monthly = [None; 12];
        for (month, flow) in entries {
            if !(1..=12).contains(&month) {
                return Err(SchemaError::new(
                    "hidrograma.mes",
                    format!("month must be in 1..=12, got {month}"),
                ));
            }
            if !flow.is_finite() || flow < 0.0 {
                return Err(SchemaError::new(
                    format!("hidrograma[{month}]"),
                    format!("reference flow must be finite and >= 0, got {flow}"),
                ));
            }
            let slot = &mut monthly[month as usize - 1];
            if slot.replace(flow).is_some() {
                return Err(SchemaError::new(
                    format!("hidrograma[{month}]"),
                    "month defined more than once",
                ));
            }
        }

        let missing: Vec<String> = monthly
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_none())
            .map(|(i, _)| (i + 1).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::new(
                "hidrograma.mes",
                format!("missing months: {}", missing.join(", ")),
            ));
        }

        Ok(Self {
            monthly: monthly.map(|v| v.unwrap_or_default()),
        })
    }

    /// Reference flow for `month` (1–12).
    pub fn month(&self, month: u32) -> Option<f64> {
        month
            .checked_sub(1)
            .and_then(|i| self.monthly.get(i as usize))
            .copied()
    }

    /// Reference flow for the calendar month of `date`.
    pub fn for_date(&self, date: NaiveDate) -> f64 {
        self.monthly[date.month0() as usize]
    }
}
