//! Synthesis of artificial stations from a monthly reference template.

use tracing::debug;

use crate::error::Result;
use crate::table::{FlowTable, HydrogramTemplate, StationCode};

/// Appends a template-driven artificial station to a flow table.
///
/// Every date takes the template value for its calendar month, so the series
/// repeats identically each year.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArtificialFlowInjector;

impl ArtificialFlowInjector {
    /// Returns `flow` plus one column, `target_code`, filled from `template`.
    ///
    /// # Errors
    ///
    /// Returns [`EnaError::DuplicateColumn`](crate::EnaError::DuplicateColumn)
    /// if `target_code` is already a column of `flow`.
    pub fn inject(
        &self,
        flow: &FlowTable,
        template: &HydrogramTemplate,
        target_code: StationCode,
    ) -> Result<FlowTable> {
        let values = flow
            .dates()
            .iter()
            .map(|date| template.for_date(*date))
            .collect();
        let out = flow.with_column(target_code, values)?;
        debug!(code = %target_code, rows = out.len(), "injected artificial station");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::error::EnaError;

    fn template() -> HydrogramTemplate {
        HydrogramTemplate::new((1..=12).map(|m| (m, f64::from(m) * 10.0))).unwrap()
    }

    fn flow() -> FlowTable {
        let dates = vec![
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        ];
        FlowTable::new(dates, vec![(StationCode::new(1), vec![1.0, 2.0, 3.0])]).unwrap()
    }

    #[test]
    fn assigns_value_for_each_calendar_month() {
        let out = ArtificialFlowInjector
            .inject(&flow(), &template(), StationCode::new(900))
            .unwrap();
        assert_eq!(out.column(StationCode::new(900)), Some(&[10.0, 20.0, 10.0][..]));
        assert_eq!(out.codes(), &[StationCode::new(1), StationCode::new(900)]);
        assert_eq!(out.column(StationCode::new(1)), Some(&[1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn rejects_existing_target_code() {
        let err = ArtificialFlowInjector
            .inject(&flow(), &template(), StationCode::new(1))
            .unwrap_err();
        assert!(matches!(err, EnaError::DuplicateColumn { .. }));
    }

    #[test]
    fn leaves_input_untouched() {
        let input = flow();
        let snapshot = input.clone();
        let _ = ArtificialFlowInjector.inject(&input, &template(), StationCode::new(900));
        assert_eq!(input, snapshot);
    }
}
