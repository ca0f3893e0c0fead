//! Flow → ENA conversion.

use tracing::{debug, warn};

use crate::table::{EnaTable, FlowTable, Frame, ProductivityTable};

/// Unit reconciliation between `flow × productivity` and ENA.
///
/// ONS publishes productivity in MW per m³/s, so the product of a daily mean
/// flow and the coefficient is already an average power in MWmed.
pub const ENA_CONVERSION_FACTOR: f64 = 1.0;

/// Converts flow into ENA using per-station productivity.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnaCalculator;

impl EnaCalculator {
    /// Computes `flow × productivity × ENA_CONVERSION_FACTOR` per station.
    ///
    /// Output columns follow the flow table's column order. Stations without
    /// a productivity entry are dropped and listed in
    /// [`EnaTable::excluded`].
    ///
    /// Both inputs were validated on construction (finite flows, positive
    /// coefficients), so this stage cannot fail.
    pub fn calculate(&self, flow: &FlowTable, productivity: &ProductivityTable) -> EnaTable {
        let mut keys = Vec::with_capacity(productivity.len());
        let mut values = Vec::with_capacity(productivity.len());
        let mut excluded = Vec::new();

        for (code, series) in flow.as_frame().columns() {
            let Some(coefficient) = productivity.get(*code) else {
                excluded.push(*code);
                continue;
            };
            let factor = coefficient * ENA_CONVERSION_FACTOR;
            keys.push(*code);
            values.push(series.iter().map(|q| q * factor).collect());
        }

        if !excluded.is_empty() {
            warn!(
                count = excluded.len(),
                codes = %join(&excluded),
                "stations without productivity excluded from ENA"
            );
        }
        debug!(stations = keys.len(), rows = flow.len(), "computed ENA");

        let frame = Frame::from_parts(flow.dates().to_vec(), keys, values);
        EnaTable::from_frame(frame, excluded)
    }
}

pub(crate) fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    use super::*;
    use crate::table::StationCode;

    fn dates() -> Vec<NaiveDate> {
        (1..=3)
            .map(|d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap())
            .collect()
    }

    #[test]
    fn multiplies_flow_by_productivity() {
        let flow = FlowTable::new(dates(), vec![(StationCode::new(1), vec![100.0, 150.0, 200.0])])
            .unwrap();
        let productivity = ProductivityTable::new([(StationCode::new(1), 0.9)]).unwrap();

        let ena = EnaCalculator.calculate(&flow, &productivity);
        let column = ena.column(StationCode::new(1)).unwrap();
        for (got, want) in column.iter().zip([90.0, 135.0, 180.0]) {
            assert_relative_eq!(*got, want * ENA_CONVERSION_FACTOR);
        }
        assert_eq!(ena.dates(), flow.dates());
    }

    #[test]
    fn drops_and_reports_stations_without_productivity() {
        let flow = FlowTable::new(
            dates(),
            vec![
                (StationCode::new(3), vec![1.0; 3]),
                (StationCode::new(1), vec![1.0; 3]),
                (StationCode::new(2), vec![1.0; 3]),
            ],
        )
        .unwrap();
        let productivity =
            ProductivityTable::new([(StationCode::new(1), 0.5), (StationCode::new(3), 0.2)]).unwrap();

        let ena = EnaCalculator.calculate(&flow, &productivity);
        assert_eq!(ena.codes(), &[StationCode::new(3), StationCode::new(1)]);
        assert_eq!(ena.excluded(), &[StationCode::new(2)]);
    }

    #[test]
    fn negative_derived_flow_yields_negative_ena() {
        let flow = FlowTable::new(dates(), vec![])
            .unwrap()
            .with_column(StationCode::new(116), vec![-10.0, 0.0, 10.0])
            .unwrap();
        let productivity = ProductivityTable::new([(StationCode::new(116), 0.1)]).unwrap();
        let ena = EnaCalculator.calculate(&flow, &productivity);
        assert_relative_eq!(ena.column(StationCode::new(116)).unwrap()[0], -1.0);
    }
}
