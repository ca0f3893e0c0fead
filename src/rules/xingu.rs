//! Xingu: Belo Monte diversion at Pimental, bounded below by the monthly
//! consensus hydrogram kept in the Volta Grande and above by the diversion
//! channel's capacity.

use super::codes::*;
use super::{ArtificialRule, StationRule};
use crate::error::SchemaError;
use crate::table::{FlowTable, HydrogramTemplate, StationCode};

/// Diversion channel capacity (m³/s).
pub const MAX_DIVERSION: f64 = 13_900.0;

/// Flow routed to Belo Monte: what Pimental carries above the hydrogram,
/// clamped to `[0, max]`.
pub fn diversion(pimental: f64, hydrogram: f64, max: f64) -> f64 {
    (pimental - hydrogram).clamp(0.0, max)
}

/// Belo Monte artificial flow (station 292).
#[derive(Debug, Clone, Copy)]
pub struct BeloMonteDiversion {
    hydrogram: HydrogramTemplate,
    max_diversion: f64,
}

impl BeloMonteDiversion {
    pub fn new(hydrogram: HydrogramTemplate) -> Self {
        Self {
            hydrogram,
            max_diversion: MAX_DIVERSION,
        }
    }
}

impl ArtificialRule for BeloMonteDiversion {
    fn code(&self) -> StationCode {
        BELO_MONTE_ARTIFICIAL
    }

    fn name(&self) -> &'static str {
        "Belo Monte artificial"
    }

    fn derive(&self, flow: &FlowTable) -> Result<Vec<f64>, SchemaError> {
        let pimental = flow.require(PIMENTAL)?;
        Ok(flow
            .dates()
            .iter()
            .zip(pimental)
            .map(|(date, q)| diversion(*q, self.hydrogram.for_date(*date), self.max_diversion))
            .collect())
    }
}

pub fn rules(hydrogram: HydrogramTemplate) -> Vec<Box<dyn ArtificialRule>> {
    let diversion: Box<dyn ArtificialRule> = Box::new(BeloMonteDiversion::new(hydrogram));
    vec![
        diversion,
        StationRule::boxed(
            PIMENTAL_ARTIFICIAL,
            "Pimental artificial",
            &[PIMENTAL, BELO_MONTE_ARTIFICIAL],
            |q| q.get(PIMENTAL) - q.get(BELO_MONTE_ARTIFICIAL),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::rules::apply_rules;

    fn hydrogram() -> HydrogramTemplate {
        HydrogramTemplate::new((1..=12).map(|m| (m, if m == 1 { 1_000.0 } else { 8_000.0 }))).unwrap()
    }

    #[test]
    fn diversion_is_bounded() {
        assert_eq!(diversion(500.0, 1_000.0, MAX_DIVERSION), 0.0);
        assert_eq!(diversion(5_000.0, 1_000.0, MAX_DIVERSION), 4_000.0);
        assert_eq!(diversion(20_000.0, 1_000.0, MAX_DIVERSION), 13_900.0);
    }

    #[test]
    fn follows_the_month_of_each_row() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2020, 1, 31).unwrap(),
            NaiveDate::from_ymd_opt(2020, 2, 1).unwrap(),
        ];
        let flow = FlowTable::new(dates, vec![(PIMENTAL, vec![10_000.0, 10_000.0])]).unwrap();
        let out = apply_rules(&flow, &rules(hydrogram())).unwrap();

        assert_eq!(out.column(BELO_MONTE_ARTIFICIAL), Some(&[9_000.0, 2_000.0][..]));
        assert_eq!(out.column(PIMENTAL_ARTIFICIAL), Some(&[1_000.0, 8_000.0][..]));
    }

    #[test]
    fn missing_pimental_fails() {
        let flow = FlowTable::new(vec![], vec![]).unwrap();
        let err = BeloMonteDiversion::new(hydrogram()).derive(&flow).unwrap_err();
        assert_eq!(err.field, "flow[288]");
    }
}
