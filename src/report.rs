//! Post-hoc summary of a pipeline run.

use std::fmt;

use chrono::NaiveDate;

use crate::pipeline::ena::join;
use crate::runner::PipelineOutput;
use crate::table::{GroupLabel, StationCode};

/// Figures printed after a run, computed from the output tables.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    /// First and last date of the index.
    pub period: Option<(NaiveDate, NaiveDate)>,
    /// Number of dates.
    pub rows: usize,
    /// Flow columns, measured and derived.
    pub flow_stations: usize,
    /// Stations with an ENA series.
    pub ena_stations: usize,
    /// Flow stations dropped for lack of productivity.
    pub ena_excluded: Vec<StationCode>,
    /// Sum of every ENA cell (MWmed·day).
    pub ena_total: f64,
    /// Sum over the period for each group, in output column order.
    pub group_totals: Vec<(GroupLabel, f64)>,
    /// ENA stations dropped for lack of a group.
    pub group_excluded: Vec<StationCode>,
}

impl PipelineSummary {
    pub fn from_output(output: &PipelineOutput) -> Self {
        let ena = output.ena.as_frame();
        let dates = output.flow.dates();
        let period = dates.first().copied().zip(dates.last().copied());

        let (group_totals, group_excluded) = match &output.grouped {
            Some(grouped) => {
                let frame = grouped.as_frame();
                let totals: Vec<(GroupLabel, f64)> = frame
                    .columns()
                    .map(|(label, values)| (label.clone(), values.iter().sum::<f64>()))
                    .collect();
                (totals, grouped.excluded().to_vec())
            }
            None => (Vec::new(), Vec::new()),
        };

        Self {
            period,
            rows: dates.len(),
            flow_stations: output.flow.codes().len(),
            ena_stations: ena.width(),
            ena_excluded: output.ena.excluded().to_vec(),
            ena_total: (0..ena.len()).map(|row| ena.row_sum(row)).sum(),
            group_totals,
            group_excluded,
        }
    }
}

impl fmt::Display for PipelineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- ENA Summary ---")?;
        match self.period {
            Some((first, last)) => writeln!(f, "Period:            {first} .. {last}")?,
            None => writeln!(f, "Period:            (empty)")?,
        }
        writeln!(f, "Rows:              {}", self.rows)?;
        writeln!(f, "Flow stations:     {}", self.flow_stations)?;
        writeln!(f, "ENA stations:      {}", self.ena_stations)?;
        if !self.ena_excluded.is_empty() {
            writeln!(f, "No productivity:   {}", join(&self.ena_excluded))?;
        }
        write!(f, "ENA total:         {:.2} MWmed·day", self.ena_total)?;
        if !self.group_excluded.is_empty() {
            write!(f, "\nNo group:          {}", join(&self.group_excluded))?;
        }
        for (label, total) in &self.group_totals {
            write!(f, "\n  {label:<16} {total:.2}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::pipeline::{aggregate, calculate_ena};
    use crate::table::{FlowTable, GroupingMap, ProductivityTable};

    fn output(grouped: bool) -> PipelineOutput {
        let dates = (1..=3)
            .map(|d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap())
            .collect();
        let flow = FlowTable::new(
            dates,
            vec![
                (StationCode::new(1), vec![100.0, 150.0, 200.0]),
                (StationCode::new(2), vec![1.0, 1.0, 1.0]),
            ],
        )
        .unwrap();
        let productivity = ProductivityTable::new([(StationCode::new(1), 0.5)]).unwrap();
        let ena = calculate_ena(&flow, &productivity);
        let grouped = grouped.then(|| {
            let grouping =
                GroupingMap::new([(StationCode::new(1), GroupLabel::from("SE"))]).unwrap();
            aggregate(&ena, &grouping)
        });
        PipelineOutput { flow, ena, grouped }
    }

    #[test]
    fn counts_and_totals() {
        let summary = PipelineSummary::from_output(&output(true));
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.flow_stations, 2);
        assert_eq!(summary.ena_stations, 1);
        assert_eq!(summary.ena_excluded, vec![StationCode::new(2)]);
        assert_eq!(summary.ena_total, 225.0);
        assert_eq!(summary.group_totals, vec![(GroupLabel::from("SE"), 225.0)]);
    }

    #[test]
    fn display_lists_period_and_groups() {
        let text = PipelineSummary::from_output(&output(true)).to_string();
        assert!(text.contains("2025-01-01 .. 2025-01-03"));
        assert!(text.contains("No productivity:   2"));
        assert!(text.contains("SE"));
    }

    #[test]
    fn without_grouping_has_no_group_lines() {
        let summary = PipelineSummary::from_output(&output(false));
        assert!(summary.group_totals.is_empty());
        assert!(!summary.to_string().contains("No group"));
    }
}
