//! Shared test fixtures for integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use rand::Rng;
use rand::rngs::StdRng;

use ena_pipeline::{FlowTable, GroupLabel, GroupingMap, HydrogramTemplate, ProductivityTable, StationCode};

/// `n` consecutive days starting at `start` (`YYYY-MM-DD`).
pub fn days(start: &str, n: usize) -> Vec<NaiveDate> {
    let first = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    first.iter_days().take(n).collect()
}

/// Flow table over `dates` with one column per `(code, values)` pair.
pub fn flow(dates: Vec<NaiveDate>, columns: &[(u32, &[f64])]) -> FlowTable {
    let columns = columns
        .iter()
        .map(|(code, values)| (StationCode::new(*code), values.to_vec()))
        .collect();
    FlowTable::new(dates, columns).unwrap()
}

pub fn productivity(pairs: &[(u32, f64)]) -> ProductivityTable {
    ProductivityTable::new(pairs.iter().map(|(c, p)| (StationCode::new(*c), *p))).unwrap()
}

pub fn grouping(pairs: &[(u32, &str)]) -> GroupingMap {
    GroupingMap::new(
        pairs
            .iter()
            .map(|(c, l)| (StationCode::new(*c), GroupLabel::from(*l))),
    )
    .unwrap()
}

/// Template whose value for month `m` is `m * 100`.
pub fn monthly_hundreds() -> HydrogramTemplate {
    HydrogramTemplate::new((1..=12).map(|m| (m, f64::from(m) * 100.0))).unwrap()
}

/// Random non-negative flows for stations `1..=stations` over `rows` days.
pub fn random_flow(rng: &mut StdRng, rows: usize, stations: u32) -> FlowTable {
    let columns = (1..=stations)
        .map(|code| {
            let values = (0..rows).map(|_| rng.random_range(0.0..5_000.0)).collect();
            (StationCode::new(code), values)
        })
        .collect();
    FlowTable::new(days("2020-01-01", rows), columns).unwrap()
}

/// Random coefficients in `(0, 2)` for stations `1..=stations`.
pub fn random_productivity(rng: &mut StdRng, stations: u32) -> ProductivityTable {
    ProductivityTable::new(
        (1..=stations).map(|code| (StationCode::new(code), rng.random_range(0.01..2.0))),
    )
    .unwrap()
}
