//! CSV readers for flow, productivity, hydrogram and grouping inputs.
//!
//! Every reader trims cells and matches headers case-insensitively. Bad cells
//! become a `SchemaError` whose field names the column and whose message
//! carries the CSV line number.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::debug;

use crate::config::FlowLayout;
use crate::error::{Result, SchemaError};
use crate::table::{FlowTable, GroupLabel, GroupingMap, HydrogramTemplate, ProductivityTable, StationCode};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn reader(input: impl Read) -> csv::Reader<impl Read> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_ascii_lowercase(), i))
        .collect()
}

fn require_column(
    headers: &HashMap<String, usize>,
    table: &str,
    name: &str,
) -> std::result::Result<usize, SchemaError> {
    headers
        .get(name)
        .copied()
        .ok_or_else(|| SchemaError::new(format!("{table}.{name}"), "required column is missing"))
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

fn cell<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("")
}

fn parse_f64(raw: &str, field: &str, line: u64) -> std::result::Result<f64, SchemaError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SchemaError::new(field, format!("line {line}: \"{raw}\" is not a number")))
}

fn parse_date(raw: &str, field: &str, line: u64) -> std::result::Result<NaiveDate, SchemaError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        SchemaError::new(field, format!("line {line}: \"{raw}\" is not a YYYY-MM-DD date"))
    })
}

fn parse_code(raw: &str, field: &str, line: u64) -> std::result::Result<StationCode, SchemaError> {
    raw.parse::<StationCode>()
        .map_err(|e| SchemaError::new(field, format!("line {line}: {}", e.message)))
}

/// Reads a wide flow table: a date column followed by one column per
/// station code.
///
/// # Errors
///
/// Fails on malformed CSV, a non-numeric code header, a bad date or cell,
/// or any `FlowTable` invariant.
pub fn read_flow_wide(input: impl Read) -> Result<FlowTable> {
    let mut rdr = reader(input);
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(SchemaError::new("vazoes.data", "required column is missing").into());
    }

    let codes = headers
        .iter()
        .skip(1)
        .map(|h| parse_code(h, "vazoes.header", 1))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut dates = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); codes.len()];
    for record in rdr.records() {
        let record = record?;
        let line = line_of(&record);
        dates.push(parse_date(cell(&record, 0), "vazoes.data", line)?);
        for (i, (code, column)) in codes.iter().zip(columns.iter_mut()).enumerate() {
            column.push(parse_f64(cell(&record, i + 1), &format!("vazoes[{code}]"), line)?);
        }
    }

    debug!(rows = dates.len(), stations = codes.len(), "read wide flow table");
    Ok(FlowTable::new(dates, codes.into_iter().zip(columns).collect())?)
}

/// Reads a long flow table with `data`, `codigo` and `valor` columns and
/// pivots it into one column per station, in first-seen order.
///
/// # Errors
///
/// Fails on missing columns, a repeated `(data, codigo)` pair, a station
/// missing a date another station has, or any `FlowTable` invariant.
pub fn read_flow_long(input: impl Read) -> Result<FlowTable> {
    let mut rdr = reader(input);
    let headers = header_map(rdr.headers()?);
    let date_idx = require_column(&headers, "vazoes", "data")?;
    let code_idx = require_column(&headers, "vazoes", "codigo")?;
    let value_idx = require_column(&headers, "vazoes", "valor")?;

    let mut order: Vec<StationCode> = Vec::new();
    let mut cells: HashMap<StationCode, BTreeMap<NaiveDate, f64>> = HashMap::new();
    for record in rdr.records() {
        let record = record?;
        let line = line_of(&record);
        let date = parse_date(cell(&record, date_idx), "vazoes.data", line)?;
        let code = parse_code(cell(&record, code_idx), "vazoes.codigo", line)?;
        let value = parse_f64(cell(&record, value_idx), &format!("vazoes[{code}]"), line)?;

        let series = cells.entry(code).or_insert_with(|| {
            order.push(code);
            BTreeMap::new()
        });
        if series.insert(date, value).is_some() {
            return Err(SchemaError::new(
                format!("vazoes[{code}]"),
                format!("line {line}: {date} appears more than once"),
            )
            .into());
        }
    }

    let mut dates: Vec<NaiveDate> = cells.values().flat_map(|s| s.keys().copied()).collect();
    dates.sort_unstable();
    dates.dedup();

    let mut columns = Vec::with_capacity(order.len());
    for code in order {
        let Some(series) = cells.remove(&code) else {
            continue;
        };
        if let Some(missing) = dates.iter().find(|d| !series.contains_key(*d)) {
            return Err(SchemaError::new(
                format!("vazoes[{code}]"),
                format!("no value on {missing}"),
            )
            .into());
        }
        columns.push((code, series.into_values().collect()));
    }

    debug!(rows = dates.len(), stations = columns.len(), "read long flow table");
    Ok(FlowTable::new(dates, columns)?)
}

/// Reads `codigo`, `produtibilidade` rows.
///
/// # Errors
///
/// Fails on missing columns, bad cells or any `ProductivityTable` invariant.
pub fn read_productivity(input: impl Read) -> Result<ProductivityTable> {
    let mut rdr = reader(input);
    let headers = header_map(rdr.headers()?);
    let code_idx = require_column(&headers, "produtibilidade", "codigo")?;
    let value_idx = require_column(&headers, "produtibilidade", "produtibilidade")?;

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = line_of(&record);
        let code = parse_code(cell(&record, code_idx), "produtibilidade.codigo", line)?;
        let value = parse_f64(
            cell(&record, value_idx),
            &format!("produtibilidade[{code}]"),
            line,
        )?;
        entries.push((code, value));
    }
    Ok(ProductivityTable::new(entries)?)
}

/// Reads `mes`, `vazao` rows.
///
/// # Errors
///
/// Fails on missing columns, bad cells or an incomplete year.
pub fn read_hydrogram(input: impl Read) -> Result<HydrogramTemplate> {
    let mut rdr = reader(input);
    let headers = header_map(rdr.headers()?);
    let month_idx = require_column(&headers, "hidrograma", "mes")?;
    let flow_idx = require_column(&headers, "hidrograma", "vazao")?;

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = line_of(&record);
        let raw = cell(&record, month_idx);
        let month = raw.parse::<u32>().map_err(|_| {
            SchemaError::new("hidrograma.mes", format!("line {line}: \"{raw}\" is not a month"))
        })?;
        let flow = parse_f64(cell(&record, flow_idx), &format!("hidrograma[{month}]"), line)?;
        entries.push((month, flow));
    }
    Ok(HydrogramTemplate::new(entries)?)
}

/// Reads `codigo` plus one or more label columns. `column` picks the label
/// column by name; without it the file must have exactly one other column.
/// Rows with a blank label are skipped, so those stations stay unmapped.
///
/// # Errors
///
/// Fails on a missing or ambiguous label column, bad codes or any
/// `GroupingMap` invariant.
pub fn read_grouping(input: impl Read, column: Option<&str>) -> Result<GroupingMap> {
    let mut rdr = reader(input);
    let raw_headers = rdr.headers()?.clone();
    let headers = header_map(&raw_headers);
    let code_idx = require_column(&headers, "agrupamento", "codigo")?;

    let label_idx = match column {
        Some(name) => require_column(&headers, "agrupamento", &name.to_ascii_lowercase())?,
        None => {
            let others: Vec<usize> = (0..raw_headers.len()).filter(|i| *i != code_idx).collect();
            match others.as_slice() {
                [only] => *only,
                [] => {
                    return Err(
                        SchemaError::new("agrupamento", "no label column besides codigo").into(),
                    );
                }
                _ => {
                    let names: Vec<&str> = others.iter().filter_map(|i| raw_headers.get(*i)).collect();
                    return Err(SchemaError::new(
                        "agrupamento",
                        format!("several label columns ({}), choose one", names.join(", ")),
                    )
                    .into());
                }
            }
        }
    };

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = line_of(&record);
        let code = parse_code(cell(&record, code_idx), "agrupamento.codigo", line)?;
        let label = cell(&record, label_idx);
        if label.is_empty() {
            debug!(%code, line, "blank group label, station left unmapped");
            continue;
        }
        entries.push((code, GroupLabel::from(label)));
    }
    Ok(GroupingMap::new(entries)?)
}

/// Opens `path` and reads a flow table in the given layout.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened, or any reader error.
pub fn load_flow(path: &Path, layout: FlowLayout) -> Result<FlowTable> {
    let file = File::open(path)?;
    match layout {
        FlowLayout::Wide => read_flow_wide(file),
        FlowLayout::Long => read_flow_long(file),
    }
}

/// Opens `path` and reads a productivity table.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened, or any reader error.
pub fn load_productivity(path: &Path) -> Result<ProductivityTable> {
    read_productivity(File::open(path)?)
}

/// Opens `path` and reads a hydrogram template.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened, or any reader error.
pub fn load_hydrogram(path: &Path) -> Result<HydrogramTemplate> {
    read_hydrogram(File::open(path)?)
}

/// Opens `path` and reads a grouping map.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened, or any reader error.
pub fn load_grouping(path: &Path, column: Option<&str>) -> Result<GroupingMap> {
    read_grouping(File::open(path)?, column)
}
