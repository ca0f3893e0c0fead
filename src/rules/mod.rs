//! ONS accounting rules that derive artificial and naturalized stations from
//! measured flows.
//!
//! Each basin contributes an ordered list of [`ArtificialRule`]s. Rules are
//! applied in order and every derived column is appended to the flow table
//! before the next rule runs, so later rules can read earlier results (e.g.
//! Henry Borden reads Pedras, which reads Billings + Pedras).

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::config::ConfigError;
use crate::error::{Result, SchemaError};
use crate::table::{FlowTable, HydrogramTemplate, StationCode};

pub mod alto_tiete;
pub mod codes;
pub mod iguacu;
/// Stations that copy a measured neighbour (São Francisco, Grande, Paraguai).
pub mod naturalized;
pub mod paraiba_sul;
pub mod xingu;

/// A rule deriving one station's daily flow from other columns.
pub trait ArtificialRule {
    /// Code of the station this rule produces.
    fn code(&self) -> StationCode;

    /// Human-readable plant or station name.
    fn name(&self) -> &'static str;

    /// Computes one value per row of `flow`.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` if a required input station is missing.
    fn derive(&self, flow: &FlowTable) -> std::result::Result<Vec<f64>, SchemaError>;
}

/// Input flows of one row, restricted to the stations a rule declared.
pub struct Flows<'a> {
    codes: &'a [StationCode],
    values: &'a [f64],
}

impl Flows<'_> {
    /// Flow of a declared input station. Undeclared stations read as NaN,
    /// which the table rejects as a non-numeric cell.
    pub fn get(&self, code: StationCode) -> f64 {
        match self.codes.iter().position(|c| *c == code) {
            Some(i) => self.values[i],
            None => {
                debug_assert!(false, "rule reads undeclared station {code}");
                f64::NAN
            }
        }
    }
}

/// Row-wise formula over a fixed set of input stations.
pub struct StationRule {
    code: StationCode,
    name: &'static str,
    inputs: &'static [StationCode],
    eval: fn(&Flows<'_>) -> f64,
}

impl StationRule {
    pub fn new(
        code: StationCode,
        name: &'static str,
        inputs: &'static [StationCode],
        eval: fn(&Flows<'_>) -> f64,
    ) -> Self {
        Self {
            code,
            name,
            inputs,
            eval,
        }
    }

    /// Boxed form, as collected in a basin's rule list.
    pub fn boxed(
        code: StationCode,
        name: &'static str,
        inputs: &'static [StationCode],
        eval: fn(&Flows<'_>) -> f64,
    ) -> Box<dyn ArtificialRule> {
        Box::new(Self::new(code, name, inputs, eval))
    }

    /// Stations this rule reads.
    pub fn inputs(&self) -> &'static [StationCode] {
        self.inputs
    }
}

impl ArtificialRule for StationRule {
    fn code(&self) -> StationCode {
        self.code
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn derive(&self, flow: &FlowTable) -> std::result::Result<Vec<f64>, SchemaError> {
        let columns = self
            .inputs
            .iter()
            .map(|code| flow.require(*code))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut row_values = vec![0.0; columns.len()];
        let mut out = Vec::with_capacity(flow.len());
        for row in 0..flow.len() {
            for (slot, column) in row_values.iter_mut().zip(&columns) {
                *slot = column[row];
            }
            let flows = Flows {
                codes: self.inputs,
                values: &row_values,
            };
            out.push((self.eval)(&flows));
        }
        Ok(out)
    }
}

/// Appends the output of every rule, in order, to a copy of `flow`.
///
/// # Errors
///
/// Fails on the first rule whose inputs are missing, whose output is
/// non-finite, or whose code already exists in the table.
pub fn apply_rules(flow: &FlowTable, rules: &[Box<dyn ArtificialRule>]) -> Result<FlowTable> {
    let mut out = flow.clone();
    for rule in rules {
        let values = rule.derive(&out)?;
        out = out.with_column(rule.code(), values)?;
        debug!(code = %rule.code(), name = rule.name(), "applied artificial-flow rule");
    }
    Ok(out)
}

/// River basin with its own set of operator rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Basin {
    AltoTiete,
    ParaibaSul,
    SaoFrancisco,
    Iguacu,
    Grande,
    Paraguai,
    Xingu,
}

impl Basin {
    /// Every basin, in the order the operator applies them.
    pub const ALL: [Basin; 7] = [
        Basin::AltoTiete,
        Basin::ParaibaSul,
        Basin::SaoFrancisco,
        Basin::Iguacu,
        Basin::Grande,
        Basin::Paraguai,
        Basin::Xingu,
    ];

    /// Whether the basin's rules need the Belo Monte hydrogram.
    pub fn needs_hydrogram(self) -> bool {
        self == Basin::Xingu
    }

    /// The basin's rules in dependency order.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the basin needs a hydrogram and none was
    /// supplied.
    pub fn rules(
        self,
        hydrogram: Option<&HydrogramTemplate>,
    ) -> std::result::Result<Vec<Box<dyn ArtificialRule>>, ConfigError> {
        let rules = match self {
            Basin::AltoTiete => alto_tiete::rules(),
            Basin::ParaibaSul => paraiba_sul::rules(),
            Basin::SaoFrancisco => naturalized::sao_francisco(),
            Basin::Iguacu => iguacu::rules(),
            Basin::Grande => naturalized::grande(),
            Basin::Paraguai => naturalized::paraguai(),
            Basin::Xingu => {
                let hydrogram = hydrogram.ok_or_else(|| ConfigError {
                    field: "inputs.hydrogram".into(),
                    message: "basin \"xingu\" requires the Belo Monte hydrogram".into(),
                })?;
                xingu::rules(*hydrogram)
            }
        };
        Ok(rules)
    }
}

impl fmt::Display for Basin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Basin::AltoTiete => "alto_tiete",
            Basin::ParaibaSul => "paraiba_sul",
            Basin::SaoFrancisco => "sao_francisco",
            Basin::Iguacu => "iguacu",
            Basin::Grande => "grande",
            Basin::Paraguai => "paraguai",
            Basin::Xingu => "xingu",
        };
        f.write_str(name)
    }
}

/// Applies the rules of each basin in `basins`, in the given order.
///
/// # Errors
///
/// Returns a config error if Xingu is selected without a hydrogram, or any
/// error raised by [`apply_rules`].
pub fn apply_basins(
    flow: &FlowTable,
    basins: &[Basin],
    hydrogram: Option<&HydrogramTemplate>,
) -> Result<FlowTable> {
    let mut out = flow.clone();
    for basin in basins {
        let rules = basin.rules(hydrogram)?;
        out = apply_rules(&out, &rules)?;
        debug!(%basin, rules = rules.len(), "applied basin rules");
    }
    Ok(out)
}
