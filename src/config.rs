//! TOML-based pipeline configuration and preset definitions.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::pipeline::UnknownCodePolicy;
use crate::rules::Basin;
use crate::table::StationCode;

/// Top-level pipeline configuration parsed from TOML.
///
/// Every section has defaults matching the `minimal` preset. Load from TOML
/// with [`PipelineConfig::from_toml_file`] or pick a preset with
/// [`PipelineConfig::from_preset`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Input CSV files.
    #[serde(default)]
    pub inputs: InputsConfig,
    /// Operator rule basins to apply.
    #[serde(default)]
    pub rules: RulesConfig,
    /// Artificial stations injected from a monthly template.
    #[serde(default)]
    pub artificial: Vec<ArtificialConfig>,
    /// Grouping behaviour.
    #[serde(default)]
    pub aggregation: AggregationConfig,
    /// Output CSV files.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Shape of the flow CSV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowLayout {
    /// `data` column followed by one column per station code.
    #[default]
    Wide,
    /// `data`, `codigo`, `valor` rows.
    Long,
}

/// Input CSV files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputsConfig {
    /// Daily flow series.
    pub flow: PathBuf,
    /// Layout of the flow file.
    pub flow_layout: FlowLayout,
    /// Station productivity coefficients.
    pub productivity: PathBuf,
    /// Monthly Belo Monte hydrogram (`mes`, `vazao`).
    pub hydrogram: Option<PathBuf>,
    /// Station grouping; aggregation is skipped when absent.
    pub grouping: Option<PathBuf>,
    /// Label column of the grouping file.
    pub grouping_column: Option<String>,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            flow: PathBuf::from("vazoes.csv"),
            flow_layout: FlowLayout::Wide,
            productivity: PathBuf::from("produtibilidade.csv"),
            hydrogram: None,
            grouping: None,
            grouping_column: None,
        }
    }
}

/// Operator rule basins, applied in the listed order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    pub basins: Vec<Basin>,
}

/// One artificial station synthesized from a monthly template.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtificialConfig {
    /// Code of the injected station.
    pub code: StationCode,
    /// Template CSV (`mes`, `vazao`).
    pub template: PathBuf,
}

/// Grouping behaviour.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AggregationConfig {
    /// Policy for ENA stations missing from the grouping.
    pub unknown_codes: UnknownCodePolicy,
}

/// Output CSV files. Nothing is written for an unset path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub ena: Option<PathBuf>,
    pub grouped: Option<PathBuf>,
}

/// Configuration error with field path and constraint description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"inputs.hydrogram"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl PipelineConfig {
    /// Flow to ENA only: no operator rules, no aggregation.
    pub fn minimal() -> Self {
        Self::default()
    }

    /// Every operator basin plus aggregation, reading the Belo Monte
    /// hydrogram and grouping from the working directory.
    pub fn ons() -> Self {
        Self {
            inputs: InputsConfig {
                flow_layout: FlowLayout::Long,
                hydrogram: Some(PathBuf::from("hidrograma.csv")),
                grouping: Some(PathBuf::from("agrupamento.csv")),
                ..InputsConfig::default()
            },
            rules: RulesConfig {
                basins: Basin::ALL.to_vec(),
            },
            output: OutputConfig {
                ena: Some(PathBuf::from("ena.csv")),
                grouped: Some(PathBuf::from("ena_agrupada.csv")),
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["minimal", "ons"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "minimal" => Ok(Self::minimal()),
            "ons" => Ok(Self::ons()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a configuration from a TOML file. Relative input and output
    /// paths are kept as written, relative to the working directory.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let inputs = &self.inputs;

        if inputs.flow.as_os_str().is_empty() {
            errors.push(ConfigError::new("inputs.flow", "must not be empty"));
        }
        if inputs.productivity.as_os_str().is_empty() {
            errors.push(ConfigError::new("inputs.productivity", "must not be empty"));
        }
        if inputs.grouping_column.is_some() && inputs.grouping.is_none() {
            errors.push(ConfigError::new(
                "inputs.grouping_column",
                "requires inputs.grouping",
            ));
        }
        if self.output.grouped.is_some() && inputs.grouping.is_none() {
            errors.push(ConfigError::new("output.grouped", "requires inputs.grouping"));
        }

        let mut seen = HashSet::new();
        for basin in &self.rules.basins {
            if !seen.insert(*basin) {
                errors.push(ConfigError::new(
                    "rules.basins",
                    format!("basin \"{basin}\" listed more than once"),
                ));
            }
            if basin.needs_hydrogram() && inputs.hydrogram.is_none() {
                errors.push(ConfigError::new(
                    "inputs.hydrogram",
                    format!("basin \"{basin}\" requires the Belo Monte hydrogram"),
                ));
            }
        }

        let mut codes = HashSet::new();
        for (i, artificial) in self.artificial.iter().enumerate() {
            if !codes.insert(artificial.code) {
                errors.push(ConfigError::new(
                    format!("artificial[{i}].code"),
                    format!("station {} injected more than once", artificial.code),
                ));
            }
            if artificial.template.as_os_str().is_empty() {
                errors.push(ConfigError::new(
                    format!("artificial[{i}].template"),
                    "must not be empty",
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_preset_unknown() {
        let e = PipelineConfig::from_preset("nonexistent").unwrap_err();
        assert_eq!(e.field, "preset");
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in PipelineConfig::PRESETS {
            let cfg = PipelineConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn ons_applies_every_basin() {
        let cfg = PipelineConfig::ons();
        assert_eq!(cfg.rules.basins, Basin::ALL.to_vec());
        assert_eq!(cfg.inputs.flow_layout, FlowLayout::Long);
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[inputs]
flow = "data/acomph.csv"
flow_layout = "long"
productivity = "data/produtibilidade.csv"
hydrogram = "data/hidrograma.csv"
grouping = "data/agrupamento.csv"
grouping_column = "ree"

[rules]
basins = ["alto_tiete", "xingu"]

[[artificial]]
code = 999
template = "data/artificial.csv"

[aggregation]
unknown_codes = "reject"

[output]
ena = "out/ena.csv"
"#;
        let cfg = PipelineConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.inputs.flow_layout, FlowLayout::Long);
        assert_eq!(cfg.inputs.grouping_column.as_deref(), Some("ree"));
        assert_eq!(cfg.rules.basins, vec![Basin::AltoTiete, Basin::Xingu]);
        assert_eq!(cfg.artificial.len(), 1);
        assert_eq!(cfg.artificial[0].code, StationCode::new(999));
        assert_eq!(cfg.aggregation.unknown_codes, UnknownCodePolicy::Reject);
        assert!(cfg.output.grouped.is_none());
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[inputs]
flow = "a.csv"
bogus_field = true
"#;
        assert!(PipelineConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn unknown_basin_is_rejected() {
        let toml = r#"
[rules]
basins = ["amazonas"]
"#;
        let err = PipelineConfig::from_toml_str(toml).unwrap_err();
        assert_eq!(err.field, "toml");
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[inputs]
flow = "custom.csv"
"#;
        let cfg = PipelineConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.inputs.flow, PathBuf::from("custom.csv"));
        assert_eq!(cfg.inputs.productivity, PathBuf::from("produtibilidade.csv"));
        assert_eq!(cfg.aggregation.unknown_codes, UnknownCodePolicy::Exclude);
    }

    #[test]
    fn validation_catches_xingu_without_hydrogram() {
        let mut cfg = PipelineConfig::minimal();
        cfg.rules.basins = vec![Basin::Xingu];
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "inputs.hydrogram"));
    }

    #[test]
    fn validation_catches_repeated_basin() {
        let mut cfg = PipelineConfig::minimal();
        cfg.rules.basins = vec![Basin::Grande, Basin::Grande];
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "rules.basins"));
    }

    #[test]
    fn validation_catches_repeated_artificial_code() {
        let mut cfg = PipelineConfig::minimal();
        let entry = ArtificialConfig {
            code: StationCode::new(7),
            template: PathBuf::from("t.csv"),
        };
        cfg.artificial = vec![entry.clone(), entry];
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "artificial[1].code"));
    }

    #[test]
    fn validation_catches_grouped_output_without_grouping() {
        let mut cfg = PipelineConfig::minimal();
        cfg.output.grouped = Some(PathBuf::from("g.csv"));
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "output.grouped"));
    }
}
