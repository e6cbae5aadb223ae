//! Rule table parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

use camino::Utf8Path;

pub use model::RulesConfigV1;
pub use resolve::Overrides;

/// On-disk format of the rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.json` selects JSON, `.yaml`/`.yml` YAML; anything else is read as TOML.
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Toml,
        }
    }
}

/// Parse `rules.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<RulesConfigV1> {
    let cfg: RulesConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Parse `rules.json` into a typed model.
pub fn parse_config_json(input: &str) -> anyhow::Result<RulesConfigV1> {
    let cfg: RulesConfigV1 = serde_json::from_str(input)?;
    Ok(cfg)
}

/// Parse `rules.yaml` into a typed model.
pub fn parse_config_yaml(input: &str) -> anyhow::Result<RulesConfigV1> {
    let cfg: RulesConfigV1 = serde_yaml::from_str(input)?;
    Ok(cfg)
}

/// Parse in the given format. Blank input yields the defaults.
pub fn parse_config(input: &str, format: ConfigFormat) -> anyhow::Result<RulesConfigV1> {
    if input.trim().is_empty() {
        return Ok(RulesConfigV1::default());
    }
    match format {
        ConfigFormat::Toml => parse_config_toml(input),
        ConfigFormat::Json => parse_config_json(input),
        ConfigFormat::Yaml => parse_config_yaml(input),
    }
}

/// Resolve the rule set used by the engine (defaults < config file < overrides).
pub fn resolve_rules(
    cfg: RulesConfigV1,
    overrides: Overrides,
) -> anyhow::Result<certguard_domain::policy::RuleSet> {
    resolve::resolve_rules(cfg, overrides)
}
