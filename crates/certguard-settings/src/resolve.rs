use crate::model::RulesConfigV1;
use certguard_domain::policy::{ConflictPair, RuleSet};
use certguard_types::SCHEMA_RULES_V1;

/// Command-line overrides; each one wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub timebound_grace_days: Option<u32>,
    pub unused_days_threshold: Option<u32>,
}

pub fn resolve_rules(cfg: RulesConfigV1, overrides: Overrides) -> anyhow::Result<RuleSet> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_RULES_V1
    {
        anyhow::bail!("unsupported rules schema: {schema} (expected {SCHEMA_RULES_V1})");
    }

    let mut rules = RuleSet::default().with_whitelist(&cfg.criticality_whitelist);

    if let Some(grace) = overrides
        .timebound_grace_days
        .or(cfg.timebound_grace_days)
    {
        rules.timebound_grace_days = grace;
    }
    if let Some(threshold) = overrides
        .unused_days_threshold
        .or(cfg.unused_days_threshold)
    {
        rules.unused_days_threshold = threshold;
    }

    for (i, pair) in cfg.sod_conflicts.iter().enumerate() {
        rules.sod_conflicts.push(parse_pair(i, pair)?);
    }

    Ok(rules)
}

fn parse_pair(index: usize, items: &[String]) -> anyhow::Result<ConflictPair> {
    match items {
        [first, second] => Ok(ConflictPair::new(first, second)),
        other => anyhow::bail!(
            "sod_conflicts[{index}] must list exactly 2 entitlements, found {}",
            other.len()
        ),
    }
}
