#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableOutcome {
    Approve,
    Revoke,
    Flag,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableItem {
    pub user: String,
    pub entitlement: String,
    pub outcome: RenderableOutcome,
    pub reason: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderableSummary {
    pub total: u32,
    pub approved: u32,
    pub revoked: u32,
    pub flagged: u32,
    pub auto_decided: u32,
    pub auto_rate_pct: f64,
    pub flag_rate_pct: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    /// Pre-formatted timestamp.
    pub generated_at: String,
    /// Source file name.
    pub source: String,
    pub summary: RenderableSummary,
    pub items: Vec<RenderableItem>,
}
