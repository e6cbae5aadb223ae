use certguard_types::DecisionRecord;

const LEADING: [&str; 6] = [
    "user",
    "entitlement",
    "user_status",
    "criticality",
    "last_used_days",
    "timebound_days_left",
];
const TRAILING: [&str; 3] = ["decision", "reason", "auto_decided"];

/// Header for `decisions.csv`: the source columns in file order, then the decision columns.
///
/// A source column named like a decision column is dropped in favour of the decision value.
/// With no source header the six input columns are used.
pub fn decision_columns(source_columns: &[String]) -> Vec<String> {
    let leading: Vec<&str> = if source_columns.is_empty() {
        LEADING.to_vec()
    } else {
        source_columns.iter().map(String::as_str).collect()
    };

    leading
        .into_iter()
        .filter(|c| !TRAILING.contains(c))
        .chain(TRAILING)
        .map(str::to_string)
        .collect()
}

/// Render decisions as CSV bytes. An empty slice yields the header row only.
///
/// Source cells are written back as read; records without source cells fall back to their
/// typed fields.
pub fn render_decisions_csv(
    source_columns: &[String],
    records: &[DecisionRecord],
) -> Result<Vec<u8>, csv::Error> {
    let columns = decision_columns(source_columns);
    let passthrough = &columns[..columns.len() - TRAILING.len()];

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&columns)?;

    for r in records {
        let mut row: Vec<String> = passthrough
            .iter()
            .map(|name| source_cell(r, name))
            .collect();
        row.push(r.decision.as_str().to_string());
        row.push(r.reason.clone());
        row.push(r.auto_decided.to_string());
        wtr.write_record(&row)?;
    }

    wtr.into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

fn source_cell(r: &DecisionRecord, name: &str) -> String {
    if let Some(field) = r.source_fields.iter().find(|f| f.name == name) {
        return field.value.clone();
    }
    match name {
        "user" => r.user.clone(),
        "entitlement" => r.entitlement.clone(),
        "user_status" => r.user_status.clone(),
        "criticality" => r.criticality.clone(),
        "last_used_days" => r.last_used_days.map(|d| d.to_string()).unwrap_or_default(),
        "timebound_days_left" => r
            .timebound_days_left
            .map(|d| d.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}
