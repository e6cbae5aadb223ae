use crate::SourceError;
use certguard_domain::model::{EntitlementRecord, UserStatus};
use certguard_types::SourceField;
use std::io::Read;

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "user",
    "entitlement",
    "user_status",
    "criticality",
    "last_used_days",
    "timebound_days_left",
];

const USER: usize = 0;
const ENTITLEMENT: usize = 1;
const USER_STATUS: usize = 2;
const CRITICALITY: usize = 3;
const LAST_USED_DAYS: usize = 4;
const TIMEBOUND_DAYS_LEFT: usize = 5;

/// A parsed source: the header row and one record per data row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceTable {
    /// Header names in file order.
    pub columns: Vec<String>,
    pub records: Vec<EntitlementRecord>,
}

/// Column positions resolved from the header row.
struct Layout {
    known: [usize; 6],
    columns: Vec<String>,
}

impl Layout {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, SourceError> {
        let mut known = [0usize; 6];
        for (slot, name) in known.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == name)
                .ok_or(SourceError::MissingColumn(name))?;
        }
        let columns = headers.iter().map(str::to_string).collect();
        Ok(Self { known, columns })
    }

    fn field<'r>(&self, record: &'r csv::StringRecord, column: usize) -> &'r str {
        record.get(self.known[column]).unwrap_or_default()
    }
}

/// Parse a CSV stream with a header row.
///
/// `last_used_days` and `timebound_days_left` are optional: empty or `None` means absent. Any
/// other non-integer value is an error, as is a negative `last_used_days`.
pub fn parse_entitlements<R: Read>(reader: R) -> Result<SourceTable, SourceError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let layout = Layout::from_headers(rdr.headers()?)?;

    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = i as u64 + 1;

        let last_used_days = parse_optional(
            row,
            REQUIRED_COLUMNS[LAST_USED_DAYS],
            layout.field(&record, LAST_USED_DAYS),
            "a non-negative integer",
        )?;
        let timebound_days_left = parse_optional(
            row,
            REQUIRED_COLUMNS[TIMEBOUND_DAYS_LEFT],
            layout.field(&record, TIMEBOUND_DAYS_LEFT),
            "an integer",
        )?;

        let source_fields = layout
            .columns
            .iter()
            .zip(record.iter())
            .map(|(name, value)| SourceField::new(name.as_str(), value))
            .collect();

        out.push(EntitlementRecord {
            row,
            user: layout.field(&record, USER).to_string(),
            entitlement: layout.field(&record, ENTITLEMENT).to_string(),
            user_status: UserStatus::parse(layout.field(&record, USER_STATUS)),
            criticality: layout.field(&record, CRITICALITY).to_string(),
            last_used_days,
            timebound_days_left,
            source_fields,
        });
    }

    Ok(SourceTable {
        columns: layout.columns,
        records: out,
    })
}

fn parse_optional<T: std::str::FromStr>(
    row: u64,
    column: &'static str,
    raw: &str,
    expected: &'static str,
) -> Result<Option<T>, SourceError> {
    let value = raw.trim();
    if value.is_empty() || value == "None" {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| SourceError::InvalidField {
            row,
            column,
            value: raw.to_string(),
            expected,
        })
}
