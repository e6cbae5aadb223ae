use camino::Utf8PathBuf;
use certguard_domain::model::UserStatus;
use certguard_source::{SourceError, read_entitlements};
use tempfile::TempDir;

fn write_csv(tmp: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(tmp.path().join(name)).expect("utf8 path");
    std::fs::write(&path, contents).expect("write csv");
    path
}

#[test]
fn reads_records_in_file_order() {
    let tmp = TempDir::new().expect("temp dir");
    let path = write_csv(
        &tmp,
        "entitlements.csv",
        "user,entitlement,user_status,criticality,last_used_days,timebound_days_left\n\
         u1,E1,ACTIVE,LOW,10,\n\
         u1,E2,TERMINATED,critical,,None\n\
         u2,E1,ACTIVE,HIGH,400,-9\n",
    );

    let records = read_entitlements(&path).expect("read").records;
    assert_eq!(records.len(), 3);
    assert_eq!(
        records.iter().map(|r| r.row).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(records[1].user_status, UserStatus::Terminated);
    assert_eq!(records[1].criticality, "critical");
    assert_eq!(records[2].timebound_days_left, Some(-9));
}

#[test]
fn quoted_fields_keep_commas() {
    let tmp = TempDir::new().expect("temp dir");
    let path = write_csv(
        &tmp,
        "quoted.csv",
        "user,entitlement,user_status,criticality,last_used_days,timebound_days_left\n\
         \"doe, jane\",\"GL,POST\",ACTIVE,LOW,1,\n",
    );

    let records = read_entitlements(&path).expect("read").records;
    assert_eq!(records[0].user, "doe, jane");
    assert_eq!(records[0].entitlement, "GL,POST");
}

#[test]
fn reordered_and_extra_columns_keep_header_order() {
    let tmp = TempDir::new().expect("temp dir");
    let path = write_csv(
        &tmp,
        "wide.csv",
        "zeta,user,entitlement,user_status,criticality,last_used_days,timebound_days_left,alpha\n\
         z1,u1,E1,ACTIVE,LOW,5,None,a1\n",
    );

    let table = read_entitlements(&path).expect("read");
    assert_eq!(table.columns.first().map(String::as_str), Some("zeta"));
    assert_eq!(table.columns.last().map(String::as_str), Some("alpha"));
    let raw: Vec<(&str, &str)> = table.records[0]
        .source_fields
        .iter()
        .map(|f| (f.name.as_str(), f.value.as_str()))
        .collect();
    assert_eq!(
        raw,
        vec![
            ("zeta", "z1"),
            ("user", "u1"),
            ("entitlement", "E1"),
            ("user_status", "ACTIVE"),
            ("criticality", "LOW"),
            ("last_used_days", "5"),
            ("timebound_days_left", "None"),
            ("alpha", "a1"),
        ]
    );
    assert_eq!(table.records[0].timebound_days_left, None);
}

#[test]
fn missing_file_is_io_error() {
    let tmp = TempDir::new().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(tmp.path().join("nope.csv")).expect("utf8 path");
    let err = read_entitlements(&path).expect_err("missing file");
    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().contains("nope.csv"));
}
