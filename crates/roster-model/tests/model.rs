//! Tests for roster-model serialization shapes.

use roster_model::{PageSize, Record, RecordId, SortDirection, SortKey, SortSpec};

#[test]
fn record_serializes_with_column_names() {
    let record = Record {
        id: RecordId::new("1"),
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email: "ann@example.com".to_string(),
        gender: "Female".to_string(),
        ip_address: "10.0.0.1".to_string(),
    };
    let value = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(value["id"], "1");
    assert_eq!(value["first_name"], "Ann");
    assert_eq!(value["ip_address"], "10.0.0.1");

    let round: Record = serde_json::from_value(value).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn sort_spec_serializes_short_direction() {
    let spec = SortSpec::by(SortKey::LastName, SortDirection::Descending);
    let json = serde_json::to_string(&spec).expect("serialize sort");
    assert_eq!(json, r#"{"key":"last_name","direction":"desc"}"#);
}

#[test]
fn page_sizes_cover_the_fixed_set() {
    let sizes: Vec<usize> = PageSize::ALL.iter().map(|size| size.get()).collect();
    assert_eq!(sizes, vec![10, 20, 50, 100]);
    assert_eq!(PageSize::default(), PageSize::Ten);
}

#[test]
fn column_labels_match_keys() {
    let names: Vec<&str> = SortKey::ALL.iter().map(|key| key.column_name()).collect();
    assert_eq!(
        names,
        vec!["id", "first_name", "last_name", "email", "gender", "ip_address"]
    );
}
