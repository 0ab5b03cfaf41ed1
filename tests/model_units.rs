use readqc_charts::{ChartError, NamedVector, SummaryTable};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn summary_table_accepts_well_formed_input() {
    let t = SummaryTable::new(
        names(&["a", "b"]),
        names(&["0-4", "5-9"]),
        vec![vec![Some(1.0), None], vec![None, Some(2.0)]],
    )
    .unwrap();
    assert_eq!(t.nrows(), 2);
    assert_eq!(t.ncols(), 2);
    assert_eq!(t.row_name(1), "b");
    assert_eq!(t.col_label(0), "0-4");
    assert_eq!(t.value(0, 0), Some(1.0));
    assert_eq!(t.value(0, 1), None);
}

#[test]
fn summary_table_rejects_duplicate_row_names() {
    let err = SummaryTable::new(
        names(&["a", "a"]),
        names(&["1"]),
        vec![vec![Some(1.0)], vec![Some(2.0)]],
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn summary_table_rejects_ragged_rows() {
    let err = SummaryTable::new(
        names(&["a", "b"]),
        names(&["1", "2"]),
        vec![vec![Some(1.0), Some(2.0)], vec![Some(3.0)]],
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn summary_table_rejects_blank_names_and_labels() {
    let err = SummaryTable::new(
        names(&["a", " "]),
        names(&["1"]),
        vec![vec![Some(1.0)], vec![Some(2.0)]],
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput(_)));

    let err = SummaryTable::new(
        names(&["a"]),
        names(&[""]),
        vec![vec![Some(1.0)]],
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn summary_table_rejects_empty_shapes() {
    assert!(SummaryTable::new(vec![], names(&["1"]), vec![]).is_err());
    assert!(SummaryTable::new(names(&["a"]), vec![], vec![vec![]]).is_err());
}

#[test]
fn named_vector_checks_alignment() {
    assert!(NamedVector::new(vec![], vec![]).is_err());
    assert!(NamedVector::new(names(&["a"]), vec![1.0, 2.0]).is_err());
    assert!(NamedVector::new(names(&[""]), vec![1.0]).is_err());

    let v = NamedVector::new(names(&["a", "b"]), vec![2.0, 1.0]).unwrap();
    assert_eq!(v.len(), 2);
    assert_eq!(v.name(0), "a");
    assert_eq!(v.value(1), 1.0);
}

#[test]
fn deserialization_enforces_the_same_validation_as_new() {
    let ragged = r#"{
        "row_names": ["a", "b"],
        "col_labels": ["1", "2"],
        "values": [[1.0, null], [2.0]]
    }"#;
    assert!(serde_json::from_str::<SummaryTable>(ragged).is_err());

    let duplicate = r#"{
        "row_names": ["a", "a"],
        "col_labels": ["1"],
        "values": [[1.0], [2.0]]
    }"#;
    assert!(serde_json::from_str::<SummaryTable>(duplicate).is_err());

    let misaligned = r#"{"names": ["a"], "values": [1.0, 2.0]}"#;
    assert!(serde_json::from_str::<NamedVector>(misaligned).is_err());

    let good = r#"{
        "row_names": ["a", "b"],
        "col_labels": ["1", "2"],
        "values": [[1.0, null], [null, 2.0]]
    }"#;
    let t: SummaryTable = serde_json::from_str(good).unwrap();
    assert_eq!(t.value(1, 1), Some(2.0));
}

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(
        ChartError::EmptyData.to_string(),
        "no plottable data: every cell of the table is missing"
    );
    let msg = ChartError::ScaleMismatch(f64::NEG_INFINITY).to_string();
    assert!(msg.contains("y_min"), "{msg}");
    assert!(msg.contains("log-scale"), "{msg}");
    let msg = NamedVector::new(vec![], vec![]).unwrap_err().to_string();
    assert!(msg.starts_with("invalid input:"), "{msg}");
}

#[test]
fn ascending_order_sorts_by_value() {
    let v = NamedVector::new(
        names(&["sampleA", "sampleB", "sampleC"]),
        vec![30.0, 10.0, 20.0],
    )
    .unwrap();
    let order = v.ascending_order();
    let sorted: Vec<&str> = order.iter().map(|&i| v.name(i)).collect();
    assert_eq!(sorted, vec!["sampleB", "sampleC", "sampleA"]);
}
