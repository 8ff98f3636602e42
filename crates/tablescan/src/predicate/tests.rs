use crate::{
    cursor::Cursor,
    error::ScanError,
    model::{ClusteringColumn, TableModel},
    predicate::{self, PartitionRef, Predicate, eval},
    row::Row,
    test_support::{multi_key_model, multi_key_rows, partition_only_model, simple_model},
    value::Value,
};

fn cursor_of(model: &TableModel, row: &Row) -> Cursor {
    Cursor::from_row(model, row).expect("fixture rows should carry every key column")
}

#[test]
fn resume_predicate_scopes_clustering_arms_to_the_cursor_partition() {
    let model = simple_model();
    let row = Row::new()
        .with("p_key", 7i64)
        .with("c_key", 1i64)
        .with("indexed_value", "ODD")
        .with("value", "7:1");

    let predicate = predicate::after(&model, &cursor_of(&model, &row))
        .expect("resume predicate should build");

    let partition = PartitionRef::new(vec![("p_key".to_string(), Value::Int(7))]);
    let expected = Predicate::Or(vec![
        Predicate::And(vec![
            Predicate::InPartition(partition.clone()),
            Predicate::gt("c_key", 1i64),
        ]),
        Predicate::AfterPartition(partition),
    ]);
    assert_eq!(predicate, expected);
}

#[test]
fn resume_predicate_pins_prefixes_and_honors_descending_columns() {
    let model = multi_key_model();
    let row = Row::new()
        .with("p_key_a", 2i64)
        .with("p_key_b", 0i64)
        .with("c_key_a", 3i64)
        .with("c_key_b", 1i64)
        .with("c_key_c", 2i64)
        .with("value", "2:0:3:1:2");

    let predicate = predicate::after(&model, &cursor_of(&model, &row))
        .expect("resume predicate should build");

    let partition = PartitionRef::new(vec![
        ("p_key_a".to_string(), Value::Int(2)),
        ("p_key_b".to_string(), Value::Int(0)),
    ]);
    let expected = Predicate::Or(vec![
        Predicate::And(vec![
            Predicate::InPartition(partition.clone()),
            Predicate::Or(vec![
                Predicate::gt("c_key_a", 3i64),
                // c_key_b is descending: strictly after means strictly less.
                Predicate::And(vec![
                    Predicate::eq("c_key_a", 3i64),
                    Predicate::lt("c_key_b", 1i64),
                ]),
                Predicate::And(vec![
                    Predicate::eq("c_key_a", 3i64),
                    Predicate::eq("c_key_b", 1i64),
                    Predicate::gt("c_key_c", 2i64),
                ]),
            ]),
        ]),
        Predicate::AfterPartition(partition),
    ]);
    assert_eq!(predicate, expected);
}

#[test]
fn resume_predicate_for_empty_clustering_key_pages_over_partitions() {
    let model = partition_only_model();
    let row = Row::new().with("p_key", 4i64).with("value", "4");

    let predicate = predicate::after(&model, &cursor_of(&model, &row))
        .expect("resume predicate should build");

    assert_eq!(
        predicate,
        Predicate::AfterPartition(PartitionRef::new(vec![(
            "p_key".to_string(),
            Value::Int(4)
        )]))
    );
}

#[test]
fn cursor_clustering_arity_mismatch_is_an_invariant_error() {
    let narrow = TableModel::new(
        "narrow",
        vec!["p_key".to_string()],
        vec![ClusteringColumn::asc("c_key")],
        Vec::new(),
    )
    .expect("narrow model should validate");

    let wide = TableModel::new(
        "wide",
        vec!["p_key".to_string()],
        vec![
            ClusteringColumn::asc("c_key"),
            ClusteringColumn::asc("c_key_extra"),
        ],
        Vec::new(),
    )
    .expect("wide model should validate");

    let row = Row::new().with("p_key", 1i64).with("c_key", 2i64);
    let cursor = cursor_of(&narrow, &row);

    let err = predicate::after(&wide, &cursor)
        .expect_err("mismatched clustering arity should be rejected");
    assert!(matches!(err, ScanError::Invariant(_)));
}

#[test]
fn cursor_partition_arity_mismatch_is_an_invariant_error() {
    let single = partition_only_model();
    let double = TableModel::new(
        "double",
        vec!["p_key".to_string(), "p_key_b".to_string()],
        Vec::new(),
        Vec::new(),
    )
    .expect("double model should validate");

    let row = Row::new().with("p_key", 1i64).with("value", "1");
    let cursor = cursor_of(&single, &row);

    let err = predicate::after(&double, &cursor)
        .expect_err("mismatched partition arity should be rejected");
    assert!(matches!(err, ScanError::Invariant(_)));
}

#[test]
fn cursor_extraction_fails_when_a_key_column_is_missing() {
    let model = simple_model();
    let row = Row::new().with("p_key", 1i64); // no c_key

    let err = Cursor::from_row(&model, &row)
        .expect_err("missing key column should be rejected");
    assert!(matches!(err, ScanError::Invariant(_)));
}

#[test]
fn eval_applies_compare_and_boolean_nodes() {
    let row = Row::new().with("a", 5i64).with("b", "x");

    assert!(eval::matches(&Predicate::True, &row));
    assert!(eval::matches(&Predicate::eq("a", 5i64), &row));
    assert!(eval::matches(&Predicate::gt("a", 4i64), &row));
    assert!(eval::matches(&Predicate::lt("a", 6i64), &row));
    assert!(!eval::matches(&Predicate::gt("a", 5i64), &row));

    let both = Predicate::And(vec![Predicate::eq("a", 5i64), Predicate::eq("b", "x")]);
    assert!(eval::matches(&both, &row));

    let either = Predicate::Or(vec![Predicate::eq("a", 0i64), Predicate::eq("b", "x")]);
    assert!(eval::matches(&either, &row));

    // Absent columns read as Null, which never equals a populated value.
    assert!(!eval::matches(&Predicate::eq("missing", 1i64), &row));
}

// The boundary property the whole scan rests on: resuming from row k
// selects exactly the rows after k in table order, at every position.
#[test]
fn resume_predicate_selects_exactly_the_rows_after_the_cursor() {
    let model = multi_key_model();
    let mut rows = multi_key_rows();
    rows.sort_by(|a, b| model.cmp_rows(a, b));

    for k in [0usize, 57, 179, 358, 359] {
        let cursor = cursor_of(&model, &rows[k]);
        let predicate =
            predicate::after(&model, &cursor).expect("resume predicate should build");

        for (idx, row) in rows.iter().enumerate() {
            assert_eq!(
                eval::matches(&predicate, row),
                idx > k,
                "row {idx} against cursor at {k}"
            );
        }
    }
}
