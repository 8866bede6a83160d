//! End-to-end emission scenarios: raw configuration in, records out.

use stream_core::{validate, ColumnValue, RawColumn, RawJobConfig, Record};
use stream_generator::{DataGenerator, RecordEmitter};

fn emit(raw: RawJobConfig) -> (Vec<Record>, u64) {
    let spec = validate(&raw).expect("valid configuration");
    let mut emitter = RecordEmitter::new(spec, DataGenerator::from_os_rng());
    let mut sink: Vec<Record> = Vec::new();
    let summary = emitter.run(&mut sink).expect("emission succeeds");
    assert_eq!(summary.rows_sent as usize, sink.len());
    (sink, summary.records_built)
}

#[test]
fn fixed_long_with_random_string() {
    let raw = RawJobConfig::from_json(
        r#"{
            "column": [
                {"type": "long", "value": "42"},
                {"type": "string", "random": "random 3,3"}
            ],
            "sliceRecordCount": 5
        }"#,
    )
    .unwrap();

    let (records, built) = emit(raw);

    assert_eq!(records.len(), 5);
    assert_eq!(built, 5);
    for record in &records {
        assert_eq!(record.get(0), Some(&ColumnValue::Long(42)));
        let text = record.get(1).and_then(ColumnValue::as_str).unwrap();
        assert_eq!(text.len(), 3);
        assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    // 62^3 possibilities per row; five identical rows is vanishingly unlikely
    let first = records[0].get(1);
    assert!(records.iter().any(|r| r.get(1) != first));
}

#[test]
fn constant_job_reuses_single_record() {
    let raw = RawJobConfig::new(vec![RawColumn::fixed("bool", "true")], 1000);

    let (records, built) = emit(raw);

    assert_eq!(records.len(), 1000);
    assert_eq!(built, 1);
    assert!(records
        .iter()
        .all(|r| r.columns() == [ColumnValue::Bool(true)]));
}

#[test]
fn random_values_stay_in_range() {
    let raw = RawJobConfig::new(
        vec![
            RawColumn::random("long", "random 5, 9"),
            RawColumn::random("double", "random 5, 9"),
            RawColumn::random("date", "random 2014-07-07 00:00:00, 2014-07-08 00:00:00"),
            RawColumn::random("bytes", "random 5, 9"),
        ],
        10_000,
    );
    let start = 1_404_691_200_000;
    let end = start + 86_400_000;

    let (records, _) = emit(raw);

    assert_eq!(records.len(), 10_000);
    for record in &records {
        let long = record.get(0).and_then(ColumnValue::as_i64).unwrap();
        assert!((5..=9).contains(&long));

        let double = record.get(1).and_then(ColumnValue::as_f64).unwrap();
        assert!((5.0..=9.0).contains(&double));

        let millis = record.get(2).and_then(ColumnValue::as_millis).unwrap();
        assert!((start..=end).contains(&millis));

        let bytes = record.get(3).and_then(ColumnValue::as_bytes).unwrap();
        assert!((5..=9).contains(&bytes.len()));
    }
}

#[test]
fn bool_ratio_edge_cases() {
    let raw = RawJobConfig::new(
        vec![
            RawColumn::random("bool", "random 0, 0"),
            RawColumn::random("bool", "random 5, 0"),
            RawColumn::random("bool", "random 3, 3"),
        ],
        10_000,
    );

    let (records, _) = emit(raw);

    let column = |i: usize| {
        records
            .iter()
            .filter(|r| r.get(i) == Some(&ColumnValue::Bool(true)))
            .count()
    };
    assert_eq!(column(0), 10_000);
    assert_eq!(column(1), 0);
    let fair = column(2);
    assert!((4_700..=5_300).contains(&fair), "got {fair} trues");
}

#[test]
fn value_takes_precedence_over_random() {
    let raw = RawJobConfig::new(
        vec![RawColumn {
            column_type: Some("long".to_string()),
            value: Some("7".to_string()),
            random: Some("random 100, 200".to_string()),
            date_format: None,
        }],
        20,
    );

    let (records, built) = emit(raw);

    assert_eq!(built, 1);
    assert!(records.iter().all(|r| r.get(0) == Some(&ColumnValue::Long(7))));
}
