//! Dataset column-store tests.

use chrono::NaiveDate;
use mmm_core::dataset::Dataset;
use mmm_core::errors::ModelError;

#[test]
fn uniform_length_is_enforced() {
    let mut dataset = Dataset::new();
    dataset.insert("a", vec![1.0, 2.0, 3.0]).unwrap();
    let err = dataset.insert("b", vec![1.0]).unwrap_err();
    assert!(matches!(
        err,
        ModelError::LengthMismatch {
            expected: 3,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn missing_column_is_an_error() {
    let dataset = Dataset::from_columns([("a".to_string(), vec![1.0])]).unwrap();
    assert!(matches!(
        dataset.column("b"),
        Err(ModelError::MissingColumn { .. })
    ));
    assert!(dataset.require_columns(["a", "b"]).is_err());
    assert!(dataset.require_columns(["a"]).is_ok());
}

#[test]
fn nan_fill_counts_replacements() {
    let mut dataset = Dataset::from_columns([
        ("a".to_string(), vec![1.0, f64::NAN, f64::NAN]),
        ("b".to_string(), vec![f64::NAN, 2.0, 3.0]),
    ])
    .unwrap();
    let filled = dataset.fill_nan_with_zero(["a", "b"]).unwrap();
    assert_eq!(filled, 3);
    assert_eq!(dataset.column("a").unwrap(), &[1.0, 0.0, 0.0]);
    assert_eq!(dataset.column("b").unwrap(), &[0.0, 2.0, 3.0]);

    // Second pass finds nothing.
    assert_eq!(dataset.fill_nan_with_zero(["a", "b"]).unwrap(), 0);
}

#[test]
fn week_index_labels_consecutive_weeks() {
    let dataset = Dataset::from_columns([("a".to_string(), vec![1.0, 2.0, 3.0])])
        .unwrap()
        .with_week_index(NaiveDate::from_ymd_opt(2021, 1, 4).unwrap());
    let weeks = dataset.week_index().unwrap();
    assert_eq!(weeks.len(), 3);
    assert_eq!(weeks[0], NaiveDate::from_ymd_opt(2021, 1, 4).unwrap());
    assert_eq!(weeks[1], NaiveDate::from_ymd_opt(2021, 1, 11).unwrap());
    assert_eq!(weeks[2], NaiveDate::from_ymd_opt(2021, 1, 18).unwrap());
}

#[test]
fn week_index_length_is_enforced() {
    let mut dataset = Dataset::from_columns([("a".to_string(), vec![1.0, 2.0])]).unwrap();
    let err = dataset
        .set_week_index(vec![NaiveDate::from_ymd_opt(2021, 1, 4).unwrap()])
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::LengthMismatch {
            expected: 2,
            actual: 1,
            ..
        }
    ));
    assert!(dataset.week_index().is_none());

    dataset
        .set_week_index(vec![
            NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 11).unwrap(),
        ])
        .unwrap();
    assert_eq!(dataset.week_index().unwrap().len(), 2);
}

#[test]
fn len_tracks_first_column() {
    let mut dataset = Dataset::new();
    assert!(dataset.is_empty());
    dataset.insert("a", vec![1.0, 2.0]).unwrap();
    assert_eq!(dataset.len(), 2);
    assert!(!dataset.is_empty());
    assert_eq!(dataset.column_names().collect::<Vec<_>>(), vec!["a"]);
}
