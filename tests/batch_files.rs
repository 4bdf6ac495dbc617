use name_features::batch::{run_files, BatchConfig};
use name_features::{BatchError, NormalizationMode};
use std::fs;

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pairs.csv");
    let output = dir.path().join("features.txt");
    fs::write(&input, "kitten,sitting\nmaria,\ncat,cats\nabcbdab,bdcaba\n").unwrap();

    let config = BatchConfig {
        label: "negative".to_string(),
        ..Default::default()
    };
    let summary = run_files(&input, &output, &config).unwrap();
    assert_eq!(summary.rows_written, 3);
    assert_eq!(summary.skipped_blank, 1);

    let written = fs::read_to_string(&output).unwrap();
    let rows: Vec<Vec<&str>> = written.lines().map(|l| l.split(',').collect()).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.len() == 5 && r[4] == "negative"));

    // KITTEN / SITTING
    assert_eq!(rows[0][1], "3");
    // CAT / CATS
    assert_eq!(&rows[1][..2], ["3", "1"]);
    // ABCBDAB / BDCABA
    let lcs: f64 = rows[2][2].parse().unwrap();
    let lcss: f64 = rows[2][3].parse().unwrap();
    assert!((lcs - 0.3077).abs() < 1e-4);
    assert!((lcss - 0.6154).abs() < 1e-4);
}

#[test]
fn test_output_is_truncated_on_rerun() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pairs.csv");
    let output = dir.path().join("features.txt");
    fs::write(&output, "stale\nstale\nstale\nstale\n").unwrap();
    fs::write(&input, "Lee,LEE\n").unwrap();

    let config = BatchConfig {
        normalization: NormalizationMode::Lowercase,
        ..Default::default()
    };
    run_files(&input, &output, &config).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "0,0,1.0,1.0,positive\n");
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pairs.csv");
    fs::write(&input, "a,b\n").unwrap();
    let output = dir.path().join("missing-dir").join("features.txt");

    let err = run_files(&input, &output, &BatchConfig::default()).unwrap_err();
    assert!(matches!(err, BatchError::Create { .. }));
}
