use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use sapling::prelude::*;


fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir()
        .join(format!("sapling_{name}_{}.tsv", process::id()));
    fs::write(&path, contents).unwrap();
    path
}


#[test]
fn reads_records_and_sorted_universes() {
    let path = temp_file(
        "ok",
        "rep0\tD\tyyn\nrep1\tR\tnny\nrep2\tD\tyny\n",
    );
    let records = RecordReader::new().file(&path).read().unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(records.size(), 3);
    assert_eq!(records.labels(), &['D', 'R']);
    assert_eq!(records.feature_values(), &['n', 'y']);

    let rep0 = &records.data()[0];
    assert_eq!(rep0.id(), "rep0");
    assert_eq!(rep0.label(), 'D');
    assert_eq!(rep0.feature_count(), 3);
    assert_eq!(rep0.feature(0), 'y');
    assert_eq!(rep0.feature(2), 'n');
}


#[test]
fn rejects_lines_with_missing_columns() {
    let path = temp_file("columns", "rep0\tD\n");
    let err = RecordReader::new().file(&path).read().unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, SaplingError::MalformedRecord(_)));
}


#[test]
fn rejects_empty_labels() {
    let path = temp_file("label", "rep0\t\tyyn\n");
    let err = RecordReader::new().file(&path).read().unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, SaplingError::MalformedRecord(_)));
}


#[test]
fn rejects_ragged_feature_vectors() {
    let path = temp_file("ragged", "rep0\tD\tyyn\nrep1\tR\tny\n");
    let err = RecordReader::new().file(&path).read().unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, SaplingError::MalformedRecord(_)));
}


#[test]
fn missing_file_surfaces_the_io_error() {
    let err = RecordReader::new()
        .file("/definitely/not/here.tsv")
        .read()
        .unwrap_err();
    assert!(matches!(err, SaplingError::Io(_)));
}


#[test]
fn reader_without_a_file_is_rejected() {
    let err = RecordReader::<&str>::new().read().unwrap_err();
    assert!(matches!(err, SaplingError::MalformedRecord(_)));
}
