#![allow(dead_code)]

use arrow::array::{Array, AsArray, RecordBatch};
use arrow::datatypes::{Int8Type, TimestampNanosecondType};
use nail_fixtures::GeneratorConfig;
use parquet::file::reader::{FileReader, SerializedFileReader};
use serde_json::Value;
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// `1970-01-01 01:23:45.678+0d:00` for d in 0..5, as nanoseconds since the epoch.
pub const EXPECTED_NANOS: [i64; 5] = [
    5_025_678_000_000,
    1_425_678_000_000,
    -2_174_322_000_000,
    -5_774_322_000_000,
    -9_374_322_000_000,
];

pub const DATETIME_COLUMNS: [&str; 3] = ["DateTimeCol", "DateTimeColTz", "DateTimeColUTC"];

// Temp working directory plus a config whose output dir does not exist yet.
pub struct TestWorkspace {
    pub dir: TempDir,
    pub config: GeneratorConfig,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig::default().with_output_dir(dir.path().join("generated"));
        Self { dir, config }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.config.output_dir.clone()
    }

    pub fn artifact(&self) -> PathBuf {
        self.dir.path().join("generated").join("df1.parquet")
    }
}

pub fn column_names(batch: &RecordBatch) -> Vec<String> {
    batch.schema().fields().iter().map(|f| f.name().clone()).collect()
}

pub fn string_values(batch: &RecordBatch, name: &str) -> Vec<String> {
    let column = batch.column_by_name(name).unwrap();
    column.as_string::<i32>().iter().map(|v| v.unwrap().to_string()).collect()
}

pub fn category_labels(batch: &RecordBatch, name: &str) -> Vec<String> {
    let dict = batch.column_by_name(name).unwrap().as_dictionary::<Int8Type>();
    let values = dict.values().as_string::<i32>();
    dict.keys()
        .values()
        .iter()
        .map(|key| values.value(*key as usize).to_string())
        .collect()
}

pub fn categories(batch: &RecordBatch, name: &str) -> Vec<String> {
    let dict = batch.column_by_name(name).unwrap().as_dictionary::<Int8Type>();
    let values = dict.values().as_string::<i32>();
    (0..values.len()).map(|i| values.value(i).to_string()).collect()
}

pub fn timestamp_nanos(batch: &RecordBatch, name: &str) -> Vec<i64> {
    let column = batch.column_by_name(name).unwrap();
    column.as_primitive::<TimestampNanosecondType>().values().to_vec()
}

pub fn footer_keys(path: &Path) -> Vec<String> {
    let reader = SerializedFileReader::new(File::open(path).unwrap()).unwrap();
    reader.metadata()
        .file_metadata()
        .key_value_metadata()
        .map(|kvs| kvs.iter().map(|kv| kv.key.clone()).collect())
        .unwrap_or_default()
}

pub fn pandas_metadata(path: &Path) -> Value {
    let reader = SerializedFileReader::new(File::open(path).unwrap()).unwrap();
    let kvs = reader.metadata().file_metadata().key_value_metadata().unwrap();
    let entry = kvs.iter().find(|kv| kv.key == "pandas").unwrap();
    serde_json::from_str(entry.value.as_deref().unwrap()).unwrap()
}
