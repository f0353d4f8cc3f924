//! `df1`: a generic five-row table mixing text, a categorical column and the same
//! instants rendered as naive, `Europe/Berlin` and UTC timestamps.

use arrow::array::{ArrayRef, DictionaryArray, Int8Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Int8Type, Schema, SchemaRef, TimeUnit};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;
use crate::error::{FixtureError, FixtureResult};
use crate::utils::timestamps::{naive_column, normalize_to_utc, parse_offset_literal, zoned_column};

pub const NAME: &str = "df1";
pub const FILE_NAME: &str = "df1.parquet";

pub const STRING_VALUES: [&str; 5] = ["Lorem", "ipsum", "dolor", "sit", "amet"];

pub const CATEGORIES: [&str; 3] = ["A", "B", "C"];
pub const CATEGORICAL_VALUES: [&str; 5] = ["A", "B", "A", "B", "C"];

pub const BASE_WALL_CLOCK: &str = "1970-01-01 01:23:45.678";
/// Literal `d` carries a `+0d:00` offset, so the instants are an hour apart.
pub const OFFSET_COUNT: u8 = 5;

pub const LOCAL_ZONE: &str = "Europe/Berlin";
pub const UTC_ZONE: &str = "UTC";

pub fn offset_literals() -> Vec<String> {
	(0..OFFSET_COUNT)
		.map(|d| format!("{}+0{}:00", BASE_WALL_CLOCK, d))
		.collect()
}

pub fn base_instants() -> FixtureResult<Vec<DateTime<Utc>>> {
	let parsed = offset_literals().iter()
		.map(|literal| parse_offset_literal(literal))
		.collect::<FixtureResult<Vec<_>>>()?;
	
	Ok(normalize_to_utc(&parsed))
}

/// Dictionary-encodes `labels` against the closed `CATEGORIES` list.
pub fn categorical_column(labels: &[&str]) -> FixtureResult<DictionaryArray<Int8Type>> {
	let keys = labels.iter()
		.map(|label| {
			CATEGORIES.iter()
				.position(|category| category == label)
				.map(|idx| idx as i8)
				.ok_or_else(|| FixtureError::UnknownCategory(label.to_string()))
		})
		.collect::<FixtureResult<Vec<i8>>>()?;
	
	let values: ArrayRef = Arc::new(StringArray::from(CATEGORIES.to_vec()));
	Ok(DictionaryArray::try_new(Int8Array::from(keys), values)?)
}

pub fn schema() -> SchemaRef {
	Arc::new(Schema::new(vec![
		Field::new("StringCol", DataType::Utf8, true),
		Field::new(
			"CategoricalCol",
			DataType::Dictionary(Box::new(DataType::Int8), Box::new(DataType::Utf8)),
			true,
		),
		Field::new("DateTimeCol", DataType::Timestamp(TimeUnit::Nanosecond, None), true),
		Field::new("DateTimeColTz", DataType::Timestamp(TimeUnit::Nanosecond, Some(LOCAL_ZONE.into())), true),
		Field::new("DateTimeColUTC", DataType::Timestamp(TimeUnit::Nanosecond, Some(UTC_ZONE.into())), true),
	]))
}

pub fn build() -> FixtureResult<RecordBatch> {
	let instants = base_instants()?;
	debug!(fixture = NAME, instants = instants.len(), "normalized base instants to UTC");
	
	let columns: Vec<ArrayRef> = vec![
		Arc::new(StringArray::from(STRING_VALUES.to_vec())),
		Arc::new(categorical_column(&CATEGORICAL_VALUES)?),
		Arc::new(naive_column(&instants)?),
		Arc::new(zoned_column(&instants, LOCAL_ZONE)?),
		Arc::new(zoned_column(&instants, UTC_ZONE)?),
	];
	
	Ok(RecordBatch::try_new(schema(), columns)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	
	#[test]
	fn test_offset_literals() {
		assert_eq!(offset_literals(), vec![
			"1970-01-01 01:23:45.678+00:00",
			"1970-01-01 01:23:45.678+01:00",
			"1970-01-01 01:23:45.678+02:00",
			"1970-01-01 01:23:45.678+03:00",
			"1970-01-01 01:23:45.678+04:00",
		]);
	}
	
	#[test]
	fn test_instants_are_distinct_and_descending() {
		let instants = base_instants().unwrap();
		assert_eq!(instants.len(), 5);
		for pair in instants.windows(2) {
			assert_eq!((pair[0] - pair[1]).num_hours(), 1);
		}
	}
	
	#[test]
	fn test_categorical_keys() {
		let column = categorical_column(&CATEGORICAL_VALUES).unwrap();
		assert_eq!(column.keys().values().to_vec(), vec![0, 1, 0, 1, 2]);
		assert_eq!(column.values().len(), 3);
	}
	
	#[test]
	fn test_label_outside_categories() {
		let err = categorical_column(&["A", "D"]).unwrap_err();
		assert!(matches!(err, FixtureError::UnknownCategory(label) if label == "D"));
	}
}
