//! `pandas` footer entry: the JSON document dataframe readers use to restore the index,
//! categorical and timezone dtypes that bare Parquet logical types cannot express
//! (a Berlin column and a UTC column are both just "adjusted to UTC" there).

use arrow::array::{ArrayRef, AsArray, RecordBatch};
use arrow::datatypes::{DataType, TimeUnit};
use parquet::file::metadata::KeyValue;
use serde::Serialize;
use serde_json::{json, Value};
use crate::error::{FixtureError, FixtureResult};

pub const METADATA_KEY: &str = "pandas";
pub const PANDAS_VERSION: &str = "2.2.3";

#[derive(Serialize, Debug)]
pub struct PandasMetadata {
	pub index_columns: Vec<RangeIndex>,
	pub column_indexes: Vec<PandasColumn>,
	pub columns: Vec<PandasColumn>,
	pub creator: Creator,
	pub pandas_version: String,
}

/// Default `RangeIndex`, stored as a descriptor rather than a column.
#[derive(Serialize, Debug)]
pub struct RangeIndex {
	pub kind: &'static str,
	pub name: Option<String>,
	pub start: usize,
	pub stop: usize,
	pub step: usize,
}

#[derive(Serialize, Debug)]
pub struct PandasColumn {
	pub name: Option<String>,
	pub field_name: Option<String>,
	pub pandas_type: String,
	pub numpy_type: String,
	pub metadata: Option<Value>,
}

#[derive(Serialize, Debug)]
pub struct Creator {
	pub library: String,
	pub version: String,
}

impl PandasMetadata {
	pub fn from_batch(batch: &RecordBatch) -> FixtureResult<Self> {
		let schema = batch.schema();
		let columns = schema.fields().iter()
			.zip(batch.columns())
			.map(|(field, array)| describe_column(field.name(), array))
			.collect::<FixtureResult<Vec<_>>>()?;
		
		Ok(Self {
			index_columns: vec![RangeIndex {
				kind: "range",
				name: None,
				start: 0,
				stop: batch.num_rows(),
				step: 1,
			}],
			column_indexes: vec![PandasColumn {
				name: None,
				field_name: None,
				pandas_type: "unicode".to_string(),
				numpy_type: "object".to_string(),
				metadata: Some(json!({ "encoding": "UTF-8" })),
			}],
			columns,
			creator: Creator {
				library: env!("CARGO_PKG_NAME").to_string(),
				version: env!("CARGO_PKG_VERSION").to_string(),
			},
			pandas_version: PANDAS_VERSION.to_string(),
		})
	}
	
	pub fn to_key_value(&self) -> FixtureResult<KeyValue> {
		Ok(KeyValue::new(METADATA_KEY.to_string(), serde_json::to_string(self)?))
	}
}

fn describe_column(name: &str, array: &ArrayRef) -> FixtureResult<PandasColumn> {
	let unsupported = || FixtureError::UnsupportedType(format!("{}: {:?}", name, array.data_type()));
	
	let (pandas_type, numpy_type, metadata) = match array.data_type() {
		DataType::Utf8 | DataType::LargeUtf8 => ("unicode", "object".to_string(), None),
		DataType::Dictionary(key, _) => {
			let categories = array.as_any_dictionary().values().len();
			let key_type = numpy_name(key).ok_or_else(unsupported)?;
			("categorical", key_type.to_string(), Some(json!({ "num_categories": categories, "ordered": false })))
		},
		DataType::Timestamp(unit, None) => ("datetime", datetime64(unit), None),
		DataType::Timestamp(unit, Some(tz)) => {
			("datetimetz", datetime64(unit), Some(json!({ "timezone": tz.to_string() })))
		},
		other => {
			let numpy = numpy_name(other).ok_or_else(unsupported)?;
			(numpy, numpy.to_string(), None)
		},
	};
	
	Ok(PandasColumn {
		name: Some(name.to_string()),
		field_name: Some(name.to_string()),
		pandas_type: pandas_type.to_string(),
		numpy_type,
		metadata,
	})
}

fn numpy_name(data_type: &DataType) -> Option<&'static str> {
	match data_type {
		DataType::Boolean => Some("bool"),
		DataType::Int8 => Some("int8"),
		DataType::Int16 => Some("int16"),
		DataType::Int32 => Some("int32"),
		DataType::Int64 => Some("int64"),
		DataType::UInt8 => Some("uint8"),
		DataType::UInt16 => Some("uint16"),
		DataType::UInt32 => Some("uint32"),
		DataType::UInt64 => Some("uint64"),
		DataType::Float32 => Some("float32"),
		DataType::Float64 => Some("float64"),
		_ => None,
	}
}

fn datetime64(unit: &TimeUnit) -> String {
	let suffix = match unit {
		TimeUnit::Second => "s",
		TimeUnit::Millisecond => "ms",
		TimeUnit::Microsecond => "us",
		TimeUnit::Nanosecond => "ns",
	};
	format!("datetime64[{}]", suffix)
}
