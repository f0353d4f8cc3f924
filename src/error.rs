use thiserror::Error;

pub type FixtureResult<T> = Result<T, FixtureError>;

#[derive(Error, Debug)]
pub enum FixtureError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	
	#[error("DataFusion error: {0}")]
	DataFusion(#[from] datafusion::error::DataFusionError),
	
	#[error("Arrow error: {0}")]
	Arrow(#[from] arrow::error::ArrowError),
	
	#[error("Parquet error: {0}")]
	Parquet(#[from] parquet::errors::ParquetError),
	
	#[error("Serde JSON error: {0}")]
	SerdeJson(#[from] serde_json::Error),
	
	#[error("Invalid timestamp literal '{literal}': {source}")]
	InvalidTimestamp {
		literal: String,
		#[source]
		source: chrono::ParseError,
	},
	
	#[error("Unknown timezone: {0}")]
	UnknownTimezone(String),
	
	#[error("Timestamp out of range: {0}")]
	TimestampOutOfRange(String),
	
	#[error("Unknown category: {0}")]
	UnknownCategory(String),
	
	#[error("Unsupported column type: {0}")]
	UnsupportedType(String),
}
