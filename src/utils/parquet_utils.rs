use std::fs::File;
use std::path::Path;
use parquet::file::reader::{FileReader, SerializedFileReader};
use crate::error::FixtureResult;

/// Row count from the Parquet footer, without decoding any pages
pub fn row_count(path: &Path) -> FixtureResult<usize> {
	let file = File::open(path)?;
	let reader = SerializedFileReader::new(file)?;
	
	let metadata = reader.metadata();
	let total_rows = (0..metadata.num_row_groups())
		.map(|i| metadata.row_group(i).num_rows() as usize)
		.sum();
	
	Ok(total_rows)
}
