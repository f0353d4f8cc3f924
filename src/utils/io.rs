use arrow::array::RecordBatch;
use arrow::compute::concat_batches;
use arrow::record_batch::RecordBatchReader;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use std::fs::{self, File};
use std::path::Path;
use tracing::info;
use crate::error::FixtureResult;

/// Creates `dir` when it is not already a directory. Only the last path component is
/// created; a missing parent is an error.
pub fn ensure_output_dir(dir: &Path) -> FixtureResult<()> {
	if dir.is_dir() {
		return Ok(());
	}
	
	fs::create_dir(dir)?;
	info!(dir = %dir.display(), "created output directory");
	Ok(())
}

/// Writes `batch` as a single row group, replacing any existing file at `path`. The Arrow
/// schema is embedded in the footer so dictionary and timezone types survive a read.
pub fn write_parquet(batch: &RecordBatch, path: &Path, props: WriterProperties) -> FixtureResult<()> {
	let file = File::create(path)?;
	let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
	
	writer.write(batch)?;
	writer.close()?;
	
	Ok(())
}

pub fn read_parquet(path: &Path) -> FixtureResult<RecordBatch> {
	let file = File::open(path)?;
	let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
	let schema = reader.schema();
	
	let batches = reader.collect::<Result<Vec<_>, _>>()?;
	Ok(concat_batches(&schema, &batches)?)
}
