use arrow::array::RecordBatch;
use std::path::PathBuf;
use tracing::{debug, info};
use crate::config::GeneratorConfig;
use crate::error::FixtureResult;
use crate::fixtures::df1;
use crate::fixtures::pandas::PandasMetadata;
use crate::utils::format::display_fixture;
use crate::utils::io::{ensure_output_dir, write_parquet};
use crate::utils::parquet_utils::row_count;

/// Writes `df1` into `config.output_dir` and prints it. Returns the artifact path.
pub async fn generate(config: &GeneratorConfig) -> FixtureResult<PathBuf> {
	ensure_output_dir(&config.output_dir)?;
	
	let batch = build_fixture()?;
	let path = write_fixture(config, &batch)?;
	display_fixture(&batch).await?;
	
	Ok(path)
}

/// Same as [`generate`] without the console preview.
pub fn generate_fixture(config: &GeneratorConfig) -> FixtureResult<PathBuf> {
	ensure_output_dir(&config.output_dir)?;
	let batch = build_fixture()?;
	write_fixture(config, &batch)
}

fn build_fixture() -> FixtureResult<RecordBatch> {
	let batch = df1::build()?;
	debug!(fixture = df1::NAME, columns = batch.num_columns(), rows = batch.num_rows(), "built fixture table");
	Ok(batch)
}

fn write_fixture(config: &GeneratorConfig, batch: &RecordBatch) -> FixtureResult<PathBuf> {
	let pandas = PandasMetadata::from_batch(batch)?.to_key_value()?;
	let path = config.artifact_path();
	write_parquet(batch, &path, config.writer_properties(vec![pandas]))?;
	
	let rows = row_count(&path)?;
	info!(fixture = df1::NAME, path = %path.display(), rows, "wrote fixture");
	
	Ok(path)
}
