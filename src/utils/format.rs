use arrow::array::RecordBatch;
use arrow::datatypes::Schema;
use datafusion::prelude::SessionContext;
use crate::error::FixtureResult;

/// Prints the table followed by its per-column types.
pub async fn display_fixture(batch: &RecordBatch) -> FixtureResult<()> {
	display_table(batch).await?;
	println!("{}", format_dtypes(&batch.schema()));
	Ok(())
}

pub async fn display_table(batch: &RecordBatch) -> FixtureResult<()> {
	let ctx = SessionContext::new();
	let df = ctx.read_batch(batch.clone())?;
	df.show().await?;
	Ok(())
}

pub fn format_dtypes(schema: &Schema) -> String {
	let width = schema.fields().iter()
		.map(|field| field.name().len())
		.max()
		.unwrap_or(0);
	
	let mut out = String::from("dtypes:");
	for field in schema.fields() {
		out.push('\n');
		out.push_str(&format!("{:<width$}  {:?}", field.name(), field.data_type(), width = width));
	}
	out
}
