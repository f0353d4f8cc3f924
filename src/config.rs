use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::path::PathBuf;
use parquet::file::metadata::KeyValue;
use crate::fixtures::df1;

/// Directory, relative to the working directory, that receives generated fixtures.
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
	pub output_dir: PathBuf,
	pub compression: Compression,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
			compression: Compression::SNAPPY,
		}
	}
}

impl GeneratorConfig {
	pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
		self.output_dir = output_dir.into();
		self
	}
	
	pub fn artifact_path(&self) -> PathBuf {
		self.output_dir.join(df1::FILE_NAME)
	}
	
	/// Writer settings; `key_value_metadata` lands in the file footer next to the
	/// embedded Arrow schema.
	pub fn writer_properties(&self, key_value_metadata: Vec<KeyValue>) -> WriterProperties {
		WriterProperties::builder()
			.set_compression(self.compression)
			.set_key_value_metadata(Some(key_value_metadata))
			.build()
	}
}
