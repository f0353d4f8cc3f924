pub mod format;
pub mod io;
pub mod parquet_utils;
pub mod timestamps;
