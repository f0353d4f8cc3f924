pub mod config;
pub mod error;
pub mod fixtures;
pub mod generator;
pub mod utils;

pub use config::GeneratorConfig;
pub use error::{FixtureError, FixtureResult};
pub use generator::{generate, generate_fixture};
