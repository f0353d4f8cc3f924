use nail_fixtures::{generate, FixtureResult, GeneratorConfig};

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_max_level(tracing::Level::INFO)
		.with_target(false)
		.init();
	
	if let Err(e) = run().await {
		eprintln!("Error: {}", e);
		std::process::exit(1);
	}
}

async fn run() -> FixtureResult<()> {
	generate(&GeneratorConfig::default()).await?;
	Ok(())
}
