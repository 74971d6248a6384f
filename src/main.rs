use clap::Parser;
use overseas_registries::{Extractor, Outcome, Result};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!(
        "Extracting '{}' matches from {}",
        config.selector,
        config.url
    );

    let mut stdout = std::io::stdout();
    let result = Extractor::new(config).run(&mut stdout).await;
    ExitCode::from(exit_status(&result))
}

/// Maps the extraction result to the process exit status
fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::Completed(count)) => {
            ::log::info!("Wrote {} records", count);
            0
        }
        // Reported on stdout already; not fatal
        Ok(Outcome::SerializeFailed) => 0,
        Err(e) => {
            ::log::error!("Extraction failed: {}", e);
            eprintln!("Error: {}", e);
            1
        }
    }
}
