use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use icon_gen::IconGenerator;

fn main() -> ExitCode {
    // Set up logging using tracing, stdout is reserved for the confirmation lines
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!(
        "{} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let generator = IconGenerator::default();
    let mut stdout = std::io::stdout().lock();

    match generator.run(&mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Failed to generate icons: {}", err);
            ExitCode::FAILURE
        }
    }
}
