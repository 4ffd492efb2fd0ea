use std::sync::Arc;

use coverage_validator_client::config::ClientConfig;
use coverage_validator_client::logging;
use coverage_validator_client::shell::Shell;
use coverage_validator_client::submission::SubmissionCoordinator;
use coverage_validator_client::transport::HttpTransport;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let config = match ClientConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("coverage-validator-client: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let transport = match HttpTransport::new(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("coverage-validator-client: cannot build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let coordinator = SubmissionCoordinator::new(Arc::new(transport));
    let mut shell = Shell::new(&config, coordinator);
    if let Err(e) = shell.run(tokio::io::stdin(), tokio::io::stdout()).await {
        eprintln!("coverage-validator-client: fatal error: {e}");
        std::process::exit(1);
    }
}
