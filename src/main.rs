// pr-preview: mirrors pull requests onto preview refs and deployments.
//
// Exit codes: 0 success, 1 failure, 78 neutral (event not relevant).

use clap::Parser;
use log::error;
use pr_preview::cli::{Cli, run};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    // octocrab and reqwest share rustls; pick the provider once for both.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
