//! CLI entrypoint for prime-checker
//!
//! This is the main binary that wires together all layers using
//! dependency injection and maps the outcome to an exit status.

use clap::Parser;
use primecheck_application::{
    CheckPrimeError, ConfigurationError, InvocationError, RunInvocationInput,
    RunInvocationUseCase,
};
use primecheck_domain::{Model, Verdict};
use primecheck_infrastructure::{
    ConfigLoader, FileConfig, OpenAiLlmGateway, load_dotenv, read_environment,
};
use primecheck_presentation::{Cli, ConsoleFormatter};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Filter directives for a verbosity level.
///
/// Errors are always shown; `-v` opens up this program's own crates
/// without pulling in the HTTP stack's debug output.
fn filter_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => {
            "warn,prime_checker=debug,primecheck_domain=debug,\
             primecheck_application=debug,primecheck_infrastructure=debug"
        }
        _ => "trace", // -vv or more
    }
}

/// Diagnostics go to stderr; stdout carries only the answer.
fn init_diagnostics(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directives(verbose)))
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<FileConfig, ConfigurationError> {
    if cli.no_config {
        debug!("Settings files disabled, using defaults");
        return Ok(ConfigLoader::load_defaults());
    }

    let config = ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| ConfigurationError::InvalidSettings(e.to_string()))?;
    config
        .validate()
        .map_err(|e| ConfigurationError::InvalidSettings(e.to_string()))?;

    debug!(
        "Settings: base_url={}, model={}",
        config.provider.base_url, config.provider.model
    );
    Ok(config)
}

async fn run(cli: Cli) -> Result<Verdict, InvocationError> {
    load_dotenv(cli.env_file.as_deref());

    let config = load_config(&cli)?;
    let mut params = config.check_params();
    if let Some(model) = cli.model.as_deref() {
        params = params.with_model(Model::from(model));
    }

    let environment = read_environment(
        &config.provider.api_key_env,
        &config.provider.timeout_env,
    )?;

    // === Dependency Injection ===
    let gateway = OpenAiLlmGateway::new(config.provider.base_url.clone())
        .map_err(CheckPrimeError::from)?;
    let use_case = RunInvocationUseCase::new(Arc::new(gateway));

    let output = use_case
        .execute(RunInvocationInput::new(cli.numbers, environment, params))
        .await?;

    Ok(output.verdict)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_diagnostics(cli.verbose);

    info!("Starting prime-checker");
    let started = Instant::now();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(verdict) => {
            println!("{}", ConsoleFormatter::format_verdict(&verdict));
            info!("Total execution time: {:?}", started.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Prime check failed ({}): {}", e.kind().as_str(), e);
            for line in ConsoleFormatter::format_failure(&e) {
                println!("{}", line);
            }
            ExitCode::from(e.exit_code())
        }
    }
}
