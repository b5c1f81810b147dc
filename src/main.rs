use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod collector;
mod config;
mod formatter;
mod probe;
mod snmp;
mod validator;

use cli::Cli;
use collector::SwitchCollector;
use config::{RunConfig, Settings};
use snmp::QueryError;
use validator::RawOptions;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    println!("\nSTATUS: Processing...");

    if cli.port.is_none() {
        println!("STATUS: SNMP port not specified. Default: 161");
    }
    if cli.snmp_version.is_none() {
        println!("STATUS: SNMP version not specified. Default: Version 2");
    }

    let raw = RawOptions::from_cli(&cli);
    tracing::debug!(?raw, "входные параметры");

    let (target, output) = match validator::validate(&raw) {
        Ok(validated) => validated,
        Err(errors) => {
            for error in &errors {
                println!("ERROR: {error}");
            }
            return ExitCode::FAILURE;
        }
    };
    println!("STATUS: Validation complete");

    let config = RunConfig {
        target,
        output,
        settings: Settings::load_or_default(),
    };

    match run_report(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_failure(&config, &error);
            ExitCode::FAILURE
        }
    }
}

/// Линейный конвейер отчета: сессия, опрос, рендер
async fn run_report(config: &RunConfig) -> Result<(), QueryError> {
    println!("STATUS: Performing SNMP queries");

    let mut client = snmp::connect(&config.target).await?;
    let snapshot = SwitchCollector::collect_all(&mut client, config).await?;
    formatter::render(config, &snapshot);

    Ok(())
}

/// Каждому виду отказа свое действие: сообщение или проверка доступности
fn report_failure(config: &RunConfig, error: &QueryError) {
    match error {
        QueryError::Transport(e) => println!("ERROR: IO Error: {e}"),
        QueryError::Decode(e) => println!("ERROR: Value Error: {e}"),
        QueryError::Empty(oid) => {
            tracing::debug!(oid = %oid, "пустой ответ, запускается проверка доступности");
            println!("{}", probe::diagnose(&config.target));
        }
    }
}

/// Уровень диагностики: --debug включает debug, иначе RUST_LOG или warn
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
