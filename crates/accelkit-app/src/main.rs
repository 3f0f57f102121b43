mod cli;
mod commands;
mod session;

use std::process::ExitCode;

use accelkit_config::schema::LogLevel;
use accelkit_config::AccelkitConfig;
use tracing_subscriber::EnvFilter;

use crate::session::Session;

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            ),
        )
        .init();
}

/// `--log-level` wins over the config's level; without either, `info`.
fn log_directive(flag: Option<&str>, config: Option<&AccelkitConfig>) -> String {
    match (flag, config) {
        (Some(level), _) => level.to_string(),
        (None, Some(config)) => config.logging.level.as_directive().to_string(),
        (None, None) => LogLevel::default().as_directive().to_string(),
    }
}

fn run(session: &mut Session, command: &cli::Command) -> accelkit_common::Result<()> {
    let loaded = session.apply()?;
    tracing::debug!(
        config = %session.config_path.display(),
        map = %session.map_path.display(),
        loaded,
        "session ready"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(session, command, &mut out)
}

fn main() -> ExitCode {
    let args = cli::parse();

    // The config names the log level, so it is read before the subscriber
    // exists and reported once logging is up.
    let session = Session::open(&args);
    let config = session.as_ref().ok().map(|session| &session.config);
    init_logging(&log_directive(args.log_level.as_deref(), config));

    tracing::debug!("accelkit v{} starting", env!("CARGO_PKG_VERSION"));

    let result = session.and_then(|mut session| {
        tracing::info!(path = %session.config_path.display(), "config loaded");
        run(&mut session, &args.command)
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("accelkit: {e}");
            ExitCode::FAILURE
        }
    }
}
