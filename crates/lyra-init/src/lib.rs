use tracing::debug;

/// Install error reporting and logging, and load `.env` if one exists.
///
/// Logs are written to stderr so stdout only carries the lookup report.
pub fn init() -> eyre::Result<()> {
    color_eyre::install()?;

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .init();

    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => return Err(eyre::Error::new(e).wrap_err("Failed to load .env")),
    }

    Ok(())
}
