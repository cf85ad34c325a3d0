use study_timer::{app::App, config::Cli, error, logging, Result};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.log_level())?;

    let config = cli.resolve_config()?;
    info!(
        "Starting study-timer: {} min default, tick every {:?}",
        config.default_minutes,
        config.tick_interval()
    );

    let mut app = App::new(config)?;
    app.init()?;

    let outcome = app.run().await;
    let stopped = app.shutdown().await;

    if let Err(e) = outcome.and(stopped) {
        tracing::error!("{}", e);
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }

    Ok(())
}
