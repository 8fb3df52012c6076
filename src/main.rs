// Analysis Workbench - console entry point

use analysis_workbench::console::run_console;
use analysis_workbench::state::AppState;
use analysis_workbench::storage::ConfigService;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the rendered views.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let service = ConfigService::new()?;
    if let Some(path) = service.config_path() {
        info!("[Main] Configuration path: {}", path.display());
    }
    let config = service.into_config();
    let state = AppState::new(config)?;
    run_console(state).await?;
    Ok(())
}
