use logdrop_api::{setup, telemetry};
use logdrop_core::Config;

// mimalloc keeps fragmentation low when large upload buffers churn.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Open the log file before anything else; failing here aborts startup.
    let telemetry = telemetry::init_telemetry(config.log_file())?;

    let router = setup::initialize_app(&config).await?;

    let result = setup::server::start_server(&config, router).await;

    telemetry::shutdown_telemetry(telemetry).await;

    result
}
