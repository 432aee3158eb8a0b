use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    SharedData,
    configs::{Configs, FunctionConfig, InvocationMode, ServerConfig},
    handler::SecretFetchHandler,
    http::application_routes,
    runtime::{LambdaRuntime, report_init_error},
};

fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // reads RUST_LOG
        .with_target(false)
        .with_level(true)
        .with_thread_ids(true)
        .try_init();
}

/// Local surface for development runs and container health checks.
async fn start_http_server(
    config: ServerConfig,
    handler: SecretFetchHandler,
) -> anyhow::Result<()> {
    let listen_address = config.listen_address.clone();
    let shared_data = SharedData::new(handler);

    let router = application_routes("", shared_data).layer(TraceLayer::new_for_http());

    info!("HTTP server is starting on {}...", listen_address);

    let listener = tokio::net::TcpListener::bind(&listen_address).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn start_lambda_runtime(
    config: ServerConfig,
    handler: SecretFetchHandler,
) -> anyhow::Result<()> {
    let Some(runtime_api) = config.lambda_runtime_api.as_deref() else {
        anyhow::bail!("Lambda mode requires AWS_LAMBDA_RUNTIME_API to be set");
    };

    LambdaRuntime::new(runtime_api, handler).run().await
}

async fn report_startup_failure(message: &str) {
    error!("Failed to start. End of work. Original error is: {}", message);

    if let Ok(config) = ServerConfig::load().await {
        if let Some(runtime_api) = config.lambda_runtime_api.as_deref() {
            if let Err(e) = report_init_error(runtime_api, message).await {
                error!("{:#}", e);
            }
        }
    }
}

pub async fn start(requested_mode: Option<InvocationMode>) {
    // resources section
    dotenv().ok();

    setup_logging();

    let config = match FunctionConfig::load().await {
        Ok(c) => c,
        Err(e) => {
            report_startup_failure(&e.to_string()).await;
            std::process::exit(1);
        }
    };
    debug!("CONFIGS: {:?}", &config);

    let handler = match SecretFetchHandler::from_config(config.fetch_config) {
        Ok(h) => h,
        Err(e) => {
            report_startup_failure(&e.to_string()).await;
            std::process::exit(1);
        }
    };

    let result = match config.server_config.mode(requested_mode) {
        InvocationMode::Lambda => start_lambda_runtime(config.server_config, handler).await,
        InvocationMode::Serve => start_http_server(config.server_config, handler).await,
    };

    if let Err(e) = result {
        error!("Function stopped: {:#}", e);
    }

    std::process::exit(1);
}
