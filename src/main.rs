use cocktail::{
    api::routes::create_router,
    cli::{output::Output, Cli, Commands},
    utils::logging::init_tracing,
    AppState, CocktailConfig,
};
use std::path::PathBuf;
use std::process::exit;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let (config, source) = match cli.load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            output.error(&format!("Configuration error: {}", e));
            exit(1);
        }
    };

    if let Some(Commands::Config { validate }) = cli.command {
        if validate {
            output.success("Configuration is valid");
        } else {
            match toml::to_string_pretty(&config) {
                Ok(text) => print!("{}", text),
                Err(e) => {
                    output.error(&format!("Failed to render configuration: {}", e));
                    exit(1);
                }
            }
        }
        return;
    }

    if let Err(e) = serve(config, source, &output).await {
        error!(error = %e, "Server terminated");
        output.error(&e.to_string());
        exit(1);
    }
}

async fn serve(
    config: CocktailConfig,
    source: Option<PathBuf>,
    output: &Output,
) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(&config.server.log_level, &config.server.log_format);
    match &source {
        Some(path) => info!(path = %path.display(), "Loaded configuration"),
        None => info!("No configuration file found, using defaults"),
    }
    output.banner();
    output.kv("dataset", &config.dataset.path.display().to_string());
    output.kv("model", &format!("{} @ {}", config.llm.model, config.llm.base_url));
    output.kv("embeddings", config.embeddings.model_name());
    println!();

    output.step(1, 2, "Building document index and connecting to the model...");
    let state = match AppState::initialize(&config).await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Startup failed");
            output.error(&format!("Startup failed: {}", e));
            exit(1);
        }
    };
    output.success(&format!(
        "Indexed {} recipes",
        state.engine.index().len()
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    output.step(2, 2, &format!("Listening on http://{}", addr));

    let app = create_router().with_state(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Server ready");
    output.info("Press Ctrl-C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
