#[cfg(feature = "server")]
#[tokio::main]
async fn main() {
    use automation_landing::config::ServerConfig;
    use axum::Router;
    use tower_http::services::{ServeDir, ServeFile};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    // Load env vars
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    };

    if !config.index_file().exists() {
        tracing::warn!(
            site_root = %config.site_root.display(),
            "index.html not found, build the client with `trunk build --release` first"
        );
    }

    // Unknown paths fall back to the page itself
    let static_files =
        ServeDir::new(&config.site_root).not_found_service(ServeFile::new(config.index_file()));

    let app = Router::new()
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await.unwrap();
    tracing::info!("Listening on http://{}", config.addr);
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(all(feature = "csr", not(feature = "server")))]
fn main() {
    automation_landing::mount();
}

#[cfg(not(any(feature = "csr", feature = "server")))]
fn main() {
    // Build with `--features csr` (client) or `--features server` (static host)
}
