mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let state = state::AppState::new(&config).expect("http client init failed");
    let app = routes::app(state).expect("leptos init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, upstream = %config.api_upstream, "authgate listening");
    axum::serve(listener, app).await.expect("server failed");
}
