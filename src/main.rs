mod config;
mod error;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let conf = leptos::config::get_configuration(None).expect("invalid leptos configuration");
    let leptos_options = conf.leptos_options;

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let upstreams = config::UpstreamConfig::from_env();
    tracing::info!(
        admin = %upstreams.admin_base,
        monitor = %upstreams.monitor_base,
        "upstream targets configured"
    );

    let state = state::AppState {
        leptos_options,
        upstreams,
        http: reqwest::Client::new(),
    };

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "mtbbs-admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
