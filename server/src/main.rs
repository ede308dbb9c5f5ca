mod config;
mod db;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use services::notify::{ContactNotifier, ResendNotifier};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;

    // Contact emails are optional: submissions are still stored without them.
    let notifier: Option<Arc<dyn ContactNotifier>> = match &config.email {
        Some(email) => {
            tracing::info!(inbox = %email.inbox, "contact notifications enabled");
            Some(Arc::new(ResendNotifier::new(email)))
        }
        None => {
            tracing::warn!("RESEND_API_KEY/RESEND_FROM/CONTACT_INBOX not set; contact notifications disabled");
            None
        }
    };

    let state = state::AppState::new(pool, notifier, rate_limit::RateLimiter::new(config.contact_rate));

    let app = routes::leptos_app(state, &config.site_dir)?;
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], config.port))).await?;

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "eexplo listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
