mod admin;
mod app;
mod auth;
mod chat;
mod config;
mod contact;
mod error;
mod state;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "haryawn_api=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await?;

    sqlx::migrate!("./migrations").run(&state.db).await?;

    // Admin credentials come from the environment and go through the same
    // hashing path as every other user; nothing lives in source.
    if let Some(admin) = state.config.admin.clone() {
        auth::seed_admin(&state, &admin).await?;
    }

    let app = app::build_app(state);
    app::serve(app).await
}
