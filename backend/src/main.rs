use backend::{api, leaderboard};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    // Database Connection
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:takeme.db".to_string());

    let options = SqliteConnectOptions::from_str(&database_url)
        .expect("Invalid database URL")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to connect to database");

    leaderboard::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    let app = api::router(pool);
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("API listening on {addr}");

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind API address");
    axum::serve(listener, app).await.expect("Server error");
}
