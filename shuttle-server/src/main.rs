use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use shuttle_server::board::{LiveBoard, REFRESH_INTERVAL, SystemClock};
use shuttle_server::schedule::ScheduleConfig;
use shuttle_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Refuse to start on a malformed timetable
    let config = ScheduleConfig::builtin().expect("built-in timetable is valid");

    // Build the board; the first snapshot is evaluated immediately
    let board = LiveBoard::new(config, Arc::new(SystemClock));

    // Keep the board fresh for as long as the server runs
    let _refresh = board.spawn_refresh(REFRESH_INTERVAL);

    let state = AppState::new(board);
    let app = create_router(state, "static");

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!(%addr, "shuttle board listening");
    tracing::info!("endpoints: GET /  GET /board  GET /api/board  GET /health");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app).await.expect("server error");
}
