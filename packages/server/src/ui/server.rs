//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::Notify;
use tower_http::trace::TraceLayer;

use crate::{
    infrastructure::activity_log::ActivityLog,
    usecase::{
        DeleteGamesUseCase, GetGameServersUseCase, ListGamesUseCase, RefreshGameUseCase,
        UpsertGamesUseCase,
    },
};

use super::{
    handler::{
        create_games, delete_games, game_servers, logs, ping, quit, read_games, refresh_games,
        update_games,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// API version prefix of every route
pub const API_VERSION: &str = "0.1";

/// Game table HTTP API server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     upsert_games_usecase,
///     delete_games_usecase,
///     list_games_usecase,
///     get_game_servers_usecase,
///     refresh_game_usecase,
///     activity_log,
///     password,
/// );
/// server.run("127.0.0.1".to_string(), 16987).await?;
/// ```
pub struct Server {
    state: AppState,
}

impl Server {
    pub fn new(
        upsert_games_usecase: Arc<UpsertGamesUseCase>,
        delete_games_usecase: Arc<DeleteGamesUseCase>,
        list_games_usecase: Arc<ListGamesUseCase>,
        get_game_servers_usecase: Arc<GetGameServersUseCase>,
        refresh_game_usecase: Arc<RefreshGameUseCase>,
        activity_log: Arc<ActivityLog>,
        password: String,
    ) -> Self {
        Self {
            state: AppState {
                upsert_games_usecase,
                delete_games_usecase,
                list_games_usecase,
                get_game_servers_usecase,
                refresh_game_usecase,
                activity_log,
                password,
                shutdown: Arc::new(Notify::new()),
            },
        }
    }

    /// Run the API server until Ctrl+C, SIGTERM or `/system/quit`
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let shutdown = self.state.shutdown.clone();
        let app = router(Arc::new(self.state));

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Obozrenie server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

fn router(state: Arc<AppState>) -> Router {
    let system = Router::new()
        .route("/ping", get(ping).post(ping))
        .route("/logs", post(logs))
        .route("/quit", post(quit));

    let gamecoll = Router::new()
        .route("/create", post(create_games))
        .route("/read", post(read_games))
        .route("/update", post(update_games))
        .route("/delete", post(delete_games))
        .route("/refresh", post(refresh_games))
        .route("/servers", post(game_servers));

    Router::new()
        .nest(&format!("/{API_VERSION}/system"), system)
        .nest(&format!("/{API_VERSION}/gamecoll"), gamecoll)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
