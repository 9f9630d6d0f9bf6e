//! Obozrenie game server tracker.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin obozrenie-server
//! cargo run --bin obozrenie-server -- --host 0.0.0.0 --port 16987 --password secret
//! ```

use std::sync::Arc;

use clap::Parser;
use obozrenie_server::{
    config::Config,
    domain::{AdapterId, AdapterRegistry, ProxyId, ProxyRegistry},
    infrastructure::{
        activity_log::ActivityLog,
        adapter::{QSTAT_XML_ADAPTER, QStatXmlAdapter},
        proxy::{QSTAT_OUTPUT_PROXY, QStatProxy},
        repository::InMemoryGameTable,
    },
    ui::Server,
    usecase::{
        DeleteGamesUseCase, GetGameServersUseCase, ListGamesUseCase, RefreshGameUseCase,
        UpsertGamesUseCase,
    },
};
use obozrenie_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Initialize dependencies in order:
    // 1. Game table
    // 2. Proxy / Adapter registries
    // 3. UseCases
    // 4. Server

    // 1. Create the game table (in-memory)
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let table = Arc::new(InMemoryGameTable::new(clock.clone()));

    // 2. Register the built-in proxy and adapter
    let proxies = Arc::new(ProxyRegistry::new());
    proxies
        .register(
            ProxyId::from(QSTAT_OUTPUT_PROXY),
            Arc::new(QStatProxy::new(config.qstat_path.clone())),
        )
        .await;
    let adapters = Arc::new(AdapterRegistry::new());
    adapters
        .register(AdapterId::from(QSTAT_XML_ADAPTER), Arc::new(QStatXmlAdapter::new()))
        .await;
    tracing::info!(
        "Registered proxies: {:?}, adapters: {:?}",
        proxies.ids().await,
        adapters.ids().await
    );

    // 3. Create UseCases
    let upsert_games_usecase = Arc::new(UpsertGamesUseCase::new(table.clone()));
    let delete_games_usecase = Arc::new(DeleteGamesUseCase::new(table.clone()));
    let list_games_usecase = Arc::new(ListGamesUseCase::new(table.clone()));
    let get_game_servers_usecase = Arc::new(GetGameServersUseCase::new(table.clone()));
    let refresh_game_usecase = Arc::new(
        RefreshGameUseCase::new(table.clone(), proxies, adapters)
            .with_busy_policy(config.busy_policy),
    );
    let activity_log = Arc::new(ActivityLog::new(config.log_capacity, clock));

    if config.password.is_empty() {
        tracing::warn!("No password configured, API authentication is disabled");
    }

    // 4. Create and run the server
    let server = Server::new(
        upsert_games_usecase,
        delete_games_usecase,
        list_games_usecase,
        get_game_servers_usecase,
        refresh_game_usecase,
        activity_log,
        config.password,
    );
    if let Err(e) = server.run(config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
