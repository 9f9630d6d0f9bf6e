//! HTTP API endpoint handlers.

mod http;

pub use http::{
    create_games, delete_games, game_servers, logs, ping, quit, read_games, refresh_games,
    update_games,
};
