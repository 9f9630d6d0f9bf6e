mod game_table;

pub use game_table::InMemoryGameTable;
