pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used items
pub use api::pokeapi::PokeApi;
pub use error::{PokedexError, Result};
pub use models::cache::Cache;
pub use services::pokedex_service::PokedexService;
