pub mod pokedex_app;
pub mod pokemon_details;
pub mod pokemon_list;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use pokedex_app::{PokedexApp, PokedexAppProps};
pub use pokemon_details::{PokemonDetails, PokemonDetailsProps};
pub use pokemon_list::{PokemonList, PokemonListProps};

/// Placeholder shown for every failed query
pub const ERROR_TEXT: &str = "something went wrong";
pub const LOADING_TEXT: &str = "loading...";
