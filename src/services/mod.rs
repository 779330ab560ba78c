pub mod pokedex_service;
