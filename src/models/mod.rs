pub mod cache;
pub mod location;
pub mod pokemon;
