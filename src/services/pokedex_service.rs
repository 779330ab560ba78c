use std::collections::{BTreeMap, HashMap};

use rand::Rng;
use tracing::{debug, info};

use crate::api::pokeapi::PokeApi;
use crate::error::{PokedexError, Result};
use crate::models::location::{LocationArea, LocationAreaPage};
use crate::models::pokemon::Pokemon;

/// Result of a single throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    Caught,
    Escaped,
}

/// Links of the page `map`/`mapb` last displayed.
#[derive(Debug, Default, Clone)]
struct PageCursor {
    next: Option<String>,
    previous: Option<String>,
}

pub struct PokedexService {
    api: PokeApi,
    cursor: Option<PageCursor>,
    caught: BTreeMap<String, Pokemon>,
    /// What the player typed (e.g. an id) mapped to the canonical name.
    aliases: HashMap<String, String>,
}

impl PokedexService {
    pub fn new(api: PokeApi) -> Self {
        Self {
            api,
            cursor: None,
            caught: BTreeMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Next page of location areas. Past the last page this starts over.
    pub async fn next_locations(&mut self) -> Result<LocationAreaPage> {
        let next = self.cursor.as_ref().and_then(|c| c.next.clone());
        if next.is_none() && self.cursor.is_some() {
            info!("Reached the last location area page, wrapping around");
        }
        let page = self.api.location_area_page(next.as_deref()).await?;
        self.remember(&page);
        Ok(page)
    }

    pub async fn previous_locations(&mut self) -> Result<LocationAreaPage> {
        let previous = self
            .cursor
            .as_ref()
            .and_then(|c| c.previous.clone())
            .ok_or(PokedexError::NoPreviousPage)?;
        let page = self.api.location_area_page(Some(previous.as_str())).await?;
        self.remember(&page);
        Ok(page)
    }

    fn remember(&mut self, page: &LocationAreaPage) {
        debug!(next = ?page.next, previous = ?page.previous, "Location cursor moved");
        self.cursor = Some(PageCursor {
            next: page.next.clone(),
            previous: page.previous.clone(),
        });
    }

    pub async fn explore(&self, area: &str) -> Result<LocationArea> {
        if area.is_empty() {
            return Err(PokedexError::Usage(
                "Area unspecified. Usage: explore <area name or id>",
            ));
        }
        self.api.location_area(area).await
    }

    /// Fetches `name` and throws one ball at it.
    pub async fn catch(&mut self, name: &str) -> Result<(Pokemon, CatchOutcome)> {
        if name.is_empty() {
            return Err(PokedexError::Usage(
                "Pokemon unspecified. Usage: catch <pokemon name or id>",
            ));
        }
        let pokemon = self.api.pokemon(name).await?;
        let throw = rand::thread_rng().gen_range(0.0..100.0);
        let outcome = self.resolve_throw(name, &pokemon, throw);
        Ok((pokemon, outcome))
    }

    /// Decides a throw in `[0, 100)` against the Pokemon's catch chance.
    ///
    /// A catch is recorded under the canonical name and under `requested`,
    /// so `inspect` accepts whichever the player used.
    pub fn resolve_throw(
        &mut self,
        requested: &str,
        pokemon: &Pokemon,
        throw: f32,
    ) -> CatchOutcome {
        let chance = pokemon.catch_chance();
        debug!(name = %pokemon.name, chance, throw, "Resolving throw");
        if throw <= chance {
            self.aliases.insert(requested.to_lowercase(), pokemon.name.clone());
            self.caught.insert(pokemon.name.clone(), pokemon.clone());
            CatchOutcome::Caught
        } else {
            CatchOutcome::Escaped
        }
    }

    pub fn inspect(&self, name: &str) -> Result<Option<&Pokemon>> {
        if name.is_empty() {
            return Err(PokedexError::Usage(
                "No pokemon specified. Usage: inspect <pokemon name or id>",
            ));
        }
        let name = name.to_lowercase();
        let canonical = self.aliases.get(&name).unwrap_or(&name);
        Ok(self.caught.get(canonical))
    }

    /// Names of every caught Pokemon, alphabetically.
    pub fn caught_names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }
}
