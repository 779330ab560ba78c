use serde::Deserialize;

/// A `{ name, url }` reference as PokeAPI returns it everywhere.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the `location-area` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_decodes_null_links() {
        let json = r#"{
            "count": 2,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;
        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 2);
        assert!(page.previous.is_none());
        assert_eq!(page.results[1].name, "eterna-city-area");
    }

    #[test]
    fn test_area_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "u"}, "version_details": []}
            ]
        }"#;
        let area: LocationArea = serde_json::from_str(json).unwrap();
        assert_eq!(area.pokemon_encounters[0].pokemon.name, "tentacool");
    }
}
