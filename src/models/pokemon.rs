use serde::Deserialize;

use super::location::NamedResource;

#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    /// Percent chance of a throw succeeding. Heavier hitters are harder to catch.
    pub fn catch_chance(&self) -> f32 {
        let xp = self.base_experience.unwrap_or(1).max(1) as f32;
        2000.0 * 100.0 / (xp * xp) + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_xp(base_experience: Option<u32>) -> Pokemon {
        Pokemon {
            name: "pikachu".to_string(),
            base_experience,
            height: 4,
            weight: 60,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_catch_chance_falls_with_experience() {
        let weak = with_xp(Some(50)).catch_chance();
        let strong = with_xp(Some(300)).catch_chance();
        assert!(weak > strong);
        assert!((strong - (200_000.0 / 90_000.0 + 1.0)).abs() < 1e-4);
    }

    #[test]
    fn test_catch_chance_handles_missing_experience() {
        assert!(with_xp(None).catch_chance() >= 100.0);
        assert!(with_xp(Some(0)).catch_chance() >= 100.0);
    }

    #[test]
    fn test_type_field_is_renamed() {
        let json = r#"{
            "name": "bulbasaur",
            "base_experience": 64,
            "height": 7,
            "weight": 69,
            "stats": [{"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": "u"}}],
            "types": [{"slot": 1, "type": {"name": "grass", "url": "u"}}]
        }"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.types[0].kind.name, "grass");
        assert_eq!(pokemon.stats[0].base_stat, 45);
    }
}
