use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

use crate::models::location::{LocationArea, LocationAreaPage};
use crate::models::pokemon::Pokemon;
use crate::services::pokedex_service::CatchOutcome;

pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_header(&self, text: &str) -> String {
        format!("\n=== {} ===", text.bright_white().bold())
    }

    pub fn format_table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.add_row(Row::new(
            headers.iter().map(|h| Cell::new(h).style_spec("b")).collect(),
        ));
        for row in rows {
            table.add_row(Row::new(row.iter().map(|cell| Cell::new(cell)).collect()));
        }

        table.to_string()
    }

    pub fn format_locations(&self, page: &LocationAreaPage) -> String {
        page.results
            .iter()
            .map(|location| location.name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_area(&self, area: &LocationArea) -> String {
        let mut output = vec![format!("Exploring {}...", area.name), "Found Pokemon:".to_string()];
        for encounter in &area.pokemon_encounters {
            output.push(format!("  - {}", encounter.pokemon.name));
        }
        output.join("\n")
    }

    pub fn format_throw(&self, name: &str) -> String {
        format!("Throwing a Pokeball at {}...", name)
    }

    pub fn format_catch(&self, name: &str, outcome: CatchOutcome) -> String {
        match outcome {
            CatchOutcome::Caught => format!("{} was caught!", name).green().to_string(),
            CatchOutcome::Escaped => format!("{} escaped!", name).red().to_string(),
        }
    }

    pub fn format_pokemon(&self, pokemon: &Pokemon) -> String {
        let mut output = Vec::new();
        output.push(self.format_header(&pokemon.name));
        output.push(format!("Height: {}", pokemon.height));
        output.push(format!("Weight: {}", pokemon.weight));

        let rows: Vec<Vec<String>> = pokemon
            .stats
            .iter()
            .map(|s| vec![s.stat.name.clone(), s.base_stat.to_string()])
            .collect();
        output.push("Stats:".to_string());
        output.push(self.format_table(&["Stat", "Base"], &rows));

        output.push("Types:".to_string());
        for kind in &pokemon.types {
            output.push(format!("  - {}", kind.kind.name));
        }

        output.join("\n")
    }
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::new()
    }
}
