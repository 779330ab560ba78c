//! Shell commands and line dispatch.

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::services::pokedex_service::PokedexService;
use crate::utils::display::DisplayFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Catch,
    Exit,
    Explore,
    Help,
    Inspect,
    Map,
    MapBack,
    Pokedex,
}

/// Whether the shell keeps reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl Command {
    /// Sorted by name, which is also the order `help` prints them in.
    pub const ALL: [Command; 8] = [
        Command::Catch,
        Command::Exit,
        Command::Explore,
        Command::Help,
        Command::Inspect,
        Command::Map,
        Command::MapBack,
        Command::Pokedex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Catch => "catch",
            Command::Exit => "exit",
            Command::Explore => "explore",
            Command::Help => "help",
            Command::Inspect => "inspect",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Catch => "Attempt to catch the named Pokemon",
            Command::Exit => "Exits the program",
            Command::Explore => "Lists the Pokemon encountered in a location area",
            Command::Help => "Displays a help message",
            Command::Inspect => "Displays information about a caught Pokemon",
            Command::Map => "Displays the next 20 location areas",
            Command::MapBack => "Displays the previous 20 location areas",
            Command::Pokedex => "Lists every Pokemon caught so far",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Splits a line into its command word and the first argument, if any.
pub fn split_line(line: &str) -> (&str, &str) {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("");
    let arg = words.next().unwrap_or("");
    (command, arg)
}

pub fn help_text() -> String {
    let mut text = String::from("Usage:\n\n");
    for command in Command::ALL {
        text.push_str(&format!("{}: {}\n", command.name(), command.description()));
    }
    text
}

/// Runs one input line against the service, writing output to `out`.
///
/// Command failures are returned to the caller, which reports them and keeps going.
pub async fn dispatch<W: Write>(
    service: &mut PokedexService,
    display: &DisplayFormatter,
    line: &str,
    out: &mut W,
) -> Result<Flow> {
    let (name, arg) = split_line(line);
    if name.is_empty() {
        return Ok(Flow::Continue);
    }

    let Some(command) = Command::from_name(name) else {
        writeln!(out, "Invalid command: {}", name)?;
        return Ok(Flow::Continue);
    };
    debug!(command = command.name(), arg, "Dispatching command");

    match command {
        Command::Exit => {
            writeln!(out, "Exiting...")?;
            return Ok(Flow::Exit);
        }
        Command::Help => writeln!(out, "{}", help_text())?,
        Command::Map => {
            let page = service.next_locations().await?;
            writeln!(out, "{}", display.format_locations(&page))?;
        }
        Command::MapBack => {
            let page = service.previous_locations().await?;
            writeln!(out, "{}", display.format_locations(&page))?;
        }
        Command::Explore => {
            let area = service.explore(arg).await?;
            writeln!(out, "{}", display.format_area(&area))?;
        }
        Command::Catch => {
            let (pokemon, outcome) = service.catch(arg).await?;
            writeln!(out, "{}", display.format_throw(&pokemon.name))?;
            writeln!(out, "{}", display.format_catch(&pokemon.name, outcome))?;
        }
        Command::Inspect => match service.inspect(arg)? {
            Some(pokemon) => writeln!(out, "{}", display.format_pokemon(pokemon))?,
            None => writeln!(out, "You have not caught that Pokemon")?,
        },
        Command::Pokedex => {
            writeln!(out, "Your Pokedex:")?;
            for name in service.caught_names() {
                writeln!(out, "  - {}", name)?;
            }
        }
    }

    Ok(Flow::Continue)
}
