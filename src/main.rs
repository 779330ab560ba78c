use clap::Parser;
use pokedex::cli::Cli;
use pokedex::commands::{self, Flow};
use pokedex::utils::display::DisplayFormatter;
use pokedex::{Cache, PokeApi, PokedexService};
use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level; logs go to stderr to keep the prompt clean
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cli.log_level)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting Pokedex");

    let cache = Arc::new(Cache::new(cli.cache_interval()));
    let api = PokeApi::with_base_url(cli.base_url.as_str(), Arc::clone(&cache));
    let mut service = PokedexService::new(api);
    let display = DisplayFormatter::new();

    println!("=== Pokedex ===");
    println!("Type 'help' to list commands.");

    let mut input = String::new();
    let mut stdout = io::stdout();
    loop {
        input.clear();
        print!("Pokedex > ");
        stdout.flush()?;
        if io::stdin().read_line(&mut input)? == 0 {
            debug!("Reached end of input");
            break;
        }

        match commands::dispatch(&mut service, &display, input.trim(), &mut stdout).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => {
                debug!("Command failed: {:?}", e);
                eprintln!("{}", e);
            }
        }
    }

    info!("Shutting down");
    cache.close().await;
    Ok(())
}
