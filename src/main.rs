use anyhow::Context;
use clap::{Parser, Subcommand};
use petstore::client::HttpPetClient;
use petstore::config::Config;
use petstore::inventory::Inventory;
use petstore::logging::{init_tracing, Fallback};
use petstore::pet::{format_price, Pet};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "petstore", version, about = "Terminal client for a pet store inventory API")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Full-screen inventory UI (default)
    Tui,
    /// Fetch the inventory and print one pet per line
    List {
        /// Only print pets matching this text
        #[arg(long, short)]
        search: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);

    init_tracing(match command {
        Command::Tui => Fallback::Silent,
        Command::List { .. } => Fallback::Stderr,
    });

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }
    tracing::info!(base_url = %config.api.base_url, "Configuration loaded");

    let client = HttpPetClient::new(&config.api)?;

    match command {
        Command::Tui => petstore::ui::run(&config.ui, client).context("terminal UI failed"),
        Command::List { search } => list(client, search.as_deref()),
    }
}

fn list(client: HttpPetClient, search: Option<&str>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut inventory = Inventory::new(client);
    runtime.block_on(inventory.fetch_all())?;
    if let Some(search) = search {
        inventory.set_filter_text(search);
    }

    let mut stdout = std::io::stdout().lock();
    for pet in inventory.visible() {
        writeln!(stdout, "{}", pet_row(pet))?;
    }
    Ok(())
}

/// Tab-separated: id, name, species, breed, gender, price, description.
fn pet_row(pet: &Pet) -> String {
    [
        pet.id.to_string(),
        pet.name.clone(),
        pet.species.clone(),
        pet.breed.clone(),
        pet.gender.clone(),
        format_price(pet.price),
        pet.description.clone(),
    ]
    .join("\t")
}
