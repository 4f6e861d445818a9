use std::path::PathBuf;

use clap::Parser;
use mortui::config::Config;
use mortui::trace::init_tracing;
use mortui::ui::runtime;

/// Terminal browser for the Rick and Morty character API.
#[derive(Debug, Parser)]
#[command(name = "mortui", version, about)]
struct Cli {
    /// Path to a config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Character id to show on startup.
    #[arg(long)]
    character: Option<u16>,

    /// Override the API base URL.
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, &cli);
    config.validate()?;

    runtime::run(config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(id) = cli.character {
        config.app.initial_character = id;
    }
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
}
