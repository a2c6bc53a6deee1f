//! Resultweb main entry point

use anyhow::Context;
use clap::Parser;
use resultweb_config::Config;
use resultweb_core::{render_results_page, ResultList};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resultweb")]
#[command(version = "0.1.0")]
#[command(about = "Render exercise results as an HTML page", long_about = None)]
struct Args {
    /// Configuration file path (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exercise result JSON files or directories of them
    #[arg(required = true)]
    results: Vec<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path).map_err(|e| {
            let details = e.to_details().to_string();
            anyhow::Error::new(e).context(details)
        }),
        None => Ok(Config::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level))
        .init();

    let mut list = ResultList::new();
    for path in &args.results {
        let added = list
            .load_path(path)
            .with_context(|| format!("Failed to load results from {}", path.display()))?;
        log::info!("Loaded {} results from {}", added, path.display());
    }

    if list.is_empty() {
        log::warn!("No exercise results found");
    }

    let page = render_results_page(&list, &config);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(page.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
