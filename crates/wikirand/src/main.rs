use crate::prelude::*;
use clap::Parser;

mod cli;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Fetch random Wikipedia and Wikiquote articles"
)]
pub struct App {
    #[command(subcommand)]
    pub command: cli::Commands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Wiki language (de, en, es, fr, it, nl, pl, ru, ceb, sv, vi, war)
    #[clap(long, env = "WIKIRAND_LANGUAGE", global = true)]
    language: Option<String>,

    /// Wiki engine (encyclopedia, quotes)
    #[clap(long, env = "WIKIRAND_ENGINE", global = true)]
    engine: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "WIKIRAND_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    cli::run(app.command, app.global)
        .await
        .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
