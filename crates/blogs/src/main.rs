use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod api;
mod auth;
mod error;
mod prelude;
mod stats;
mod store;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Blog list REST service with author statistics"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// SQLite database file
    #[clap(long, env = "BLOGS_DATABASE", global = true, default_value = "blogs.db")]
    database: PathBuf,

    /// Whether to display additional information.
    #[clap(long, env = "BLOGS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the blog list REST API
    Serve(crate::api::ServeOptions),

    /// Print likes and author statistics for the stored blogs
    Stats(crate::stats::StatsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::api::run(options, app.global).await,
        SubCommands::Stats(options) => crate::stats::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
