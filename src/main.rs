mod cli;
mod config;
mod service;
mod sync;
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { local } => service::init::initialize(local).await,
        Commands::Add {
            text,
            category,
            local,
            global,
        } => service::add::add(&text, &category, local, global).await,
        Commands::Show {
            category,
            last,
            local,
            global,
        } => service::show::show(category.as_deref(), last, local, global).await,
        Commands::List {
            category,
            local,
            global,
        } => service::list::list(category.as_deref(), local, global).await,
        Commands::Categories { local, global } => {
            service::categories::categories(local, global).await
        }
        Commands::Import {
            file,
            local,
            global,
        } => service::import::import(&file, local, global).await,
        Commands::Export {
            output,
            local,
            global,
        } => service::export::export(&output, local, global).await,
        Commands::Sync {
            watch,
            push,
            interval,
            local,
            global,
        } => service::sync::sync(watch, push, interval, local, global).await,
    }
}
