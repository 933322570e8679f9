use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quote")]
#[command(about = "Quote manager with categories and server sync", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Initialize quote configuration (optional, auto-init on first use)")]
    Init {
        /// Initialize in local directory (./.quote) instead of global (~/.quote)
        #[arg(short, long)]
        local: bool,
    },

    #[command(about = "Add a new quote to the collection")]
    Add {
        /// Quote text
        text: String,

        /// Category for the quote (e.g., "Motivation")
        #[arg(short, long)]
        category: String,

        /// Use local store (./.quote)
        #[arg(short, long)]
        local: bool,

        /// Use global store (~/.quote)
        #[arg(short, long)]
        global: bool,
    },

    #[command(about = "Show a random quote")]
    Show {
        /// Restrict the pick to one category ("all" for no filtering)
        #[arg(short, long)]
        category: Option<String>,

        /// Show the quote last displayed in this session instead of a random one
        #[arg(long)]
        last: bool,

        /// Use local store (./.quote)
        #[arg(short, long)]
        local: bool,

        /// Use global store (~/.quote)
        #[arg(short, long)]
        global: bool,
    },

    #[command(about = "List quotes, optionally filtered by category")]
    List {
        /// Category filter ("all" lists everything); remembered for the next run
        #[arg(short, long)]
        category: Option<String>,

        /// Use local store (./.quote)
        #[arg(short, long)]
        local: bool,

        /// Use global store (~/.quote)
        #[arg(short, long)]
        global: bool,
    },

    #[command(about = "List all known categories")]
    Categories {
        /// Use local store (./.quote)
        #[arg(short, long)]
        local: bool,

        /// Use global store (~/.quote)
        #[arg(short, long)]
        global: bool,
    },

    #[command(about = "Import quotes from a JSON file")]
    Import {
        /// Path to a JSON array of {text, category} records
        file: PathBuf,

        /// Use local store (./.quote)
        #[arg(short, long)]
        local: bool,

        /// Use global store (~/.quote)
        #[arg(short, long)]
        global: bool,
    },

    #[command(about = "Export all quotes to a JSON file")]
    Export {
        /// Output path
        #[arg(default_value = "quotes.json")]
        output: PathBuf,

        /// Use local store (./.quote)
        #[arg(short, long)]
        local: bool,

        /// Use global store (~/.quote)
        #[arg(short, long)]
        global: bool,
    },

    #[command(about = "Reconcile the local collection with the sync server")]
    Sync {
        /// Keep running, syncing on a fixed interval
        #[arg(short, long)]
        watch: bool,

        /// Also push local quotes to the server
        #[arg(short, long)]
        push: bool,

        /// Seconds between sync cycles in watch mode (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Use local store (./.quote)
        #[arg(short, long)]
        local: bool,

        /// Use global store (~/.quote)
        #[arg(short, long)]
        global: bool,
    },
}
