//! Libris CLI - Command-line interface for the book catalog

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use libris_core::lookup::DEFAULT_BASE_URL;
use libris_core::{Catalog, LookupClient, DEFAULT_CATALOG_FILE};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "libris")]
#[command(author, version, about = "Manage a personal book catalog", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog file
    #[arg(long, global = true, env = "LIBRIS_CATALOG", default_value = DEFAULT_CATALOG_FILE)]
    catalog: PathBuf,

    /// Base URL of the Open Library compatible lookup service
    #[arg(long, global = true, env = "LIBRIS_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book by entering its details manually
    Add {
        /// Book title
        #[arg(short, long)]
        title: String,

        /// Book author
        #[arg(short, long)]
        author: String,

        /// Book ISBN
        #[arg(short, long)]
        isbn: String,
    },

    /// Add a book by looking up its ISBN online
    Lookup {
        /// ISBN to look up
        isbn: String,
    },

    /// Remove a book by ISBN
    Remove {
        /// ISBN of the book to remove
        isbn: String,
    },

    /// Find a book by ISBN
    Find {
        /// ISBN to search for
        isbn: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all books
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the interactive menu
    Menu,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the defaults
    let default_filter = if cli.verbose { "libris=debug" } else { "warn" };

    // Logs go to stderr so they never interleave with menu output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut catalog = Catalog::open(&cli.catalog);

    match cli.command {
        Commands::Add {
            title,
            author,
            isbn,
        } => commands::add(&mut catalog, &title, &author, &isbn),

        Commands::Lookup { isbn } => {
            let lookup = LookupClient::open_library(&cli.api_url)?;
            commands::lookup(&mut catalog, &lookup, &isbn).await
        }

        Commands::Remove { isbn } => commands::remove(&mut catalog, &isbn),

        Commands::Find { isbn, json } => commands::find(&catalog, &isbn, json),

        Commands::List { json } => commands::list(&catalog, json),

        Commands::Menu => {
            let lookup = LookupClient::open_library(&cli.api_url)?;
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            commands::menu(&mut catalog, &lookup, &mut input, &mut output).await
        }
    }
}
