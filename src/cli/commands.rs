use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feedstash")]
#[command(about = "Fetch RSS feeds, normalize the items, stash a JSON snapshot")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and parse a feed from a URL
    Fetch {
        /// Feed URL to fetch
        url: String,

        /// Print at most this many items
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print items as JSON instead of plain text
        #[arg(long)]
        json: bool,

        /// Don't overwrite the snapshot with the fetched feed
        #[arg(long)]
        no_save: bool,

        /// Print parsing progress messages
        #[arg(short, long)]
        verbose: bool,
    },

    /// Parse a feed from a local RSS XML file
    File {
        /// Path to an RSS XML file
        path: String,

        /// Print at most this many items
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print items as JSON instead of plain text
        #[arg(long)]
        json: bool,

        /// Print parsing progress messages
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show items from the stashed snapshot
    Cached {
        /// Print at most this many items
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print items as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}
