use std::fs;
use std::sync::Arc;

use clap::Parser;

use feedstash::cli::{Cli, Commands};
use feedstash::config::Config;
use feedstash::domain::Feed;
use feedstash::messages::{ConsoleSink, MessageSink, NoopSink};
use feedstash::sources::{FeedSource, UrlSource, XmlSource};
use feedstash::storage::SnapshotStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env();
    let store = SnapshotStore::new(&config.snapshot_path);

    match cli.command {
        Commands::Fetch {
            url,
            limit,
            json,
            no_save,
            verbose,
        } => cmd_fetch(&url, limit, json, no_save, verbose, &store),
        Commands::File {
            path,
            limit,
            json,
            verbose,
        } => cmd_file(&path, limit, json, verbose),
        Commands::Cached { limit, json } => cmd_cached(limit, json, &store),
    }
}

fn sink_for(verbose: bool) -> Arc<dyn MessageSink> {
    if verbose {
        Arc::new(ConsoleSink)
    } else {
        Arc::new(NoopSink)
    }
}

fn cmd_fetch(
    url: &str,
    limit: Option<usize>,
    json: bool,
    no_save: bool,
    verbose: bool,
    store: &SnapshotStore,
) -> anyhow::Result<()> {
    let feed = UrlSource::new(url).with_sink(sink_for(verbose)).parse()?;

    print_feed(&feed, limit, json)?;

    if !no_save {
        store.save(&feed)?;
        println!("Stashed {} items.", feed.len());
    }

    Ok(())
}

fn cmd_file(path: &str, limit: Option<usize>, json: bool, verbose: bool) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)?;
    let feed = XmlSource::new(raw).with_sink(sink_for(verbose)).parse()?;

    print_feed(&feed, limit, json)
}

fn cmd_cached(limit: Option<usize>, json: bool, store: &SnapshotStore) -> anyhow::Result<()> {
    let feed = store.load()?;
    print_feed(&feed, limit, json)
}

fn print_feed(feed: &Feed, limit: Option<usize>, json: bool) -> anyhow::Result<()> {
    let count = limit.unwrap_or(feed.len()).min(feed.len());
    let items = &feed.items[..count];

    if json {
        let selected = Feed::new(items.to_vec());
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No items.");
        return Ok(());
    }

    for item in items {
        println!("{}", item.title);
        println!("  Published: {}", item.published.to_rfc2822());
        println!("  Link: {}", item.link);
        if let Some(image) = &item.image_url {
            println!("  Image: {}", image);
        }
        if let Some(source) = &item.source {
            println!("  Source: {}", source);
        }
        if let Some(description) = &item.description {
            println!("  {}", description);
        }
        println!();
    }

    Ok(())
}
