use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{id::TrackId, stats::CatalogStats, track::Track};
use crate::query::{self, TrackQuery};
use crate::storage;

#[derive(Parser)]
#[command(name = "labellift")]
#[command(version = "0.1")]
#[command(about = "Music distribution dashboard backend")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run http server hosting the track catalog
    Serve,
    /// List tracks, optionally filtered
    List {
        /// Case-insensitive text matched against title, artist and genre
        #[arg(short, long)]
        search: Option<String>,
        /// Status to keep ("draft", "under review", "published" or "all")
        #[arg(long)]
        status: Option<String>,
        /// Genre to keep, or "all"
        #[arg(short, long)]
        genre: Option<String>,
    },
    /// Show every field of one track
    Show {
        id: String,
    },
    /// Print dashboard statistics
    Stats,
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let cfg = Config::load(&cli.config)?;
    let store = storage::open(&cfg.store).with_context(|| "Failed to initialize track store")?;

    match cli.command {
        Commands::Serve => {
            println!("Starting HTTP server...");

            let http_server = crate::http::server::HttpServer::new(store, cfg.http);

            println!(
                "HTTP server running at http://{}:{}",
                http_server.config.bind_addr, http_server.config.port
            );
            http_server.run();
        }

        Commands::List {
            search,
            status,
            genre,
        } => {
            let tracks = store.list()?;
            let filtered = query::filter(&tracks, &TrackQuery::new(search, status, genre));

            println!("Showing {} of {} tracks", filtered.len(), tracks.len());
            for track in &filtered {
                println!("{}", summary_line(track));
            }
        }

        Commands::Show { id } => {
            let track = store
                .get(&TrackId::new(id))
                .with_context(|| "Failed to look up track")?;
            print_details(&track);
        }

        Commands::Stats => {
            let stats = CatalogStats::from_tracks(&store.list()?);
            println!("Total tracks:     {}", stats.total_tracks);
            println!("Published tracks: {}", stats.published_tracks);
            println!("Total plays:      {}", stats.total_plays);
            println!("Total revenue:    ${:.2}", stats.total_revenue);
        }
    }

    Ok(())
}

fn summary_line(track: &Track) -> String {
    format!(
        "  [{}] {} - {} ({}, {}) {}",
        track.id,
        track.title,
        track.artist_name,
        track.genre,
        track.release_date,
        track.status.label()
    )
}

fn print_details(track: &Track) {
    println!("Track {}: {}", track.id, track.title);
    println!("  Artist:   {}", track.artist_name);
    println!("  Genre:    {}", track.genre);
    println!("  Released: {}", track.release_date);
    println!("  Status:   {}", track.status.label());
    println!("  Duration: {}", track.duration);
    println!("  Plays:    {}", track.plays);
    println!("  Revenue:  ${:.2}", track.revenue);

    let file_info = [
        ("Uploaded", &track.upload_date),
        ("File size", &track.file_size),
        ("Format", &track.format),
        ("Bitrate", &track.bitrate),
    ];
    for (label, value) in file_info {
        if let Some(value) = value {
            println!("  {label}: {value}");
        }
    }

    if let Some(description) = &track.description {
        println!("  Description:\n    {description}");
    }
    if let Some(lyrics) = &track.lyrics {
        println!("  Lyrics:");
        for line in lyrics.lines() {
            println!("    {line}");
        }
    }
    if !track.distributed_to.is_empty() {
        println!("  Distributed to: {}", track.distributed_to.join(", "));
    }
    for (platform, handle) in &track.social_links {
        println!("  {platform}: {handle}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::sample_tracks;

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "labellift",
            "list",
            "--search",
            "pop",
            "--status",
            "published",
        ])
        .unwrap();

        match cli.command {
            Commands::List {
                search,
                status,
                genre,
            } => {
                assert_eq!(search.as_deref(), Some("pop"));
                assert_eq!(status.as_deref(), Some("published"));
                assert_eq!(genre, None);
            }
            _ => panic!("expected list command"),
        }
        assert_eq!(cli.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn test_parse_show_with_config() {
        let cli = Cli::try_parse_from(["labellift", "-c", "/etc/labellift.toml", "show", "3"])
            .unwrap();

        assert_eq!(cli.config, PathBuf::from("/etc/labellift.toml"));
        assert!(matches!(cli.command, Commands::Show { id } if id == "3"));
    }

    #[test]
    fn test_show_requires_id() {
        assert!(Cli::try_parse_from(["labellift", "show"]).is_err());
    }

    #[test]
    fn test_summary_line() {
        let track = &sample_tracks()[3];
        assert_eq!(
            summary_line(track),
            "  [4] Bass Drop - DJ Thunder (EDM, 2024-08-30) Draft"
        );
    }
}
