use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;

use marquee::config::Config;
use marquee::dataset::Dataset;
use marquee::metadata::availability::WatchClient;
use marquee::metadata::tmdb::TmdbClient;
use marquee::profile::Profile;
use marquee::ranking::HybridRanker;

/// Marquee: hybrid movie recommendations for MovieLens-style datasets.
///
/// Blends who-rated-what co-rating patterns with genre overlap to rank
/// titles similar to one you already like, then optionally decorates the
/// results with TMDb metadata and streaming availability.
#[derive(Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List dataset titles
    Titles {
        /// Only show titles containing this text (case-insensitive)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Recommend movies similar to a title you liked
    Recommend {
        /// The exact dataset title, e.g. "Toy Story (1995)"
        title: String,

        /// Number of recommendations
        #[arg(long, default_value = "5")]
        top_n: usize,

        /// Also fetch TMDb details and streaming availability per result
        #[arg(long)]
        details: bool,

        /// Region code for availability lookups (default from WATCH_REGION)
        #[arg(long)]
        region: Option<String>,
    },

    /// Add a movie to your liked list
    Like {
        /// The exact dataset title to like
        title: String,
    },

    /// Show your liked movies
    Profile,

    /// Show dataset and matrix statistics
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("marquee=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Titles { filter } => {
            let config = Config::load()?;
            let dataset = Dataset::load(&config.data_dir)?;

            let needle = filter.as_deref().map(str::to_lowercase);
            let mut shown = 0usize;
            for title in dataset.titles() {
                if let Some(needle) = &needle {
                    if !title.to_lowercase().contains(needle.as_str()) {
                        continue;
                    }
                }
                println!("{title}");
                shown += 1;
            }

            if shown == 0 {
                println!("No titles matched.");
            } else {
                eprintln!("{}", format!("{shown} titles").dimmed());
            }
        }

        Commands::Recommend {
            title,
            top_n,
            details,
            region,
        } => {
            let config = Config::load()?;
            let dataset = Dataset::load(&config.data_dir)?;

            println!(
                "Building similarity matrices from {} movies and {} ratings...",
                dataset.movies.len(),
                dataset.ratings.len()
            );
            let ranker = HybridRanker::build(&dataset);

            let top_n = top_n.max(1);
            let recommendations = ranker.recommend(&title, top_n)?;

            if recommendations.is_empty() {
                println!("No recommendations for \"{title}\" — title not in the dataset.");
                println!(
                    "{}",
                    "Run `marquee titles --filter <text>` to find the exact title.".dimmed()
                );
                return Ok(());
            }

            if details {
                config.require_tmdb()?;

                let metadata = TmdbClient::new(&config.tmdb_api_url, config.tmdb_api_key.clone())?;
                let availability = WatchClient::new(&config.watch_api_url)?;
                let region = region.unwrap_or_else(|| config.watch_region.clone());

                let enriched = marquee::pipeline::enrich::run(
                    recommendations,
                    &metadata,
                    &availability,
                    &region,
                )
                .await;

                marquee::output::terminal::display_enriched(&title, &enriched);
            } else {
                marquee::output::terminal::display_recommendations(&title, &recommendations);
            }
        }

        Commands::Like { title } => {
            let config = Config::load()?;
            let dataset = Dataset::load(&config.data_dir)?;

            if dataset.genres_for(&title).is_none() {
                anyhow::bail!(
                    "\"{title}\" is not in the dataset.\n\
                     Run `marquee titles --filter <text>` to find the exact title."
                );
            }

            let mut profile = Profile::load(&config.profile_path)?;
            if profile.like(&title, Utc::now()) {
                profile.save(&config.profile_path)?;
                println!("Added {} to your liked movies.", title.bold());
            } else {
                println!("{} is already in your liked movies.", title.bold());
            }
        }

        Commands::Profile => {
            let config = Config::load()?;
            let profile = Profile::load(&config.profile_path)?;
            marquee::output::terminal::display_profile(&profile);
        }

        Commands::Status => {
            let config = Config::load()?;
            let dataset = Dataset::load(&config.data_dir)?;
            let ranker = HybridRanker::build(&dataset);
            let profile = Profile::load(&config.profile_path)?;

            let mut users: Vec<i64> = dataset.ratings.iter().map(|r| r.user_id).collect();
            users.sort_unstable();
            users.dedup();

            println!("Data directory: {}", config.data_dir.display());
            println!("Movies: {}", dataset.movies.len());
            println!("Ratings: {} from {} users", dataset.ratings.len(), users.len());
            println!(
                "Collaborative matrix: {n} x {n} (titles with at least one rating)",
                n = ranker.rated_title_count()
            );
            println!(
                "Content matrix: {m} x {m} (all movies)",
                m = ranker.movie_count()
            );
            println!("Liked movies: {}", profile.liked.len());
        }
    }

    Ok(())
}
