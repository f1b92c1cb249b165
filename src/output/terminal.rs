// Colored terminal output for recommendation lists and detail cards.
//
// This module handles all terminal-specific formatting: colors, tables,
// detail cards. The main.rs command handlers delegate here.

use colored::Colorize;

use crate::output::truncate_chars;
use crate::pipeline::enrich::EnrichedRecommendation;
use crate::profile::Profile;
use crate::ranking::Recommendation;

/// Display a ranked recommendation list in the terminal.
pub fn display_recommendations(query_title: &str, recommendations: &[Recommendation]) {
    println!(
        "\n{}",
        format!("=== Because you liked {query_title} ===").bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<44} {:>6}  {}",
        "Rank".dimmed(),
        "Title".dimmed(),
        "Score".dimmed(),
        "Genres".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "  {:>4}. {:<44} {:>6.3}  {}",
            i + 1,
            truncate_chars(&rec.title, 42),
            rec.score,
            rec.genres.dimmed(),
        );
    }

    println!();
}

/// Display recommendations with their metadata detail cards and
/// streaming availability.
pub fn display_enriched(query_title: &str, enriched: &[EnrichedRecommendation]) {
    println!(
        "\n{}",
        format!("=== Because you liked {query_title} ===").bold()
    );

    for (i, entry) in enriched.iter().enumerate() {
        let rec = &entry.recommendation;
        println!(
            "\n{}",
            format!("{}. {} ({})", i + 1, rec.title, rec.genres).bold()
        );
        println!("   Hybrid score: {:.3}", rec.score);

        match &entry.details {
            Some(details) => {
                if let Some(rating) = details.vote_average {
                    println!("   TMDb rating: {rating:.1}/10");
                }
                if let Some(overview) = &details.overview {
                    println!("   {}", truncate_chars(overview, 200).dimmed());
                }
                if let Some(poster) = &details.poster_url {
                    println!("   Poster: {}", poster.dimmed());
                }
                if let Some(trailer) = &details.trailer_url {
                    println!("   Trailer: {trailer}");
                }
                println!("   Info: {}", details.info_url);
            }
            None => {
                println!("   {}", "Details unavailable.".yellow());
            }
        }

        if entry.providers.is_empty() {
            println!("   {}", "Streaming availability not found.".yellow());
        } else {
            println!(
                "   {} {}",
                "Available on:".green(),
                entry.providers.join(", ")
            );
        }
    }

    println!();
}

/// Display the liked-movies profile.
pub fn display_profile(profile: &Profile) {
    if profile.liked.is_empty() {
        println!("No liked movies yet. Run `marquee like \"<title>\"` to add one.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Liked movies ({}) ===", profile.liked.len()).bold()
    );
    for liked in &profile.liked {
        println!(
            "  {}  {}",
            liked.liked_at.format("%Y-%m-%d").to_string().dimmed(),
            liked.title
        );
    }
    println!();
}
