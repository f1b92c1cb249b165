// Unit tests for the hybrid ranker contract.
//
// Covers the query contract (no self, no duplicates, at most n, stable
// determinism), unknown-title handling, tie ordering, the short-list
// boundary, and the loud failure when the collaborative matrix cannot
// cover the content matrix's rows.

use marquee::dataset::{Dataset, Movie, Rating};
use marquee::error::RecommendError;
use marquee::ranking::HybridRanker;

fn movie(id: i64, title: &str, genres: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        genres: genres.to_string(),
    }
}

fn rating(user_id: i64, movie_id: i64, value: f64) -> Rating {
    Rating {
        user_id,
        movie_id,
        rating: value,
    }
}

/// Five fully-rated movies whose dataset order matches their sorted-title
/// order, so the collaborative and content matrices share one row order.
fn aligned_dataset() -> Dataset {
    Dataset {
        movies: vec![
            movie(1, "Alien Heat (1986)", "Action|Sci-Fi"),
            movie(2, "Beach Comedy (1990)", "Comedy"),
            movie(3, "Crime Spree (1995)", "Action|Crime"),
            movie(4, "Dream Drama (2001)", "Drama"),
            movie(5, "Epic Quest (2010)", "Action|Adventure"),
        ],
        ratings: vec![
            rating(1, 1, 5.0),
            rating(1, 3, 4.0),
            rating(1, 5, 4.5),
            rating(2, 1, 4.0),
            rating(2, 2, 2.0),
            rating(2, 4, 5.0),
            rating(3, 2, 3.0),
            rating(3, 3, 3.5),
            rating(3, 5, 4.0),
            rating(4, 1, 4.5),
            rating(4, 4, 1.0),
        ],
    }
}

// ============================================================
// Query contract
// ============================================================

#[test]
fn never_returns_query_title_or_duplicates() {
    let ranker = HybridRanker::build(&aligned_dataset());
    let recs = ranker.recommend("Alien Heat (1986)", 10).unwrap();

    assert!(recs.iter().all(|r| r.title != "Alien Heat (1986)"));

    let mut titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
    titles.sort_unstable();
    let before = titles.len();
    titles.dedup();
    assert_eq!(titles.len(), before, "Duplicate titles in output");
}

#[test]
fn returns_at_most_top_n() {
    let ranker = HybridRanker::build(&aligned_dataset());
    let recs = ranker.recommend("Alien Heat (1986)", 2).unwrap();
    assert_eq!(recs.len(), 2);
}

#[test]
fn top_n_larger_than_available_returns_all_without_padding() {
    let ranker = HybridRanker::build(&aligned_dataset());
    // 5 movies minus the query itself
    let recs = ranker.recommend("Alien Heat (1986)", 50).unwrap();
    assert_eq!(recs.len(), 4);
}

#[test]
fn identical_queries_are_deterministic() {
    let data = aligned_dataset();
    let ranker = HybridRanker::build(&data);

    let first = ranker.recommend("Crime Spree (1995)", 4).unwrap();
    let second = ranker.recommend("Crime Spree (1995)", 4).unwrap();
    assert_eq!(first, second);

    // A freshly built ranker over the same dataset agrees too
    let rebuilt = HybridRanker::build(&data);
    let third = rebuilt.recommend("Crime Spree (1995)", 4).unwrap();
    assert_eq!(first, third);
}

#[test]
fn unknown_title_returns_empty_not_error() {
    let ranker = HybridRanker::build(&aligned_dataset());
    let recs = ranker.recommend("Nonexistent (1900)", 5).unwrap();
    assert!(recs.is_empty());
}

#[test]
fn scores_are_sorted_descending() {
    let ranker = HybridRanker::build(&aligned_dataset());
    let recs = ranker.recommend("Alien Heat (1986)", 10).unwrap();
    for pair in recs.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "Scores out of order: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }
}

#[test]
fn recommendations_carry_dataset_genres() {
    let ranker = HybridRanker::build(&aligned_dataset());
    let recs = ranker.recommend("Beach Comedy (1990)", 10).unwrap();
    let crime = recs
        .iter()
        .find(|r| r.title == "Crime Spree (1995)")
        .expect("Crime Spree should be recommendable");
    assert_eq!(crime.genres, "Action|Crime");
}

// ============================================================
// Blending behavior
// ============================================================

#[test]
fn identical_rating_vectors_rank_first() {
    // Arcade and Brawler share an identical rating column, so their
    // collaborative similarity is 1. Chuckles shares neither raters nor
    // a full tag profile with Arcade.
    let data = Dataset {
        movies: vec![
            movie(1, "Arcade (1994)", "Action|Comedy"),
            movie(2, "Brawler (1994)", "Action"),
            movie(3, "Chuckles (1994)", "Comedy"),
        ],
        ratings: vec![
            rating(1, 1, 5.0),
            rating(1, 2, 5.0),
            rating(2, 1, 4.0),
            rating(2, 2, 4.0),
            rating(3, 3, 3.0),
        ],
    };

    let ranker = HybridRanker::build(&data);
    let recs = ranker.recommend("Arcade (1994)", 2).unwrap();

    assert_eq!(recs[0].title, "Brawler (1994)");
    // content 1/sqrt(2) averaged with collaborative 1.0
    let expected = (1.0 / 2.0_f64.sqrt() + 1.0) / 2.0;
    assert!(
        (recs[0].score - expected).abs() < 1e-9,
        "Expected ~{expected}, got {}",
        recs[0].score
    );

    assert_eq!(recs[1].title, "Chuckles (1994)");
    assert!(recs[0].score > recs[1].score);
}

#[test]
fn ties_keep_dataset_row_order() {
    // Both Brawler and Chuckles score exactly 0 against Duel: no shared
    // tags, no shared raters. The earlier dataset row must come first.
    let data = Dataset {
        movies: vec![
            movie(1, "Brawler (1994)", "Action"),
            movie(2, "Chuckles (1994)", "Comedy"),
            movie(3, "Duel (1994)", "Western"),
        ],
        ratings: vec![
            rating(1, 1, 5.0),
            rating(2, 2, 4.0),
            rating(3, 3, 3.0),
        ],
    };

    let ranker = HybridRanker::build(&data);
    let recs = ranker.recommend("Duel (1994)", 2).unwrap();

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].title, "Brawler (1994)");
    assert_eq!(recs[1].title, "Chuckles (1994)");
    assert_eq!(recs[0].score, recs[1].score);
}

// ============================================================
// Matrix-dimension mismatch
// ============================================================

#[test]
fn unrated_movie_makes_rated_queries_fail_loudly() {
    // "Zebra" has no ratings, so the collaborative matrix is 2x2 while
    // the content matrix is 3x3 — the positional pairing cannot cover
    // content row 2 and must say so instead of truncating.
    let data = Dataset {
        movies: vec![
            movie(1, "Arcade (1994)", "Action"),
            movie(2, "Brawler (1994)", "Action"),
            movie(3, "Zebra (1994)", "Documentary"),
        ],
        ratings: vec![
            rating(1, 1, 5.0),
            rating(1, 2, 4.0),
            rating(2, 1, 3.0),
            rating(2, 2, 2.0),
        ],
    };

    let ranker = HybridRanker::build(&data);
    let err = ranker.recommend("Arcade (1994)", 2).unwrap_err();
    assert!(
        matches!(err, RecommendError::IndexOutOfRange { index: 2, len: 2 }),
        "Unexpected error: {err:?}"
    );
}

#[test]
fn unrated_query_title_returns_empty() {
    // The unrated movie is absent from the collaborative index, so asking
    // about it is the unknown-title case: empty result, no error.
    let data = Dataset {
        movies: vec![
            movie(1, "Arcade (1994)", "Action"),
            movie(2, "Zebra (1994)", "Documentary"),
        ],
        ratings: vec![rating(1, 1, 5.0)],
    };

    let ranker = HybridRanker::build(&data);
    let recs = ranker.recommend("Zebra (1994)", 3).unwrap();
    assert!(recs.is_empty());
}
