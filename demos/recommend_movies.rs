//! Ranked-neighbor walkthrough over a ten-movie corpus.
//!
//! Run with: cargo run --example recommend_movies

use sugerir::prelude::*;

fn movie_corpus() -> Corpus {
    Corpus::from_pairs([
        (
            "Interstellar",
            "Sci-Fi Space Exploration Future Survival Time Travel",
        ),
        ("The Martian", "Sci-Fi Space Exploration Mars Survival NASA"),
        ("Arrival", "Sci-Fi Alien Contact Linguistics Mysterious"),
        (
            "The Dark Knight",
            "Action Crime Thriller Superhero Gotham Dark",
        ),
        ("Inception", "Sci-Fi Thriller Dreams Subconscious Heist"),
        ("Pulp Fiction", "Crime Drama Dark Comedy Non-Linear Story"),
        ("La La Land", "Musical Drama Romance Hollywood Jazz"),
        (
            "The Grand Budapest Hotel",
            "Comedy Adventure Drama Whimsical Europe",
        ),
        ("The Avengers", "Action Superhero Team Alien Invasion Marvel"),
        ("Avatar", "Sci-Fi Fantasy Alien World Adventure Visuals"),
    ])
}

fn print_recommendations(ranker: &mut ContentRanker, title: &str, top_n: usize) -> Result<()> {
    let tags = ranker
        .corpus()
        .index_of(title)
        .and_then(|idx| ranker.corpus().get(idx))
        .map(|item| item.tags.clone())
        .unwrap_or_default();

    let ranked = ranker.rank(title, top_n)?;

    println!("--- Recommendations for: {title} ---");
    println!("Based on tags: {tags}\n");
    for (position, r) in ranked.iter().enumerate() {
        println!("{}. {} (similarity: {:.3})", position + 1, r.title, r.score);
    }
    println!("{}", "-".repeat(40));

    Ok(())
}

fn main() -> Result<()> {
    let corpus = movie_corpus();
    println!("Content-Based Movie Recommender");
    println!("{}", "=".repeat(60));
    let titles: Vec<&str> = corpus.titles().collect();
    println!("Available movies: {}", titles.join(", "));
    println!("{}", "=".repeat(60));

    let mut ranker = ContentRanker::from_corpus(corpus);

    print_recommendations(&mut ranker, "Interstellar", 5)?;
    print_recommendations(&mut ranker, "The Dark Knight", 3)?;
    print_recommendations(&mut ranker, "La La Land", 4)?;
    print_recommendations(&mut ranker, "Inception", 5)?;

    Ok(())
}
