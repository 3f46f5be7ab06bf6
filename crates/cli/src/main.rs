use anyhow::Result;
use catalog::{Catalog, Movie, MovieId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use query::{MovieService, SearchQuery};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;

/// Movie catalog query tool
#[derive(Parser)]
#[command(name = "movies")]
#[command(about = "Query the in-memory movie catalog", long_about = None)]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(short, long, default_value = "data/movies.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie in the catalog
    List,

    /// Show one movie by id
    Get {
        /// Movie id to look up
        #[arg(long)]
        id: MovieId,
    },

    /// Search movies by any combination of name, id, and genre
    Search {
        /// Title substring (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Exact movie id
        #[arg(long)]
        id: Option<MovieId>,

        /// Genre substring (case-insensitive)
        #[arg(long)]
        genre: Option<String>,
    },

    /// List the distinct genres in the catalog
    Genres,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // A failed load degrades to an empty catalog: the tool keeps serving,
    // every query just answers empty or not-found.
    let catalog = match Catalog::load_from_file(&cli.catalog) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(
                "failed to load catalog from {}: {}",
                cli.catalog.display(),
                err
            );
            Catalog::empty()
        }
    };
    let service = MovieService::new(Arc::new(catalog));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List => handle_list(&service),
        Commands::Get { id } => handle_get(&service, id),
        Commands::Search { name, id, genre } => handle_search(&service, name, id, genre),
        Commands::Genres => handle_genres(&service),
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(service: &MovieService) {
    let movies = service.all_movies();
    println!(
        "{}",
        format!("{} movies in catalog", movies.len()).bold().blue()
    );
    for movie in movies {
        print_movie(movie);
    }
}

/// Handle the 'get' command
fn handle_get(service: &MovieService, id: MovieId) {
    match service.movie_by_id(id) {
        Some(movie) => {
            print_movie(movie);
            println!("   {}", movie.description);
        }
        None => println!("{}", format!("No movie with id {}", id).yellow()),
    }
}

/// Handle the 'search' command
fn handle_search(
    service: &MovieService,
    name: Option<String>,
    id: Option<MovieId>,
    genre: Option<String>,
) {
    let query = SearchQuery { name, id, genre };
    let results = service.search(&query);

    if results.is_empty() {
        println!("{}", "No movies matched the search".yellow());
        return;
    }

    println!(
        "{}",
        format!("{} movies matched", results.len()).bold().blue()
    );
    for movie in results {
        print_movie(movie);
    }
}

/// Handle the 'genres' command
fn handle_genres(service: &MovieService) {
    for genre in service.genres() {
        println!("{}{}", "• ".green(), genre);
    }
}

/// Print one movie as a single result line
fn print_movie(movie: &Movie) {
    println!(
        "{}: {} ({}) [{}] dir. {} - {:.1}/10, {} min",
        movie.id.to_string().green(),
        movie.title,
        movie.year,
        movie.genre,
        movie.director,
        movie.rating,
        movie.duration_minutes
    );
}
