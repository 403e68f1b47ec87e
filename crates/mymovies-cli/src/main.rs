//! mymovies - browse TMDB movies and manage favorites from the terminal.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::{AppConfig, resolve_config_path};
use mymovies_api::tmdb::{HttpTransport, LocalMovieApi, Movie, MovieClient};
use mymovies_api::worker::MovieDetailsWorker;
use mymovies_db::{FavoritesStore, resolve_db_path};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config/data directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Query a single movie.
    Movie(MovieCommand),
    /// Discover movies, optionally by genre.
    Discover(DiscoverArgs),
    /// Search movies by title.
    Search(SearchArgs),
    /// Manage favorite movies.
    Favorites(FavoritesCommand),
    /// Manage configuration.
    Config(ConfigCommand),
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieCommand {
    /// Movie subcommand to run.
    #[command(subcommand)]
    command: MovieSubcommands,
}

/// Available movie subcommands.
#[derive(Subcommand)]
enum MovieSubcommands {
    /// Show details, trailer and recommendations (details screen).
    Show(MovieIdArgs),
    /// Get movie details.
    Details(MovieIdArgs),
    /// Get movies recommended for a movie.
    Recommendations(RecommendationsArgs),
    /// List all videos of a movie.
    Videos(MovieIdArgs),
    /// Show the movie's YouTube trailer.
    Trailer(MovieIdArgs),
}

/// Arguments selecting one movie.
#[derive(clap::Args)]
struct MovieIdArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `movie recommendations` subcommand.
#[derive(clap::Args)]
struct RecommendationsArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,
    /// Result page.
    #[arg(long)]
    page: Option<u32>,
}

/// Arguments for the `discover` subcommand.
#[derive(clap::Args)]
struct DiscoverArgs {
    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Genre ID filter (e.g. 28 for Action).
    #[arg(long)]
    genre: Option<u32>,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (forwarded as-is, may be empty).
    #[arg(long, required = true)]
    query: String,
}

/// Arguments for the `favorites` subcommand.
#[derive(clap::Args)]
struct FavoritesCommand {
    /// Favorites subcommand to run.
    #[command(subcommand)]
    command: FavoritesSubcommands,
}

/// Available favorites subcommands.
#[derive(Subcommand)]
enum FavoritesSubcommands {
    /// Add (or update) a favorite.
    Add(FavoriteAddArgs),
    /// Remove a favorite.
    Remove(MovieIdArgs),
    /// List favorites.
    List,
    /// Check whether a movie is a favorite.
    Contains(MovieIdArgs),
}

/// Arguments for the `favorites add` subcommand.
#[derive(clap::Args)]
struct FavoriteAddArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,
    /// Movie title.
    #[arg(long, required = true)]
    title: String,
    /// Poster image path (e.g. "/poster.jpg").
    #[arg(long)]
    poster: Option<String>,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show the current configuration.
    Show,
    /// Update configuration values.
    Set(ConfigSetArgs),
}

/// Arguments for the `config set` subcommand.
#[derive(clap::Args)]
struct ConfigSetArgs {
    /// Response language (e.g. "en-US").
    #[arg(long)]
    language: Option<String>,
    /// TMDB API base URL (e.g. "https://api.themoviedb.org/3").
    #[arg(long)]
    base_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

/// Builds a `MovieClient` from config and the `TMDB_API_TOKEN` environment variable.
///
/// # Errors
///
/// Returns an error if `TMDB_API_TOKEN` is not set, the config is invalid,
/// or the transport fails to build.
#[instrument(skip_all)]
fn build_movie_client(dir: Option<&PathBuf>) -> Result<MovieClient<HttpTransport>> {
    let api_token = std::env::var("TMDB_API_TOKEN")
        .context("TMDB_API_TOKEN environment variable is required")?;

    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    let mut builder = HttpTransport::builder().api_token(api_token).user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(language) = config.tmdb.language {
        builder = builder.language(language);
    }
    if let Some(ref base_url) = config.tmdb.base_url {
        let url = Url::parse(base_url).with_context(|| format!("invalid base_url: {base_url}"))?;
        builder = builder.base_url(url);
    }
    if let Some(secs) = config.tmdb.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    let transport = builder.build().context("failed to build TMDB transport")?;
    Ok(MovieClient::new(transport))
}

/// Logs one movie as a table row.
fn log_movie_row(movie: &Movie) {
    tracing::info!(
        "{}\t{}\t{}",
        movie
            .id
            .map_or_else(|| String::from("-"), |id| id.to_string()),
        movie.title.as_deref().unwrap_or("-"),
        movie.release_date.as_deref().unwrap_or("-"),
    );
}

/// Logs a movie list with a header and total.
fn log_movie_list(movies: &[Movie]) {
    tracing::info!("ID\tTitle\tReleaseDate");
    for movie in movies {
        log_movie_row(movie);
    }
    tracing::info!("Total: {} movies", movies.len());
}

/// Logs the detail fields of a movie.
fn log_movie_details(movie: &Movie) {
    tracing::info!(
        "ID: {}",
        movie
            .id
            .map_or_else(|| String::from("-"), |id| id.to_string())
    );
    tracing::info!("Title: {}", movie.title.as_deref().unwrap_or("-"));
    tracing::info!(
        "Original Title: {}",
        movie.original_title.as_deref().unwrap_or("-")
    );
    tracing::info!(
        "Release Date: {}",
        movie.release_date.as_deref().unwrap_or("-")
    );
    if let Some(ref genres) = movie.genres {
        let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
        tracing::info!("Genres: {}", names.join(", "));
    }
    if let Some(vote) = movie.vote_average {
        tracing::info!("Vote Average: {vote:.1}");
    }
    tracing::info!("Poster: {}", movie.poster_path.as_deref().unwrap_or("-"));
    tracing::info!("Overview: {}", movie.overview.as_deref().unwrap_or("-"));
}

/// Runs the `movie show` subcommand.
///
/// Details failing ends the command; trailer and recommendation
/// failures are reported and skipped.
///
/// # Errors
///
/// Returns an error if the client fails to build or the details request fails.
#[instrument(skip_all)]
async fn run_movie_show(args: &MovieIdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let worker = MovieDetailsWorker::new(build_movie_client(dir)?);

    let (details, trailer, recommendations) = tokio::join!(
        worker.fetch_details(args.id),
        worker.fetch_trailer(args.id),
        worker.fetch_recommendations(args.id),
    );

    let movie = details.context("TMDB movie details request failed")?;
    log_movie_details(&movie);

    match trailer {
        Ok(video) => tracing::info!(
            "Trailer: {} (https://www.youtube.com/watch?v={})",
            video.name,
            video.key
        ),
        Err(e) => tracing::warn!(title = e.title(), terminal = e.is_terminal(), "{}", e.message()),
    }

    match recommendations {
        Ok(movies) => {
            tracing::info!("--- Recommendations");
            log_movie_list(&movies);
        }
        Err(e) => tracing::warn!(title = e.title(), terminal = e.is_terminal(), "{}", e.message()),
    }

    Ok(())
}

/// Runs the `movie details` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movie_details(args: &MovieIdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_movie_client(dir)?;

    let movie = client
        .movie_details(args.id)
        .await
        .context("TMDB movie details request failed")?;

    log_movie_details(&movie);
    Ok(())
}

/// Runs the `movie recommendations` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movie_recommendations(
    args: &RecommendationsArgs,
    dir: Option<&PathBuf>,
) -> Result<()> {
    let client = build_movie_client(dir)?;

    let movies = client
        .movie_recommendations(args.id, args.page)
        .await
        .context("TMDB movie recommendations request failed")?;

    log_movie_list(&movies);
    Ok(())
}

/// Runs the `movie videos` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movie_videos(args: &MovieIdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_movie_client(dir)?;

    let videos = client
        .movie_videos(args.id)
        .await
        .context("TMDB movie videos request failed")?;

    tracing::info!("Key\t\tSite\tType\tName");
    for video in &videos {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            video.key,
            video.site,
            video.kind,
            video.name
        );
    }
    tracing::info!("Total: {} videos", videos.len());
    Ok(())
}

/// Runs the `movie trailer` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build, the request fails,
/// or the movie has no `YouTube` trailer.
#[instrument(skip_all)]
async fn run_movie_trailer(args: &MovieIdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let worker = MovieDetailsWorker::new(build_movie_client(dir)?);

    let video = worker
        .fetch_trailer(args.id)
        .await
        .context("failed to fetch trailer")?;

    tracing::info!("{}: https://www.youtube.com/watch?v={}", video.name, video.key);
    Ok(())
}

/// Runs the `discover` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_discover(args: &DiscoverArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_movie_client(dir)?;

    let movies = client
        .discover_movies(args.page, args.genre)
        .await
        .context("TMDB discover/movie request failed")?;

    log_movie_list(&movies);
    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_movie_client(dir)?;

    let movies = client
        .search_movies(&args.query)
        .await
        .context("TMDB search/movie request failed")?;

    log_movie_list(&movies);
    Ok(())
}

/// Runs the `favorites` subcommands.
///
/// # Errors
///
/// Returns an error if the favorites store is unavailable.
#[instrument(skip_all)]
fn run_favorites(command: &FavoritesSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let store = FavoritesStore::open(dir).context("favorites store is unavailable")?;

    match command {
        FavoritesSubcommands::Add(args) => {
            store
                .add(args.id, &args.title, args.poster.as_deref())
                .context("failed to add favorite")?;
            tracing::info!("Added {} ({})", args.title, args.id);
        }
        FavoritesSubcommands::Remove(args) => {
            if store.remove(args.id).context("failed to remove favorite")? {
                tracing::info!("Removed {}", args.id);
            } else {
                tracing::info!("{} is not a favorite", args.id);
            }
        }
        FavoritesSubcommands::List => {
            if store.is_empty().context("failed to read favorites")? {
                tracing::info!("No favorites yet. Add one with `favorites add`.");
                return Ok(());
            }
            let movies = store.list().context("failed to read favorites")?;
            tracing::info!("ID\tTitle\tPoster");
            for movie in &movies {
                tracing::info!(
                    "{}\t{}\t{}",
                    movie
                        .id
                        .map_or_else(|| String::from("-"), |id| id.to_string()),
                    movie.title.as_deref().unwrap_or("-"),
                    movie.poster_path.as_deref().unwrap_or("-"),
                );
            }
            tracing::info!("Total: {} favorites", movies.len());
        }
        FavoritesSubcommands::Contains(args) => {
            let found = store
                .contains(args.id)
                .context("failed to read favorites")?;
            tracing::info!("{}: {}", args.id, if found { "yes" } else { "no" });
        }
    }

    Ok(())
}

/// Runs the `config` subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
#[instrument(skip_all)]
fn run_config(command: &ConfigSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let mut config = AppConfig::load(&config_path).context("failed to load config")?;

    match command {
        ConfigSubcommands::Show => {
            let db_path = resolve_db_path(dir).context("failed to resolve database path")?;
            tracing::info!("Config: {}", config_path.display());
            tracing::info!("Database: {}", db_path.display());
            tracing::info!(
                "language = {}",
                config.tmdb.language.as_deref().unwrap_or("-")
            );
            tracing::info!(
                "base_url = {}",
                config.tmdb.base_url.as_deref().unwrap_or("-")
            );
            tracing::info!(
                "timeout_secs = {}",
                config
                    .tmdb
                    .timeout_secs
                    .map_or_else(|| String::from("-"), |s| s.to_string())
            );
        }
        ConfigSubcommands::Set(args) => {
            if let Some(ref language) = args.language {
                config.tmdb.language = Some(language.clone());
            }
            if let Some(ref base_url) = args.base_url {
                Url::parse(base_url).with_context(|| format!("invalid base_url: {base_url}"))?;
                config.tmdb.base_url = Some(base_url.clone());
            }
            if let Some(secs) = args.timeout_secs {
                config.tmdb.timeout_secs = Some(secs);
            }
            config.save(&config_path).context("failed to save config")?;
            tracing::info!("Saved {}", config_path.display());
        }
    }

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Movie(movie) => match movie.command {
            MovieSubcommands::Show(args) => run_movie_show(&args, dir).await,
            MovieSubcommands::Details(args) => run_movie_details(&args, dir).await,
            MovieSubcommands::Recommendations(args) => run_movie_recommendations(&args, dir).await,
            MovieSubcommands::Videos(args) => run_movie_videos(&args, dir).await,
            MovieSubcommands::Trailer(args) => run_movie_trailer(&args, dir).await,
        },
        Commands::Discover(args) => run_discover(&args, dir).await,
        Commands::Search(args) => run_search(&args, dir).await,
        Commands::Favorites(favorites) => run_favorites(&favorites.command, dir),
        Commands::Config(config) => run_config(&config.command, dir),
    }
}
