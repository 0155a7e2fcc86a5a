//! `cinema-eats`: browse movie food scenes from the terminal.

mod render;
mod repl;

use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, bail};
use cinema_eats_core::{
    catalog::Catalog,
    favorites::{FavoritesStorage, FavoritesStore, FileStorage, MemoryStorage},
    settings::ViewSettings,
    view::{
        Effect, Intent, RenderFrame, SuggestionPanel, ViewController, ViewMode,
        run_view_loop,
    },
};
use cinema_eats_model::{Facet, SceneId};
use clap::{Args, Parser, Subcommand};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use render::TerminalRenderer;
use repl::{
    Command as ReplCommand, HELP, facet_value, parse_line, parse_view_mode,
};

#[derive(Parser, Debug)]
#[command(name = "cinema-eats", version)]
#[command(about = "Browse iconic food scenes from the movies")]
struct Cli {
    /// Directory holding the favorites document
    #[arg(long, global = true, env = "CINEMA_EATS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Catalog JSON to use instead of the built-in one
    #[arg(long, global = true, env = "CINEMA_EATS_CATALOG")]
    catalog: Option<PathBuf>,

    /// Print frames as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List scenes, optionally filtered
    List(ListArgs),
    /// Search titles, descriptions, dishes, cuisines, directors and genres
    Search {
        query: String,
        /// Pages to show
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Toggle a scene in favorites
    Favorite { id: String },
    /// Show favorited scenes
    Favorites,
    /// Show curated collections, or the scenes of one
    Collections { id: Option<String> },
    /// Show how many scenes carry each filter value
    Facets,
    /// Interactive browser with live search
    Interactive,
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long)]
    genre: Vec<String>,
    #[arg(long)]
    cuisine: Vec<String>,
    /// Decade label such as 1990s
    #[arg(long)]
    decade: Vec<String>,
    /// breakfast, lunch, dinner or dessert
    #[arg(long)]
    meal: Vec<String>,
    /// Only scenes flagged as featured
    #[arg(long)]
    featured: bool,
    /// Pages to show
    #[arg(long, default_value_t = 1)]
    pages: usize,
    /// grid or list
    #[arg(long, default_value = "grid")]
    view: String,
}

impl ListArgs {
    fn intents(&self) -> anyhow::Result<Vec<Intent>> {
        let mut intents = Vec::new();
        for (facet, values) in [
            (Facet::Genre, &self.genre),
            (Facet::Cuisine, &self.cuisine),
            (Facet::Decade, &self.decade),
            (Facet::Meal, &self.meal),
        ] {
            for raw in values {
                intents.push(Intent::FilterToggled {
                    facet,
                    value: facet_value(facet, raw)
                        .with_context(|| format!("invalid --{facet} value"))?,
                    selected: true,
                });
            }
        }

        let view_mode = parse_view_mode(&self.view)?;
        if view_mode != ViewMode::default() {
            intents.push(Intent::SetViewMode(view_mode));
        }
        intents.extend((1..self.pages).map(|_| Intent::LoadMore));
        Ok(intents)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let catalog = match &cli.catalog {
        Some(path) => Arc::new(
            Catalog::from_path(path).with_context(|| {
                format!("failed to load catalog {}", path.display())
            })?,
        ),
        None => Catalog::builtin(),
    };
    let favorites =
        FavoritesStore::load(favorites_storage(cli.data_dir.clone()));
    let mut view =
        ViewController::new(catalog, favorites, ViewSettings::default());

    let stdout = io::stdout();
    let mut renderer = TerminalRenderer::new(stdout.lock());

    match cli.command {
        Command::List(args) if args.featured => {
            let cards = view.featured_view();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                renderer.write_cards(&cards)?;
            }
        }

        Command::List(args) => {
            let mut frame = view.frame();
            for intent in args.intents()? {
                if let Some(next) = last_frame(view.update(intent)) {
                    frame = next;
                }
            }
            print_frame(&mut renderer, &frame, cli.json)?;
        }

        Command::Search { query, pages } => {
            let effects = view.update(Intent::QueryChanged(query));
            let Some(Effect::ScheduleSearch { ticket, .. }) = effects.first()
            else {
                bail!(
                    "search needs at least {} characters",
                    view.settings().min_query_len
                );
            };
            let effects = view.update(Intent::SearchDebounced(*ticket));
            for _ in 1..pages {
                view.update(Intent::LoadMore);
            }

            if !cli.json {
                for effect in &effects {
                    if let Effect::Suggestions(
                        panel @ SuggestionPanel::Results { .. },
                    ) = effect
                    {
                        renderer.write_panel(panel)?;
                        writeln!(io::stdout())?;
                    }
                }
            }
            print_frame(&mut renderer, &view.frame(), cli.json)?;
        }

        Command::Favorite { id } => {
            if !view.catalog().contains(&id) {
                warn!("{} is not in the catalog; storing it anyway", id);
            }
            let toggled = Intent::FavoriteToggled(SceneId::from(id));
            for effect in view.update(toggled) {
                if let Effect::FavoriteChanged(outcome) = effect {
                    renderer.write_outcome(&outcome)?;
                    if !outcome.persisted {
                        warn!("favorites could not be saved");
                    }
                }
            }
        }

        Command::Favorites => {
            let cards = view.favorites_view();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                println!("{} favorite(s)", view.favorites_count());
                renderer.write_cards(&cards)?;
            }
        }

        Command::Collections { id: None } => {
            for collection in view.catalog().collections() {
                println!(
                    "{:<24} {} ({} scenes)",
                    collection.id,
                    collection.title,
                    view.catalog().collection_scenes(&collection.id).len()
                );
            }
        }

        Command::Collections { id: Some(id) } => {
            let Some(collection) = view.catalog().collection(&id) else {
                bail!("no collection named {id}");
            };
            println!("{}\n{}\n", collection.title, collection.description);
            for scene in view.catalog().collection_scenes(&id) {
                println!(
                    "  {} ({}) [{}]",
                    scene.movie.title, scene.movie.year, scene.id
                );
            }
        }

        Command::Facets => {
            let counts = view.facet_counts();
            for &facet in Facet::all() {
                println!("{facet}");
                for (value, count) in counts.values(facet) {
                    println!("  {value:<24} {count}");
                }
            }
        }

        Command::Interactive => {
            drop(renderer);
            interactive(view).await?;
        }
    }

    Ok(())
}

fn favorites_storage(data_dir: Option<PathBuf>) -> Arc<dyn FavoritesStorage> {
    match data_dir
        .map(FileStorage::new)
        .or_else(FileStorage::in_default_location)
    {
        Some(storage) => {
            debug!("Favorites stored under {}", storage.root().display());
            Arc::new(storage)
        }
        None => {
            warn!("No data directory available; favorites will not be saved");
            Arc::new(MemoryStorage::default())
        }
    }
}

fn last_frame(effects: Vec<Effect>) -> Option<RenderFrame> {
    effects.into_iter().rev().find_map(|effect| match effect {
        Effect::Render(frame) => Some(frame),
        _ => None,
    })
}

fn print_frame<W: Write>(
    renderer: &mut TerminalRenderer<W>,
    frame: &RenderFrame,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(frame)?);
    } else {
        renderer.write_frame(frame)?;
    }
    Ok(())
}

async fn interactive(view: ViewController) -> anyhow::Result<()> {
    println!("{HELP}\n");

    let (intents, receiver) = mpsc::channel(32);
    let driver = tokio::spawn(run_view_loop(
        view,
        receiver,
        TerminalRenderer::new(io::stdout()),
    ));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) =
        lines.next_line().await.context("failed to read input")?
    {
        match parse_line(&line) {
            Ok(ReplCommand::Intent(intent)) => {
                if intents.send(intent).await.is_err() {
                    break;
                }
            }
            Ok(ReplCommand::Help) => println!("{HELP}"),
            Ok(ReplCommand::Quit) => break,
            Err(err) => eprintln!("{err}"),
        }
    }

    drop(intents);
    let (view, _) = driver.await.context("view loop panicked")?;
    debug!("Session ended with {} favorites", view.favorites_count());
    Ok(())
}
