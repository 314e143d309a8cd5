use clap::{Parser, Subcommand};
use comic_shelf::{config, output, segment, store};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "comic-shelf")]
#[command(about = "Personal comic library manager")]
#[command(long_about = "\
Personal comic library manager

Your filesystem is the database. Importing a scanned page slices it into a
grid of panels (whitespace margins trimmed first), stores the panels and a
cover thumbnail, and records the metadata as a JSON document.

Library structure:

  comics/
  ├── config.toml                  # Library config (optional)
  ├── 20260805T101530123Z/         # One directory per comic, id = import instant
  │   ├── comic.json               # Title, rating, favorite flag, timestamps
  │   ├── cover.jpg                # Copy of the first (top-left) panel
  │   ├── panel-000.jpg            # Panels in row-major order
  │   └── panel-001.jpg
  └── 20260807T183002847Z/
      └── ...

Pages are cut into a rows x columns grid (default 3x2) after trimming the
white scan margins at the top and bottom of the page. Grid shape, whiteness
thresholds and output format live in config.toml.

Run 'comic-shelf gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Library directory
    #[arg(long, default_value = "comics", global = true)]
    library: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import a scanned page, slicing it into panels
    Import {
        /// Page image file (JPEG, PNG or WebP)
        page: PathBuf,

        /// Comic title (defaults to the file name)
        #[arg(long)]
        title: Option<String>,

        /// Publication date, free-form (e.g. "1986-09")
        #[arg(long)]
        publish_date: Option<String>,

        /// Import even if this page is already in the library
        #[arg(long)]
        force: bool,
    },
    /// List the library, newest first
    List,
    /// List favorited comics
    Favorites,
    /// Show one comic with its panel artifacts
    Show {
        /// Comic id (see 'list')
        id: String,
    },
    /// Mark a comic as favorite
    Favorite { id: String },
    /// Clear the favorite flag
    Unfavorite { id: String },
    /// Rate a comic 1-5 stars
    Rate { id: String, rating: u8 },
    /// Change a comic's title
    Rename { id: String, title: String },
    /// Delete a comic and all its artifacts
    Remove { id: String },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Import {
            page,
            title,
            publish_date,
            force,
        } => {
            let config = config::load_config(&cli.library)?;
            init_thread_pool(&config.processing);

            let bytes = std::fs::read(&page)?;
            let segment_config = config.segment_config();
            let result = segment::segment(&bytes, &segment_config)?;

            let library = store::Library::open(&cli.library)?;
            let comic = library.import(
                store::NewComic {
                    title: title.unwrap_or_else(|| default_title(&page)),
                    publish_date,
                },
                &bytes,
                &result,
                segment_config.format.extension(),
                force,
            )?;
            output::print_import(&comic);
        }
        Command::List => {
            let library = store::Library::open(&cli.library)?;
            output::print_list(&library.list()?);
        }
        Command::Favorites => {
            let library = store::Library::open(&cli.library)?;
            output::print_list(&library.favorites()?);
        }
        Command::Show { id } => {
            let library = store::Library::open(&cli.library)?;
            output::print_show(&library.get(&id)?);
        }
        Command::Favorite { id } => {
            let library = store::Library::open(&cli.library)?;
            let comic = library.set_favorite(&id, true)?;
            println!("Favorited {}", comic.title);
        }
        Command::Unfavorite { id } => {
            let library = store::Library::open(&cli.library)?;
            let comic = library.set_favorite(&id, false)?;
            println!("Unfavorited {}", comic.title);
        }
        Command::Rate { id, rating } => {
            let library = store::Library::open(&cli.library)?;
            let comic = library.set_rating(&id, rating)?;
            println!("Rated {} {}/5", comic.title, comic.rating);
        }
        Command::Rename { id, title } => {
            let library = store::Library::open(&cli.library)?;
            let comic = library.set_title(&id, &title)?;
            println!("Renamed {id} to {}", comic.title);
        }
        Command::Remove { id } => {
            let library = store::Library::open(&cli.library)?;
            library.remove(&id)?;
            println!("Removed {id}");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}

/// Default comic title from the page file name: stem with dashes and
/// underscores as spaces.
fn default_title(page: &Path) -> String {
    page.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_else(|| "Untitled".to_string())
}
