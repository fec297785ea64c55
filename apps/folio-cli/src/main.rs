//! folio - browse the portfolio galleries from a terminal
//!
//! Loads the same resources the site does, from a base URL or a built site
//! directory, and prints the filtered gallery.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use folio_core::{
    Catalog, Catalogued, CertificationGallery, CertificationKind, DirTransport, FolioConfig,
    Gallery, HttpTransport, Locale, ProjectGallery, Result, Transport,
};
use folio_tags::{CertificationTag, MatchMode, ProjectCategory, Selection, TechCategory};

/// Portfolio gallery browser
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Browse portfolio projects and certifications")]
#[command(version)]
struct Cli {
    /// Resource root: an http(s) base URL or a local site directory.
    /// Defaults to the configured base URL.
    #[arg(long, global = true)]
    source: Option<String>,

    /// Config file (default: <config dir>/folio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content locale (en, fr)
    #[arg(long, global = true)]
    lang: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List projects
    Projects {
        #[command(flatten)]
        filters: FilterArgs,

        /// Project category (repeatable)
        #[arg(long = "category")]
        categories: Vec<ProjectCategory>,

        /// Technology category (repeatable)
        #[arg(long = "tech")]
        tech: Vec<TechCategory>,

        /// Technology name, e.g. Angular (repeatable)
        #[arg(long = "uses")]
        uses: Vec<String>,
    },

    /// List certifications
    Certifications {
        #[command(flatten)]
        filters: FilterArgs,

        /// Certification tag (repeatable)
        #[arg(long = "category")]
        categories: Vec<CertificationTag>,

        /// standalone or skill-track
        #[arg(long)]
        kind: Option<CertificationKind>,
    },

    /// List the technologies projects can reference
    Technologies {
        #[arg(long)]
        json: bool,
    },

    /// Certification tags with the number of certifications carrying each
    Tags {
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by both galleries.
#[derive(Args, Debug)]
struct FilterArgs {
    /// Case-insensitive title search
    #[arg(short, long)]
    search: Option<String>,

    /// latest, oldest, title-asc, title-desc
    #[arg(long, default_value = "latest")]
    sort: String,

    /// Require every selected category instead of any
    #[arg(long)]
    match_all: bool,

    /// Print at most this many items
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print JSON instead of one line per item
    #[arg(long)]
    json: bool,
}

impl FilterArgs {
    fn apply<I: Catalogued>(&self, gallery: &mut Gallery<I>, categories: &[I::Category]) {
        if let Some(search) = &self.search {
            gallery.set_search(search);
        }
        if self.match_all {
            gallery.set_category_mode(MatchMode::All);
        }
        // Collecting first keeps a repeated flag from toggling itself off.
        let selected: Selection<I::Category> = categories.iter().copied().collect();
        for category in selected.iter() {
            gallery.toggle_category(category);
        }
        gallery.set_sort_str(&self.sort);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let locale = cli.lang.unwrap_or(config.default_locale);
    let source = cli.source.unwrap_or_else(|| config.base_url.clone());

    if is_url(&source) {
        let transport = HttpTransport::new(
            &source,
            Duration::from_secs(config.request_timeout_secs),
            &config.user_agent,
        )?;
        execute(Catalog::with_config(transport, &config), locale, cli.command).await
    } else {
        let transport = DirTransport::new(&source);
        execute(Catalog::with_config(transport, &config), locale, cli.command).await
    }
}

fn load_config(path: Option<&Path>) -> Result<FolioConfig> {
    let config = match path {
        Some(path) => FolioConfig::load(path)?,
        None => FolioConfig::load_or_default()?,
    };
    Ok(config)
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn execute<T: Transport>(catalog: Catalog<T>, locale: Locale, command: Commands) -> Result<()> {
    match command {
        Commands::Projects {
            filters,
            categories,
            tech,
            uses,
        } => {
            let projects = catalog.load_projects(locale).await;
            tracing::debug!("Loaded {} projects for {}", projects.len(), locale);

            let mut gallery = ProjectGallery::with_items(locale, projects);
            filters.apply(&mut gallery, &categories);
            let tech: Selection<TechCategory> = tech.into_iter().collect();
            for category in tech.iter() {
                gallery.toggle_metadata_category(category);
            }
            for name in &uses {
                if !gallery.is_metadata_name_selected(name) {
                    gallery.toggle_metadata_name(name);
                }
            }
            print_items(gallery.visible(), filters.limit, filters.json)
        }
        Commands::Certifications {
            filters,
            categories,
            kind,
        } => {
            let certifications = catalog.load_certifications(locale).await;
            tracing::debug!("Loaded {} certifications for {}", certifications.len(), locale);

            let mut gallery = CertificationGallery::with_items(locale, certifications);
            filters.apply(&mut gallery, &categories);
            gallery.set_kind(kind);
            print_items(gallery.visible(), filters.limit, filters.json)
        }
        Commands::Technologies { json } => {
            let technologies = catalog.technologies(locale).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&technologies)?);
            } else {
                for tech in &technologies {
                    println!("{:<20} {}", tech.name, tech.category);
                }
            }
            Ok(())
        }
        Commands::Tags { json } => {
            let counts = catalog.certification_tag_counts(locale).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                for (tag, count) in &counts {
                    println!("{:<20} {}", tag, count);
                }
            }
            Ok(())
        }
    }
}

fn print_items<I>(items: &[I], limit: Option<usize>, json: bool) -> Result<()>
where
    I: Catalogued + Serialize,
    I::Category: Display,
{
    let shown = &items[..limit.unwrap_or(items.len()).min(items.len())];
    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }
    for item in shown {
        println!("{}", item_line(item));
    }
    Ok(())
}

fn item_line<I>(item: &I) -> String
where
    I: Catalogued,
    I::Category: Display,
{
    let categories: Vec<String> = item.categories().iter().map(|c| c.to_string()).collect();
    format!("#{:<4} {}  [{}]", item.id(), item.title(), categories.join(", "))
}
