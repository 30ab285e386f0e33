use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use keycat::check::{DocumentKind, DocumentReport, check_document};
use keycat::config_ext::ConfigExt;
use keycat::render::{category_line, shortcut_details, shortcut_lines};
use keycat::{
    Catalog, Config, ConfigManager, DEFAULT_LOG_LEVEL, Difficulty, Frequency, LOG_ENV_VAR,
    TracingSink, VERSION, global, install_global,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "keycat", version = VERSION)]
#[command(about = "Browse and practice keyboard shortcuts")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "KEYCAT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List shortcuts, optionally filtered by level
    List {
        #[arg(long)]
        difficulty: Option<Difficulty>,

        #[arg(long)]
        frequency: Option<Frequency>,
    },
    /// List categories in display order
    Categories,
    /// Show a single shortcut
    Show { id: String },
    /// Show a category and its shortcuts
    Category { id: String },
    /// Search names, descriptions and tags
    Search { query: String },
    /// List shortcuts carrying a tag
    Tag { tag: String },
    /// List every tag
    Tags,
    /// Draw random shortcuts for practice
    Random {
        /// Number of shortcuts, defaults to the configured practice count
        count: Option<i64>,

        #[arg(long)]
        category: Option<String>,
    },
    /// Print catalog statistics as JSON
    Stats,
    /// Check catalog documents record by record
    Validate {
        shortcuts: PathBuf,
        categories: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    let config = config_manager.load()?;

    // Initialize the logger
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
            EnvFilter::new(config.log_level().unwrap_or(DEFAULT_LOG_LEVEL))
        }))
        .init();
    debug!(path = ?config_manager.config_path(), "Config loaded");

    if !matches!(cli.command, Commands::Validate { .. }) {
        load_catalog(&config)?;
    }
    run(cli.command, &config)
}

fn load_catalog(config: &Config) -> Result<()> {
    let source = config.catalog_source();
    info!(?source, "Loading catalog");
    let catalog = Catalog::load_or_unavailable(&source, Arc::new(TracingSink));
    if !catalog.is_available() {
        warn!("Catalog could not be loaded, queries will return nothing");
    }
    if install_global(catalog).is_err() {
        bail!("Catalog was already initialized");
    }
    Ok(())
}

fn run(command: Commands, config: &Config) -> Result<ExitCode> {
    match command {
        Commands::List {
            difficulty,
            frequency,
        } => {
            let shortcuts = global().all_shortcuts().iter().filter(|s| {
                difficulty.is_none_or(|d| s.difficulty == d)
                    && frequency.is_none_or(|f| s.frequency == f)
            });
            println!("{}", shortcut_lines(shortcuts));
        }
        Commands::Categories => {
            for category in global().categories_in_display_order() {
                let count = global().shortcuts_by_category(&category.id).len();
                println!("{}", category_line(category, count));
            }
        }
        Commands::Show { id } => {
            let shortcut = global()
                .shortcut_by_id(&id)
                .with_context(|| format!("No shortcut with id {id:?}"))?;
            print!("{}", shortcut_details(shortcut));
        }
        Commands::Category { id } => {
            let found = global()
                .category_with_shortcuts(&id)
                .with_context(|| format!("No category with id {id:?}"))?;
            println!("{}: {}", found.category.name, found.category.description);
            println!("{}", shortcut_lines(found.shortcuts));
        }
        Commands::Search { query } => {
            println!("{}", shortcut_lines(global().search_shortcuts(&query)));
        }
        Commands::Tag { tag } => {
            println!("{}", shortcut_lines(global().shortcuts_by_tag(&tag)));
        }
        Commands::Tags => {
            for tag in global().all_tags() {
                println!("{tag}");
            }
        }
        Commands::Random { count, category } => {
            let count = count.unwrap_or_else(|| i64::from(config.practice_count));
            let drawn = global().random_shortcuts(count, category.as_deref());
            println!("{}", shortcut_lines(drawn));
        }
        Commands::Stats => {
            let stats = serde_json::to_string_pretty(&global().statistics())
                .context("Failed to serialize statistics")?;
            println!("{stats}");
        }
        Commands::Validate {
            shortcuts,
            categories,
        } => return validate(&shortcuts, categories.as_deref()),
    }

    Ok(ExitCode::SUCCESS)
}

fn validate(shortcuts: &Path, categories: Option<&Path>) -> Result<ExitCode> {
    let mut reports = vec![(shortcuts, check_document(shortcuts, DocumentKind::Shortcuts)?)];
    if let Some(categories) = categories {
        reports.push((
            categories,
            check_document(categories, DocumentKind::Categories)?,
        ));
    }

    let mut clean = true;
    for (path, report) in &reports {
        print_report(path, report);
        clean &= report.is_valid();
    }

    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_report(path: &Path, report: &DocumentReport) {
    let invalid: Vec<_> = report.invalid().collect();
    println!(
        "{}: {} of {} records valid",
        path.display(),
        report.records.len() - invalid.len(),
        report.records.len()
    );
    for record in invalid {
        println!(
            "  record {} ({}) is invalid",
            record.index,
            record.id.as_deref().unwrap_or("no id")
        );
    }
}
