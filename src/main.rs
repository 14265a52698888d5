//! bookmend CLI: catalog maintenance passes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;

use bookmend::audit;
use bookmend::catalog::BookCatalog;
use bookmend::config::MaintenanceConfig;
use bookmend::covers::restore::CoverRestorer;
use bookmend::covers::store::CoverStore;
use bookmend::covers::{placeholder, restore, validate};
use bookmend::describe;

#[derive(Parser)]
#[command(name = "bookmend", version, about = "Maintenance passes for a children's-book catalog")]
struct Cli {
    /// Catalog file (JSON array of book records).
    #[arg(long, global = true)]
    books: Option<PathBuf>,

    /// Directory holding cover image assets.
    #[arg(long, global = true)]
    covers_dir: Option<PathBuf>,

    /// TOML config file overriding the embedded defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill missing descriptions from the resolution chain.
    Describe,

    /// Replace generated catch-all descriptions with curated text.
    Retouch,

    /// Cover asset maintenance.
    Covers {
        #[command(subcommand)]
        action: CoverAction,
    },

    /// Check catalog records without modifying anything.
    Audit,
}

#[derive(Subcommand)]
enum CoverAction {
    /// Re-download covers for records lacking one.
    Restore,

    /// Delete known placeholder images and their record references.
    Prune,

    /// Validate every referenced cover image.
    Check {
        /// Remove cover references that fail validation.
        #[arg(long)]
        repair: bool,
    },
}

/// First 60 characters of a title, for progress lines.
fn short_title(title: &str) -> String {
    title.chars().take(60).collect()
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => MaintenanceConfig::from_file(path)?,
        None => MaintenanceConfig::default(),
    };
    if let Some(books) = cli.books {
        config.books_path = books;
    }
    if let Some(covers_dir) = cli.covers_dir {
        config.covers_dir = covers_dir;
    }

    let store = CoverStore::new(&config.covers_dir, &config.cover_prefix);

    match cli.command {
        Commands::Describe => {
            let mut catalog = BookCatalog::load(&config.books_path)?;
            let sources = describe::standard_chain(&config);

            let report =
                describe::run(&mut catalog, &config, &sources, |i, total, book, outcome| {
                    match outcome {
                        Some(resolved) => println!(
                            "[{i}/{total}] {}... ok ({})",
                            short_title(&book.title),
                            resolved.source
                        ),
                        None => println!("[{i}/{total}] {}... FAILED", short_title(&book.title)),
                    }
                });
            catalog.save()?;

            println!("\nUpdated {} of {} records", report.resolved, report.examined);
            for (source, count) in &report.by_source {
                println!("  {source}: {count}");
            }
            if report.unresolved > 0 {
                println!("{} records still need manual descriptions", report.unresolved);
            }
        }

        Commands::Retouch => {
            let mut catalog = BookCatalog::load(&config.books_path)?;
            let upgraded = describe::retouch(&mut catalog);
            catalog.save()?;

            for id in &upgraded {
                println!("upgraded record {id}");
            }
            println!("\nReplaced {} generic descriptions with curated text", upgraded.len());
        }

        Commands::Covers { action } => match action {
            CoverAction::Restore => {
                let mut catalog = BookCatalog::load(&config.books_path)?;
                let restorer = CoverRestorer::new(&config);

                let report =
                    restore::run(&mut catalog, &store, &config, &restorer, |book, source| {
                        match source {
                            Some(source) => {
                                println!("{}... ok ({source:?})", short_title(&book.title))
                            }
                            None => println!("{}... no cover found", short_title(&book.title)),
                        }
                    })?;
                catalog.save()?;

                println!(
                    "\nRestored {} covers ({} full-size, {} thumbnails), {} not found",
                    report.restored(),
                    report.via_cover_catalog,
                    report.via_thumbnail,
                    report.failed
                );
                if !report.skipped.is_empty() {
                    println!("Skipped excluded records: {}", report.skipped.join(", "));
                }
            }

            CoverAction::Prune => {
                let mut catalog = BookCatalog::load(&config.books_path)?;
                let pruned = placeholder::prune(&mut catalog, &store, &config)?;
                catalog.save()?;

                for id in &pruned {
                    println!("removed placeholder cover from record {id}");
                }
                println!("\nPruned {} placeholder covers", pruned.len());
            }

            CoverAction::Check { repair } => {
                let mut catalog = BookCatalog::load(&config.books_path)?;
                let report = validate::check(&mut catalog, &store, &config, repair);
                if repair {
                    catalog.save()?;
                }

                println!("GOOD COVERS ({}):", report.good.len());
                for line in &report.good {
                    println!("  #{}: {} - {}", line.id, line.title, line.verdict);
                }
                if !report.bad.is_empty() {
                    println!("\nBAD COVERS ({}):", report.bad.len());
                    for line in &report.bad {
                        println!("  #{}: {} - {}", line.id, line.title, line.verdict);
                    }
                }
                if !report.missing.is_empty() {
                    println!("\nMISSING ({}):", report.missing.len());
                    for (id, title) in &report.missing {
                        println!("  #{id}: {title} - no cover reference");
                    }
                }
                println!(
                    "\nSummary: {} good, {} bad, {} missing",
                    report.good.len(),
                    report.bad.len(),
                    report.missing.len()
                );
            }
        },

        Commands::Audit => {
            let catalog = BookCatalog::load(&config.books_path)?;
            let report = audit::run(&catalog);

            println!("Total records: {}\n", catalog.len());
            if report.errors.is_empty() {
                println!("No critical errors found");
            } else {
                println!("ERRORS ({}):", report.errors.len());
                for error in &report.errors {
                    println!("  - {error}");
                }
            }

            if report.warnings.is_empty() {
                println!("No warnings");
            } else {
                println!("\nWARNINGS ({}):", report.warnings.len());
                for warning in report.warnings.iter().take(20) {
                    println!("  - {warning}");
                }
                if report.warnings.len() > 20 {
                    println!("  ... and {} more warnings", report.warnings.len() - 20);
                }
            }

            if !report.tag_stats.is_empty() {
                println!("\nTag statistics:");
                for (tag, count) in &report.tag_stats {
                    println!("  {tag}: {count} records");
                }
            }

            if !report.is_clean() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
