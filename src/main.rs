use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use version_matrix::config::{self, AppConfig};
use version_matrix::matrix::{
    MatrixOptions, build_matrix, owner_table, owner_versions, render_json, render_table,
    render_text,
};
use version_matrix::store::{MemoryStore, ReleaseSource, SqliteStore};
use version_matrix::version::{SortDirection, resolve_latest};

#[derive(Parser)]
#[command(name = "version-matrix")]
#[command(version, about = "Release matrix of owners and naturally sorted versions")]
struct Cli {
    /// Path to the release database
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Path to the JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to the default log file when the config sets none
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import releases from a JSON array of {"owner", "version"} objects
    Import { file: PathBuf },

    /// Print the release matrix around a version or family
    Matrix {
        /// "major.minor" family or full version; defaults to the latest version
        selection: Option<String>,

        /// Versions shown on each side of the selected one
        #[arg(long)]
        halfwidth: Option<usize>,

        /// asc or desc
        #[arg(long)]
        direction: Option<SortDirection>,

        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// List the versions of one owner
    List {
        owner: String,

        #[arg(long, default_value = "desc")]
        direction: SortDirection,
    },

    /// List every owner (or one) with its versions
    Table {
        owner: Option<String>,

        #[arg(long, default_value = "asc")]
        direction: SortDirection,
    },

    /// Print the latest version across all owners
    Latest,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::config_path);
    let mut app_config = AppConfig::load(&config_path)?;
    if cli.log_file && app_config.log.file.is_none() {
        app_config.log.file = Some(config::log_path());
    }
    let _guard = version_matrix::logging::init(&app_config.log)?;

    let db_path = cli.db.unwrap_or_else(config::db_path);
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let store = SqliteStore::new(&db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;

    match cli.command {
        Command::Import { file } => {
            let reader = BufReader::new(
                File::open(&file).with_context(|| format!("failed to open {}", file.display()))?,
            );
            let imported = MemoryStore::from_reader(reader)?;
            for owner in imported.owners()? {
                store.add_releases(&owner, imported.versions_for_owner(&owner)?)?;
            }
            info!("Imported releases from {}", file.display());
        }
        Command::Matrix {
            selection,
            halfwidth,
            direction,
            json,
        } => {
            let options = MatrixOptions {
                halfwidth: halfwidth.unwrap_or(app_config.matrix.halfwidth),
                direction: direction.unwrap_or(app_config.matrix.direction),
            };
            let matrix = build_matrix(&store, selection.as_deref(), &options)?;
            if json {
                println!("{}", render_json(&matrix)?);
            } else {
                print!("{}", render_text(&matrix));
            }
        }
        Command::List { owner, direction } => {
            for version in owner_versions(&store, &owner, direction)? {
                println!("{version}");
            }
        }
        Command::Table { owner, direction } => {
            let table = owner_table(&store, owner.as_deref(), direction)?;
            print!("{}", render_table(&table));
        }
        Command::Latest => {
            println!("{}", resolve_latest(store.all_versions()?)?);
        }
    }

    Ok(())
}
