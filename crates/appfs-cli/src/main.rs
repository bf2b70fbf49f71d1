//! CLI entry point for appfs (for dev and testing).

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use appfs_core::{
    app_data_dir, executable_dir, read_file, resolve_path, write_file, Base, DataCategory,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "appfs")]
#[command(about = "appfs: executable and app data directories, and files inside them")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the directory containing this executable.
    ExeDir,
    /// Show (and create) the app data directory for a category.
    DataDir {
        #[arg(short, long, default_value = "none")]
        category: DataCategory,
    },
    /// List the data categories and their path labels.
    Categories,
    /// Show the full path a fragment resolves to.
    Path {
        #[arg(value_name = "FRAGMENT")]
        fragment: PathBuf,
        #[command(flatten)]
        base: BaseArgs,
    },
    /// Print a file's contents.
    Cat {
        #[arg(value_name = "FRAGMENT")]
        fragment: PathBuf,
        #[command(flatten)]
        base: BaseArgs,
    },
    /// Write stdin (or --input) to a file, replacing its contents.
    Write {
        #[arg(value_name = "FRAGMENT")]
        fragment: PathBuf,
        #[command(flatten)]
        base: BaseArgs,
        /// Read data from this file instead of stdin.
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct BaseArgs {
    /// Relative to the executable directory instead of the app data directory.
    #[arg(long, conflicts_with = "category")]
    exe: bool,
    /// App data category.
    #[arg(short, long, default_value = "none")]
    category: DataCategory,
}

impl BaseArgs {
    fn base(&self) -> Base {
        let base = if self.exe {
            Base::Executable
        } else {
            Base::AppData(self.category)
        };
        tracing::debug!(?base, "selected base directory");
        base
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::ExeDir => {
            let dir = executable_dir().context("resolving executable directory")?;
            println!("{}", dir.display());
        }
        Commands::DataDir { category } => {
            let dir = app_data_dir(category).context("resolving app data directory")?;
            println!("{}", dir.display());
        }
        Commands::Categories => {
            for c in DataCategory::ALL {
                println!("{:<10} {:?}", format!("{c:?}"), c.label());
            }
        }
        Commands::Path { fragment, base } => {
            let path = resolve_path(base.base(), &fragment)?;
            println!("{}", path.display());
        }
        Commands::Cat { fragment, base } => {
            let data = read_file(base.base(), &fragment)
                .with_context(|| format!("reading {}", fragment.display()))?;
            std::io::stdout().write_all(&data)?;
        }
        Commands::Write {
            fragment,
            base,
            input,
        } => {
            let data = match input {
                Some(p) => std::fs::read(&p).with_context(|| format!("reading {}", p.display()))?,
                None => {
                    let mut buf = Vec::new();
                    std::io::stdin().read_to_end(&mut buf).context("reading stdin")?;
                    buf
                }
            };
            let n = write_file(base.base(), &fragment, &data)
                .with_context(|| format!("writing {}", fragment.display()))?;
            println!("wrote {n} byte(s)");
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
