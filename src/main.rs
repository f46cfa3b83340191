use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use repo_inventory::config::{
    DEFAULT_QUERY_TIMEOUT_MS, DiscoveryOptions, InventoryConfig, OrderBy, ReportOptions,
    default_root,
};
use repo_inventory::runner::run;
use repo_inventory::vcs::GitCli;

#[derive(Parser)]
#[command(name = "inventory")]
#[command(
    version,
    about = "List projects and release information",
    after_help = "Examples:\n  List all your projects\n    $ inventory\n\n  List specific projects\n    $ inventory $HOME/src/github.com/YOURS/*"
)]
struct Cli {
    /// Omit repositories without release tags
    #[arg(short, long)]
    skip_untagged: bool,

    /// Show each project's full path instead of its directory name
    #[arg(short = 'f', long)]
    show_full_path: bool,

    /// Append the last commit date as an extra column
    #[arg(short = 'm', long)]
    show_modified_date: bool,

    /// Sort key for the listing
    #[arg(short, long, value_enum, default_value_t = OrderBy::ReleaseDate)]
    order_by: OrderBy,

    /// Also search vendor/ and node_modules/ directories
    #[arg(short, long)]
    include_vendor: bool,

    /// Directory to search when no paths are given [default: $HOME]
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Seconds to wait for each git invocation
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_QUERY_TIMEOUT_MS / 1000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Repositories to list instead of searching
    paths: Vec<PathBuf>,
}

impl Cli {
    fn into_config(self) -> InventoryConfig {
        InventoryConfig {
            paths: self.paths,
            root: self.root.unwrap_or_else(default_root),
            skip_untagged: self.skip_untagged,
            query_timeout: Duration::from_secs(self.timeout),
            discovery: DiscoveryOptions {
                include_vendor: self.include_vendor,
            },
            report: ReportOptions {
                show_full_path: self.show_full_path,
                show_modified_date: self.show_modified_date,
                order_by: self.order_by,
            },
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.into_config();
    let client = GitCli::new(config.query_timeout);

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let mut stdout = std::io::stdout().lock();
            run(config, &client, &mut stdout).await
        });

    ignore_broken_pipe(result)?;
    Ok(())
}

/// A closed stdout (e.g., `inventory | head`) ends the report early, not in error
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
