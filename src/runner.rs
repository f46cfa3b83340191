//! Discovery, extraction, and presentation wired together for one run

use std::io::Write;

use tracing::info;

use crate::config::InventoryConfig;
use crate::discovery::candidate_paths;
use crate::inventory::collect_inventory;
use crate::report::render;
use crate::vcs::VcsClient;

/// Run the whole inventory pipeline and write the report to `out`
pub async fn run<C, W>(config: InventoryConfig, client: &C, out: &mut W) -> std::io::Result<()>
where
    C: VcsClient + ?Sized,
    W: Write,
{
    let explicit = !config.paths.is_empty();
    let paths = candidate_paths(config.paths, &config.root, config.discovery);
    if explicit {
        info!("Inspecting {} given repositories", paths.len());
    } else {
        info!(
            "Found {} repositories under {}",
            paths.len(),
            config.root.display()
        );
    }

    let mut inventory = collect_inventory(client, paths, config.skip_untagged).await;
    render(&mut inventory, &config.report, out)
}
