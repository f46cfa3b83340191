//! Report ordering and plain-text rendering

use std::io::{self, Write};

use crate::config::{OrderBy, ReportOptions};
use crate::inventory::{Inventory, Project};

/// Sort projects ascending by the chosen key. Ties keep their input order.
pub fn sort_projects(projects: &mut [Project], order_by: OrderBy) {
    match order_by {
        OrderBy::ReleaseDate => projects.sort_by(|a, b| a.release_date().cmp(b.release_date())),
        OrderBy::Path => projects.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str())),
    }
}

/// Header line naming the columns of each row
pub fn header(options: &ReportOptions) -> String {
    let mut line = String::from("# ReleaseDate Project Version");
    if options.show_modified_date {
        line.push_str(" ModifiedDate");
    }
    line
}

/// Summary line; the denominator counts every discovered repository,
/// including untagged ones that were skipped.
pub fn summary(inventory: &Inventory) -> String {
    let mut line = format!(
        "# Showing {} of {} projects",
        inventory.projects.len(),
        inventory.discovered
    );
    if inventory.skipped_untagged > 0 {
        line.push_str(&format!(" ({} untagged skipped)", inventory.skipped_untagged));
    }
    line
}

/// One data row: `release_date project version [modified_date]`
pub fn row(project: &Project, options: &ReportOptions) -> String {
    let name = if options.show_full_path {
        project.path.display().to_string()
    } else {
        project.name()
    };

    let mut parts = vec![project.release_date(), name.as_str(), project.version()];
    if options.show_modified_date {
        parts.push(project.last_modified.as_str());
    }
    parts.join(" ")
}

/// Order the inventory and write the full report to `out`
pub fn render<W: Write>(
    inventory: &mut Inventory,
    options: &ReportOptions,
    out: &mut W,
) -> io::Result<()> {
    sort_projects(&mut inventory.projects, options.order_by);

    writeln!(out, "{}", summary(inventory))?;
    writeln!(out, "{}", header(options))?;
    for project in &inventory.projects {
        writeln!(out, "{}", row(project, options))?;
    }
    out.flush()
}
