//! check command - Validate configuration without building

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::project_root;
use crate::assemble::{marker_count, Context};
use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};

/// Validate configuration without writing anything.
///
/// Checks that:
/// - every manifest module resolves to a readable source file
/// - the template exists and is readable
/// - the template contains the injection marker exactly once
///
/// Prints every problem found, then fails if there were any.
pub fn check(ctx: &Context) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let root = project_root(ctx)?;

    let config = Config::load(&root).context("failed to load configuration")?;
    let manifest = config.manifest()?;
    let paths = config.build_paths(&root);

    let mut problems: Vec<String> = Vec::new();

    for id in &manifest {
        let path = paths.module_path(id);
        if let Err(e) = fs::metadata(&path) {
            problems.push(format!(
                "module '{}' is not readable at '{}': {}",
                id,
                path.display(),
                e
            ));
        }
    }

    match fs::read_to_string(paths.template()) {
        Ok(template) => match marker_count(&template, config.marker()) {
            1 => {}
            0 => problems.push(format!(
                "marker '{}' not found in template '{}'",
                config.marker(),
                paths.template().display()
            )),
            n => problems.push(format!(
                "marker '{}' appears {} times in template '{}', expected exactly one",
                config.marker(),
                n,
                paths.template().display()
            )),
        },
        Err(e) => problems.push(format!(
            "cannot read template '{}': {}",
            paths.template().display(),
            e
        )),
    }

    if problems.is_empty() {
        output::success(
            format!(
                "ok: {} modules, template {}",
                manifest.len(),
                paths.template().display()
            ),
            verbosity,
        );
        return Ok(());
    }

    for problem in &problems {
        output::error(problem);
    }
    bail!("{} problem(s) found", problems.len());
}
