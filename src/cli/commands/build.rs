//! build command - Assemble the library and minify it

use anyhow::{Context as _, Result};

use super::project_root;
use crate::assemble::{Context, Pipeline};
use crate::core::config::Config;
use crate::minify::ExternalMinifier;
use crate::ui::output::{self, Verbosity};

/// Assemble the library and minify it.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `json` - Print the build report as JSON instead of a human summary
pub fn build(ctx: &Context, json: bool) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let root = project_root(ctx)?;

    let config = Config::load(&root).context("failed to load configuration")?;
    let manifest = config.manifest()?;
    let paths = config.build_paths(&root);
    let minifier = ExternalMinifier::new(config.minifier_command()?);

    output::debug(
        format!(
            "building {} modules, template {}",
            manifest.len(),
            paths.template().display()
        ),
        verbosity,
    );
    output::debug(
        format!(
            "minifier: {} {:?}",
            minifier.command().program,
            minifier.command().args
        ),
        verbosity,
    );

    let mut pipeline = Pipeline::new(paths, manifest, config.marker(), minifier);
    let report = pipeline.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::success(
        format!(
            "Assembled {} modules -> {} ({})",
            report.modules,
            report.raw_path.display(),
            output::format_bytes(report.raw_bytes)
        ),
        verbosity,
    );
    match report.min_bytes {
        Some(bytes) => output::success(
            format!(
                "Minified -> {} ({})",
                report.min_path.display(),
                output::format_bytes(bytes)
            ),
            verbosity,
        ),
        None => output::success(
            format!("Minified -> {}", report.min_path.display()),
            verbosity,
        ),
    }

    Ok(())
}
