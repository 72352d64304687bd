//! init command - Create a starter bindery.toml

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::project_root;
use crate::assemble::Context;
use crate::core::config::PROJECT_FILE;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts;

/// Starter configuration written by `bn init`.
const TEMPLATE: &str = r#"# Bindery project configuration.
#
# Modules are concatenated in the order listed here and spliced into the
# template at the injection marker, so later modules may rely on symbols
# defined by earlier ones.

[build]
modules = ["lib", "util"]
source_dir = "src"
# extension = "js"
template = "src/main.js"
# marker = "/*{{inject_build}}*/"
raw_out = "dist/lib.js"
min_out = "dist/lib.min.js"

# The external minifier is invoked as:
#   <command> <args...> <raw_out> <output_flag> <min_out>
# Set output_flag = "" for tools that take the destination positionally.
[minifier]
command = "java"
args = ["-jar", "tools/compressor.jar"]
# output_flag = "-o"
"#;

/// Create a starter bindery.toml in the project root.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `force` - Overwrite an existing file without asking
pub fn init(ctx: &Context, force: bool) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let root = project_root(ctx)?;
    let path = root.join(PROJECT_FILE);

    if path.exists() && !force {
        if ctx.interactive {
            let overwrite = prompts::confirm(
                &format!("{PROJECT_FILE} already exists. Overwrite?"),
                false,
                ctx.interactive,
            )?;
            if !overwrite {
                output::print("Aborted.", verbosity);
                return Ok(());
            }
        } else {
            bail!("{PROJECT_FILE} already exists (use --force to overwrite)");
        }
    }

    fs::write(&path, TEMPLATE).with_context(|| format!("failed to write {}", path.display()))?;
    output::success(format!("Wrote {}", path.display()), verbosity);
    Ok(())
}
