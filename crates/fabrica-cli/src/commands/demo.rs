//! Implementation of the `fabrica demo` command.
//!
//! Responsibility: resolve which product lines to showcase, run the client
//! routine for each through `ShowcaseService`, and display the resulting
//! descriptions. No business logic lives here.

use tracing::{debug, info, instrument};

use fabrica_adapters::factory_for;
use fabrica_core::{
    application::{CatalogService, ShowcaseService},
    domain::{Variant, known_markers},
};

use crate::{
    cli::{DemoArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `fabrica demo` command.
///
/// Dispatch sequence:
/// 1. Pick the lines to run: `--line`, else the config default, else all
/// 2. For each line, build the factory and run the showcase
/// 3. Print every description on its own line
#[instrument(skip_all)]
pub fn execute(
    args: DemoArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let variants = select_lines(&args, &config)?;

    debug!(lines = variants.len(), "Lines selected");

    let mut first = true;
    for variant in variants {
        if !first {
            output.print("")?;
        }
        first = false;

        showcase_line(variant, &output)?;
    }

    if !global.quiet {
        output.print("")?;
        output.success("Showcase complete")?;
    }

    Ok(())
}

/// Run one line's family and print its descriptions.
fn showcase_line(variant: Variant, output: &OutputManager) -> CliResult<()> {
    info!(line = %variant, "Showcase started");

    let service = ShowcaseService::new(factory_for(variant));
    output.header(&format!("Product line {variant}:"))?;
    for description in service.run() {
        output.print(&description)?;
    }

    info!(line = %variant, "Showcase finished");
    Ok(())
}

// ── Line selection ────────────────────────────────────────────────────────────

/// Decide which lines to showcase.
///
/// `--line` wins over the config default; with neither set, every
/// registered line runs in catalog order.
fn select_lines(args: &DemoArgs, config: &AppConfig) -> CliResult<Vec<Variant>> {
    let requested = args.line.as_deref().or(config.defaults.line.as_deref());

    match requested {
        Some(marker) => resolve_line(marker).map(|v| vec![v]),
        None => Ok(Variant::ALL.to_vec()),
    }
}

/// Resolve a user-supplied marker, attaching the known markers on failure.
fn resolve_line(marker: &str) -> CliResult<Variant> {
    CatalogService::new()
        .resolve(marker)
        .map_err(|_| CliError::LineNotFound {
            line: marker.into(),
            available: known_markers(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
