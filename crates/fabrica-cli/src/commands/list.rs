//! Implementation of the `fabrica list` command.

use fabrica_core::application::CatalogService;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let catalog = CatalogService::new();
    let lines = catalog.list();

    match args.format {
        ListFormat::Table => {
            output.header("Registered product lines:")?;
            for line in &lines {
                output.print(&format!(
                    "  {}  {} [{}] - {}",
                    line.marker,
                    line.title,
                    line.products.join(", "),
                    line.blurb,
                ))?;
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&lines).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::List => {
            for line in &lines {
                println!("{}", line.marker);
            }
        }

        ListFormat::Csv => {
            println!("marker,title,products");
            for line in &lines {
                println!("{},{},{}", line.marker, line.title, line.products.join(" "));
            }
        }
    }

    Ok(())
}
