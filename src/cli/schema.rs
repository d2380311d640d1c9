//! CLI handler for the `schema` subcommand

use crate::cli::SchemaArgs;
use crate::config::Config;
use crate::output::write_document;
use schemars::schema_for;

pub fn execute(args: SchemaArgs) -> anyhow::Result<()> {
    let schema = schema_for!(Config);
    let json = serde_json::to_string_pretty(&schema)?;

    match args.output {
        Some(path) => {
            write_document(&path, &json)?;
            println!("Wrote: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
