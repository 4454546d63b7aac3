//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use rexar_core::ExtensionFilter;
use rexar_core::ExtractOptions;
use rexar_core::extract_archive;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let extensions = args
        .extensions
        .as_deref()
        .map_or_else(ExtensionFilter::all, ExtensionFilter::parse);

    let options = ExtractOptions {
        destination: args.dest.clone(),
        extensions,
        keep_source: !args.delete_source,
        overwrite: args.overwrite,
        safe: !args.allow_unsafe,
        recursion_budget: args.recursion,
    };

    let report = add_archive_context(extract_archive(&args.archive, &options), &args.archive)?;

    formatter.format_extraction_result(&report)?;

    Ok(())
}
