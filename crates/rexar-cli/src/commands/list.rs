//! List command implementation

use crate::cli::ListArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use rexar_core::ArchiveHandle;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let handle = add_archive_context(ArchiveHandle::open(&args.archive), &args.archive)?;

    formatter.format_member_list(handle.format_name(), handle.member_names())?;

    Ok(())
}
