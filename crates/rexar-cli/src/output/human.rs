//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use rexar_core::ExtractionReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        // The listing is the primary output, one path per line, so it
        // can be piped into other tools.
        for path in &report.files {
            let _ = self.term.write_line(&format!("{}", path.display()));
        }

        if self.verbose {
            for warning in &report.warnings {
                self.format_warning(warning);
            }
            let _ = self
                .term
                .write_line(&format!("  Files extracted: {}", report.files_extracted));
            let _ = self
                .term
                .write_line(&format!("  Files skipped: {}", report.files_skipped));
            let _ = self.term.write_line(&format!(
                "  Members rejected: {}",
                report.members_rejected
            ));
            let _ = self.term.write_line(&format!(
                "  Archives expanded: {}",
                report.archives_expanded
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }

    fn format_member_list(&self, _format: &str, members: &[String]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for member in members {
            let _ = self.term.write_line(member);
        }

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Total: {} members", members.len()));
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
