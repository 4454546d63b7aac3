//! RAR extraction backend probing.
//!
//! RAR is a proprietary format, so extraction delegates to an external
//! utility. Probes run in a fixed preference order: `unrar`, then
//! `unar` (with its `lsar` companion for listing), then `bsdtar`. The
//! first program found on `PATH` becomes the active backend for the
//! rest of the process. When every probe fails, the per-probe reasons
//! are kept so the aggregate error can name exactly what is missing.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

use crate::ExtractionError;
use crate::Result;

/// Probe order for RAR-capable extraction utilities.
const PROBE_ORDER: [RarBackendKind; 3] = [
    RarBackendKind::Unrar,
    RarBackendKind::Unar,
    RarBackendKind::Bsdtar,
];

static ACTIVE: OnceLock<std::result::Result<RarBackend, String>> = OnceLock::new();

/// Known RAR backend programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RarBackendKind {
    /// The `unrar` utility from RARLAB.
    Unrar,
    /// The `unar`/`lsar` pair from The Unarchiver.
    Unar,
    /// libarchive's `bsdtar`, which reads RAR 4.x and 5.x.
    Bsdtar,
}

impl fmt::Display for RarBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrar => write!(f, "unrar"),
            Self::Unar => write!(f, "unar"),
            Self::Bsdtar => write!(f, "bsdtar"),
        }
    }
}

/// An extraction utility resolved on `PATH`.
#[derive(Debug, Clone)]
pub struct RarBackend {
    kind: RarBackendKind,
    program: PathBuf,
    /// Listing program; identical to `program` except for `unar`,
    /// whose listing half is the separate `lsar` binary.
    lister: PathBuf,
}

impl RarBackend {
    /// Returns the backend selected for this process, probing on first
    /// use.
    ///
    /// # Errors
    ///
    /// When no probe succeeds, returns the joined per-probe failure
    /// reasons. Callers wrap this into
    /// `ExtractionError::MissingExtractionSupport` together with the
    /// archive path that triggered the lookup.
    pub fn active() -> std::result::Result<&'static Self, &'static str> {
        match ACTIVE.get_or_init(Self::probe_all) {
            Ok(backend) => Ok(backend),
            Err(reasons) => Err(reasons.as_str()),
        }
    }

    /// Runs every probe in preference order, returning the first hit.
    fn probe_all() -> std::result::Result<Self, String> {
        let mut failures = Vec::with_capacity(PROBE_ORDER.len());
        for kind in PROBE_ORDER {
            match Self::probe(kind) {
                Ok(backend) => return Ok(backend),
                Err(reason) => failures.push(format!("{kind}: {reason}")),
            }
        }
        Err(failures.join("; "))
    }

    /// Probes one backend, resolving its program(s) on `PATH`.
    fn probe(kind: RarBackendKind) -> std::result::Result<Self, String> {
        let program = which::which(kind.to_string())
            .map_err(|_| format!("`{kind}` not found in PATH"))?;
        let lister = match kind {
            RarBackendKind::Unar => which::which("lsar")
                .map_err(|_| "`lsar` companion not found in PATH".to_string())?,
            RarBackendKind::Unrar | RarBackendKind::Bsdtar => program.clone(),
        };
        Ok(Self {
            kind,
            program,
            lister,
        })
    }

    /// Returns which utility this backend drives.
    #[must_use]
    pub fn kind(&self) -> RarBackendKind {
        self.kind
    }

    /// Lists member paths of `archive` in container order.
    pub fn list(&self, archive: &Path) -> Result<Vec<String>> {
        let output = self.run(&self.lister, &self.list_args(archive))?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(self.parse_listing(&stdout))
    }

    /// Extracts the given member subset of `archive` into `dest`.
    ///
    /// `dest` must already exist; the utilities create any
    /// intermediate directories named by the members themselves.
    pub fn extract(&self, archive: &Path, dest: &Path, members: &BTreeSet<String>) -> Result<()> {
        self.run(&self.program, &self.extract_args(archive, dest, members))?;
        Ok(())
    }

    /// Builds the listing command line for this backend.
    fn list_args(&self, archive: &Path) -> Vec<OsString> {
        match self.kind {
            RarBackendKind::Unrar => vec!["lb".into(), archive.into()],
            RarBackendKind::Unar => vec![archive.into()],
            RarBackendKind::Bsdtar => vec!["-t".into(), "-f".into(), archive.into()],
        }
    }

    /// Builds the extraction command line for this backend.
    fn extract_args(&self, archive: &Path, dest: &Path, members: &BTreeSet<String>) -> Vec<OsString> {
        match self.kind {
            RarBackendKind::Unrar => {
                // unrar treats the trailing slash as "this is the
                // destination directory".
                let mut dest_arg: OsString = dest.into();
                dest_arg.push("/");
                let mut args: Vec<OsString> =
                    vec!["x".into(), "-o+".into(), "-inul".into(), archive.into()];
                args.extend(members.iter().map(OsString::from));
                args.push(dest_arg);
                args
            }
            RarBackendKind::Unar => {
                let mut args: Vec<OsString> = vec![
                    "-q".into(),
                    "-f".into(),
                    "-D".into(),
                    "-o".into(),
                    dest.into(),
                    archive.into(),
                ];
                args.extend(members.iter().map(OsString::from));
                args
            }
            RarBackendKind::Bsdtar => {
                let mut args: Vec<OsString> = vec![
                    "-x".into(),
                    "-C".into(),
                    dest.into(),
                    "-f".into(),
                    archive.into(),
                ];
                args.extend(members.iter().map(OsString::from));
                args
            }
        }
    }

    /// Extracts member paths from a listing command's stdout.
    fn parse_listing(&self, stdout: &str) -> Vec<String> {
        let skip_banner = match self.kind {
            // lsar prints "<archive>: RAR" before the entries.
            RarBackendKind::Unar => 1,
            RarBackendKind::Unrar | RarBackendKind::Bsdtar => 0,
        };
        stdout
            .lines()
            .skip(skip_banner)
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Invokes `program`, capturing output.
    fn run(&self, program: &Path, args: &[OsString]) -> Result<std::process::Output> {
        let tool = self.kind.to_string();
        let output = Command::new(program).args(args).output().map_err(|e| {
            ExtractionError::ExtractionToolFailure {
                tool: tool.clone(),
                reason: e.to_string(),
            }
        })?;
        if output.status.success() {
            Ok(output)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(ExtractionError::ExtractionToolFailure {
                tool,
                reason: format!("{} ({})", stderr.trim(), output.status),
            })
        }
    }
}
