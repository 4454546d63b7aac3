//! Recursive archive extraction engine for ZIP and RAR containers.
//!
//! `rexar-core` opens an archive by sniffing its content (never by file
//! name), screens member paths against traversal attacks, extracts the
//! members into a destination directory, and optionally recurses into
//! archives found inside the archive under a shared extraction budget.
//! The returned listing can be narrowed to a caller-supplied set of
//! file extensions.
//!
//! # Examples
//!
//! ```no_run
//! use rexar_core::ExtensionFilter;
//! use rexar_core::ExtractOptions;
//! use rexar_core::extract_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ExtractOptions {
//!     extensions: ExtensionFilter::parse("srt"),
//!     ..Default::default()
//! };
//! let report = extract_archive("subtitles.zip", &options)?;
//! for path in &report.files {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod error;
pub mod extension;
pub mod extraction;
pub mod formats;
pub mod report;
pub mod security;
pub mod test_utils;

// Re-export main API types
pub use api::extract_archive;
pub use archive::ArchiveHandle;
pub use config::ExtractOptions;
pub use error::ExtractionError;
pub use error::Result;
pub use extension::ExtensionFilter;
pub use extension::extension_of;
pub use extraction::Extractor;
pub use report::ExtractionReport;
