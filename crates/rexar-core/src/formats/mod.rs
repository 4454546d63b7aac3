//! Container format support: detection, ZIP reading, RAR backends.

pub mod backend;
pub mod detect;
pub mod rar;
pub mod zip;

pub use backend::RarBackend;
pub use detect::ArchiveKind;
pub use detect::sniff_format;
pub use rar::RarHandle;
pub use zip::ZipHandle;
