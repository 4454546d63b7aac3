//! Security screening for archive member paths.

pub mod path;

pub use path::MemberScreen;
pub use path::is_unsafe_member;
pub use path::screen_members;
