//! Asset providers for the sheaf document compiler.
//!
//! Implementations of the `ResourceProvider` trait from sheaf-traits:
//!
//! - [`FilesystemResourceProvider`]: loads assets from a base directory
//! - [`PrefixStripProvider`]: strips configured URL prefixes (media,
//!   static) before delegating to an inner provider
//!
//! The in-memory provider lives in sheaf-traits and is re-exported
//! here for convenience.

mod filesystem;
mod prefix;

pub use filesystem::FilesystemResourceProvider;
pub use prefix::PrefixStripProvider;

pub use sheaf_traits::InMemoryResourceProvider;
