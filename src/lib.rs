//! sheaf compiles an XML document dialect into abstract layout
//! elements and drives a pluggable typesetting engine to the final
//! document bytes.
//!
//! The heavy lifting lives in the member crates; this crate ties them
//! together and offers the high-level one-call entry points in
//! [`api`].

pub mod api;

pub use api::{compile_many, compile_to_bytes, compile_to_elements};

pub use sheaf_idf as idf;
pub use sheaf_style as style;
pub use sheaf_types as types;

pub use sheaf_markup::{CompileError, CompiledPart, DocumentCompiler, FontResolver};
pub use sheaf_resource::{
    FilesystemResourceProvider, InMemoryResourceProvider, PrefixStripProvider,
};
pub use sheaf_traits::{
    FontSource, RenderError, ResourceError, ResourceProvider, TypesetEngine,
};
