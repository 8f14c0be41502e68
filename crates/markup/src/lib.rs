//! The template compiler: a recursive translator from the XML document
//! dialect to the abstract layout elements of sheaf-idf.
//!
//! The compiler walks the markup tree, dispatching each element to a
//! handler by tag name, maintaining a scoped style stack and a named
//! style registry, and accumulating the page decorations (background
//! art, running footer) that the typesetting engine draws outside the
//! document flow. All mutable state is owned by one
//! [`DocumentCompiler`] instance, so concurrent compilations simply
//! use separate compilers.

mod compiler;
mod xml;

pub mod document;
pub mod error;
pub mod fonts;
pub mod split;
pub mod tstyle;

pub use document::{CompiledPart, DocumentCompiler};
pub use error::CompileError;
pub use fonts::FontResolver;
