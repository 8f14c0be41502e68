//! The boundary with the typesetting/rendering engine.
//!
//! The compiler produces an ordered sequence of layout elements; the
//! engine owns page layout and binary output generation. The engine is
//! expected to invoke its page-decoration hook once per page with the
//! current page number and geometry, drawing the background on every
//! page and the footer on every page after the first (and on page 1
//! when `footer_on_first_page` is set).

use crate::resource::SharedResourceData;
use sheaf_idf::{LayoutElement, PageDecoration, RenderedGraphic};
use sheaf_types::PageGeometry;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("font error: {0}")]
    Font(String),

    #[error("vector graphic error: {0}")]
    Vector(String),

    #[error("assembly error: {0}")]
    Assembly(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An embeddable font asset located by the font resolver.
#[derive(Debug, Clone)]
pub enum FontSource {
    /// A two-file outline+metrics pair.
    Type1 {
        metrics: SharedResourceData,
        outline: SharedResourceData,
    },
    /// A single outline-and-metrics container.
    TrueType(SharedResourceData),
}

/// The typesetting engine: turns abstract layout elements into final
/// document bytes, laying them out across as many pages as needed.
pub trait TypesetEngine {
    /// Adds a font to the engine's font table under `face_name`.
    /// Registering a face name twice is the caller's bug to avoid; the
    /// compiler-side font resolver guarantees it never happens.
    fn register_font(&mut self, face_name: &str, source: FontSource) -> Result<(), RenderError>;

    /// Converts raw vector-graphic data (e.g. SVG text) into the
    /// engine's scalable graphic representation.
    fn render_vector(&mut self, data: &[u8]) -> Result<RenderedGraphic, RenderError>;

    /// Lays out the element sequence and returns the final binary
    /// document.
    fn assemble(
        &mut self,
        geometry: &PageGeometry,
        title: Option<&str>,
        elements: Vec<LayoutElement>,
        decorations: &PageDecoration,
    ) -> Result<Vec<u8>, RenderError>;
}
