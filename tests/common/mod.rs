//! Shared test support: a recording engine stub standing in for a real
//! typesetting backend.

use sheaf::idf::{LayoutElement, PageDecoration, RenderedGraphic};
use sheaf::types::PageGeometry;
use sheaf::{FontSource, RenderError, TypesetEngine};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Everything that reached the engine's assembly call.
#[derive(Debug)]
pub struct Assembled {
    pub geometry: PageGeometry,
    pub title: Option<String>,
    pub elements: Vec<LayoutElement>,
    pub decorations: PageDecoration,
}

/// Records what crosses the engine boundary and emits a marker byte
/// string instead of a real document.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub fonts: Vec<String>,
    pub assembled: Option<Assembled>,
}

impl TypesetEngine for RecordingEngine {
    fn register_font(&mut self, face_name: &str, _source: FontSource) -> Result<(), RenderError> {
        self.fonts.push(face_name.to_string());
        Ok(())
    }

    fn render_vector(&mut self, data: &[u8]) -> Result<RenderedGraphic, RenderError> {
        Ok(RenderedGraphic(Arc::new(data.to_vec())))
    }

    fn assemble(
        &mut self,
        geometry: &PageGeometry,
        title: Option<&str>,
        elements: Vec<LayoutElement>,
        decorations: &PageDecoration,
    ) -> Result<Vec<u8>, RenderError> {
        self.assembled = Some(Assembled {
            geometry: *geometry,
            title: title.map(str::to_string),
            elements,
            decorations: decorations.clone(),
        });
        Ok(b"%SHEAF".to_vec())
    }
}
