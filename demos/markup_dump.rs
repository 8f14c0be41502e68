//! Compiles a small markup document and dumps the resulting layout
//! element sequence. Run with `RUST_LOG=debug` to watch the compiler.

use sheaf::idf::{LayoutElement, PageDecoration, RenderedGraphic};
use sheaf::types::PageGeometry;
use sheaf::{
    CompileError, FontSource, InMemoryResourceProvider, RenderError, TypesetEngine,
    compile_to_bytes,
};
use std::sync::Arc;

const MARKUP: &str = r##"
<doc format="A4" title="Demo">
    <style name="heading" font-size="18"/>
    <div style="heading"><p>A demo document</p></div>
    <p>Body text with <b>inline</b> markup.</p>
    <table cols="200,200">
        <tstyle area="0:0" background-color="#EEEEEE"/>
        <tr><td><p>left</p></td><td><p>right</p></td></tr>
    </table>
    <footer><p>running footer</p></footer>
</doc>
"##;

/// Prints what a real typesetting backend would receive.
#[derive(Debug, Default)]
struct DumpEngine;

impl TypesetEngine for DumpEngine {
    fn register_font(&mut self, face_name: &str, _source: FontSource) -> Result<(), RenderError> {
        println!("font: {face_name}");
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
        println!(
            "page {}x{}pt, title {:?}",
            geometry.width, geometry.height, title
        );
        for element in &elements {
            println!("  {}", element.kind());
        }
        if let Some(footer) = &decorations.footer {
            println!("footer: {}", footer.kind());
        }
        Ok(Vec::new())
    }
}

fn main() -> Result<(), CompileError> {
    env_logger::init();
    let mut engine = DumpEngine;
    compile_to_bytes(&mut engine, &InMemoryResourceProvider::new(), MARKUP)?;
    Ok(())
}
