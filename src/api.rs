//! One-call entry points over the document compiler.

use sheaf_idf::LayoutElement;
use sheaf_markup::{CompileError, CompiledPart, DocumentCompiler, FontResolver};
use sheaf_traits::{ResourceProvider, TypesetEngine};

/// Compiles one markup document to final document bytes.
pub fn compile_to_bytes(
    engine: &mut dyn TypesetEngine,
    assets: &dyn ResourceProvider,
    markup: &str,
) -> Result<Vec<u8>, CompileError> {
    DocumentCompiler::new(engine, assets).compile(markup)
}

/// Compiles one markup document to its layout element sequence,
/// without assembling pages.
pub fn compile_to_elements(
    engine: &mut dyn TypesetEngine,
    assets: &dyn ResourceProvider,
    markup: &str,
) -> Result<Vec<LayoutElement>, CompileError> {
    DocumentCompiler::new(engine, assets).compile_elements(markup)
}

/// Compiles several markup documents into one output, with a page
/// break after every part.
///
/// Each part compiles with its own styles and decorations; the font
/// face set is shared so a face used by several parts registers with
/// the engine once. The last part's page geometry, title and
/// decorations drive the final assembly.
pub fn compile_many(
    engine: &mut dyn TypesetEngine,
    assets: &dyn ResourceProvider,
    parts: &[&str],
) -> Result<Vec<u8>, CompileError> {
    let mut fonts = FontResolver::new();
    let mut merged: Vec<LayoutElement> = Vec::new();
    let mut last: Option<CompiledPart> = None;

    for markup in parts {
        let mut part = DocumentCompiler::new(&mut *engine, assets)
            .with_fonts(fonts)
            .compile_part(markup)?;
        fonts = std::mem::take(&mut part.fonts);
        merged.append(&mut part.elements);
        merged.push(LayoutElement::PageBreak);
        last = Some(part);
    }

    let last = last.ok_or(CompileError::MissingDocument)?;
    let geometry = last.geometry.ok_or(CompileError::MissingDocument)?;
    let bytes = engine.assemble(&geometry, last.title.as_deref(), merged, &last.decorations)?;
    Ok(bytes)
}
