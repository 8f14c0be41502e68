//! The top-level document compiler: owns all per-compilation state
//! (style registry and stack, font resolver, page geometry, page
//! decorations) and drives the element handlers over the markup tree.

use crate::error::CompileError;
use crate::fonts::FontResolver;
use log::debug;
use roxmltree::Node;
use sheaf_idf::{LayoutElement, PageDecoration};
use sheaf_style::value::{parse_length, parse_page_size};
use sheaf_style::{StyleError, StyleRegistry, StyleStack};
use sheaf_traits::{ResourceError, ResourceProvider, SharedResourceData, TypesetEngine};
use sheaf_types::{Margins, PageGeometry};

/// The element sequence and accumulated document state of one compiled
/// markup document, before page assembly. Lets a caller concatenate
/// several documents and assemble them in a single pass.
#[derive(Debug)]
pub struct CompiledPart {
    pub elements: Vec<LayoutElement>,
    pub geometry: Option<PageGeometry>,
    pub title: Option<String>,
    pub decorations: PageDecoration,
    /// Face names registered with the engine so far. Hand this back
    /// via [`DocumentCompiler::with_fonts`] when compiling further
    /// parts against the same engine, so a face shared between parts
    /// is not registered twice.
    pub fonts: FontResolver,
}

/// Compiles one markup document. All state is owned here, so separate
/// compilations never observe each other's styles or decorations.
pub struct DocumentCompiler<'a> {
    pub(crate) engine: &'a mut dyn TypesetEngine,
    pub(crate) assets: &'a dyn ResourceProvider,
    pub(crate) styles: StyleRegistry,
    pub(crate) stack: StyleStack,
    pub(crate) fonts: FontResolver,
    pub(crate) barcode_library: Option<String>,
    pub(crate) geometry: Option<PageGeometry>,
    pub(crate) title: Option<String>,
    pub(crate) decorations: PageDecoration,
}

impl<'a> DocumentCompiler<'a> {
    pub fn new(engine: &'a mut dyn TypesetEngine, assets: &'a dyn ResourceProvider) -> Self {
        DocumentCompiler {
            engine,
            assets,
            styles: StyleRegistry::new(),
            stack: StyleStack::new(),
            fonts: FontResolver::new(),
            barcode_library: None,
            geometry: None,
            title: None,
            decorations: PageDecoration::default(),
        }
    }

    /// Sets the asset path of the barcode symbol library handed to the
    /// engine with every barcode element.
    pub fn with_barcode_library(mut self, path: impl Into<String>) -> Self {
        self.barcode_library = Some(path.into());
        self
    }

    /// Seeds the font resolver, typically with the one surrendered by
    /// an earlier [`CompiledPart`] against the same engine.
    pub fn with_fonts(mut self, fonts: FontResolver) -> Self {
        self.fonts = fonts;
        self
    }

    /// Compiles markup text all the way to final document bytes.
    pub fn compile(mut self, markup: &str) -> Result<Vec<u8>, CompileError> {
        let elements = self.compile_elements(markup)?;
        self.finish(elements)
    }

    /// Compiles markup to the ordered layout element sequence, leaving
    /// assembly to the caller.
    pub fn compile_elements(&mut self, markup: &str) -> Result<Vec<LayoutElement>, CompileError> {
        let document = roxmltree::Document::parse(markup)?;
        let mut out = Vec::new();
        self.compile_element(document.root_element(), &mut out)?;
        debug!("compiled {} layout elements", out.len());
        Ok(out)
    }

    /// Compiles markup and surrenders the accumulated document state
    /// for external assembly.
    pub fn compile_part(mut self, markup: &str) -> Result<CompiledPart, CompileError> {
        let elements = self.compile_elements(markup)?;
        Ok(CompiledPart {
            elements,
            geometry: self.geometry,
            title: self.title,
            decorations: self.decorations,
            fonts: self.fonts,
        })
    }

    /// Hands a compiled element sequence to the typesetting engine.
    pub fn finish(&mut self, elements: Vec<LayoutElement>) -> Result<Vec<u8>, CompileError> {
        let geometry = self.geometry.ok_or(CompileError::MissingDocument)?;
        let bytes =
            self.engine
                .assemble(&geometry, self.title.as_deref(), elements, &self.decorations)?;
        Ok(bytes)
    }

    /// Routes a produced element into the output sequence, diverting
    /// page-background art into the decoration binding instead.
    pub(crate) fn emit(&mut self, out: &mut Vec<LayoutElement>, element: LayoutElement) {
        if matches!(element, LayoutElement::BackgroundImage { .. }) {
            self.decorations.background = Some(element);
        } else {
            out.push(element);
        }
    }

    /// Loads an asset referenced from markup, rewording a plain
    /// not-found into an error that names the reference.
    pub(crate) fn load_asset(&self, path: &str) -> Result<SharedResourceData, CompileError> {
        match self.assets.load(path) {
            Ok(data) => Ok(data),
            Err(ResourceError::NotFound(_)) => Err(CompileError::AssetNotFound(path.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// `<doc format=".." margin="t,r,b,l" title="..">`: initializes
    /// page geometry exactly once, then descends. A second `doc` in
    /// the same compilation keeps the first geometry.
    pub(crate) fn doc(
        &mut self,
        node: Node,
        out: &mut Vec<LayoutElement>,
    ) -> Result<(), CompileError> {
        if self.geometry.is_none() {
            let (width, height) = parse_page_size(node.attribute("format").unwrap_or("A4"))
                .map_err(CompileError::in_attr("doc", "format"))?;
            let margins = parse_margins(node.attribute("margin").unwrap_or("2cm,2cm,2cm,2cm"))?;
            self.title = node.attribute("title").map(str::to_string);
            self.geometry = Some(PageGeometry {
                width,
                height,
                margins,
            });
        }
        self.compile_children(node, out)
    }

    /// `<footer firstpage="..">`: binds the first compiled child as
    /// the running footer. The last footer element in the document
    /// wins.
    pub(crate) fn footer(&mut self, node: Node) -> Result<(), CompileError> {
        let mut content = Vec::new();
        self.compile_children(node, &mut content)?;
        self.decorations.footer = content.into_iter().next();
        self.decorations.footer_on_first_page = node
            .attribute("firstpage")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
            .unwrap_or(false);
        Ok(())
    }
}

/// Four comma-separated lengths in `top,right,bottom,left` order.
fn parse_margins(text: &str) -> Result<Margins, CompileError> {
    let values = text
        .split(',')
        .map(parse_length)
        .collect::<Result<Vec<_>, _>>()
        .map_err(CompileError::in_attr("doc", "margin"))?;
    let [top, right, bottom, left] = values[..] else {
        return Err(CompileError::Attribute {
            element: "doc".to_string(),
            attribute: "margin".to_string(),
            source: StyleError::InvalidValue {
                property: "margin".to_string(),
                message: format!("expected four lengths, got {}", values.len()),
            },
        });
    };
    Ok(Margins {
        top,
        right,
        bottom,
        left,
    })
}
