//! Intermediate Document Format (IDF)
//! The abstract, not-yet-paginated layout elements produced by the
//! markup compiler and consumed by the typesetting engine.

use sheaf_style::registry::StyleRecord;
use sheaf_style::text::{TextAlign, VerticalAlign};
use sheaf_types::Color;
use std::sync::Arc;

/// A reference-counted container for shared, immutable data like
/// images and rendered graphics.
pub type SharedData = Arc<Vec<u8>>;

/// Opaque handle to a graphic the rendering backend has already
/// converted to its own scalable representation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedGraphic(pub SharedData);

/// One abstract piece of document content, not yet assigned to a page.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    /// Styled text. Inline markup (bold/italic spans) is carried
    /// verbatim for the typesetting engine to interpret.
    Paragraph {
        text: String,
        style: Arc<StyleRecord>,
    },
    Table {
        rows: Vec<TableRow>,
        col_widths: Vec<f32>,
        align: TextAlign,
        /// Leading rows repeated at the top of every page the table
        /// spills onto.
        repeat_rows: usize,
        commands: Vec<TableStyleCommand>,
    },
    Image {
        source: String,
        data: SharedData,
        width: f32,
        height: f32,
        align: TextAlign,
        vertical_align: VerticalAlign,
    },
    /// Page background art. Never emitted into the element sequence;
    /// the document compiler diverts it into the page decoration.
    BackgroundImage {
        source: String,
        data: SharedData,
        width: f32,
        height: f32,
        align: TextAlign,
        vertical_align: VerticalAlign,
    },
    Vector {
        graphic: RenderedGraphic,
        width: f32,
        height: f32,
        scale: f32,
    },
    Barcode {
        symbology: String,
        value: String,
        width: f32,
        height: f32,
        scale: f32,
        align: TextAlign,
        /// Path of the symbol-rendering library asset the backend
        /// should draw with, when one is configured.
        library: Option<String>,
    },
    /// An interactive form field.
    TextField {
        name: String,
        width: f32,
        height: f32,
        value: Option<String>,
    },
    Spacer {
        width: f32,
        height: f32,
    },
    PageBreak,
    /// An outline/table-of-contents entry with no visual output.
    PageMarker {
        name: String,
        description: String,
    },
}

impl LayoutElement {
    /// A string identifier for the element kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LayoutElement::Paragraph { .. } => "paragraph",
            LayoutElement::Table { .. } => "table",
            LayoutElement::Image { .. } => "image",
            LayoutElement::BackgroundImage { .. } => "background-image",
            LayoutElement::Vector { .. } => "vector",
            LayoutElement::Barcode { .. } => "barcode",
            LayoutElement::TextField { .. } => "text-field",
            LayoutElement::Spacer { .. } => "spacer",
            LayoutElement::PageBreak => "page-break",
            LayoutElement::PageMarker { .. } => "page-marker",
        }
    }
}

// --- Table-specific structures ---

/// A table cell: `None` is an absent cell (kept distinct from an empty
/// content list so spanning logic downstream can tell "empty" from
/// "merged into a neighbor").
pub type TableCell = Option<Vec<LayoutElement>>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// A cell coordinate, normalized to the actual grid (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

/// One parsed parameter of a table style command.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleParam {
    Color(Color),
    Length(f32),
    Keyword(String),
}

/// A styling command addressed at a rectangular region of table cells.
/// Commands apply in document order; a later command for an
/// overlapping region overrides an earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyleCommand {
    pub key: String,
    pub start: CellRef,
    pub stop: CellRef,
    pub params: Vec<StyleParam>,
}

// --- Page decoration ---

/// Content drawn on pages independently of the document flow,
/// accumulated during compilation and consumed once at assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDecoration {
    /// Background art drawn on every page.
    pub background: Option<LayoutElement>,
    /// Running footer drawn below the content area.
    pub footer: Option<LayoutElement>,
    /// Whether the footer is also drawn on page 1.
    pub footer_on_first_page: bool,
}

impl PageDecoration {
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.footer.is_none()
    }
}
