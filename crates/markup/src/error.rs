use sheaf_style::StyleError;
use sheaf_traits::{RenderError, ResourceError};
use thiserror::Error;

/// Errors that abort a compilation. Except for the tolerated
/// malformed-font case (which is only logged), any failure is fatal:
/// there is no partial-document output.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("malformed markup: {0}")]
    MalformedMarkup(#[from] roxmltree::Error),

    #[error("invalid value for attribute '{attribute}' on <{element}>: {source}")]
    Attribute {
        element: String,
        attribute: String,
        #[source]
        source: StyleError,
    },

    #[error("missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("font '{base_name}' not found (tried .afm/.pfb and .ttf)")]
    FontNotFound { base_name: String },

    #[error("asset not found: {0}")]
    AssetNotFound(String),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("render backend error: {0}")]
    Render(#[from] RenderError),

    #[error("document contains no <doc> element")]
    MissingDocument,
}

impl CompileError {
    /// Attaches element/attribute context to a value-parse failure, so
    /// a failed compilation points back at the offending markup.
    pub fn in_attr<'a>(
        element: &'a str,
        attribute: &'a str,
    ) -> impl FnOnce(StyleError) -> CompileError + 'a {
        move |source| CompileError::Attribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
            source,
        }
    }
}
