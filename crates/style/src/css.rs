//! The fixed translation table from CSS-like attribute names to the
//! renderer-side command keys used in table style commands. The same
//! names drive the typed fields of [`crate::StyleRecord`]; this module
//! covers the string-keyed half used for table regions.

/// Translates a CSS-like property name to the renderer command key.
/// Names without a dedicated translation are upper-cased verbatim.
pub fn renderer_key(name: &str) -> String {
    match name {
        "padding-left" => "LEFTPADDING",
        "padding-right" => "RIGHTPADDING",
        "padding-top" => "TOPPADDING",
        "padding-bottom" => "BOTTOMPADDING",
        "border-left" => "LINEBEFORE",
        "border-right" => "LINEAFTER",
        "border-top" => "LINEABOVE",
        "border-bottom" => "LINEBELOW",
        "text-align" => "ALIGN",
        "font-family" => "FONTNAME",
        "font-size" => "FONTSIZE",
        "color" => "TEXTCOLOR",
        "background-color" => "BACKGROUND",
        other => return other.to_ascii_uppercase(),
    }
    .to_string()
}
