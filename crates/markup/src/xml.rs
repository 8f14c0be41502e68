//! Small helpers over the parsed markup tree: attribute access with
//! error context, and re-serialization of an element's inner markup.

use crate::error::CompileError;
use roxmltree::{Node, NodeType};
use sheaf_style::StyleError;
use sheaf_style::value::parse_length;

pub fn required_attr<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str, CompileError> {
    node.attribute(name)
        .ok_or_else(|| CompileError::MissingAttribute {
            element: node.tag_name().name().to_string(),
            attribute: name.to_string(),
        })
}

/// Reads a length attribute. `default` of `None` makes it required.
pub fn length_attr(node: Node, name: &str, default: Option<f32>) -> Result<f32, CompileError> {
    match node.attribute(name) {
        Some(raw) => {
            parse_length(raw).map_err(CompileError::in_attr(node.tag_name().name(), name))
        }
        None => default.ok_or_else(|| CompileError::MissingAttribute {
            element: node.tag_name().name().to_string(),
            attribute: name.to_string(),
        }),
    }
}

/// Reads a unitless float attribute (scale factors, counts).
pub fn float_attr(node: Node, name: &str, default: f32) -> Result<f32, CompileError> {
    match node.attribute(name) {
        Some(raw) => raw.trim().parse::<f32>().map_err(|e| CompileError::Attribute {
            element: node.tag_name().name().to_string(),
            attribute: name.to_string(),
            source: StyleError::InvalidValue {
                property: name.to_string(),
                message: e.to_string(),
            },
        }),
        None => Ok(default),
    }
}

/// Re-serializes the content of `node` as markup text, with outer
/// whitespace trimmed. Inline elements (bold/italic spans, line
/// breaks) survive verbatim for the typesetting engine to interpret.
pub fn inner_markup(node: Node) -> String {
    let mut out = String::new();
    for child in node.children() {
        serialize_node(child, &mut out);
    }
    out.trim().to_string()
}

fn serialize_node(node: Node, out: &mut String) {
    match node.node_type() {
        NodeType::Text => {
            if let Some(text) = node.text() {
                escape_text(text, out);
            }
        }
        NodeType::Element => {
            let tag = node.tag_name().name();
            out.push('<');
            out.push_str(tag);
            for attr in node.attributes() {
                out.push(' ');
                out.push_str(attr.name());
                out.push_str("=\"");
                escape_attr(attr.value(), out);
                out.push('"');
            }
            if node.first_child().is_some() {
                out.push('>');
                for child in node.children() {
                    serialize_node(child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            } else {
                out.push_str("/>");
            }
        }
        // Comments and processing instructions are not content.
        _ => {}
    }
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn first_element_markup(xml: &str) -> String {
        let doc = Document::parse(xml).unwrap();
        inner_markup(doc.root_element())
    }

    #[test]
    fn plain_text_is_trimmed() {
        assert_eq!(first_element_markup("<p>  Hello  </p>"), "Hello");
    }

    #[test]
    fn inline_markup_survives() {
        assert_eq!(
            first_element_markup("<p>a <b>bold</b> and <i>italic</i></p>"),
            "a <b>bold</b> and <i>italic</i>"
        );
    }

    #[test]
    fn attributes_and_empty_elements_are_kept() {
        assert_eq!(
            first_element_markup(r#"<p>line<br/>next <font color="red">x</font></p>"#),
            r#"line<br/>next <font color="red">x</font>"#
        );
    }

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(
            first_element_markup("<p>a &amp; b &lt; c</p>"),
            "a &amp; b &lt; c"
        );
    }
}
