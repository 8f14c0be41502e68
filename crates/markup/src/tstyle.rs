//! Table region styling: parses `<tstyle>` elements into commands
//! addressed at a rectangular cell region.
//!
//! Regions are written `"top,left:bottom,right"` with signed indices;
//! negative values count from the end of the grid, so `"0:-1"` (the
//! default) covers the whole table. Indices are resolved only after
//! the table body has been compiled and the real grid dimensions are
//! known.

use crate::error::CompileError;
use crate::split::{CDATA_CLOSE, CDATA_OPEN, split_ignore};
use roxmltree::Node;
use sheaf_idf::{CellRef, StyleParam, TableStyleCommand};
use sheaf_style::StyleError;
use sheaf_style::css::renderer_key;
use sheaf_style::value::{parse_color, parse_length};

/// A styling command whose region is still signed.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionCommand {
    pub key: String,
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub params: Vec<StyleParam>,
}

impl RegionCommand {
    /// Normalizes the signed region against the actual grid size.
    pub fn resolve(self, rows: usize, cols: usize) -> TableStyleCommand {
        TableStyleCommand {
            key: self.key,
            start: CellRef {
                row: clamp_index(self.top, rows),
                col: clamp_index(self.left, cols),
            },
            stop: CellRef {
                row: clamp_index(self.bottom, rows),
                col: clamp_index(self.right, cols),
            },
            params: self.params,
        }
    }
}

fn clamp_index(index: i32, len: usize) -> usize {
    let len = len as i32;
    let resolved = if index < 0 { len + index } else { index };
    resolved.clamp(0, (len - 1).max(0)) as usize
}

/// Parses one `<tstyle>` element into region commands. The `border`
/// and `padding` shorthands expand to their four directional
/// properties; every property name goes through the same CSS-style
/// translation the style registry uses.
pub fn parse_tstyle(node: Node) -> Result<Vec<RegionCommand>, CompileError> {
    let (top, left, bottom, right) = parse_area(node.attribute("area").unwrap_or("0:-1"))?;

    let mut properties: Vec<(String, String)> = Vec::new();
    for attr in node.attributes() {
        match attr.name() {
            "area" => {}
            shorthand @ ("border" | "padding") => {
                for side in ["left", "right", "top", "bottom"] {
                    properties.push((format!("{shorthand}-{side}"), attr.value().to_string()));
                }
            }
            name => properties.push((name.to_string(), attr.value().to_string())),
        }
    }

    let mut commands = Vec::with_capacity(properties.len());
    for (name, value) in properties {
        let params = split_ignore(&value, ',', CDATA_OPEN, CDATA_CLOSE)
            .iter()
            .map(|raw| parse_param(raw.trim()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(CompileError::in_attr("tstyle", &name))?;
        commands.push(RegionCommand {
            key: renderer_key(&name),
            top,
            left,
            bottom,
            right,
            params,
        });
    }
    Ok(commands)
}

/// One parameter: a `#RRGGBB` color, a length, or a bare keyword
/// (upper-cased for the renderer). A malformed color is an error; a
/// non-length, non-color token is a keyword by definition.
fn parse_param(raw: &str) -> Result<StyleParam, StyleError> {
    if raw.starts_with('#') {
        return parse_color(raw).map(StyleParam::Color);
    }
    match parse_length(raw) {
        Ok(value) => Ok(StyleParam::Length(value)),
        Err(_) => Ok(StyleParam::Keyword(raw.to_ascii_uppercase())),
    }
}

fn parse_area(text: &str) -> Result<(i32, i32, i32, i32), CompileError> {
    let invalid = || CompileError::Attribute {
        element: "tstyle".to_string(),
        attribute: "area".to_string(),
        source: StyleError::InvalidValue {
            property: "area".to_string(),
            message: format!("expected 'top,left:bottom,right', got '{text}'"),
        },
    };

    let (start, stop) = text.split_once(':').ok_or_else(invalid)?;
    let (top, left) = parse_corner(start).ok_or_else(invalid)?;
    let (bottom, right) = parse_corner(stop).ok_or_else(invalid)?;
    Ok((top, left, bottom, right))
}

/// A corner is `"row,col"`, or a single index meaning both.
fn parse_corner(text: &str) -> Option<(i32, i32)> {
    let indices = text
        .split(',')
        .map(|v| v.trim().parse::<i32>().ok())
        .collect::<Option<Vec<i32>>>()?;
    Some((*indices.first()?, *indices.last()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;
    use sheaf_types::Color;

    fn parse(xml: &str) -> Vec<RegionCommand> {
        let doc = Document::parse(xml).unwrap();
        parse_tstyle(doc.root_element()).unwrap()
    }

    #[test]
    fn negative_indices_resolve_against_the_grid() {
        let commands = parse(r##"<tstyle area="0,-1:1,-1" background-color="#FF0000"/>"##);
        let resolved = commands.into_iter().next().unwrap().resolve(3, 4);

        assert_eq!(resolved.key, "BACKGROUND");
        assert_eq!(resolved.start, CellRef { row: 0, col: 3 });
        assert_eq!(resolved.stop, CellRef { row: 1, col: 3 });
    }

    #[test]
    fn default_area_covers_the_whole_table() {
        let commands = parse(r#"<tstyle text-align="center"/>"#);
        let resolved = commands.into_iter().next().unwrap().resolve(5, 2);

        assert_eq!(resolved.key, "ALIGN");
        assert_eq!(resolved.start, CellRef { row: 0, col: 0 });
        assert_eq!(resolved.stop, CellRef { row: 4, col: 1 });
        assert_eq!(resolved.params, vec![StyleParam::Keyword("CENTER".into())]);
    }

    #[test]
    fn border_shorthand_expands_to_four_commands() {
        let mut keys: Vec<String> = parse(r##"<tstyle border="1pt,#000000"/>"##)
            .into_iter()
            .map(|c| c.key)
            .collect();
        keys.sort();
        assert_eq!(keys, ["LINEABOVE", "LINEAFTER", "LINEBEFORE", "LINEBELOW"]);
    }

    #[test]
    fn mixed_params_are_typed() {
        let commands = parse(r##"<tstyle border-top="1pt,#00FF00,solid"/>"##);
        assert_eq!(
            commands[0].params,
            vec![
                StyleParam::Length(1.0),
                StyleParam::Color(Color::new(0, 255, 0)),
                StyleParam::Keyword("SOLID".to_string()),
            ]
        );
        assert_eq!(commands[0].key, "LINEABOVE");
    }

    #[test]
    fn malformed_area_is_an_error() {
        let doc = Document::parse(r##"<tstyle area="nonsense" color="#000000"/>"##).unwrap();
        assert!(matches!(
            parse_tstyle(doc.root_element()),
            Err(CompileError::Attribute { .. })
        ));
    }

    #[test]
    fn malformed_color_param_is_an_error() {
        let doc = Document::parse(r##"<tstyle background-color="#XYZ"/>"##).unwrap();
        assert!(matches!(
            parse_tstyle(doc.root_element()),
            Err(CompileError::Attribute { .. })
        ));
    }
}
