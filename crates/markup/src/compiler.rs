//! Per-tag element handlers. One method per tag; unknown tags recurse
//! into their children so templates can use arbitrary grouping
//! elements without declaring them.

use crate::document::DocumentCompiler;
use crate::error::CompileError;
use crate::tstyle::{RegionCommand, parse_tstyle};
use crate::xml::{float_attr, inner_markup, length_attr, required_attr};
use log::trace;
use roxmltree::{Node, NodeType};
use sheaf_idf::{LayoutElement, TableRow};
use sheaf_style::StyleError;
use sheaf_style::value::{parse_align, parse_length, parse_vertical_align};

impl DocumentCompiler<'_> {
    /// Compiles one markup node into `out`. Elements dispatch on their
    /// tag name; non-element nodes (whitespace between blocks,
    /// comments, processing instructions) are not content and are
    /// skipped.
    pub(crate) fn compile_element(
        &mut self,
        node: Node,
        out: &mut Vec<LayoutElement>,
    ) -> Result<(), CompileError> {
        if node.node_type() != NodeType::Element {
            return Ok(());
        }
        trace!("compiling <{}>", node.tag_name().name());
        match node.tag_name().name() {
            "doc" => self.doc(node, out),
            "style" => self.style(node),
            "font" => self.font(node),
            "div" => self.div(node, out),
            "p" => self.paragraph(node, out),
            "textfield" => self.textfield(node, out),
            "table" => self.table(node, out),
            "pagebreak" => {
                self.emit(out, LayoutElement::PageBreak);
                Ok(())
            }
            "pagemarker" => self.pagemarker(node, out),
            "footer" => self.footer(node),
            "spacer" => self.spacer(node, out),
            "vector" => self.vector(node, out),
            "img" => self.image(node, out),
            "barcode" => self.barcode(node, out),
            _ => self.compile_children(node, out),
        }
    }

    pub(crate) fn compile_children(
        &mut self,
        node: Node,
        out: &mut Vec<LayoutElement>,
    ) -> Result<(), CompileError> {
        for child in node.children() {
            self.compile_element(child, out)?;
        }
        Ok(())
    }

    /// `<style name=".." base=".." ..properties../>`: defines or
    /// updates a named style; produces no layout element.
    fn style(&mut self, node: Node) -> Result<(), CompileError> {
        let name = required_attr(node, "name")?;
        let properties: Vec<(String, String)> = node
            .attributes()
            .filter(|a| a.name() != "name" && a.name() != "base")
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect();
        self.styles.define(name, node.attribute("base"), &properties)?;
        Ok(())
    }

    /// `<font name=".." src=".."/>`: registers an embeddable font;
    /// produces no layout element.
    fn font(&mut self, node: Node) -> Result<(), CompileError> {
        let face_name = required_attr(node, "name")?;
        let base_name = required_attr(node, "src")?;
        self.fonts
            .register(self.assets, &mut *self.engine, base_name, face_name)
    }

    /// `<div style="..">`: a styled scope. The pushed style is popped
    /// on every path out, including the error one.
    fn div(&mut self, node: Node, out: &mut Vec<LayoutElement>) -> Result<(), CompileError> {
        let Some(style_name) = node.attribute("style") else {
            return self.compile_children(node, out);
        };
        self.stack.push(self.styles.resolve(style_name)?);
        let result = self.compile_children(node, out);
        self.stack.pop();
        result
    }

    fn paragraph(&mut self, node: Node, out: &mut Vec<LayoutElement>) -> Result<(), CompileError> {
        let element = LayoutElement::Paragraph {
            text: inner_markup(node),
            style: self.stack.current(),
        };
        self.emit(out, element);
        Ok(())
    }

    fn textfield(&mut self, node: Node, out: &mut Vec<LayoutElement>) -> Result<(), CompileError> {
        let element = LayoutElement::TextField {
            name: node.attribute("name").unwrap_or_default().to_string(),
            width: length_attr(node, "width", Some(100.0))?,
            height: length_attr(node, "height", Some(20.0))?,
            value: node.attribute("value").map(str::to_string),
        };
        self.emit(out, element);
        Ok(())
    }

    /// `<table cols="..">`: compiles `tr` children to rows and
    /// `tstyle` children to region commands, resolving the signed
    /// regions once the grid dimensions are known. Any other child is
    /// compiled and wrapped as a row of single-element cells.
    fn table(&mut self, node: Node, out: &mut Vec<LayoutElement>) -> Result<(), CompileError> {
        let tag = node.tag_name().name();
        let col_widths = required_attr(node, "cols")?
            .split(',')
            .map(parse_length)
            .collect::<Result<Vec<_>, _>>()
            .map_err(CompileError::in_attr(tag, "cols"))?;
        let align = parse_align(node.attribute("align").unwrap_or("left"))
            .map_err(CompileError::in_attr(tag, "align"))?;
        let repeat_rows = match node.attribute("repeatrows") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| CompileError::Attribute {
                    element: tag.to_string(),
                    attribute: "repeatrows".to_string(),
                    source: StyleError::InvalidValue {
                        property: "repeatrows".to_string(),
                        message: e.to_string(),
                    },
                })?,
            None => 0,
        };

        let mut pending: Vec<RegionCommand> = Vec::new();
        let mut rows: Vec<TableRow> = Vec::new();
        for child in node.children() {
            if !child.is_element() {
                continue;
            }
            match child.tag_name().name() {
                "tstyle" => pending.extend(parse_tstyle(child)?),
                "tr" => rows.push(self.table_row(child)?),
                _ => {
                    let mut produced = Vec::new();
                    self.compile_element(child, &mut produced)?;
                    rows.push(TableRow {
                        cells: produced.into_iter().map(|el| Some(vec![el])).collect(),
                    });
                }
            }
        }

        let commands = pending
            .into_iter()
            .map(|c| c.resolve(rows.len(), col_widths.len()))
            .collect();
        let element = LayoutElement::Table {
            rows,
            col_widths,
            align,
            repeat_rows,
            commands,
        };
        self.emit(out, element);
        Ok(())
    }

    /// A `td` without element content is an absent cell, distinct from
    /// a cell holding empty content.
    fn table_row(&mut self, node: Node) -> Result<TableRow, CompileError> {
        let mut cells = Vec::new();
        for cell in node.children() {
            if !cell.is_element() || cell.tag_name().name() != "td" {
                continue;
            }
            if cell.children().any(|c| c.is_element()) {
                let mut content = Vec::new();
                self.compile_children(cell, &mut content)?;
                cells.push(Some(content));
            } else {
                cells.push(None);
            }
        }
        Ok(TableRow { cells })
    }

    fn pagemarker(&mut self, node: Node, out: &mut Vec<LayoutElement>) -> Result<(), CompileError> {
        let element = LayoutElement::PageMarker {
            name: node.attribute("name").unwrap_or_default().to_string(),
            description: inner_markup(node),
        };
        self.emit(out, element);
        Ok(())
    }

    fn spacer(&mut self, node: Node, out: &mut Vec<LayoutElement>) -> Result<(), CompileError> {
        let element = LayoutElement::Spacer {
            width: length_attr(node, "width", Some(1.0))?,
            height: length_attr(node, "height", None)?,
        };
        self.emit(out, element);
        Ok(())
    }

    /// `<vector src=".." search=".." replace=".."/>`: loads vector art
    /// and hands it to the engine for conversion. The optional
    /// search/replace pair is a literal substitution on the raw text,
    /// for templated art such as a name inside an SVG.
    fn vector(&mut self, node: Node, out: &mut Vec<LayoutElement>) -> Result<(), CompileError> {
        let source = required_attr(node, "src")?;
        let width = length_attr(node, "width", None)?;
        let height = length_attr(node, "height", None)?;
        let scale = float_attr(node, "scale", 1.0)?;

        let data = self.load_asset(source)?;
        let mut text = String::from_utf8_lossy(&data).into_owned();
        if let Some(search) = node.attribute("search") {
            text = text.replace(search, node.attribute("replace").unwrap_or(""));
        }
        let graphic = self.engine.render_vector(text.as_bytes())?;
        self.emit(
            out,
            LayoutElement::Vector {
                graphic,
                width,
                height,
                scale,
            },
        );
        Ok(())
    }

    fn image(&mut self, node: Node, out: &mut Vec<LayoutElement>) -> Result<(), CompileError> {
        let tag = node.tag_name().name();
        let source = required_attr(node, "src")?;
        let width = length_attr(node, "width", None)?;
        let height = length_attr(node, "height", None)?;
        let align = parse_align(node.attribute("align").unwrap_or("left"))
            .map_err(CompileError::in_attr(tag, "align"))?;
        let vertical_align =
            parse_vertical_align(node.attribute("vertical-align").unwrap_or("bottom"))
                .map_err(CompileError::in_attr(tag, "vertical-align"))?;

        let data = self.load_asset(source)?;
        let source = source.to_string();
        let element = if node.attribute("background") == Some("True") {
            LayoutElement::BackgroundImage {
                source,
                data,
                width,
                height,
                align,
                vertical_align,
            }
        } else {
            LayoutElement::Image {
                source,
                data,
                width,
                height,
                align,
                vertical_align,
            }
        };
        self.emit(out, element);
        Ok(())
    }

    fn barcode(&mut self, node: Node, out: &mut Vec<LayoutElement>) -> Result<(), CompileError> {
        let tag = node.tag_name().name();
        let element = LayoutElement::Barcode {
            symbology: node.attribute("type").unwrap_or("datamatrix").to_string(),
            value: required_attr(node, "value")?.to_string(),
            width: length_attr(node, "width", None)?,
            height: length_attr(node, "height", None)?,
            scale: float_attr(node, "scale", 1.0)?,
            align: parse_align(node.attribute("align").unwrap_or("left"))
                .map_err(CompileError::in_attr(tag, "align"))?,
            library: self.barcode_library.clone(),
        };
        self.emit(out, element);
        Ok(())
    }
}
