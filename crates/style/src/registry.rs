//! The named style registry: resolved paragraph styles, keyed by name,
//! with base-style inheritance and CSS-like property names.

use crate::error::StyleError;
use crate::text::TextAlign;
use crate::value::{parse_align, parse_color, parse_length};
use serde::{Deserialize, Serialize};
use sheaf_types::{Color, Margins};
use std::collections::HashMap;
use std::sync::Arc;

/// A fully resolved named style. Every field holds a concrete value;
/// inheritance is applied at definition time, not at lookup time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRecord {
    pub name: String,
    /// Name of the style this record was derived from, if any.
    pub base: Option<String>,
    pub font_family: String,
    pub font_size: f32,
    pub leading: f32,
    pub color: Color,
    pub alignment: TextAlign,
    pub padding: Margins,
    pub border_width: Margins,
}

impl StyleRecord {
    pub fn named(name: impl Into<String>) -> Self {
        StyleRecord {
            name: name.into(),
            ..StyleRecord::default()
        }
    }
}

impl Default for StyleRecord {
    /// The built-in `Normal` style: Helvetica 10pt on 12pt leading,
    /// black, left-aligned.
    fn default() -> Self {
        StyleRecord {
            name: "Normal".to_string(),
            base: None,
            font_family: "Helvetica".to_string(),
            font_size: 10.0,
            leading: 12.0,
            color: Color::BLACK,
            alignment: TextAlign::Left,
            padding: Margins::default(),
            border_width: Margins::default(),
        }
    }
}

/// Applies one translated CSS-like property to a record. Unknown names
/// are ignored, matching how non-style attributes ride along on the
/// same elements.
fn apply_property(record: &mut StyleRecord, name: &str, value: &str) -> Result<(), StyleError> {
    match name {
        "font-family" => record.font_family = value.trim().to_string(),
        "font-size" => record.font_size = parse_length(value)?,
        "leading" => record.leading = parse_length(value)?,
        "color" => record.color = parse_color(value)?,
        "text-align" => record.alignment = parse_align(value)?,
        "padding-left" => record.padding.left = parse_length(value)?,
        "padding-right" => record.padding.right = parse_length(value)?,
        "padding-top" => record.padding.top = parse_length(value)?,
        "padding-bottom" => record.padding.bottom = parse_length(value)?,
        "border-left" => record.border_width.left = parse_length(value)?,
        "border-right" => record.border_width.right = parse_length(value)?,
        "border-top" => record.border_width.top = parse_length(value)?,
        "border-bottom" => record.border_width.bottom = parse_length(value)?,
        _ => {}
    }
    Ok(())
}

/// All named styles of one compilation. Redefining a name merges into
/// the stored record in place, so every later lookup observes the
/// update; snapshots handed out earlier keep their values.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: HashMap<String, StyleRecord>,
}

impl StyleRegistry {
    /// A registry seeded with the built-in `Normal` style.
    pub fn new() -> Self {
        let normal = StyleRecord::default();
        let mut styles = HashMap::new();
        styles.insert(normal.name.clone(), normal);
        StyleRegistry { styles }
    }

    /// Defines or updates the style `name`.
    ///
    /// With a `base`, the record starts as a copy of the base record
    /// and the explicit properties overwrite on top. Without one, an
    /// existing record of the same name is updated in place, otherwise
    /// a fresh default record is used. An explicit `font-size` without
    /// an explicit `leading` derives `leading = font-size * 1.5`.
    pub fn define(
        &mut self,
        name: &str,
        base: Option<&str>,
        properties: &[(String, String)],
    ) -> Result<(), StyleError> {
        let mut record = match base {
            Some(base_name) => {
                let mut base_record = self
                    .styles
                    .get(base_name)
                    .cloned()
                    .ok_or_else(|| StyleError::UnknownBaseStyle {
                        name: name.to_string(),
                        base: base_name.to_string(),
                    })?;
                base_record.name = name.to_string();
                base_record.base = Some(base_name.to_string());
                base_record
            }
            None => self
                .styles
                .get(name)
                .cloned()
                .unwrap_or_else(|| StyleRecord::named(name)),
        };

        let mut explicit_font_size = false;
        let mut explicit_leading = false;
        for (property, value) in properties {
            match property.as_str() {
                // Identification attributes ride along on <style>.
                "name" | "base" => continue,
                "font-size" => explicit_font_size = true,
                "leading" => explicit_leading = true,
                _ => {}
            }
            apply_property(&mut record, property, value)?;
        }
        if explicit_font_size && !explicit_leading {
            record.leading = record.font_size * 1.5;
        }

        self.styles.insert(name.to_string(), record);
        Ok(())
    }

    /// Resolves `name` to a snapshot of its current definition.
    pub fn resolve(&self, name: &str) -> Result<Arc<StyleRecord>, StyleError> {
        self.styles
            .get(name)
            .cloned()
            .map(Arc::new)
            .ok_or_else(|| StyleError::UnknownStyle(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
