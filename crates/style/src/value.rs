//! nom parsers for the scalar values embedded in markup attributes:
//! lengths, colors, alignment keywords and page formats.

use crate::error::StyleError;
use crate::text::{TextAlign, VerticalAlign};
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::char;
use nom::combinator::{map, map_res, opt, recognize};
use nom::sequence::{pair, preceded};
use nom::{IResult, Parser};
use sheaf_types::{Color, page};

/// Points per millimeter. The centimeter factor is derived from it so
/// that `10mm` and `1cm` parse to bit-identical values.
const MM_TO_PT: f32 = 2.835;
const CM_TO_PT: f32 = 10.0 * MM_TO_PT;
const IN_TO_PT: f32 = 72.0;

fn decimal(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((
                    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()),
                    opt((char('.'), take_while_m_n(1, 10, |c: char| c.is_ascii_digit()))),
                )),
                recognize((char('.'), take_while_m_n(1, 10, |c: char| c.is_ascii_digit()))),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn unit(input: &str) -> IResult<&str, f32> {
    alt((
        map(tag_no_case("pt"), |_| 1.0),
        map(tag_no_case("px"), |_| 1.0), // treat px as pt
        map(tag_no_case("in"), |_| IN_TO_PT),
        map(tag_no_case("cm"), |_| CM_TO_PT),
        map(tag_no_case("mm"), |_| MM_TO_PT),
    ))
    .parse(input)
}

fn length(input: &str) -> IResult<&str, f32> {
    map(pair(decimal, opt(unit)), |(value, factor)| {
        value * factor.unwrap_or(1.0)
    })
    .parse(input)
}

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |s| {
        u8::from_str_radix(s, 16)
    })
    .parse(input)
}

fn color(input: &str) -> IResult<&str, Color> {
    map(
        preceded(char('#'), (hex_pair, hex_pair, hex_pair)),
        |(r, g, b)| Color { r, g, b },
    )
    .parse(input)
}

/// Runs a parser over the trimmed input, requiring full consumption.
fn complete<'a, T>(
    mut parser: impl Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
    input: &'a str,
) -> Option<T> {
    match parser.parse(input.trim()) {
        Ok(("", value)) => Some(value),
        _ => None,
    }
}

/// Parses a length in points: a bare number is already points, else one
/// of the units `mm`, `cm`, `in`, `pt` (`px` is treated as `pt`).
pub fn parse_length(text: &str) -> Result<f32, StyleError> {
    complete(length, text).ok_or_else(|| StyleError::InvalidLength(text.to_string()))
}

/// Parses a `#RRGGBB` color. Exactly six hex digits are required; the
/// short `#RGB` form is rejected.
pub fn parse_color(text: &str) -> Result<Color, StyleError> {
    complete(color, text).ok_or_else(|| StyleError::InvalidColor(text.to_string()))
}

/// Parses an alignment keyword, case-insensitively.
pub fn parse_align(text: &str) -> Result<TextAlign, StyleError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "left" => Ok(TextAlign::Left),
        "right" => Ok(TextAlign::Right),
        "center" => Ok(TextAlign::Center),
        "justify" => Ok(TextAlign::Justify),
        _ => Err(StyleError::InvalidAlignment(text.to_string())),
    }
}

/// Parses a vertical alignment keyword, case-insensitively.
pub fn parse_vertical_align(text: &str) -> Result<VerticalAlign, StyleError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "top" => Ok(VerticalAlign::Top),
        "middle" => Ok(VerticalAlign::Middle),
        "bottom" => Ok(VerticalAlign::Bottom),
        _ => Err(StyleError::InvalidAlignment(text.to_string())),
    }
}

/// Parses a page format: `"width,height"` as two lengths, or a named
/// size. Unknown names fall back to A4 so that a typo in the format
/// still produces a readable document.
pub fn parse_page_size(text: &str) -> Result<(f32, f32), StyleError> {
    if let Some((w, h)) = text.split_once(',') {
        return Ok((parse_length(w)?, parse_length(h)?));
    }
    Ok(page::lookup(text.trim().to_ascii_uppercase().as_str()).unwrap_or(page::A4))
}
