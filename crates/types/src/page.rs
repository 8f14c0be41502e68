//! Named page size table, in points.
//!
//! Covers the ISO A and B series plus the common US sizes. Unknown
//! names fall back to A4 at the lookup site; the table itself only
//! reports a miss.

const PT_PER_MM: f32 = 72.0 / 25.4;

const fn mm(width: f32, height: f32) -> (f32, f32) {
    (width * PT_PER_MM, height * PT_PER_MM)
}

pub const A0: (f32, f32) = mm(841.0, 1189.0);
pub const A1: (f32, f32) = mm(594.0, 841.0);
pub const A2: (f32, f32) = mm(420.0, 594.0);
pub const A3: (f32, f32) = mm(297.0, 420.0);
pub const A4: (f32, f32) = mm(210.0, 297.0);
pub const A5: (f32, f32) = mm(148.0, 210.0);
pub const A6: (f32, f32) = mm(105.0, 148.0);

pub const B0: (f32, f32) = mm(1000.0, 1414.0);
pub const B1: (f32, f32) = mm(707.0, 1000.0);
pub const B2: (f32, f32) = mm(500.0, 707.0);
pub const B3: (f32, f32) = mm(353.0, 500.0);
pub const B4: (f32, f32) = mm(250.0, 353.0);
pub const B5: (f32, f32) = mm(176.0, 250.0);
pub const B6: (f32, f32) = mm(125.0, 176.0);

pub const LETTER: (f32, f32) = (612.0, 792.0);
pub const LEGAL: (f32, f32) = (612.0, 1008.0);
pub const ELEVENSEVENTEEN: (f32, f32) = (792.0, 1224.0);

/// Default page margin (2cm) used when a document declares none.
pub const DEFAULT_MARGIN: f32 = 20.0 * PT_PER_MM;

/// Looks up a named page size. Matching is case-sensitive on the
/// upper-cased name; callers upper-case before calling.
pub fn lookup(name: &str) -> Option<(f32, f32)> {
    let size = match name {
        "A0" => A0,
        "A1" => A1,
        "A2" => A2,
        "A3" => A3,
        "A4" => A4,
        "A5" => A5,
        "A6" => A6,
        "B0" => B0,
        "B1" => B1,
        "B2" => B2,
        "B3" => B3,
        "B4" => B4,
        "B5" => B5,
        "B6" => B6,
        "LETTER" => LETTER,
        "LEGAL" => LEGAL,
        "ELEVENSEVENTEEN" => ELEVENSEVENTEEN,
        _ => return None,
    };
    Some(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_is_210_by_297_mm() {
        let (w, h) = lookup("A4").unwrap();
        assert!((w - 595.276).abs() < 0.01);
        assert!((h - 841.890).abs() < 0.01);
    }

    #[test]
    fn unknown_name_is_a_miss() {
        assert!(lookup("A7").is_none());
        assert!(lookup("letter").is_none());
    }
}
