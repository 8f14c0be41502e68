pub mod color;
pub mod geometry;
pub mod page;

pub use color::Color;
pub use geometry::{Margins, PageGeometry, Size};
