pub mod css;
pub mod error;
pub mod registry;
pub mod stack;
pub mod text;
pub mod value;

pub use error::StyleError;
pub use registry::{StyleRecord, StyleRegistry};
pub use stack::StyleStack;
pub use text::{TextAlign, VerticalAlign};
