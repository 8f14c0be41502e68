pub mod engine;
pub mod resource;

pub use engine::{FontSource, RenderError, TypesetEngine};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
