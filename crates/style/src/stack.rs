//! The stack of currently active styles maintained while descending
//! styled containers. Paragraph-like elements take their effective
//! style from the top of the stack, falling back to the built-in
//! default when nothing is pushed.

use crate::registry::StyleRecord;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct StyleStack {
    stack: Vec<Arc<StyleRecord>>,
    default: Arc<StyleRecord>,
}

impl StyleStack {
    pub fn new() -> Self {
        StyleStack {
            stack: Vec::new(),
            default: Arc::new(StyleRecord::default()),
        }
    }

    pub fn push(&mut self, style: Arc<StyleRecord>) {
        self.stack.push(style);
    }

    /// Pops the active style. Every push must be paired with exactly
    /// one pop; popping an empty stack is a bug in the caller.
    pub fn pop(&mut self) -> Arc<StyleRecord> {
        self.stack
            .pop()
            .expect("style stack underflow: pop without matching push")
    }

    /// The effective style: top of stack, else the built-in default.
    pub fn current(&self) -> Arc<StyleRecord> {
        self.stack
            .last()
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.default))
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for StyleStack {
    fn default() -> Self {
        Self::new()
    }
}
