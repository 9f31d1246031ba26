use mu_core::Document;
use mu_stack::{Stack, Target};

/// The unit of work handed to a backend: one stack, bound to one target.
#[derive(Debug, Clone, Copy)]
pub struct Compiland<'a> {
    pub target: &'a Target,
    pub doc: &'a Document,
    pub stack: &'a Stack,
}

impl<'a> Compiland<'a> {
    pub fn new(target: &'a Target, doc: &'a Document, stack: &'a Stack) -> Self {
        Self { target, doc, stack }
    }
}
