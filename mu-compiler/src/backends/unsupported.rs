use std::sync::Arc;

use mu_core::Arch;

use super::Backend;
use crate::{CompileError, Compiland, pipeline::Sink, pipeline::phases::CODEGEN};

/// Stands in for architectures that have no generator yet.
pub struct UnsupportedBackend {
    arch: Arch,
    diag: Arc<dyn Sink>,
}

impl UnsupportedBackend {
    pub fn new(arch: Arch, diag: Arc<dyn Sink>) -> Self {
        Self { arch, diag }
    }
}

impl Backend for UnsupportedBackend {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn codegen(&self, comp: &Compiland<'_>) {
        self.diag
            .error(CODEGEN, CompileError::UnsupportedArch(self.arch), Some(comp.doc));
    }
}
