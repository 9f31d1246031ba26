//! Post-parse analysis - structural checks on the raw parse tree.

use mu_core::Document;
use mu_stack::Stack;

use super::is_legal_name;
use crate::{
    CompileError,
    pipeline::{Phase, Sink},
};

/// Phase that validates the shape of a freshly parsed stack.
///
/// Checks that the stack, target and service names are legal and that every
/// service declares a type. All problems are reported; the phase does not
/// stop at the first one.
pub struct PostParseAnalyzer;

impl Phase for PostParseAnalyzer {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Check the structure of the parsed stack"
    }

    fn run(&self, doc: &Document, stack: &mut Stack, diag: &dyn Sink) {
        let illegal = |kind: &'static str, name: &str| {
            if !is_legal_name(name) {
                diag.error(
                    self.name(),
                    CompileError::IllegalName {
                        kind,
                        name: name.to_string(),
                    },
                    Some(doc),
                );
            }
        };

        illegal("stack", &stack.name);
        for name in stack.targets.keys() {
            illegal("target", name);
        }
        for name in stack.services.keys() {
            illegal("service", name);
        }

        for (name, service) in &stack.services {
            if service.kind.is_empty() {
                diag.error(
                    self.name(),
                    CompileError::MissingServiceType {
                        service: name.clone(),
                    },
                    Some(doc),
                );
            }
        }
    }
}
