//! Binding - semantic checks on the stack.

use mu_core::Document;
use mu_stack::Stack;

use super::is_legal_name;
use crate::{
    CompileError, CompileWarning,
    pipeline::{Phase, Sink},
};

/// Phase that binds service types and checks target declarations.
///
/// - every service type must take the form `namespace/name`
/// - more than one default target is a warning; the first declared wins
/// - a stack without services is a warning
pub struct Binder;

impl Phase for Binder {
    fn name(&self) -> &'static str {
        "bind"
    }

    fn description(&self) -> &'static str {
        "Bind service types and check target declarations"
    }

    fn run(&self, doc: &Document, stack: &mut Stack, diag: &dyn Sink) {
        for (name, service) in &stack.services {
            // Missing types were already reported by the analyzer.
            if !service.kind.is_empty() && !is_legal_service_type(&service.kind) {
                diag.error(
                    self.name(),
                    CompileError::IllegalServiceType {
                        service: name.clone(),
                        kind: service.kind.clone(),
                    },
                    Some(doc),
                );
            }
        }

        let defaults: Vec<&str> = stack.default_targets().map(|t| t.name.as_str()).collect();
        if let [chosen, ignored @ ..] = defaults.as_slice()
            && !ignored.is_empty()
        {
            let ignored = ignored
                .iter()
                .map(|name| format!("'{}'", name))
                .collect::<Vec<_>>()
                .join(", ");
            diag.warn(
                self.name(),
                CompileWarning::MultipleDefaultTargets {
                    chosen: chosen.to_string(),
                    ignored,
                },
                Some(doc),
            );
        }

        if stack.services.is_empty() {
            diag.warn(
                self.name(),
                CompileWarning::EmptyStack(stack.name.clone()),
                Some(doc),
            );
        }
    }
}

fn is_legal_service_type(kind: &str) -> bool {
    match kind.split_once('/') {
        Some((namespace, name)) => {
            !namespace.contains('/')
                && !name.contains('/')
                && is_legal_name(namespace)
                && is_legal_name(name)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::pipeline::DiagnosticSink;

    fn bind(src: &str) -> DiagnosticSink {
        let sink = DiagnosticSink::new();
        let doc = Document::new("Mufile.toml", src);
        let mut stack = Stack::from_str(src).expect("Failed to parse test stack");
        Binder.run(&doc, &mut stack, &sink);
        sink
    }

    #[test]
    fn test_service_types() {
        assert!(is_legal_service_type("mu/container"));
        assert!(is_legal_service_type("acme/web-app"));
        assert!(!is_legal_service_type("container"));
        assert!(!is_legal_service_type("mu/"));
        assert!(!is_legal_service_type("a/b/c"));
    }

    #[test]
    fn test_illegal_service_type() {
        let sink = bind(
            r#"
            name = "web"

            [services.frontend]
            type = "container"
        "#,
        );

        assert_eq!(sink.codes(), vec!["MU105"]);
        assert_eq!(sink.errors(), 1);
    }

    #[test]
    fn test_multiple_defaults_warns() {
        let sink = bind(
            r#"
            name = "web"

            [targets.a]
            default = true

            [targets.b]

            [targets.c]
            default = true

            [targets.d]
            default = true

            [services.frontend]
            type = "mu/container"
        "#,
        );

        assert_eq!(sink.errors(), 0);
        assert_eq!(sink.warnings(), 1);
        assert_eq!(
            sink.diagnostics()[0].message,
            "multiple default targets declared; using 'a' and ignoring 'c', 'd'"
        );
    }

    #[test]
    fn test_empty_stack_warns() {
        let sink = bind("name = \"web\"\n");

        assert_eq!(sink.codes(), vec!["MU201"]);
        assert_eq!(sink.errors(), 0);
    }
}
