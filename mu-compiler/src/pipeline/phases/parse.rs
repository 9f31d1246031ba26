//! Parse stage - decodes a document into a stack.

use mu_core::Document;
use mu_stack::Stack;

use super::PARSE;
use crate::{
    CompileError,
    pipeline::{Diagnostic, Severity, Sink},
};

/// Parse `doc` into a stack.
///
/// On failure a single MU102 diagnostic is reported, located at the offending
/// line and column when the decoder knows it, and `None` is returned. Syntax
/// errors carry a rendered snippet of the offending source.
pub fn parse(doc: &Document, diag: &dyn Sink) -> Option<Stack> {
    match Stack::from_document(doc) {
        Ok(stack) => Some(stack),
        Err(err) => {
            let location = match err.offset() {
                Some(offset) => {
                    let (line, col) = doc.line_col(offset);
                    format!("{}:{}:{}", doc.file, line, col)
                }
                None => doc.file.clone(),
            };
            let err = CompileError::from(err);
            diag.report(Diagnostic::from_report(Severity::Error, PARSE, &err).at(location));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::DiagnosticSink;

    #[test]
    fn test_parse_ok() {
        let sink = DiagnosticSink::new();
        let doc = Document::new("Mufile.toml", "name = \"web\"\n");

        let stack = parse(&doc, &sink).expect("stack should parse");

        assert_eq!(stack.name, "web");
        assert_eq!(sink.errors(), 0);
    }

    #[test]
    fn test_parse_error_is_located() {
        let sink = DiagnosticSink::new();
        let doc = Document::new(
            "Mufile.toml",
            "name = \"web\"\nversion = = 1\ndescription = \"x\"\n",
        );

        assert!(parse(&doc, &sink).is_none());

        let diags = sink.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code.as_deref(), Some("MU102"));
        assert_eq!(diags[0].phase, "parse");
        let location = diags[0].location.as_deref().unwrap();
        assert!(location.starts_with("Mufile.toml:2:"), "{}", location);
        assert!(diags[0].rendered.is_some());
    }

    #[test]
    fn test_unsupported_extension() {
        let sink = DiagnosticSink::new();
        let doc = Document::new("Mufile.yaml", "name: web\n");

        assert!(parse(&doc, &sink).is_none());
        assert_eq!(sink.diagnostics()[0].location.as_deref(), Some("Mufile.yaml"));
    }
}
