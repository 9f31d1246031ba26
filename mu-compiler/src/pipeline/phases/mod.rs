//! Built-in pipeline stages.
//!
//! - [`parse`] - decodes the document into a stack
//! - [`PostParseAnalyzer`] - structural checks on the raw parse tree
//! - [`Binder`] - semantic checks on the stack

mod analyze;
mod bind;
mod parse;

pub use analyze::PostParseAnalyzer;
pub use bind::Binder;
pub use parse::parse;

/// Stage name for locating and reading the input document.
pub const INPUT: &str = "input";
/// Stage name for parsing.
pub const PARSE: &str = "parse";
/// Stage name for target resolution.
pub const RESOLVE: &str = "resolve";
/// Stage name for backend code generation.
pub const CODEGEN: &str = "codegen";

/// Whether `name` is a legal stack, target or service name.
///
/// Names start with an ASCII letter and continue with letters, digits,
/// `-`, `_` or `.`, never containing `..`. Stack and target names end up in
/// output file names, so they must stay a single path component.
pub(crate) fn is_legal_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !name.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_legal_name() {
        assert!(is_legal_name("web"));
        assert!(is_legal_name("web-frontend_2"));
        assert!(is_legal_name("web.v1"));
        assert!(!is_legal_name("acme/web"));
        assert!(!is_legal_name("x/../../escaped"));
        assert!(!is_legal_name("web..prod"));
        assert!(!is_legal_name(""));
        assert!(!is_legal_name("2web"));
        assert!(!is_legal_name("-web"));
        assert!(!is_legal_name("web frontend"));
    }
}
