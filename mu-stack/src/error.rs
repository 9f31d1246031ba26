use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for mu-stack operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    ///
    /// serde_json reports 1-based line/column positions; these are converted
    /// back into a byte offset so the label lands on the offending character.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from(offset..offset));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }
}

fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{file}' is not valid UTF-8")]
    #[diagnostic(code(mu::encoding))]
    Encoding {
        file: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("unsupported Mufile extension '{ext}' in '{file}'")]
    #[diagnostic(
        code(mu::unsupported_syntax),
        help("Mufiles must end in .toml or .json")
    )]
    UnsupportedSyntax { file: String, ext: String },

    #[error("failed to parse Mufile: {}", .source.message())]
    #[diagnostic(code(mu::parse_error))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        source: toml::de::Error,
    },

    #[error("failed to parse Mufile: {source}")]
    #[diagnostic(code(mu::parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        source: serde_json::Error,
    },
}

impl Error {
    /// Byte offset of the error in its source, when known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Toml { span, .. } | Error::Json { span, .. } => {
                span.as_ref().map(|s| s.offset())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"name\": 1,\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 3), Some(4));
        assert_eq!(offset_of(src, 0, 0), None);
        assert_eq!(offset_of(src, 9, 9), Some(src.len()));
    }

    #[test]
    fn test_toml_error_has_span() {
        let ctx = SourceContext::new("name = ", "Mufile.toml");
        let source = toml::from_str::<toml::Table>(ctx.src()).unwrap_err();
        let err = ctx.toml_error(source);

        assert!(err.offset().is_some());
        assert!(err.to_string().starts_with("failed to parse Mufile"));
    }
}
