//! Mufile decoding from documents, files and strings.

use std::str::FromStr;

use mu_core::Document;

use crate::{Error, Result, SourceContext, Stack};

/// Concrete syntax of a Mufile, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Toml,
    Json,
}

impl Syntax {
    /// Every supported syntax, in detection preference order.
    pub const ALL: [Syntax; 2] = [Syntax::Toml, Syntax::Json];

    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Syntax::Toml => ".toml",
            Syntax::Json => ".json",
        }
    }

    /// Pick a syntax from an extension; the leading dot is optional.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "toml" => Some(Syntax::Toml),
            "json" => Some(Syntax::Json),
            _ => None,
        }
    }
}

impl FromStr for Stack {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_stack(s, "Mufile.toml", Syntax::Toml)
    }
}

impl Stack {
    /// Decode a stack from a document, picking the syntax from its extension.
    pub fn from_document(doc: &Document) -> Result<Self> {
        let ext = doc.extension().unwrap_or_default();
        let syntax = Syntax::from_extension(ext).ok_or_else(|| {
            Box::new(Error::UnsupportedSyntax {
                file: doc.file.clone(),
                ext: ext.to_string(),
            })
        })?;
        let content = doc.text().map_err(|e| {
            Box::new(Error::Encoding {
                file: doc.file.clone(),
                source: e,
            })
        })?;
        parse_stack(content, &doc.file, syntax)
    }
}

/// Parse a stack from content with the given filename for error reporting.
///
/// Target names are filled in from their map keys.
pub fn parse_stack(content: &str, filename: &str, syntax: Syntax) -> Result<Stack> {
    let source_ctx = SourceContext::new(content, filename);
    let mut stack: Stack = match syntax {
        Syntax::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?,
        Syntax::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?,
    };

    for (name, target) in stack.targets.iter_mut() {
        target.name = name.clone();
    }
    Ok(stack)
}
