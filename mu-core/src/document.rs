use std::path::Path;

/// A named source buffer handed to the compiler.
///
/// A document is created by the caller (from disk or from memory), owned by a
/// single build, and dropped once the build completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name used for diagnostics and for choosing a decoder.
    pub file: String,
    /// Raw contents.
    pub body: Vec<u8>,
}

impl Document {
    pub fn new(file: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            file: file.into(),
            body: body.into(),
        }
    }

    /// Read a document from disk.
    pub fn read(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read(path)?;
        Ok(Self::new(path.display().to_string(), body))
    }

    /// The file extension including the leading dot (e.g. `.toml`).
    pub fn extension(&self) -> Option<&str> {
        let name = Path::new(&self.file).file_name()?.to_str()?;
        name.rfind('.').map(|idx| &name[idx..])
    }

    /// The body as UTF-8 text.
    pub fn text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.body)
    }

    /// Converts a byte offset into a 1-based `(line, column)` pair.
    ///
    /// Offsets past the end are clamped to the end of the body.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.body.len());
        let before = &self.body[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let col = match before.iter().rposition(|&b| b == b'\n') {
            Some(nl) => offset - nl,
            None => offset + 1,
        };
        (line, col)
    }
}
