//! Output trait for rendering reports to different formats.

use std::fmt;

#[cfg(test)]
use miette::GraphicalTheme;
use miette::GraphicalReportHandler;
use mu_compiler::{Diagnostic, Severity};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render (terminal, buffer, etc).
pub trait Output {
    /// Render a diagnostic with its location and help.
    fn diagnostic(&mut self, diag: &Diagnostic);

    /// Render a success line.
    fn success(&mut self, text: &str);

    /// Render an indented key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// A diagnostic record viewed as a miette report, so the CLI renders every
/// diagnostic through the same handler whether or not it kept its source.
#[derive(Debug)]
pub struct RecordReport<'a>(pub &'a Diagnostic);

impl fmt::Display for RecordReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.message)?;
        if let Some(loc) = &self.0.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

impl std::error::Error for RecordReport<'_> {}

impl miette::Diagnostic for RecordReport<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.0
            .code
            .as_ref()
            .map(|code| Box::new(code) as Box<dyn fmt::Display + 'b>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.0.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info => miette::Severity::Advice,
        })
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.0
            .help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'b>)
    }
}

/// Render a diagnostic with `handler`.
///
/// Diagnostics that kept their source were already rendered with a snippet
/// when they were recorded; that text is used as is.
pub fn render_diagnostic(handler: &GraphicalReportHandler, diag: &Diagnostic) -> String {
    if let Some(rendered) = &diag.rendered {
        return rendered.trim_end().to_string();
    }
    let mut text = String::new();
    match handler.render_report(&mut text, &RecordReport(diag)) {
        Ok(()) => text.trim_end().to_string(),
        Err(_) => RecordReport(diag).to_string(),
    }
}

/// Terminal output implementation.
///
/// Errors and warnings go to stderr, everything else to stdout.
pub struct TerminalOutput {
    handler: GraphicalReportHandler,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self {
            handler: GraphicalReportHandler::new(),
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn diagnostic(&mut self, diag: &Diagnostic) {
        let text = render_diagnostic(&self.handler, diag);
        match diag.severity {
            Severity::Error | Severity::Warning => eprintln!("{}", text),
            Severity::Info => println!("{}", text),
        }
    }

    fn success(&mut self, text: &str) {
        println!("✓ {}", text);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Colorless, unwrapped rendering for assertions.
#[cfg(test)]
pub fn plain_handler() -> GraphicalReportHandler {
    GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).with_width(200)
}

/// Collects rendered lines in memory.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn diagnostic(&mut self, diag: &Diagnostic) {
        self.lines.push(render_diagnostic(&plain_handler(), diag));
    }

    fn success(&mut self, text: &str) {
        self.lines.push(format!("✓ {}", text));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("  {}: {}", key, value));
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
