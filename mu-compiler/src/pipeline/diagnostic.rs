//! Diagnostic records for the compilation pipeline.
//!
//! This module provides the record type stored in a [`Sink`](super::Sink)
//! for every error, warning or informational message a build produces.

use std::fmt;

use miette::{GraphicalReportHandler, GraphicalTheme};
use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A fatal error that stops the pipeline after the current stage.
    Error,
    /// A warning that doesn't prevent processing but should be addressed.
    Warning,
    /// Informational message about the compilation process.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a compilation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The stage that produced this diagnostic.
    pub phase: String,
    /// Stable diagnostic code (e.g., "MU110").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// The diagnostic message.
    pub message: String,
    /// Optional hint on how to fix the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Optional location (e.g., "Mufile.toml:3:7").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The miette report with its labelled source snippet, when the
    /// originating error carried source code.
    #[serde(skip)]
    pub rendered: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            code: None,
            message: message.into(),
            help: None,
            location: None,
            rendered: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    /// Create a new info diagnostic.
    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    /// Build a diagnostic from any miette diagnostic, keeping its code and help.
    ///
    /// Reports that point into source code are also rendered up front, since
    /// the source does not outlive the build.
    pub fn from_report(
        severity: Severity,
        phase: impl Into<String>,
        report: &dyn miette::Diagnostic,
    ) -> Self {
        Self {
            code: report.code().map(|c| c.to_string()),
            help: report.help().map(|h| h.to_string()),
            rendered: report.source_code().and_then(|_| render(report)),
            ..Self::new(severity, phase, report.to_string())
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

fn render(report: &dyn miette::Diagnostic) -> Option<String> {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    handler.render_report(&mut out, report).ok()?;
    Some(out)
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = &self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
