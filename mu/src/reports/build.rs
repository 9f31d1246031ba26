//! Build command report data structures.

use std::path::{Path, PathBuf};

use mu_compiler::{BuildOutcome, Diagnostic};
use serde::{Serialize, Serializer};

use super::output::{Output, Report};

/// Report data from one build.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    /// Path the build was started from.
    pub input: PathBuf,
    /// Directory artifacts are written into.
    pub output: PathBuf,
    /// How far the build got.
    #[serde(serialize_with = "serialize_outcome")]
    pub outcome: BuildOutcome,
    /// Every diagnostic reported during the build.
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    pub fn new(
        input: &Path,
        output: &Path,
        outcome: BuildOutcome,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            outcome,
            diagnostics,
        }
    }

    /// Whether the build succeeded (no errors).
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }
}

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    anonymous: Option<bool>,
}

fn serialize_outcome<S: Serializer>(outcome: &BuildOutcome, s: S) -> Result<S::Ok, S::Error> {
    let record = match outcome {
        BuildOutcome::Failed => OutcomeRecord {
            status: "failed",
            target: None,
            arch: None,
            anonymous: None,
        },
        BuildOutcome::Checked => OutcomeRecord {
            status: "checked",
            target: None,
            arch: None,
            anonymous: None,
        },
        BuildOutcome::Generated {
            target,
            arch,
            anonymous,
        } => OutcomeRecord {
            status: "generated",
            target: Some(target),
            arch: Some(arch.to_string()),
            anonymous: Some(*anonymous),
        },
    };
    record.serialize(s)
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            out.diagnostic(diag);
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        match &self.outcome {
            BuildOutcome::Failed => {
                let errors = self.error_count();
                out.key_value(
                    "build failed",
                    &format!("{} error{}", errors, if errors == 1 { "" } else { "s" }),
                );
            }
            BuildOutcome::Checked => {
                out.success(&format!("{} is valid", self.input.display()));
            }
            BuildOutcome::Generated {
                target,
                arch,
                anonymous,
            } => {
                if *anonymous {
                    out.success(&format!("generated anonymous target '{}'", target));
                } else {
                    out.success(&format!("generated target '{}'", target));
                }
                out.key_value("arch", &arch.to_string());
                out.key_value("output", &self.output.display().to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mu_compiler::{CompileError, Severity};
    use mu_core::{Arch, Cloud, Scheduler};

    use super::*;
    use crate::reports::output::BufferOutput;

    fn render(report: &BuildReport) -> String {
        let mut out = BufferOutput::default();
        report.render(&mut out);
        out.lines.join("\n")
    }

    #[test]
    fn test_render_failure() {
        let diag =
            Diagnostic::from_report(Severity::Error, "resolve", &CompileError::MissingTarget)
                .at("Mufile.toml");
        let report = BuildReport::new(
            Path::new("."),
            Path::new("out"),
            BuildOutcome::Failed,
            vec![diag],
        );

        let text = render(&report);

        assert!(text.contains("MU110"));
        assert!(text.contains("(at Mufile.toml)"));
        assert!(text.contains("mark one of the stack's targets with `default = true`"));
        assert!(text.ends_with("\n\n  build failed: 1 error"));
    }

    #[test]
    fn test_render_generated() {
        let report = BuildReport::new(
            Path::new("."),
            Path::new("out"),
            BuildOutcome::Generated {
                target: "prod".into(),
                arch: Arch::for_cloud(Cloud::Aws).with_scheduler(Scheduler::AwsEcs),
                anonymous: false,
            },
            Vec::new(),
        );

        insta::assert_snapshot!(render(&report), @r"
        ✓ generated target 'prod'
          arch: aws:awsecs
          output: out
        ");
    }

    #[test]
    fn test_json_outcome() {
        let report = BuildReport::new(
            Path::new("."),
            Path::new("out"),
            BuildOutcome::Generated {
                target: "prod".into(),
                arch: Arch::for_cloud(Cloud::Aws),
                anonymous: false,
            },
            vec![Diagnostic::warning("bind", "stack 'web' declares no services")],
        );

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(
            value["outcome"],
            serde_json::json!({
                "status": "generated",
                "target": "prod",
                "arch": "aws",
                "anonymous": false,
            })
        );
        assert_eq!(value["diagnostics"][0]["severity"], "warning");
        assert!(value["diagnostics"][0].get("code").is_none());
    }

    #[test]
    fn test_json_failed_outcome() {
        let report =
            BuildReport::new(Path::new("."), Path::new("out"), BuildOutcome::Failed, vec![]);

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["outcome"], serde_json::json!({ "status": "failed" }));
    }
}
