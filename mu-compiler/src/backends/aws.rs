//! AWS backend - emits a CloudFormation-style JSON template.

use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use mu_core::{Cloud, File, GeneratedFile, to_pascal_case};
use serde_json::{Map, Value, json};
use tracing::info;

use super::Backend;
use crate::{CompileError, Compiland, pipeline::Sink, pipeline::phases::CODEGEN};

const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// Generates one template per stack and target.
///
/// The template is written to `<output>/<stack>.<target>.json`. It carries a
/// `Metadata.Mu` block describing where it came from, and one
/// `Custom::<Type>` resource per service with the service's properties
/// passed through unchanged. Services whose ids collide are reported rather
/// than overwritten.
pub struct AwsBackend {
    diag: Arc<dyn Sink>,
    output: PathBuf,
}

impl AwsBackend {
    pub fn new(diag: Arc<dyn Sink>, output: &Path) -> Self {
        Self {
            diag,
            output: output.to_path_buf(),
        }
    }

    /// Path of the template for `comp`, relative to the output directory.
    pub fn template_file(comp: &Compiland<'_>) -> PathBuf {
        PathBuf::from(format!("{}.{}.json", comp.stack.name, comp.target.name))
    }

    /// Build the template for `comp` without writing it.
    pub fn template(&self, comp: &Compiland<'_>) -> Result<Value, CompileError> {
        let stack = comp.stack;

        let mut mu = Map::new();
        mu.insert("Stack".into(), json!(stack.name));
        if let Some(version) = &stack.version {
            mu.insert("Version".into(), json!(version));
        }
        mu.insert("Target".into(), json!(comp.target.name));
        mu.insert("Cloud".into(), json!(Cloud::Aws.name()));
        mu.insert("Scheduler".into(), json!(""));
        mu.insert("Source".into(), json!(comp.doc.file));

        let mut resources = Map::new();
        let mut owners: Vec<(String, &str)> = Vec::new();
        for (name, service) in &stack.services {
            let id = to_pascal_case(name);
            if let Some((_, owner)) = owners.iter().find(|(taken, _)| *taken == id) {
                return Err(CompileError::ResourceIdCollision {
                    service: name.clone(),
                    id,
                    owner: format!("service '{}'", owner),
                });
            }
            resources.insert(
                id.clone(),
                json!({
                    "Type": format!("Custom::{}", to_pascal_case(&service.kind)),
                    "Properties": service.properties,
                }),
            );
            owners.push((id, name.as_str()));
        }

        let description = stack
            .description
            .clone()
            .unwrap_or_else(|| format!("Mu stack '{}'", stack.name));

        Ok(json!({
            "AWSTemplateFormatVersion": TEMPLATE_FORMAT_VERSION,
            "Description": description,
            "Metadata": { "Mu": mu },
            "Resources": resources,
        }))
    }

    /// Write `template` for `comp`, reporting `CouldNotWriteOutput` on failure.
    ///
    /// The template file must be a single plain component of the output
    /// directory; names that would place it elsewhere are refused.
    pub(crate) fn emit(&self, comp: &Compiland<'_>, template: &Value) {
        let file = Self::template_file(comp);
        let path = self.output.join(&file);
        if !is_single_component(&file) {
            return self.write_failed(
                comp,
                path,
                "the template path escapes the output directory".to_string(),
            );
        }

        let content = match serde_json::to_string_pretty(template) {
            Ok(content) => content,
            Err(err) => return self.write_failed(comp, path, err.to_string()),
        };

        match File::new(file, content + "\n").write(&self.output) {
            Ok(path) => info!(path = %path.display(), "wrote template"),
            Err(err) => self.write_failed(comp, path, err.to_string()),
        }
    }

    fn write_failed(&self, comp: &Compiland<'_>, path: PathBuf, message: String) {
        self.fail(comp, CompileError::CouldNotWriteOutput { path, message });
    }

    pub(crate) fn fail(&self, comp: &Compiland<'_>, err: CompileError) {
        self.diag.error(CODEGEN, err, Some(comp.doc));
    }
}

fn is_single_component(file: &Path) -> bool {
    let mut components = file.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

impl Backend for AwsBackend {
    fn name(&self) -> &'static str {
        "aws"
    }

    fn codegen(&self, comp: &Compiland<'_>) {
        match self.template(comp) {
            Ok(template) => self.emit(comp, &template),
            Err(err) => self.fail(comp, err),
        }
    }
}
