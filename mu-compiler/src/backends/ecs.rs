//! AWS ECS scheduler layer.

use mu_core::to_pascal_case;
use serde_json::{Value, json};

use super::{AwsBackend, Backend};
use crate::{CompileError, Compiland};

/// Logical id of the cluster resource added to every ECS template.
pub const CLUSTER_RESOURCE: &str = "MuCluster";

/// Wraps [`AwsBackend`] to target ECS.
///
/// Adds an `AWS::ECS::Cluster` resource, makes every service depend on it,
/// and records the scheduler in the template metadata.
pub struct EcsBackend {
    inner: AwsBackend,
}

impl EcsBackend {
    pub fn new(inner: AwsBackend) -> Self {
        Self { inner }
    }

    pub fn template(&self, comp: &Compiland<'_>) -> Result<Value, CompileError> {
        let mut template = self.inner.template(comp)?;
        template["Metadata"]["Mu"]["Scheduler"] = json!("awsecs");

        if let Some(resources) = template["Resources"].as_object_mut() {
            if resources.contains_key(CLUSTER_RESOURCE) {
                let service = comp
                    .stack
                    .services
                    .keys()
                    .find(|name| to_pascal_case(name) == CLUSTER_RESOURCE)
                    .cloned()
                    .unwrap_or_default();
                return Err(CompileError::ResourceIdCollision {
                    service,
                    id: CLUSTER_RESOURCE.to_string(),
                    owner: "the ECS cluster".to_string(),
                });
            }
            for resource in resources.values_mut() {
                resource["DependsOn"] = json!(CLUSTER_RESOURCE);
            }
            resources.insert(
                CLUSTER_RESOURCE.to_string(),
                json!({
                    "Type": "AWS::ECS::Cluster",
                    "Properties": {
                        "ClusterName": format!("{}-{}", comp.stack.name, comp.target.name),
                    },
                }),
            );
        }

        Ok(template)
    }
}

impl Backend for EcsBackend {
    fn name(&self) -> &'static str {
        "aws:awsecs"
    }

    fn codegen(&self, comp: &Compiland<'_>) {
        match self.template(comp) {
            Ok(template) => self.inner.emit(comp, &template),
            Err(err) => self.inner.fail(comp, err),
        }
    }
}
