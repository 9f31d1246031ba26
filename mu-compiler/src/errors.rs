//! Error and warning catalog.
//!
//! Every diagnostic the compiler can report has a stable `MU<id>` code.
//! Ids in the 1xx range are errors, 2xx are warnings.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use mu_core::Arch;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CompileError {
    #[error("no Mufile was found in '{path}' or any of its parents")]
    #[diagnostic(
        code(MU100),
        help("create a Mufile.toml or Mufile.json, or pass its path explicitly")
    )]
    MissingMufile { path: PathBuf },

    #[error("could not read Mufile '{path}': {source}")]
    #[diagnostic(code(MU101))]
    CouldNotReadMufile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    #[diagnostic(code(MU102))]
    InvalidMufile(Box<mu_stack::Error>),

    #[error("failed to parse Mufile: {message}")]
    #[diagnostic(code(MU102))]
    MufileSyntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
    },

    #[error("illegal {kind} name '{name}'")]
    #[diagnostic(
        code(MU103),
        help("names start with a letter and contain only letters, digits, '-', '_' or single '.'")
    )]
    IllegalName { kind: &'static str, name: String },

    #[error("service '{service}' is missing a type")]
    #[diagnostic(code(MU104), help("add `type = \"namespace/name\"` to the service"))]
    MissingServiceType { service: String },

    #[error("service '{service}' has illegal type '{kind}'")]
    #[diagnostic(
        code(MU105),
        help("service types take the form `namespace/name`, e.g. `mu/container`")
    )]
    IllegalServiceType { service: String, kind: String },

    #[error("neither a target nor a cloud architecture was given, and no default target was found")]
    #[diagnostic(
        code(MU110),
        help("pass --target or --arch, or mark one of the stack's targets with `default = true`")
    )]
    MissingTarget,

    #[error("a target named '{0}' was not found in the Mufile or in the cluster settings")]
    #[diagnostic(code(MU111))]
    CloudTargetNotFound(String),

    #[error("unrecognized cloud architecture '{0}'")]
    #[diagnostic(code(MU112), help("recognized clouds are: aws, gcp, azure, vmware"))]
    UnrecognizedCloudArch(String),

    #[error("unrecognized scheduler architecture '{0}'")]
    #[diagnostic(
        code(MU113),
        help("recognized schedulers are: swarm, kubernetes, mesos, awsecs, gcpgke, azureacs")
    )]
    UnrecognizedSchedulerArch(String),

    #[error(
        "the requested architecture '{existing}' conflicts with target '{target}' architecture '{resolved}'"
    )]
    #[diagnostic(
        code(MU114),
        help("drop --arch to use the target's architecture, or pick a different target")
    )]
    ConflictingTargetArchSelection {
        existing: Arch,
        target: String,
        resolved: Arch,
    },

    #[error("target '{target}' does not declare a cloud and none was requested")]
    #[diagnostic(code(MU115), help("add `cloud = \"...\"` to the target, or pass --arch"))]
    MissingCloudArch { target: String },

    #[error("architecture '{0}' is not yet supported")]
    #[diagnostic(code(MU120))]
    UnsupportedArch(Arch),

    #[error("could not write '{path}': {message}")]
    #[diagnostic(code(MU121))]
    CouldNotWriteOutput { path: PathBuf, message: String },

    #[error("service '{service}' maps to resource id '{id}', which is already used by {owner}")]
    #[diagnostic(
        code(MU122),
        help("rename the service so that its PascalCase form is unique")
    )]
    ResourceIdCollision {
        service: String,
        id: String,
        owner: String,
    },
}

impl From<Box<mu_stack::Error>> for CompileError {
    /// Syntax errors keep their source and span so they can be rendered with
    /// a labelled snippet.
    fn from(err: Box<mu_stack::Error>) -> Self {
        match *err {
            mu_stack::Error::Toml { src, span, source } => CompileError::MufileSyntax {
                message: source.message().to_string(),
                src,
                span,
            },
            mu_stack::Error::Json { src, span, source } => CompileError::MufileSyntax {
                message: source.to_string(),
                src,
                span,
            },
            other => CompileError::InvalidMufile(Box::new(other)),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum CompileWarning {
    #[error("multiple default targets declared; using '{chosen}' and ignoring {ignored}")]
    #[diagnostic(code(MU200))]
    MultipleDefaultTargets { chosen: String, ignored: String },

    #[error("stack '{0}' declares no services")]
    #[diagnostic(code(MU201))]
    EmptyStack(String),
}
