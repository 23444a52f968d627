use std::path::PathBuf;

use apiref_core::error::{ParseError, ResolveError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to build template context: {0}")]
    Context(#[from] serde_json::Error),

    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_yaml_ng::Error),

    #[error("failed to read template {}: {source}", path.display())]
    TemplateOverride {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
