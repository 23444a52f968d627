use apiref_core::config::ApirefConfig;
use apiref_core::plan::OperationPage;
use apiref_core::plan::naming::html_name;
use serde::Serialize;

use crate::error::MarkdownError;

/// One generated page as listed for the documentation site builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub funnel: String,
    pub doc_type: String,
    pub supercategory: String,
    pub targets: Vec<String>,
    /// Markdown source: a path under the output root, or an external URL.
    pub md: String,
    pub html: String,
    pub blurb: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub pages: Vec<PageDescriptor>,
}

/// README, data types page, table of contents, then one entry per operation.
pub fn build_manifest(config: &ApirefConfig, operations: &[OperationPage]) -> Manifest {
    let meta = &config.manifest;
    let descriptor = |md: String, html: String, blurb: String, category: &str| PageDescriptor {
        funnel: meta.funnel.clone(),
        doc_type: meta.doc_type.clone(),
        supercategory: config.branding.product.clone(),
        targets: meta.targets.clone(),
        md,
        html,
        blurb,
        category: category.to_string(),
    };

    let mut pages = vec![
        descriptor(
            meta.readme_url.clone(),
            meta.readme_html.clone(),
            meta.readme_blurb.clone(),
            &meta.readme_category,
        ),
        descriptor(
            config.pages.data_types.clone(),
            html_name(&config.pages.data_types),
            meta.data_types_blurb.clone(),
            &meta.data_types_category,
        ),
        descriptor(
            config.pages.toc.clone(),
            html_name(&config.pages.toc),
            meta.toc_blurb.clone(),
            &meta.toc_category,
        ),
    ];

    pages.extend(operations.iter().map(|op| {
        let blurb = op
            .description
            .clone()
            .unwrap_or_else(|| format!("{}{}", op.operation_id, meta.blurb_suffix));
        descriptor(
            op.file_name.clone(),
            op.link.clone(),
            blurb,
            &meta.operation_category,
        )
    }));

    Manifest { pages }
}

/// Serialize the manifest as YAML.
pub fn emit_manifest(manifest: &Manifest) -> Result<String, MarkdownError> {
    Ok(serde_yaml_ng::to_string(manifest)?)
}
