use apiref_core::config::ApirefConfig;
use apiref_core::plan::{HttpMethod, PageNaming, plan_operations};
use apiref_core::resolve::RefResolver;
use apiref_core::transform::normalize_schemas;
use apiref_core::{DocGenerator, Document, GeneratedFile};

use crate::emitters;
use crate::error::MarkdownError;
use crate::templates::{TemplateSet, build_environment};

/// Markdown reference page generator.
pub struct MarkdownGenerator;

impl DocGenerator for MarkdownGenerator {
    type Config = ApirefConfig;
    type Error = MarkdownError;

    fn generate(
        &self,
        document: &Document,
        config: &ApirefConfig,
    ) -> Result<Vec<GeneratedFile>, MarkdownError> {
        let templates = match &config.templates {
            Some(dir) => TemplateSet::with_overrides(dir)?,
            None => TemplateSet::embedded(),
        };
        let naming = PageNaming::from_config(config);
        let env = build_environment(
            &templates,
            &naming,
            &config.branding.product,
            &config.pages.data_types,
        )?;

        let pages = plan_operations(document, &HttpMethod::ALL, &naming)?;
        let mut files = vec![GeneratedFile {
            path: config.pages.toc.clone(),
            content: emitters::toc::emit_toc(&env, document, &pages)?,
        }];

        let resolver = RefResolver::with_config(document.root(), config.resolver);
        for page in &pages {
            files.push(GeneratedFile {
                path: page.file_name.clone(),
                content: emitters::operation::emit_operation(&env, &resolver, page)?,
            });
        }

        let schemas = normalize_schemas(document, config.resolver)?;
        files.push(GeneratedFile {
            path: config.pages.data_types.clone(),
            content: emitters::data_types::emit_data_types(&env, &schemas)?,
        });

        let manifest = emitters::manifest::build_manifest(config, &pages);
        files.push(GeneratedFile {
            path: config.pages.manifest.clone(),
            content: emitters::manifest::emit_manifest(&manifest)?,
        });

        log::info!("generated {} files", files.len());
        Ok(files)
    }
}
