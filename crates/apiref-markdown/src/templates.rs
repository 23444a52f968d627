use std::borrow::Cow;
use std::fs;
use std::path::Path;

use apiref_core::plan::naming::html_name;
use apiref_core::plan::{HttpMethod, PageNaming};
use apiref_core::transform::slugify;
use indexmap::IndexMap;
use minijinja::{Environment, Error, ErrorKind, UndefinedBehavior, Value};

use crate::error::MarkdownError;

pub const TOC_TEMPLATE: &str = "toc.md.j2";
pub const ENDPOINT_TEMPLATE: &str = "endpoint.md.j2";
pub const DATA_TYPES_TEMPLATE: &str = "datatypes.md.j2";

/// Template sources by name: the embedded defaults, optionally overridden
/// from a directory.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    sources: IndexMap<&'static str, Cow<'static, str>>,
}

impl TemplateSet {
    pub fn embedded() -> Self {
        Self {
            sources: IndexMap::from([
                (TOC_TEMPLATE, Cow::Borrowed(include_str!("../templates/toc.md.j2"))),
                (
                    ENDPOINT_TEMPLATE,
                    Cow::Borrowed(include_str!("../templates/endpoint.md.j2")),
                ),
                (
                    DATA_TYPES_TEMPLATE,
                    Cow::Borrowed(include_str!("../templates/datatypes.md.j2")),
                ),
            ]),
        }
    }

    /// Embedded templates, with any same-named file in `dir` taking precedence.
    pub fn with_overrides(dir: &Path) -> Result<Self, MarkdownError> {
        let mut set = Self::embedded();
        for (name, slot) in set.sources.iter_mut() {
            let path = dir.join(*name);
            if !path.is_file() {
                continue;
            }
            let content =
                fs::read_to_string(&path).map_err(|source| MarkdownError::TemplateOverride {
                    path: path.clone(),
                    source,
                })?;
            log::info!("using template override {}", path.display());
            *slot = Cow::Owned(content);
        }
        Ok(set)
    }

    pub fn source(&self, name: &str) -> Option<&str> {
        self.sources.get(name).map(|s| s.as_ref())
    }
}

/// Build the shared environment: templates, link functions, filters and globals.
pub fn build_environment<'s>(
    templates: &'s TemplateSet,
    naming: &PageNaming,
    product: &str,
    data_types_page: &str,
) -> Result<Environment<'s>, MarkdownError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Chainable);

    for (name, source) in &templates.sources {
        env.add_template(*name, source.as_ref())?;
    }

    let type_naming = naming.clone();
    env.add_function("type_link", move |title: String| {
        type_naming.data_type_link(&title)
    });
    let method_naming = naming.clone();
    env.add_function(
        "method_link",
        move |path: String, method: String, endpoint: Value| -> Result<String, Error> {
            let operation_id = endpoint.get_attr("operationId")?;
            match operation_id.as_str() {
                Some(id) => Ok(method_naming.operation_link(id)),
                None => Err(Error::new(
                    ErrorKind::InvalidOperation,
                    format!("operation {method} {path} has no operationId"),
                )),
            }
        },
    );

    env.add_filter("slugify", slugify_filter);
    env.add_filter("escape_table", escape_table);
    env.add_filter("ref_name", ref_name);
    env.add_filter("escape_pointer", escape_pointer);

    let methods: Vec<&str> = HttpMethod::ALL.iter().map(HttpMethod::as_str).collect();
    env.add_global("HTTP_METHODS", Value::from(methods));
    env.add_global("product", product.to_string());
    env.add_global("data_types_page", html_name(data_types_page));

    Ok(env)
}

fn slugify_filter(value: String) -> String {
    slugify(&value)
}

/// Make text safe for a Markdown table cell.
fn escape_table(value: String) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace('\n', " ")
        .trim()
        .to_string()
}

/// Final segment of a `#/...` pointer, as written.
fn ref_name(value: String) -> String {
    value.rsplit('/').next().unwrap_or_default().to_string()
}

/// A mapping key as it appears inside a `#/...` pointer.
fn escape_pointer(value: String) -> String {
    value.replace('~', "~0").replace('/', "~1")
}
