use apiref_core::plan::OperationPage;
use apiref_core::resolve::RefResolver;
use apiref_core::transform::classify_parameters;
use minijinja::Environment;
use serde_json::{Map, Value};

use crate::error::MarkdownError;
use crate::templates::ENDPOINT_TEMPLATE;

/// Emit the page for one operation.
///
/// The template sees the operation's own fields plus `method`, `path`,
/// `path_params` and `query_params`; the added keys win on collision.
pub fn emit_operation(
    env: &Environment<'_>,
    resolver: &RefResolver<'_>,
    page: &OperationPage,
) -> Result<String, MarkdownError> {
    let tmpl = env.get_template(ENDPOINT_TEMPLATE)?;
    let params = classify_parameters(&page.operation, resolver)?;

    let mut ctx = match &page.operation {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    ctx.insert("method".to_string(), Value::from(page.method.as_str()));
    ctx.insert("path".to_string(), Value::from(page.path.as_str()));
    ctx.insert("path_params".to_string(), Value::Array(params.path));
    ctx.insert("query_params".to_string(), Value::Array(params.query));

    Ok(tmpl.render(&ctx)?)
}
