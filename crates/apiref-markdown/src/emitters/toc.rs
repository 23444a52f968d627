use apiref_core::Document;
use apiref_core::plan::OperationPage;
use minijinja::Environment;
use serde_json::{Map, Value};

use crate::error::MarkdownError;
use crate::templates::TOC_TEMPLATE;

/// Emit the table-of-contents page.
///
/// Every top-level key of the document is available to the template, along
/// with `operations`, the planned pages in enumeration order.
pub fn emit_toc(
    env: &Environment<'_>,
    document: &Document,
    pages: &[OperationPage],
) -> Result<String, MarkdownError> {
    let tmpl = env.get_template(TOC_TEMPLATE)?;

    let mut ctx = match document.root() {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    ctx.insert("operations".to_string(), serde_json::to_value(pages)?);

    Ok(tmpl.render(&ctx)?)
}
