use minijinja::{Environment, context};
use serde_json::{Map, Value};

use crate::error::MarkdownError;
use crate::templates::DATA_TYPES_TEMPLATE;

/// Emit the data types page from normalized schemas.
pub fn emit_data_types(
    env: &Environment<'_>,
    schemas: &Map<String, Value>,
) -> Result<String, MarkdownError> {
    let tmpl = env.get_template(DATA_TYPES_TEMPLATE)?;
    Ok(tmpl.render(context! {
        schemas => schemas,
    })?)
}
