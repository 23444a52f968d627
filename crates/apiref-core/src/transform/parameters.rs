use serde_json::Value;

use crate::error::ResolveError;
use crate::resolve::{RefResolver, ref_of};

/// Path and query parameters of one operation, with `$ref` schemas resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedParameters {
    pub path: Vec<Value>,
    pub query: Vec<Value>,
}

/// Split an operation's `parameters` into path and query parameters.
///
/// A parameter that is itself a `$ref` is replaced by its target first. A
/// `$ref` schema is then resolved with its title attached, so templates can
/// link the parameter type to the data types page. Header and cookie
/// parameters are left out.
pub fn classify_parameters(
    operation: &Value,
    resolver: &RefResolver<'_>,
) -> Result<ClassifiedParameters, ResolveError> {
    let mut classified = ClassifiedParameters::default();

    let Some(parameters) = operation.get("parameters").and_then(Value::as_array) else {
        return Ok(classified);
    };

    for parameter in parameters {
        let mut parameter = match ref_of(parameter) {
            Some(pointer) => resolver.resolve(pointer, false)?,
            None => parameter.clone(),
        };

        let location = parameter.get("in").and_then(Value::as_str).unwrap_or_default();
        let bucket = match location {
            "path" => &mut classified.path,
            "query" => &mut classified.query,
            other => {
                log::debug!("skipping parameter located in {other:?}");
                continue;
            }
        };

        let schema_ref = parameter
            .get("schema")
            .and_then(ref_of)
            .map(str::to_string);
        if let Some(pointer) = schema_ref {
            let schema = resolver.resolve(&pointer, true)?;
            if let Some(map) = parameter.as_object_mut() {
                map.insert("schema".to_string(), schema);
            }
        }

        bucket.push(parameter);
    }

    Ok(classified)
}
