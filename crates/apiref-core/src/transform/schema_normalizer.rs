use serde_json::{Map, Value};

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::parse::Document;
use crate::resolve::{RefResolver, ref_of};

/// Flatten one level of `$ref` indirection in `components.schemas`.
///
/// Runs on a private copy of the document in two passes:
///
/// 1. every property whose value carries `$ref` is replaced by its target;
/// 2. every schema that is itself a `$ref` (an alias) is replaced by its
///    target, looked up after pass 1 so aliases see flattened properties.
///
/// Each lookup is a single hop against the working copy as it stands at that
/// moment. Alias-of-alias chains and properties pointing at aliases are not
/// followed further.
pub fn normalize_schemas(
    document: &Document,
    config: ResolverConfig,
) -> Result<Map<String, Value>, ResolveError> {
    let mut working = document.root().clone();

    let names: Vec<String> = match document.schemas() {
        Some(schemas) => schemas.keys().cloned().collect(),
        None => {
            log::warn!("document has no components.schemas; data types page will be empty");
            return Ok(Map::new());
        }
    };

    // Pass 1: properties
    for name in &names {
        let refs: Vec<(String, String)> = match schema_at(&working, name)
            .and_then(|s| s.get("properties"))
            .and_then(Value::as_object)
        {
            Some(properties) => properties
                .iter()
                .filter_map(|(prop, value)| ref_of(value).map(|r| (prop.clone(), r.to_string())))
                .collect(),
            None => continue,
        };

        for (prop, pointer) in refs {
            let resolved = RefResolver::with_config(&working, config).resolve(&pointer, false)?;
            if let Some(slot) = schema_at_mut(&mut working, name)
                .and_then(|s| s.get_mut("properties"))
                .and_then(|p| p.get_mut(&prop))
            {
                *slot = resolved;
            }
        }
    }

    // Pass 2: aliases
    for name in &names {
        let pointer = match schema_at(&working, name).and_then(ref_of) {
            Some(pointer) => pointer.to_string(),
            None => continue,
        };
        let resolved = RefResolver::with_config(&working, config).resolve(&pointer, false)?;
        if let Some(slot) = schema_at_mut(&mut working, name) {
            *slot = resolved;
        }
    }

    let schemas = match working
        .get_mut("components")
        .and_then(|c| c.get_mut("schemas"))
        .map(Value::take)
    {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    log::info!("normalized {} schemas", schemas.len());
    Ok(schemas)
}

fn schema_at<'v>(root: &'v Value, name: &str) -> Option<&'v Value> {
    root.get("components")?.get("schemas")?.get(name)
}

fn schema_at_mut<'v>(root: &'v mut Value, name: &str) -> Option<&'v mut Value> {
    root.get_mut("components")?.get_mut("schemas")?.get_mut(name)
}
