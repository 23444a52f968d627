use serde_json::Value;

use crate::config::ResolverConfig;
use crate::error::ResolveError;

/// Resolves local `#/...` pointers against a document tree.
///
/// Resolution is a single hop: a target that is itself a `$ref` node is
/// returned unchanged.
#[derive(Debug, Clone, Copy)]
pub struct RefResolver<'a> {
    root: &'a Value,
    max_depth: usize,
}

impl<'a> RefResolver<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self::with_config(root, ResolverConfig::default())
    }

    pub fn with_config(root: &'a Value, config: ResolverConfig) -> Self {
        Self {
            root,
            max_depth: config.max_depth,
        }
    }

    /// Return an owned copy of the node addressed by `pointer`.
    ///
    /// With `attach_title`, a mapping target gets a `title` field set to the
    /// pointer's final segment exactly as written (still escaped), which gives
    /// title-less schemas a name to link by.
    pub fn resolve(&self, pointer: &str, attach_title: bool) -> Result<Value, ResolveError> {
        let target = self.lookup(pointer)?;
        let mut resolved = target.clone();

        if attach_title {
            let raw_last = raw_segments(pointer)?.last().copied().unwrap_or_default();
            match resolved {
                Value::Object(ref mut map) => {
                    map.insert("title".to_string(), Value::String(raw_last.to_string()));
                }
                _ => log::debug!("not attaching title to non-mapping target of {pointer}"),
            }
        }

        Ok(resolved)
    }

    /// Borrow the node addressed by `pointer`.
    pub fn lookup(&self, pointer: &str) -> Result<&'a Value, ResolveError> {
        let segments = raw_segments(pointer)?;
        if segments.len() > self.max_depth {
            return Err(ResolveError::TooDeep {
                pointer: pointer.to_string(),
                limit: self.max_depth,
            });
        }

        log::debug!("resolving {pointer}");
        let mut current = self.root;
        for raw in segments {
            let key = unescape_segment(raw);
            current = step(current, &key).ok_or_else(|| ResolveError::RefTargetNotFound {
                key: key.clone(),
                pointer: pointer.to_string(),
            })?;
        }
        Ok(current)
    }
}

/// Descend one level: sequences by integer index, mappings by key.
fn step<'v>(node: &'v Value, key: &str) -> Option<&'v Value> {
    match node {
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        Value::Object(map) => map.get(key),
        _ => None,
    }
}

/// Split a `#/a/b` pointer into its still-escaped segments.
fn raw_segments(pointer: &str) -> Result<Vec<&str>, ResolveError> {
    let rest = pointer
        .strip_prefix("#/")
        .ok_or_else(|| ResolveError::InvalidRefFormat(pointer.to_string()))?;
    Ok(rest.split('/').collect())
}

/// Decode `~1` to `/` and then `~0` to `~`.
pub fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// Return the `$ref` string of a node, if it has one.
pub fn ref_of(node: &Value) -> Option<&str> {
    node.get("$ref").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "paths": {
                "/users/{id}": { "get": { "operationId": "getUser" } },
                "/a~b": { "get": { "operationId": "tilde" } }
            },
            "components": {
                "schemas": {
                    "Address": { "type": "string", "description": "An address." },
                    "Alias": { "$ref": "#/components/schemas/Address" }
                }
            },
            "servers": [ { "url": "https://one" }, { "url": "https://two" } ]
        })
    }

    #[test]
    fn test_resolve_existing_node() {
        let root = doc();
        let resolver = RefResolver::new(&root);
        let node = resolver
            .resolve("#/components/schemas/Address", false)
            .unwrap();
        assert_eq!(node, root["components"]["schemas"]["Address"]);
    }

    #[test]
    fn test_resolve_escaped_segments() {
        let root = doc();
        let resolver = RefResolver::new(&root);
        let op = resolver.resolve("#/paths/~1users~1{id}/get", false).unwrap();
        assert_eq!(op["operationId"], "getUser");
        let op = resolver.resolve("#/paths/~1a~0b/get", false).unwrap();
        assert_eq!(op["operationId"], "tilde");
    }

    #[test]
    fn test_resolve_sequence_index() {
        let root = doc();
        let resolver = RefResolver::new(&root);
        let server = resolver.resolve("#/servers/1/url", false).unwrap();
        assert_eq!(server, "https://two");
    }

    #[test]
    fn test_missing_final_segment_names_key() {
        let root = doc();
        let resolver = RefResolver::new(&root);
        let err = resolver
            .resolve("#/components/schemas/Missing", false)
            .unwrap_err();
        match err {
            ResolveError::RefTargetNotFound { key, pointer } => {
                assert_eq!(key, "Missing");
                assert_eq!(pointer, "#/components/schemas/Missing");
            }
            other => panic!("expected RefTargetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_intermediate_segment() {
        let root = doc();
        let resolver = RefResolver::new(&root);
        let err = resolver.resolve("#/nope/schemas/Address", false).unwrap_err();
        assert!(matches!(err, ResolveError::RefTargetNotFound { ref key, .. } if key == "nope"));
    }

    #[test]
    fn test_index_out_of_range_and_non_integer() {
        let root = doc();
        let resolver = RefResolver::new(&root);
        assert!(resolver.resolve("#/servers/5", false).is_err());
        assert!(resolver.resolve("#/servers/first", false).is_err());
    }

    #[test]
    fn test_descend_through_scalar_fails() {
        let root = doc();
        let resolver = RefResolver::new(&root);
        let err = resolver
            .resolve("#/components/schemas/Address/type/deeper", false)
            .unwrap_err();
        assert!(matches!(err, ResolveError::RefTargetNotFound { ref key, .. } if key == "deeper"));
    }

    #[test]
    fn test_invalid_pointer_format() {
        let root = doc();
        let resolver = RefResolver::new(&root);
        for bad in ["", "#", "components/schemas/Address", "/components", "other.yaml#/a"] {
            let err = resolver.resolve(bad, false).unwrap_err();
            assert!(
                matches!(err, ResolveError::InvalidRefFormat(_)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_attach_title() {
        let root = json!({ "components": { "schemas": { "Hash": { "type": "string" } } } });
        let resolver = RefResolver::new(&root);
        let node = resolver.resolve("#/components/schemas/Hash", true).unwrap();
        assert_eq!(node["title"], "Hash");
        assert_eq!(node["type"], "string");
        // The document itself is untouched
        assert!(root["components"]["schemas"]["Hash"].get("title").is_none());
    }

    #[test]
    fn test_unescape_order() {
        // `~01` is an escaped `~` followed by `1`, not an escaped `/`
        assert_eq!(unescape_segment("a~01b"), "a~1b");
        assert_eq!(unescape_segment("~1users~1{id}"), "/users/{id}");
        assert_eq!(unescape_segment("plain"), "plain");
    }

    #[test]
    fn test_attach_title_keeps_escaped_form() {
        let root = json!({ "defs": { "a/b": { "type": "integer" } } });
        let resolver = RefResolver::new(&root);
        let node = resolver.resolve("#/defs/a~1b", true).unwrap();
        assert_eq!(node["title"], "a~1b");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let root = doc();
        let resolver = RefResolver::new(&root);
        let first = resolver.resolve("#/components/schemas/Address", true).unwrap();
        let second = resolver.resolve("#/components/schemas/Address", true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_hop_only() {
        let root = doc();
        let resolver = RefResolver::new(&root);
        let alias = resolver.resolve("#/components/schemas/Alias", false).unwrap();
        assert_eq!(ref_of(&alias), Some("#/components/schemas/Address"));
    }

    #[test]
    fn test_depth_limit() {
        let root = doc();
        let resolver = RefResolver::with_config(&root, ResolverConfig { max_depth: 2 });
        let err = resolver
            .resolve("#/components/schemas/Address", false)
            .unwrap_err();
        assert!(matches!(err, ResolveError::TooDeep { limit: 2, .. }));
        assert!(resolver.resolve("#/paths/~1a~0b", false).is_ok());
    }
}
