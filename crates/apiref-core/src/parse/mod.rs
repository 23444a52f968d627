pub mod document;

use serde_yaml_ng::Value as YamlValue;

use crate::error::ParseError;
pub use document::Document;

/// Parse an API document from YAML.
///
/// Merge keys (`<<: *anchor`) are expanded before the tree is handed out.
pub fn from_yaml(input: &str) -> Result<Document, ParseError> {
    let mut yaml: YamlValue = serde_yaml_ng::from_str(input)?;
    yaml.apply_merge()?;
    stringify_keys(&mut yaml);
    let root: serde_json::Value = serde_yaml_ng::from_value(yaml)?;
    Ok(Document::new(root))
}

/// Scalar mapping keys such as `200` or `true` become their string form.
fn stringify_keys(value: &mut YamlValue) {
    match value {
        YamlValue::Mapping(map) => {
            for (key, mut child) in std::mem::take(map) {
                stringify_keys(&mut child);
                let key = match key {
                    YamlValue::Number(n) => YamlValue::String(n.to_string()),
                    YamlValue::Bool(b) => YamlValue::String(b.to_string()),
                    YamlValue::Null => YamlValue::String("null".to_string()),
                    other => other,
                };
                map.insert(key, child);
            }
        }
        YamlValue::Sequence(items) => items.iter_mut().for_each(stringify_keys),
        YamlValue::Tagged(tagged) => stringify_keys(&mut tagged.value),
        _ => {}
    }
}

/// Parse an API document from JSON.
pub fn from_json(input: &str) -> Result<Document, ParseError> {
    let root: serde_json::Value = serde_json::from_str(input)?;
    Ok(Document::new(root))
}

/// Parse by file extension: `.json` uses the JSON parser, anything else YAML.
pub fn from_str_with_extension(
    input: &str,
    extension: Option<&str>,
) -> Result<Document, ParseError> {
    match extension {
        Some("json") => from_json(input),
        _ => from_yaml(input),
    }
}
