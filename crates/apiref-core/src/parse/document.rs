use serde_json::{Map, Value};

use crate::error::ParseError;

/// An API description held as an ordered tree of mappings, sequences and scalars.
///
/// The tree is never mutated after loading. Stages that replace nodes
/// (schema normalization, parameter resolution) work on their own copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The `paths` mapping, in document order.
    pub fn paths(&self) -> Result<&Map<String, Value>, ParseError> {
        self.root
            .get("paths")
            .and_then(Value::as_object)
            .ok_or_else(|| ParseError::MissingField("paths".to_string()))
    }

    /// The `components.schemas` mapping, if the document has one.
    pub fn schemas(&self) -> Option<&Map<String, Value>> {
        self.root
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(Value::as_object)
    }
}
