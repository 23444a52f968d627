pub mod naming;

use serde::Serialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::parse::Document;
pub use naming::PageNaming;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// Every recognized method, in the order operations are enumerated.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];

    /// Lowercase key as it appears under a path item.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation page to generate.
#[derive(Debug, Clone, Serialize)]
pub struct OperationPage {
    pub path: String,
    pub method: HttpMethod,
    pub operation_id: String,
    /// Markdown file name, relative to the output root.
    pub file_name: String,
    /// Link to the rendered HTML page.
    pub link: String,
    pub description: Option<String>,
    #[serde(skip)]
    pub operation: Value,
}

/// Enumerate operations: paths in document order, then `methods` in order.
///
/// Methods missing at a path are skipped. Every operation must carry a
/// string `operationId`.
pub fn plan_operations(
    document: &Document,
    methods: &[HttpMethod],
    naming: &PageNaming,
) -> Result<Vec<OperationPage>, ParseError> {
    let mut pages = Vec::new();

    for (path, path_item) in document.paths()? {
        for &method in methods {
            let Some(operation) = path_item.get(method.as_str()) else {
                continue;
            };
            let operation_id = operation
                .get("operationId")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    ParseError::MissingField(format!("paths.{path}.{method}.operationId"))
                })?;

            let page = OperationPage {
                path: path.clone(),
                method,
                operation_id: operation_id.to_string(),
                file_name: naming.operation_file_name(operation_id),
                link: naming.operation_link(operation_id),
                description: operation
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                operation: operation.clone(),
            };
            log::debug!("planned {} {} -> {}", page.method, page.path, page.file_name);
            pages.push(page);
        }
    }

    log::info!("planned {} operation pages", pages.len());
    Ok(pages)
}
