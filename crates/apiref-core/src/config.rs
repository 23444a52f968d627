use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level project configuration loaded from `.apiref.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApirefConfig {
    pub output: String,
    /// Directory whose template files override the embedded ones by name.
    pub templates: Option<PathBuf>,
    pub resolver: ResolverConfig,
    pub branding: BrandingConfig,
    pub pages: PagesConfig,
    pub manifest: ManifestConfig,
}

impl Default for ApirefConfig {
    fn default() -> Self {
        Self {
            output: "out".to_string(),
            templates: None,
            resolver: ResolverConfig::default(),
            branding: BrandingConfig::default(),
            pages: PagesConfig::default(),
            manifest: ManifestConfig::default(),
        }
    }
}

/// Limits applied while following local pointers.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Product naming used in page titles and file prefixes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    pub product: String,
    pub slug: String,
    /// Prefix operation pages with `<slug>-`.
    pub prefix_operation_pages: bool,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            product: "XRP-API".to_string(),
            slug: "xrp-api".to_string(),
            prefix_operation_pages: false,
        }
    }
}

/// Fixed output file names.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub toc: String,
    pub data_types: String,
    pub manifest: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            toc: "xrp-api-reference.md".to_string(),
            data_types: "xrp-api-data-types.md".to_string(),
            manifest: "xrp-api-pages.yaml".to_string(),
        }
    }
}

/// Display metadata written into the page manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub funnel: String,
    pub doc_type: String,
    pub targets: Vec<String>,
    pub readme_url: String,
    pub readme_html: String,
    pub readme_blurb: String,
    pub toc_blurb: String,
    pub data_types_blurb: String,
    /// Appended to the operation id when an operation has no description.
    pub blurb_suffix: String,
    pub readme_category: String,
    pub toc_category: String,
    pub data_types_category: String,
    pub operation_category: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            funnel: "Docs".to_string(),
            doc_type: "References".to_string(),
            targets: vec!["local".to_string()],
            readme_url: "https://github.com/ripple/xrp-api/blob/master/README.md".to_string(),
            readme_html: "xrp-api-readme.html".to_string(),
            readme_blurb: "Introduction and setup instructions for the API.".to_string(),
            toc_blurb: "List of all methods provided by the API.".to_string(),
            data_types_blurb: "Definitions of data types used in API requests and responses."
                .to_string(),
            blurb_suffix: " method of the API.".to_string(),
            readme_category: "Introduction".to_string(),
            toc_category: "API Reference".to_string(),
            data_types_category: "Data Types".to_string(),
            operation_category: "API Methods".to_string(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".apiref.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ApirefConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ApirefConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApirefConfig::default();
        assert_eq!(config.output, "out");
        assert!(config.templates.is_none());
        assert_eq!(config.resolver.max_depth, 64);
        assert_eq!(config.pages.toc, "xrp-api-reference.md");
        assert_eq!(config.pages.data_types, "xrp-api-data-types.md");
        assert!(!config.branding.prefix_operation_pages);
        assert_eq!(config.manifest.targets, vec!["local".to_string()]);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
output: site/refs
templates: my-templates
branding:
  product: Payments API
  slug: payments
  prefix_operation_pages: true
pages:
  toc: payments-reference.md
manifest:
  targets: [local, public]
  blurb_suffix: " endpoint."
"#;
        let config: ApirefConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.output, "site/refs");
        assert_eq!(config.templates, Some(PathBuf::from("my-templates")));
        assert_eq!(config.branding.product, "Payments API");
        assert!(config.branding.prefix_operation_pages);
        assert_eq!(config.pages.toc, "payments-reference.md");
        // Unset fields within a section keep their defaults
        assert_eq!(config.pages.data_types, "xrp-api-data-types.md");
        assert_eq!(config.manifest.targets.len(), 2);
        assert_eq!(config.manifest.blurb_suffix, " endpoint.");
        assert_eq!(config.manifest.funnel, "Docs");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "resolver: [not, a, mapping]\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
