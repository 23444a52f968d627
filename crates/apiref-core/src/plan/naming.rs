use crate::config::ApirefConfig;
use crate::transform::slugify;

/// Derives operation file names and links, and data type anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNaming {
    data_types_html: String,
    prefix: Option<String>,
}

impl PageNaming {
    /// `data_types_page` is the Markdown file name of the data types page;
    /// `prefix`, when set, is prepended to operation pages as `<prefix>-`.
    pub fn new(data_types_page: &str, prefix: Option<&str>) -> Self {
        Self {
            data_types_html: html_name(data_types_page),
            prefix: prefix.map(str::to_string),
        }
    }

    pub fn from_config(config: &ApirefConfig) -> Self {
        let prefix = config
            .branding
            .prefix_operation_pages
            .then_some(config.branding.slug.as_str());
        Self::new(&config.pages.data_types, prefix)
    }

    /// `getAccountInfo` → `getAccountInfo.md`
    pub fn operation_file_name(&self, operation_id: &str) -> String {
        self.prefixed(slugify(&format!("{operation_id}.md")))
    }

    /// `getAccountInfo` → `getAccountInfo.html`
    pub fn operation_link(&self, operation_id: &str) -> String {
        self.prefixed(slugify(&format!("{operation_id}.html")))
    }

    /// `Account Address` → `xrp-api-data-types.html#account_address`
    pub fn data_type_link(&self, title: &str) -> String {
        format!("{}#{}", self.data_types_html, slugify(&title.to_lowercase()))
    }

    fn prefixed(&self, slug: String) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}-{slug}"),
            None => slug,
        }
    }
}

/// Swap a trailing `.md` for `.html`.
pub fn html_name(markdown_name: &str) -> String {
    match markdown_name.strip_suffix(".md") {
        Some(stem) => format!("{stem}.html"),
        None => markdown_name.to_string(),
    }
}
