use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use apiref_core::config::{self, ApirefConfig, CONFIG_FILE_NAME};
use apiref_core::{DocGenerator, Document, output, parse};
use apiref_markdown::MarkdownGenerator;

#[derive(Parser)]
#[command(
    name = "apiref",
    about = "Generate Markdown API reference pages from an OpenAPI document",
    version
)]
struct Cli {
    /// Path to the API definition (YAML or JSON)
    api_def: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let cfg = try_load_config()?.unwrap_or_default();
    run(&cli.api_def, &cfg)
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<ApirefConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let loaded = config::load_config(&config_path)?;
    if loaded.is_some() {
        log::info!("loaded config from {}", config_path.display());
    }
    Ok(loaded)
}

fn load_document(path: &Path) -> Result<Document> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str());
    let document = parse::from_str_with_extension(&content, ext)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(document)
}

fn run(api_def: &Path, cfg: &ApirefConfig) -> Result<()> {
    let document = load_document(api_def)?;

    let output_dir = PathBuf::from(&cfg.output);
    eprintln!("Generating {} → {}", api_def.display(), output_dir.display());

    let files = MarkdownGenerator.generate(&document, cfg)?;
    for path in output::write_files(&files, &output_dir)? {
        eprintln!("  wrote {}", path.display());
    }

    eprintln!("Generated {} files in {}", files.len(), output_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r##"
info:
  title: Ping API
paths:
  /ping:
    get:
      operationId: getPing
      parameters:
        - name: id
          in: query
          schema:
            $ref: "#/components/schemas/Id"
components:
  schemas:
    Id:
      type: string
"##;

    fn config_for(dir: &Path) -> ApirefConfig {
        ApirefConfig {
            output: dir.join("out").to_string_lossy().into_owned(),
            ..ApirefConfig::default()
        }
    }

    #[test]
    fn test_cli_takes_one_positional() {
        let cli = Cli::try_parse_from(["apiref", "api.yaml"]).unwrap();
        assert_eq!(cli.api_def, PathBuf::from("api.yaml"));
        assert!(Cli::try_parse_from(["apiref"]).is_err());
        assert!(Cli::try_parse_from(["apiref", "a.yaml", "b.yaml"]).is_err());
    }

    #[test]
    fn test_run_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.yaml");
        fs::write(&input, SPEC).unwrap();
        let cfg = config_for(dir.path());

        run(&input, &cfg).unwrap();

        let out = dir.path().join("out");
        for name in [
            "xrp-api-reference.md",
            "getPing.md",
            "xrp-api-data-types.md",
            "xrp-api-pages.yaml",
        ] {
            assert!(out.join(name).is_file(), "{name} should be written");
        }
    }

    #[test]
    fn test_rerun_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.yaml");
        fs::write(&input, SPEC).unwrap();
        let cfg = config_for(dir.path());
        let page = dir.path().join("out").join("getPing.md");

        run(&input, &cfg).unwrap();
        fs::write(&page, "stale").unwrap();
        run(&input, &cfg).unwrap();

        assert!(fs::read_to_string(&page).unwrap().starts_with("# getPing"));
    }

    #[test]
    fn test_json_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.json");
        fs::write(
            &input,
            r#"{"paths": {"/ping": {"get": {"operationId": "getPing"}}}}"#,
        )
        .unwrap();
        run(&input, &config_for(dir.path())).unwrap();
        assert!(dir.path().join("out/getPing.md").is_file());
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&dir.path().join("nope.yaml"), &config_for(dir.path())).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
