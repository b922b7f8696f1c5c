//! End-to-end runs of `civic` subcommands.

use civic_cli::{Cli, Error, run};
use civic_core::{ConfigManager, SiteConfig};
use clap::Parser;
use std::path::Path;
use tempfile::TempDir;

const LEGISLATIVE_JSON: &str = r#"[
    {"name": "Jon Ossoff", "title": "Senator", "party": "Democratic", "state": "GA",
     "phone": "(202) 224-3521"}
]"#;

const CONCERNS_JSON: &str = r#"{
    "concerns": [
        {"id": "healthcare", "title": "Healthcare", "description": "Access and cost",
         "relevantOfficials": ["jon-ossoff"], "isActive": true, "order": 1}
    ],
    "metadata": {"lastUpdated": "2025-10-10T12:00:00Z"}
}"#;

/// A workspace with a data dir and a config file pointing at it.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join("legislative.json"), LEGISLATIVE_JSON).unwrap();
        std::fs::write(data.join("concerns.json"), CONCERNS_JSON).unwrap();

        let mut config = SiteConfig::default();
        config.data.dir = data.display().to_string();
        config.output.dir = dir.path().join("public").display().to_string();
        std::fs::write(
            dir.path().join("civic.toml"),
            config.to_toml_string().unwrap(),
        )
        .unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn config(&self) -> String {
        self.path().join("civic.toml").display().to_string()
    }

    async fn run(&self, args: &[&str]) -> civic_cli::Result<()> {
        let config = self.config();
        let mut argv = vec!["civic", "--config", config.as_str()];
        argv.extend_from_slice(args);
        run(Cli::try_parse_from(argv).unwrap()).await
    }
}

#[tokio::test]
async fn test_build_uses_config_directories() {
    let ws = Workspace::new();
    ws.run(&["build"]).await.unwrap();

    let officials = std::fs::read_to_string(ws.path().join("public/officials.html")).unwrap();
    assert!(officials.contains("Jon Ossoff"));
    let concerns = std::fs::read_to_string(ws.path().join("public/concerns.html")).unwrap();
    assert!(concerns.contains("Last updated: 10/10/2025"));
}

#[tokio::test]
async fn test_build_out_flag_overrides_config() {
    let ws = Workspace::new();
    let out = ws.path().join("elsewhere");
    ws.run(&["build", "--out", out.to_str().unwrap()]).await.unwrap();

    assert!(out.join("officials.html").exists());
    assert!(!ws.path().join("public").exists());
}

#[tokio::test]
async fn test_strict_build_fails_on_invalid_concerns() {
    let ws = Workspace::new();
    std::fs::write(
        ws.path().join("data/concerns.json"),
        r#"{"concerns": [{"id": "x", "title": "X", "description": "",
            "relevantOfficials": []}]}"#,
    )
    .unwrap();

    let result = ws.run(&["build", "--strict"]).await;
    assert!(matches!(result, Err(Error::Render(_))));

    ws.run(&["build"]).await.unwrap();
    assert!(ws.path().join("public/concerns.html").exists());
}

#[tokio::test]
async fn test_validate_reports_schema_errors() {
    let ws = Workspace::new();
    let valid = ws.path().join("data/concerns.json");
    ws.run(&["validate", valid.to_str().unwrap()]).await.unwrap();

    let invalid = ws.path().join("bad.json");
    std::fs::write(&invalid, r#"{"concerns": [{"id": "x"}]}"#).unwrap();
    let result = ws.run(&["validate", invalid.to_str().unwrap()]).await;
    match result {
        Err(Error::Invalid { count, .. }) => assert!(count >= 1),
        other => panic!("expected schema errors, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validate_malformed_json() {
    let ws = Workspace::new();
    let path = ws.path().join("broken.json");
    std::fs::write(&path, "{").unwrap();
    let result = ws.run(&["validate", path.to_str().unwrap()]).await;
    assert!(matches!(result, Err(Error::Json(_))));
}

#[tokio::test]
async fn test_concerns_lookup() {
    let ws = Workspace::new();
    ws.run(&["concerns"]).await.unwrap();
    ws.run(&["concerns", "healthcare"]).await.unwrap();

    let result = ws.run(&["concerns", "taxes"]).await;
    assert!(matches!(
        result,
        Err(Error::Core(civic_core::Error::NotFound { .. }))
    ));
}

#[tokio::test]
async fn test_config_set_then_build_reads_it() {
    let ws = Workspace::new();
    ws.run(&["config", "set", "site.title", "Georgia Officials"])
        .await
        .unwrap();
    ws.run(&["build"]).await.unwrap();

    let officials = std::fs::read_to_string(ws.path().join("public/officials.html")).unwrap();
    assert!(officials.contains("<title>Georgia Officials | Officials</title>"));
}

#[tokio::test]
async fn test_missing_explicit_config_is_an_error() {
    let ws = Workspace::new();
    let cli = Cli::try_parse_from(["civic", "--config", "/nonexistent/civic.toml", "build"]).unwrap();
    assert!(matches!(run(cli).await, Err(Error::Core(_))));
    assert!(!ws.path().join("public").exists());
}
