//! Building complete sites from a data directory.

use crate::common::write_data_dir;
use civic_core::SiteConfig;
use civic_render::{Error, SiteBuilder};
use tempfile::TempDir;

fn builder(data: &TempDir, out: &TempDir) -> SiteBuilder {
    SiteBuilder::new(SiteConfig::default())
        .with_data_dir(data.path())
        .with_output_dir(out.path().join("public"))
}

#[tokio::test]
async fn test_build_writes_both_pages() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_data_dir(data.path());

    let report = builder(&data, &out).build().await.unwrap();
    assert_eq!(report.officials, 4);
    assert_eq!(report.concerns, 2);
    assert_eq!(report.pages.len(), 2);
    assert!(report.validation.as_ref().unwrap().is_valid());

    let officials = std::fs::read_to_string(out.path().join("public/officials.html")).unwrap();
    assert_eq!(officials.matches(r#"role="article""#).count(), 4);
    assert!(officials.contains(r#"id="judicial-officials""#));
    assert!(officials.contains(r#"data-dial="tel:+12022243521""#));
    assert!(officials.contains("Appointed:"));

    let concerns = std::fs::read_to_string(out.path().join("public/concerns.html")).unwrap();
    assert!(concerns.contains("YOUR CONCERNS"));
    assert!(concerns.contains("officials.html?concernId=voting"));
    assert!(concerns.contains("Last updated: 10/10/2025"));
    let voting = concerns.find("Voting Rights").unwrap();
    let healthcare = concerns.find("Healthcare").unwrap();
    assert!(voting < healthcare);
}

#[tokio::test]
async fn test_build_without_concerns_document() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_data_dir(data.path());
    std::fs::remove_file(data.path().join("concerns.json")).unwrap();

    let report = builder(&data, &out).build().await.unwrap();
    assert_eq!(report.pages.len(), 1);
    assert!(report.validation.is_none());
    assert!(!out.path().join("public/concerns.html").exists());
}

#[tokio::test]
async fn test_schema_errors_are_reported_not_fatal() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_data_dir(data.path());
    std::fs::write(
        data.path().join("concerns.json"),
        r#"{"concerns": [{"id": "tax", "title": "Taxes", "description": "d",
            "relevantOfficials": []}]}"#,
    )
    .unwrap();

    let report = builder(&data, &out).build().await.unwrap();
    let validation = report.validation.unwrap();
    assert!(!validation.is_valid());
    assert_eq!(report.pages.len(), 2);
}

#[tokio::test]
async fn test_strict_build_fails_on_schema_errors() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_data_dir(data.path());
    std::fs::write(
        data.path().join("concerns.json"),
        r#"{"concerns": [{"id": "tax", "title": "Taxes", "description": "d",
            "relevantOfficials": []}]}"#,
    )
    .unwrap();

    let result = builder(&data, &out).strict(true).build().await;
    assert!(matches!(result, Err(Error::Validation { .. })));
    assert!(!out.path().join("public").exists());
}

const CONCERN_WITHOUT_DESCRIPTION: &str = r#"{"concerns": [{"id": "tax", "title": "Taxes",
    "relevantOfficials": ["Governor"], "isActive": true}]}"#;

#[tokio::test]
async fn test_undeserialisable_concerns_skip_page_not_build() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_data_dir(data.path());
    std::fs::write(data.path().join("concerns.json"), CONCERN_WITHOUT_DESCRIPTION).unwrap();

    let report = builder(&data, &out).build().await.unwrap();
    let validation = report.validation.unwrap();
    assert!(!validation.is_valid());
    assert!(
        validation
            .errors()
            .iter()
            .any(|e| e.to_string().contains("description"))
    );
    assert_eq!(report.concerns, 0);
    assert_eq!(report.pages.len(), 1);
    assert!(out.path().join("public/officials.html").exists());
    assert!(!out.path().join("public/concerns.html").exists());
}

#[tokio::test]
async fn test_strict_build_rejects_undeserialisable_concerns() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_data_dir(data.path());
    std::fs::write(data.path().join("concerns.json"), CONCERN_WITHOUT_DESCRIPTION).unwrap();

    let result = builder(&data, &out).strict(true).build().await;
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[tokio::test]
async fn test_malformed_branch_file_fails() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_data_dir(data.path());
    std::fs::write(data.path().join("legislative.json"), "{not json").unwrap();

    let result = builder(&data, &out).build().await;
    assert!(matches!(result, Err(Error::Core(_))));
}
