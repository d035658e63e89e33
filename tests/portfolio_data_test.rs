//! Tests for loading portfolio data files
//!
//! Data files are YAML or JSON, chosen by extension. Image paths in the file
//! are relative to the file itself, not to the working directory.

use std::io::Write;
use std::path::PathBuf;

use folio::{PortfolioData, PortfolioError};

const YAML_DOC: &str = r#"
hero:
  name: "Robin Vale"
  title: "Backend Developer"
skills:
  backend: ["Rust"]
projects:
  - id: 7
    name: "Gallery"
    images: ["shots/one.png", "shots/two.png", "shots/three.png"]
contact:
  email: "robin@example.com"
  instagram: "@robin"
"#;

const JSON_DOC: &str = r#"{
  "hero": {"name": "Robin Vale", "title": "Backend Developer"},
  "projects": [
    {"id": 1, "name": "One", "images": ["one.png"], "features": ["fast"]}
  ],
  "experience": {"years": "3", "companies": ["Acme"], "specialties": []}
}"#;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

/// Test: YAML files load and image paths resolve next to the file
#[test]
fn test_load_yaml_resolves_images() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "portfolio.yaml", YAML_DOC);

    let data = PortfolioData::load(&path).unwrap();
    assert_eq!(data.hero.name, "Robin Vale");
    assert_eq!(
        data.projects[0].images[0],
        dir.path().join("shots/one.png")
    );
    assert!(data.experience.is_none());
}

/// Test: `.json` files are parsed as JSON
#[test]
fn test_load_json_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "portfolio.json", JSON_DOC);

    let data = PortfolioData::load(&path).unwrap();
    assert_eq!(data.projects[0].features, vec!["fast"]);
    assert_eq!(data.experience.unwrap().companies, vec!["Acme"]);
}

/// Test: JSON content in a YAML-named file still parses (YAML is a superset)
#[test]
fn test_json_content_in_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "portfolio.yml", JSON_DOC);
    assert!(PortfolioData::load(&path).is_ok());
}

/// Test: Missing files surface as I/O errors
#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PortfolioData::load(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, PortfolioError::Io(_)));
}

/// Test: Invalid records are rejected at load time, before any rendering
#[test]
fn test_project_without_images_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "portfolio.yaml",
        "hero: { name: \"X\" }\nprojects:\n  - { id: 2, name: \"Bare\", images: [] }\n",
    );

    let err = PortfolioData::load(&path).unwrap_err();
    assert!(matches!(err, PortfolioError::InvalidInput(_)));
    assert!(err.to_string().contains("project 2"));
}

/// Test: Contact links derive from the record
#[test]
fn test_contact_links_from_loaded_data() {
    let data = PortfolioData::from_yaml_str(YAML_DOC).unwrap();
    let links = folio::logic::contact::contact_links(&data.contact, &data.hero.name);

    let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();
    assert_eq!(
        hrefs,
        vec!["mailto:robin@example.com", "https://instagram.com/robin"]
    );
}
