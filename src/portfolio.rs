//! Portfolio Data
//!
//! The static record the whole page is rendered from: hero banner, skill
//! categories, projects, experience, and contact details. Loaded once at
//! startup (YAML or JSON), validated, and never mutated afterwards.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{PortfolioError, Result};

/// Sample record compiled into the binary, used when no data file is configured
const BUNDLED_PORTFOLIO: &str = include_str!("../assets/portfolio.yaml");

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioData {
    pub hero: Hero,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// When absent the experience section is not laid out at all
    #[serde(default)]
    pub experience: Option<Experience>,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
}

/// Skill categories in document order (the order is the tab order)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(Vec<SkillCategory>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

impl SkillSet {
    pub fn categories(&self) -> &[SkillCategory] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&SkillCategory> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SkillSetVisitor)
    }
}

struct SkillSetVisitor;

impl<'de> Visitor<'de> for SkillSetVisitor {
    type Value = SkillSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of skill category to a list of skill names")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<SkillSet, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut categories = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, skills)) = map.next_entry::<String, Vec<String>>()? {
            categories.push(SkillCategory { name, skills });
        }
        Ok(SkillSet(categories))
    }
}

/// One portfolio item. Its position in `PortfolioData::projects` is its index.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub images: Vec<PathBuf>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    #[serde(deserialize_with = "string_or_number")]
    pub years: String,
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

/// Accept `years: 2` as well as `years: "2"`
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Integer(u64),
        Float(f64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Integer(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    })
}

impl PortfolioData {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let data: Self = serde_yaml::from_str(contents)?;
        data.validate()?;
        Ok(data)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let data: Self = serde_json::from_str(contents)?;
        data.validate()?;
        Ok(data)
    }

    /// The sample record compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_yaml_str(BUNDLED_PORTFOLIO)
    }

    /// Load a data file. `.json` files are parsed as JSON, everything else as YAML.
    ///
    /// Relative image paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let mut data = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_yaml_str(&contents)?
        };

        if let Some(base_dir) = path.parent() {
            data.resolve_image_paths(base_dir);
        }

        tracing::debug!(
            path = %path.display(),
            projects = data.projects.len(),
            skill_categories = data.skills.len(),
            "portfolio_loaded"
        );
        Ok(data)
    }

    /// Rewrite relative image paths so they are relative to `base_dir`
    pub fn resolve_image_paths(&mut self, base_dir: &Path) {
        for project in &mut self.projects {
            for image in &mut project.images {
                if image.is_relative() {
                    *image = base_dir.join(&*image);
                }
            }
        }
    }

    /// Reject records the renderer cannot draw.
    ///
    /// A project without images would reach the layout selector with an empty
    /// list, so it is rejected here instead.
    pub fn validate(&self) -> Result<()> {
        let mut seen_ids = HashSet::new();

        for project in &self.projects {
            if project.images.is_empty() {
                return Err(PortfolioError::InvalidInput(format!(
                    "project {} ('{}') has no images",
                    project.id, project.name
                )));
            }
            if !seen_ids.insert(project.id) {
                return Err(PortfolioError::InvalidInput(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
hero:
  name: "Sam"
projects:
  - id: 1
    name: "One"
    images: ["a.png"]
"#;

    #[test]
    fn test_bundled_data_is_valid() {
        let data = PortfolioData::bundled().unwrap();
        assert_eq!(data.hero.name, "Alex Moreira");
        assert_eq!(data.projects.len(), 3);
        assert!(data.experience.is_some());
    }

    #[test]
    fn test_minimal_document_uses_defaults() {
        let data = PortfolioData::from_yaml_str(MINIMAL).unwrap();
        assert!(data.skills.is_empty());
        assert!(data.experience.is_none());
        assert!(data.contact.email.is_none());
        assert_eq!(data.projects[0].images, vec![PathBuf::from("a.png")]);
    }

    #[test]
    fn test_skill_categories_keep_document_order() {
        let yaml = r#"
hero: { name: "Sam" }
skills:
  tools: ["Git"]
  backend: ["Rust", "Go"]
  database: ["Postgres"]
"#;
        let data = PortfolioData::from_yaml_str(yaml).unwrap();
        let names: Vec<&str> = data
            .skills
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["tools", "backend", "database"]);
        assert_eq!(data.skills.get(1).unwrap().skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_json_skill_order_preserved() {
        let json = r#"{
            "hero": {"name": "Sam"},
            "skills": {"zeta": ["z"], "alpha": ["a"]}
        }"#;
        let data = PortfolioData::from_json_str(json).unwrap();
        assert_eq!(data.skills.categories()[0].name, "zeta");
        assert_eq!(data.skills.categories()[1].name, "alpha");
    }

    #[test]
    fn test_project_without_images_rejected() {
        let yaml = r#"
hero: { name: "Sam" }
projects:
  - id: 4
    name: "Empty"
"#;
        let err = PortfolioData::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidInput(ref msg) if msg.contains("project 4")));
    }

    #[test]
    fn test_duplicate_project_ids_rejected() {
        let yaml = r#"
hero: { name: "Sam" }
projects:
  - { id: 1, name: "A", images: ["a.png"] }
  - { id: 1, name: "B", images: ["b.png"] }
"#;
        let err = PortfolioData::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidInput(ref msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_years_accepts_number() {
        let yaml = r#"
hero: { name: "Sam" }
experience:
  years: 5
"#;
        let data = PortfolioData::from_yaml_str(yaml).unwrap();
        assert_eq!(data.experience.unwrap().years, "5");
    }

    #[test]
    fn test_unknown_hero_fields_ignored() {
        let yaml = r#"
hero:
  name: "Sam"
  resumeUrl: "/cv.pdf"
"#;
        assert!(PortfolioData::from_yaml_str(yaml).is_ok());
    }

    #[test]
    fn test_resolve_image_paths_keeps_absolute() {
        let yaml = r#"
hero: { name: "Sam" }
projects:
  - { id: 1, name: "A", images: ["shots/a.png", "/abs/b.png"] }
"#;
        let mut data = PortfolioData::from_yaml_str(yaml).unwrap();
        data.resolve_image_paths(Path::new("/data"));
        assert_eq!(data.projects[0].images[0], PathBuf::from("/data/shots/a.png"));
        assert_eq!(data.projects[0].images[1], PathBuf::from("/abs/b.png"));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = PortfolioData::from_yaml_str("hero: [").unwrap_err();
        assert!(matches!(err, PortfolioError::Yaml(_)));
    }
}
