use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::carousel::ImageList;

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub seo: Seo,
    pub profile: Profile,
    pub about: About,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Role>,
    pub certifications: Vec<String>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl Seo {
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub location: String,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl Profile {
    /// Up to two uppercase initials, used for the hero monogram.
    pub fn initials(&self) -> String {
        let words = self.name.split_whitespace().collect::<Vec<_>>();
        let picks = match words.as_slice() {
            [] => vec![],
            [only] => vec![*only],
            [first, .., last] => vec![*first, *last],
        };
        picks
            .into_iter()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    pub title: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

impl Portfolio {
    pub fn from_json(file: &str, raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_str(raw).map_err(|e| ContentError::Parse {
                file: file.to_string(),
                reason: e.to_string(),
            })?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.seo.title.trim().is_empty() {
            return Err(ContentError::Invalid("seo title is empty".to_string()));
        }
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile name is empty".to_string()));
        }
        if let Some(i) = self.certifications.iter().position(|p| p.trim().is_empty()) {
            return Err(ContentError::Invalid(format!(
                "certification image {i} has an empty path"
            )));
        }
        Ok(())
    }

    /// Certification images, or `None` when there are none to show.
    pub fn certification_images(&self) -> Option<ImageList> {
        ImageList::new(self.certifications.clone()).ok()
    }
}

fn load(file: &str) -> Result<Portfolio, ContentError> {
    let asset = Assets::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
    let raw = std::str::from_utf8(&asset.data).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        reason: e.to_string(),
    })?;
    let portfolio = Portfolio::from_json(file, raw)?;
    log::debug!(
        "loaded {file}: {} projects, {} certifications",
        portfolio.projects.len(),
        portfolio.certifications.len()
    );
    Ok(portfolio)
}

/// Returns the embedded portfolio content, parsed once per process.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "seo": { "title": "T", "description": "D", "keywords": ["a", "b"] },
        "profile": { "name": "Ada Lovelace", "headline": "H", "tagline": "", "location": "L" },
        "about": { "paragraphs": ["p"] },
        "projects": [],
        "skills": [],
        "experience": [],
        "certifications": [],
        "contact": { "email": "ada@example.com" }
    }"#;

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = portfolio().expect("embedded portfolio should be valid");
        assert!(!portfolio.seo.title.is_empty());
        assert!(!portfolio.seo.keywords.is_empty());
        assert_eq!(portfolio.certifications.len(), 13);

        let images = portfolio
            .certification_images()
            .expect("certifications should form an image list");
        assert_eq!(images.len(), 13);
        assert!(images.iter().all(|p| p.starts_with('/')));
    }

    #[test]
    fn test_certification_images_are_shipped() {
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let portfolio = portfolio().expect("embedded portfolio should be valid");
        for path in &portfolio.certifications {
            let file = assets.join(path.trim_start_matches('/'));
            assert!(file.is_file(), "{path} is not served from public/");
        }
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load("nope.json").unwrap_err(),
            ContentError::Missing("nope.json".to_string())
        );
    }

    #[test]
    fn test_minimal_document_and_defaults() {
        let portfolio = Portfolio::from_json("t.json", MINIMAL).unwrap();
        assert!(portfolio.about.highlights.is_empty());
        assert!(portfolio.contact.links.is_empty());
        assert_eq!(portfolio.profile.resume_url, None);
        assert!(portfolio.certification_images().is_none());
        assert_eq!(portfolio.seo.keywords_content(), "a, b");
    }

    #[test]
    fn test_parse_error_names_file() {
        match Portfolio::from_json("broken.json", "{ not json") {
            Err(ContentError::Parse { file, .. }) => assert_eq!(file, "broken.json"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_certification_path_is_invalid() {
        let raw = MINIMAL.replace(r#""certifications": []"#, r#""certifications": ["/a.png", " "]"#);
        assert_eq!(
            Portfolio::from_json("t.json", &raw).unwrap_err(),
            ContentError::Invalid("certification image 1 has an empty path".to_string())
        );
    }

    #[test]
    fn test_initials() {
        let mut profile = Portfolio::from_json("t.json", MINIMAL).unwrap().profile;
        assert_eq!(profile.initials(), "AL");
        profile.name = "chokkaku mohan rao".to_string();
        assert_eq!(profile.initials(), "CR");
        profile.name = "Prince".to_string();
        assert_eq!(profile.initials(), "P");
    }
}
