//! Portfolio content loading.
//!
//! All content is static data read once at build time. Collections keep file
//! order, which is display order; records have no identity beyond their
//! position.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── config.toml          # Site config (optional, see `config`)
//! ├── profile.toml         # Name, hero phrases, contact channels (required)
//! ├── about.md             # Biography, rendered as Markdown (optional)
//! ├── skills.toml          # [[group]] with nested [[group.skill]]
//! ├── education.toml       # [[entry]]
//! ├── certifications.toml  # [[certification]]
//! ├── projects.toml        # [[project]]
//! └── assets/              # Copied verbatim to the output root
//! ```
//!
//! Every collection file is optional; a missing file is an empty collection.
//! Unknown keys are rejected.

use crate::config::{self, SiteConfig};
use pulldown_cmark::{Parser, html as md_html};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("profile.toml not found in {0}")]
    MissingProfile(PathBuf),
    #[error("Invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    /// Short role line under the name in the header logo and footer.
    pub role: String,
    /// Lead-in before the typed phrase, e.g. "I am".
    #[serde(default = "default_phrase_prefix")]
    pub phrase_prefix: String,
    /// Phrases cycled by the hero typed-text effect, in order.
    pub phrases: Vec<String>,
    pub avatar: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    /// Floating tags around the hero portrait.
    #[serde(default)]
    pub hero_tags: Vec<String>,
    /// Highlighted quote in the About section.
    #[serde(default)]
    pub quote: Option<String>,
    pub contact: ContactDetails,
    #[serde(default, rename = "social")]
    pub socials: Vec<SocialLink>,
}

fn default_phrase_prefix() -> String {
    "I am".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactDetails {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    pub title: String,
    #[serde(default, rename = "skill")]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    /// skillicons.dev identifier, e.g. `react`.
    pub icon: String,
}

impl Skill {
    pub fn icon_url(&self) -> String {
        format!("https://skillicons.dev/icons?i={}", self.icon)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    /// Free-text date range, e.g. "2020 - 2022".
    pub period: String,
    pub description: String,
    /// Material Symbols icon name.
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CertificationEntry {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub icon: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub image: String,
    pub live: String,
    pub client: String,
    pub server: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SkillsFile {
    #[serde(default)]
    group: Vec<SkillGroup>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EducationFile {
    #[serde(default)]
    entry: Vec<EducationEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CertificationsFile {
    #[serde(default)]
    certification: Vec<CertificationEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectsFile {
    #[serde(default)]
    project: Vec<ProjectEntry>,
}

/// Everything the page is built from.
#[derive(Debug, Clone)]
pub struct Content {
    pub profile: Profile,
    /// `about.md` rendered to HTML.
    pub about_html: Option<String>,
    pub skills: Vec<SkillGroup>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub config: SiteConfig,
    /// Path of `assets/` if the content root has one.
    pub assets_dir: Option<PathBuf>,
}

impl Content {
    pub fn validate(&self) -> Result<(), ContentError> {
        let profile = &self.profile;
        if profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile.name must not be empty".into()));
        }
        if profile.phrases.is_empty() {
            return Err(ContentError::Invalid(
                "profile.phrases needs at least one phrase".into(),
            ));
        }
        if profile.phrases.iter().any(|p| p.is_empty()) {
            return Err(ContentError::Invalid(
                "profile.phrases must not contain empty phrases".into(),
            ));
        }
        for (idx, project) in self.projects.iter().enumerate() {
            for (field, value) in [
                ("title", &project.title),
                ("live", &project.live),
                ("client", &project.client),
                ("server", &project.server),
            ] {
                if value.trim().is_empty() {
                    return Err(ContentError::Invalid(format!(
                        "project {} has an empty {field}",
                        idx + 1
                    )));
                }
            }
        }
        for (idx, cert) in self.certifications.iter().enumerate() {
            if cert.link.trim().is_empty() {
                return Err(ContentError::Invalid(format!(
                    "certification {} has an empty link",
                    idx + 1
                )));
            }
        }
        Ok(())
    }
}

/// Load and validate the content root.
pub fn load(root: &Path) -> Result<Content, ContentError> {
    let config = config::load_config(root)?;

    let profile_path = root.join("profile.toml");
    if !profile_path.exists() {
        return Err(ContentError::MissingProfile(root.to_path_buf()));
    }
    let profile: Profile = read_toml(&profile_path)?;

    let skills = read_optional::<SkillsFile>(&root.join("skills.toml"))?.group;
    let education = read_optional::<EducationFile>(&root.join("education.toml"))?.entry;
    let certifications =
        read_optional::<CertificationsFile>(&root.join("certifications.toml"))?.certification;
    let projects = read_optional::<ProjectsFile>(&root.join("projects.toml"))?.project;

    let about_path = root.join("about.md");
    let about_html = if about_path.exists() {
        Some(render_markdown(&fs::read_to_string(&about_path)?))
    } else {
        None
    };

    let assets = root.join("assets");
    let assets_dir = assets.is_dir().then_some(assets);

    let content = Content {
        profile,
        about_html,
        skills,
        education,
        certifications,
        projects,
        config,
        assets_dir,
    };
    content.validate()?;
    Ok(content)
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let text = fs::read_to_string(path)?;
    toml::from_str(&text).map_err(|source| ContentError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ContentError> {
    if path.exists() {
        read_toml(path)
    } else {
        Ok(T::default())
    }
}

/// Render Markdown to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html = String::new();
    md_html::push_html(&mut html, parser);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn loads_all_fixture_collections() {
        let tmp = setup_fixtures();
        let content = load(tmp.path()).unwrap();

        assert_eq!(content.profile.name, "Ada Example");
        assert_eq!(content.profile.phrases.len(), 3);
        assert_eq!(content.skills.len(), 3);
        assert_eq!(content.education.len(), 2);
        assert_eq!(content.certifications.len(), 4);
        assert_eq!(content.projects.len(), 4);
        assert!(content.about_html.is_some());
        assert!(content.assets_dir.is_some());
    }

    #[test]
    fn collections_keep_file_order() {
        let tmp = setup_fixtures();
        let content = load(tmp.path()).unwrap();
        assert_eq!(
            project_titles(&content),
            vec!["Event Hub", "Event Sphere", "Green Nest", "Hero Apps"]
        );
        assert_eq!(content.education[0].period, "2025 - 2028");
        assert_eq!(content.skills[0].title, "Front-End");
    }

    #[test]
    fn missing_collection_files_are_empty() {
        let tmp = setup_fixtures();
        fs::remove_file(tmp.path().join("projects.toml")).unwrap();
        fs::remove_file(tmp.path().join("about.md")).unwrap();
        let content = load(tmp.path()).unwrap();
        assert!(content.projects.is_empty());
        assert!(content.about_html.is_none());
    }

    #[test]
    fn missing_profile_is_error() {
        let tmp = setup_fixtures();
        fs::remove_file(tmp.path().join("profile.toml")).unwrap();
        assert!(matches!(load(tmp.path()), Err(ContentError::MissingProfile(_))));
    }

    #[test]
    fn unknown_key_names_the_file() {
        let tmp = setup_fixtures();
        fs::write(
            tmp.path().join("education.toml"),
            "[[entry]]\ndegree = \"BSc\"\nschool = \"typo\"\n",
        )
        .unwrap();
        let err = load(tmp.path()).unwrap_err();
        assert!(matches!(err, ContentError::Toml { .. }));
        assert!(err.to_string().contains("education.toml"));
    }

    #[test]
    fn empty_phrase_list_is_invalid() {
        let tmp = setup_fixtures();
        fs::write(
            tmp.path().join("profile.toml"),
            r#"
name = "Ada Example"
role = "Web Developer"
phrases = []
avatar = "https://example.com/ada.png"

[contact]
email = "ada@example.com"
"#,
        )
        .unwrap();
        let err = load(tmp.path()).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
        assert!(err.to_string().contains("at least one phrase"));
    }

    #[test]
    fn project_with_empty_link_is_invalid() {
        let tmp = setup_fixtures();
        let path = tmp.path().join("projects.toml");
        let text = fs::read_to_string(&path).unwrap();
        fs::write(&path, text.replacen("live = \"https://", "live = \"\" # https://", 1)).unwrap();
        let err = load(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("project 1 has an empty live"));
    }

    #[test]
    fn invalid_config_surfaces_as_config_error() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("config.toml"), "[projects]\npreview = 0\n").unwrap();
        assert!(matches!(load(tmp.path()), Err(ContentError::Config(_))));
    }

    #[test]
    fn markdown_is_rendered() {
        let html = render_markdown("I build **fast** things.");
        assert!(html.contains("<strong>fast</strong>"));
    }

    #[test]
    fn skill_icon_url_uses_skillicons() {
        let skill = Skill {
            name: "React.js".into(),
            icon: "react".into(),
        };
        assert_eq!(skill.icon_url(), "https://skillicons.dev/icons?i=react");
    }
}
