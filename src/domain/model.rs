use serde::{Deserialize, Serialize};
use std::fmt;

/// The page owner's identity card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    /// Path the résumé is served from, relative to the site root.
    pub resume: String,
    /// Suggested filename for the résumé download.
    pub resume_filename: String,
    pub avatar: String,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTag(String);

impl SkillTag {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SkillTag {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(rename = "desc", alias = "description")]
    pub description: String,
    pub stack: Vec<String>,
    pub image: String,
    pub github: String,
    pub live: String,
}

/// Everything the page renders. Built once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillTag>,
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Site-relative asset references: avatar, project images and the résumé.
    pub fn asset_paths(&self) -> Vec<&str> {
        let mut paths = vec![self.profile.avatar.as_str()];
        paths.extend(self.projects.iter().map(|p| p.image.as_str()));
        paths.push(self.profile.resume.as_str());
        paths
    }
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub output_path: String,
    pub bytes_written: usize,
    pub assets_copied: Vec<String>,
    pub assets_missing: Vec<String>,
}
