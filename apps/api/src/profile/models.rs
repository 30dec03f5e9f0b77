//! The resume profile document this service analyzes against.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single skill tag with its 0-100 proficiency percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: u8,
}

/// A free-text resume section (about, experience, education, ...).
/// Carried for rendering; keyword extraction draws only on the short labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSection {
    pub heading: String,
    pub body: String,
}

/// The full resume document. Loaded once at startup and shared read-only;
/// analysis never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    pub title: String,
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub sections: Vec<ProfileSection>,
}

impl ResumeProfile {
    /// Reads and parses the profile JSON document.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume profile '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Resume profile '{}' is not valid JSON", path.display()))
    }

    /// Candidate keyword labels: skill names first, then the title line,
    /// in document order.
    pub fn keyword_sources(&self) -> Vec<String> {
        self.skills
            .iter()
            .map(|s| s.name.clone())
            .chain(std::iter::once(self.title.clone()))
            .collect()
    }

    /// Case-insensitive skill lookup by name.
    pub fn find_skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }
}
