//! Resume data contract shared by the master and tailored views.
//!
//! Optional fields are explicit `Option`s and every collection defaults to
//! empty, so consumers never branch on "field missing" vs "field empty".

use serde::{Deserialize, Serialize};

/// A tag attached to a skill, bullet or project.
///
/// Callers send tags either as bare strings or as `{ "name": ... }` objects.
/// Both shapes collapse into this type on deserialization; it always
/// serializes back as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTag", into = "String")]
pub struct SkillTag {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTag {
    Plain(String),
    Named { name: String },
}

impl From<RawTag> for SkillTag {
    fn from(raw: RawTag) -> Self {
        let name = match raw {
            RawTag::Plain(name) | RawTag::Named { name } => name,
        };
        SkillTag::new(name.trim())
    }
}

impl From<SkillTag> for String {
    fn from(tag: SkillTag) -> Self {
        tag.name
    }
}

impl SkillTag {
    pub fn new(name: impl Into<String>) -> Self {
        SkillTag { name: name.into() }
    }

    /// Unicode case-insensitive; surrounding whitespace in `other` is ignored.
    pub fn matches(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<SkillTag>,
}

impl SkillRecord {
    #[cfg(test)]
    pub fn new(name: impl Into<String>) -> Self {
        SkillRecord {
            name: name.into(),
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsibilityBullet {
    pub description: String,
    #[serde(default)]
    pub tags: Vec<SkillTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub start: Option<String>,
    /// `None` for a current position.
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub responsibilities: Vec<ResponsibilityBullet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<SkillTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerEntry {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A master or tailored resume. The master is the source of truth; a tailored
/// resume is a derived view and is never written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub volunteer: Vec<VolunteerEntry>,
}

impl Resume {
    /// Every responsibility bullet across all experience entries, in order.
    pub fn bullets(&self) -> impl Iterator<Item = &ResponsibilityBullet> {
        self.experience
            .iter()
            .flat_map(|entry| entry.responsibilities.iter())
    }
}
