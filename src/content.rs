use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

static SITE: LazyLock<Result<Site, ContentError>> =
    LazyLock::new(|| load::<Site>("site.json").and_then(Site::validated));
static CONTACT: LazyLock<Result<Vec<ContactMethod>, ContentError>> =
    LazyLock::new(|| load::<Vec<ContactMethod>>("contact.json").and_then(validated_contact));
static SKILLS: LazyLock<Result<Vec<SkillCategory>, ContentError>> =
    LazyLock::new(|| load::<Vec<SkillCategory>>("skills.json").and_then(validated_skills));
static PROJECTS: LazyLock<Result<Vec<Project>, ContentError>> =
    LazyLock::new(|| load::<Vec<Project>>("projects.json").and_then(validated_projects));

/// Site copy and data, embedded at compile time so content edits never touch
/// view code.
#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(&'static str),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: &'static str, reason: String },
    #[error("invalid {file}: {reason}")]
    Invalid { file: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub job_title: String,
    pub organization: String,
    pub description: String,
    pub profile_image: String,
    pub bio: Vec<String>,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    External,
    Phone,
}

impl ContactKind {
    /// External profiles open in a new browsing context; mail and phone
    /// links stay in-page.
    pub fn target(self) -> Option<&'static str> {
        matches!(self, ContactKind::External).then_some("_blank")
    }

    /// Paired with `target`: no opener access, no referrer leakage.
    pub fn rel(self) -> Option<&'static str> {
        matches!(self, ContactKind::External).then_some("noopener noreferrer")
    }

    fn href_prefix_ok(self, href: &str) -> bool {
        match self {
            ContactKind::Email => href.starts_with("mailto:"),
            ContactKind::Phone => href.starts_with("tel:"),
            ContactKind::External => {
                href.starts_with("https://") || href.starts_with("http://")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub label: String,
    pub value: String,
    pub href: String,
    pub kind: ContactKind,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

pub fn site() -> Result<Site, ContentError> {
    SITE.clone()
}

pub fn contact_methods() -> Result<Vec<ContactMethod>, ContentError> {
    CONTACT.clone()
}

pub fn skill_categories() -> Result<Vec<SkillCategory>, ContentError> {
    SKILLS.clone()
}

pub fn projects() -> Result<Vec<Project>, ContentError> {
    PROJECTS.clone()
}

/// Achievements supplied by the caller win over the configured defaults.
/// The two sets are never mixed.
pub fn display_achievements(
    overrides: Option<Vec<Achievement>>,
    defaults: Vec<Achievement>,
) -> Vec<Achievement> {
    match overrides {
        Some(list) if !list.is_empty() => list,
        _ => defaults,
    }
}

fn load<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let raw = Content::get(file).ok_or(ContentError::Missing(file))?;
    serde_json::from_slice(&raw.data).map_err(|e| {
        log::error!("failed to parse embedded content {file}: {e}");
        ContentError::Parse {
            file,
            reason: e.to_string(),
        }
    })
}

fn invalid(file: &'static str, reason: impl Into<String>) -> ContentError {
    ContentError::Invalid {
        file,
        reason: reason.into(),
    }
}

fn require(file: &'static str, field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(invalid(file, format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

impl Site {
    fn validated(self) -> Result<Self, ContentError> {
        const FILE: &str = "site.json";
        require(FILE, "name", &self.name)?;
        require(FILE, "job_title", &self.job_title)?;
        require(FILE, "organization", &self.organization)?;
        require(FILE, "description", &self.description)?;
        require(FILE, "profile_image", &self.profile_image)?;
        if self.bio.is_empty() {
            return Err(invalid(FILE, "bio must have at least one paragraph"));
        }
        for para in &self.bio {
            require(FILE, "bio paragraph", para)?;
        }
        for a in &self.achievements {
            require(FILE, "achievement description", &a.description)?;
        }
        Ok(self)
    }
}

fn validated_contact(methods: Vec<ContactMethod>) -> Result<Vec<ContactMethod>, ContentError> {
    const FILE: &str = "contact.json";
    for m in &methods {
        require(FILE, "label", &m.label)?;
        require(FILE, "value", &m.value)?;
        require(FILE, "href", &m.href)?;
        if !m.kind.href_prefix_ok(&m.href) {
            return Err(invalid(
                FILE,
                format!("href {:?} doesn't match kind {:?}", m.href, m.kind),
            ));
        }
    }
    Ok(methods)
}

fn validated_skills(categories: Vec<SkillCategory>) -> Result<Vec<SkillCategory>, ContentError> {
    const FILE: &str = "skills.json";
    for (i, cat) in categories.iter().enumerate() {
        require(FILE, "category id", &cat.id)?;
        require(FILE, "category title", &cat.title)?;
        if categories[..i].iter().any(|c| c.id == cat.id) {
            return Err(invalid(FILE, format!("duplicate category id {:?}", cat.id)));
        }
        if cat.skills.is_empty() {
            return Err(invalid(FILE, format!("category {:?} has no skills", cat.id)));
        }
        for (j, skill) in cat.skills.iter().enumerate() {
            require(FILE, "skill name", &skill.name)?;
            if cat.skills[..j].iter().any(|s| s.name == skill.name) {
                return Err(invalid(
                    FILE,
                    format!("duplicate skill {:?} in {:?}", skill.name, cat.id),
                ));
            }
        }
    }
    Ok(categories)
}

fn validated_projects(projects: Vec<Project>) -> Result<Vec<Project>, ContentError> {
    const FILE: &str = "projects.json";
    for (i, p) in projects.iter().enumerate() {
        require(FILE, "title", &p.title)?;
        require(FILE, "description", &p.description)?;
        if projects[..i].iter().any(|other| other.id == p.id) {
            return Err(invalid(FILE, format!("duplicate project id {}", p.id)));
        }
    }
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(id: u32, description: &str) -> Achievement {
        Achievement {
            id,
            description: description.to_string(),
        }
    }

    #[test]
    fn embedded_content_parses_and_validates() {
        assert!(site().is_ok());
        assert!(contact_methods().is_ok());
        assert!(skill_categories().is_ok());
        assert!(projects().is_ok());
    }

    #[test]
    fn contact_hrefs_match_their_kind() {
        let methods = contact_methods().unwrap();
        assert!(!methods.is_empty());
        for m in &methods {
            match m.kind {
                ContactKind::Email => assert!(m.href.starts_with("mailto:"), "{}", m.href),
                ContactKind::Phone => assert!(m.href.starts_with("tel:"), "{}", m.href),
                ContactKind::External => assert!(m.href.starts_with("http"), "{}", m.href),
            }
        }
    }

    #[test]
    fn only_external_links_open_new_context() {
        let methods = contact_methods().unwrap();
        for m in &methods {
            if m.kind == ContactKind::External {
                assert_eq!(m.kind.target(), Some("_blank"));
                assert_eq!(m.kind.rel(), Some("noopener noreferrer"));
            } else {
                assert_eq!(m.kind.target(), None);
                assert_eq!(m.kind.rel(), None);
            }
        }
    }

    #[test]
    fn every_skill_appears_exactly_once_in_its_category() {
        let categories = skill_categories().unwrap();
        assert!(!categories.is_empty());
        for cat in &categories {
            let mut names: Vec<&str> = cat.skills.iter().map(|s| s.name.as_str()).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate skill in {}", cat.id);
        }
    }

    #[test]
    fn default_achievements_are_a_fixed_set_of_three() {
        let site = site().unwrap();
        assert_eq!(site.achievements.len(), 3);
    }

    #[test]
    fn achievements_fall_back_to_defaults() {
        let defaults = vec![
            achievement(1, "first"),
            achievement(2, "second"),
            achievement(3, "third"),
        ];
        assert_eq!(
            display_achievements(None, defaults.clone()),
            defaults.clone()
        );
        assert_eq!(
            display_achievements(Some(Vec::new()), defaults.clone()),
            defaults
        );
    }

    #[test]
    fn supplied_achievements_replace_defaults_entirely() {
        let defaults = vec![achievement(1, "default")];
        let supplied = vec![achievement(10, "supplied")];
        let shown = display_achievements(Some(supplied.clone()), defaults);
        assert_eq!(shown, supplied);
        assert!(shown.iter().all(|a| a.description != "default"));
    }

    #[test]
    fn mismatched_contact_kind_is_rejected() {
        let bad = vec![ContactMethod {
            label: "Email".to_string(),
            value: "someone@example.com".to_string(),
            href: "https://example.com".to_string(),
            kind: ContactKind::Email,
            icon: None,
        }];
        assert!(matches!(
            validated_contact(bad),
            Err(ContentError::Invalid { .. })
        ));
    }

    #[test]
    fn empty_fields_are_rejected() {
        let site = Site {
            name: String::new(),
            job_title: "dev".to_string(),
            organization: "org".to_string(),
            description: "desc".to_string(),
            profile_image: "/p.jpeg".to_string(),
            bio: vec!["hello".to_string()],
            achievements: Vec::new(),
        };
        assert!(matches!(
            site.validated(),
            Err(ContentError::Invalid { .. })
        ));
    }

    #[test]
    fn duplicate_skills_are_rejected() {
        let cats = vec![SkillCategory {
            id: "frontend".to_string(),
            title: "Frontend".to_string(),
            skills: vec![
                Skill {
                    name: "React".to_string(),
                    logo: None,
                },
                Skill {
                    name: "React".to_string(),
                    logo: None,
                },
            ],
        }];
        assert!(matches!(
            validated_skills(cats),
            Err(ContentError::Invalid { .. })
        ));
    }
}
