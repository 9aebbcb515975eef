//! Landing page copy (about, skills, experience, socials) from `config/content.toml`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONTENT_TOML: &str = include_str!("../config/content.toml");

/// Dots drawn next to each skill.
pub const PROFICIENCY_DOTS: u8 = 4;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteContent {
    pub about: About,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub additional_skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SkillCategory {
    pub title: String,
    pub description: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: String,
}

/// beginner=1 .. expert=4; unrecognized labels sit at intermediate.
pub fn filled_dots(proficiency: &str) -> u8 {
    match proficiency.trim().to_lowercase().as_str() {
        "beginner" => 1,
        "intermediate" => 2,
        "advanced" => 3,
        "expert" => 4,
        _ => 2,
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Experience {
    pub kind: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Achievement {
    pub title: String,
    pub organization: String,
    pub year: String,
    pub description: String,
    /// Image of the certificate, opened in a modal when present.
    #[serde(default)]
    pub certificate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub color: String,
}

impl SiteContent {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            file: "content.toml",
            source,
        })
    }

    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml(CONTENT_TOML)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_parses() {
        let content = SiteContent::bundled().expect("bundled content.toml must parse");
        assert_eq!(content.skills.len(), 3, "Should have three skill categories");
        assert!(!content.experience.is_empty());
        assert!(
            content.achievements.iter().any(|a| a.certificate.is_some()),
            "At least one achievement should carry a certificate"
        );
    }

    #[test]
    fn test_filled_dots_levels() {
        assert_eq!(filled_dots("beginner"), 1);
        assert_eq!(filled_dots("intermediate"), 2);
        assert_eq!(filled_dots("Advanced"), 3);
        assert_eq!(filled_dots("expert"), 4);
        assert_eq!(filled_dots("guru"), 2);
    }

    #[test]
    fn test_dots_never_exceed_total() {
        let content = SiteContent::bundled().unwrap();
        for skill in content.skills.iter().flat_map(|c| c.skills.iter()) {
            assert!(filled_dots(&skill.proficiency) <= PROFICIENCY_DOTS, "{} overflows", skill.name);
        }
    }
}
