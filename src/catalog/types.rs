use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a project, also used as the `/project/:id` route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(ProjectId)
    }
}

/// Coarse platform tag, independent of the free-form `category` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Mobile,
    Web,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Mobile => "mobile",
            ProjectType::Web => "web",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category tab selection applied before text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectType),
}

impl CategoryFilter {
    /// Tabs in display order.
    pub const TABS: [CategoryFilter; 3] = [
        CategoryFilter::All,
        CategoryFilter::Only(ProjectType::Mobile),
        CategoryFilter::Only(ProjectType::Web),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(ProjectType::Mobile) => "Mobile Apps",
            CategoryFilter::Only(ProjectType::Web) => "Web Apps",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(kind) => kind.as_str(),
        }
    }

    pub fn admits(&self, kind: ProjectType) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == kind,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "mobile" => Ok(CategoryFilter::Only(ProjectType::Mobile)),
            "web" => Ok(CategoryFilter::Only(ProjectType::Web)),
            other => Err(format!("Unknown category filter: {}", other)),
        }
    }
}

/// Which external links a project can offer, computed once from its two optional URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectLinks {
    Both { live: String, repo: String },
    LiveOnly(String),
    RepoOnly(String),
    None,
}

/// One project in the portfolio catalog.
///
/// Link fields are normalized on load: the `"#"` placeholder, an empty
/// string and a missing key all become `None`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image: String,
    pub color: String,
    #[serde(default, deserialize_with = "link_or_absent")]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "link_or_absent")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub demo_video: Option<String>,
}

impl ProjectRecord {
    pub fn links(&self) -> ProjectLinks {
        match (self.live_url.clone(), self.github_url.clone()) {
            (Some(live), Some(repo)) => ProjectLinks::Both { live, repo },
            (Some(live), None) => ProjectLinks::LiveOnly(live),
            (None, Some(repo)) => ProjectLinks::RepoOnly(repo),
            (None, None) => ProjectLinks::None,
        }
    }

    /// Case-study text: `overview`, then `longDescription`, then the short description.
    pub fn overview_text(&self) -> &str {
        self.overview
            .as_deref()
            .or(self.long_description.as_deref())
            .unwrap_or(&self.description)
    }

    pub fn detail_path(&self) -> String {
        format!("/project/{}", self.id)
    }
}

/// The one place the `"#"` placeholder is turned into an absent link.
pub fn normalize_link(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "#" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn link_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(normalize_link))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(github: &str, live: &str) -> String {
        format!(
            r##"{{
                "id": 7,
                "title": "Demo",
                "description": "Short",
                "category": "Web App",
                "type": "web",
                "technologies": ["React"],
                "image": "/img/demo.png",
                "color": "#3ABEFF"
                {}{}
            }}"##,
            github, live
        )
    }

    #[test]
    fn test_hash_sentinel_is_absent() {
        let json = record_json(r##","githubUrl": "#""##, r##","liveUrl": "#""##);
        let record: ProjectRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.github_url, None);
        assert_eq!(record.live_url, None);
        assert_eq!(record.links(), ProjectLinks::None);
    }

    #[test]
    fn test_missing_links_match_sentinel() {
        let record: ProjectRecord = serde_json::from_str(&record_json("", "")).unwrap();
        assert_eq!(record.links(), ProjectLinks::None);
    }

    #[test]
    fn test_links_four_way_outcome() {
        let both = record_json(
            r#","githubUrl": "https://github.com/x/y""#,
            r#","liveUrl": "https://y.dev""#,
        );
        let live_only = record_json(r##","githubUrl": "#""##, r#","liveUrl": "https://y.dev""#);
        let repo_only = record_json(r#","githubUrl": "https://github.com/x/y""#, "");

        let both: ProjectRecord = serde_json::from_str(&both).unwrap();
        let live_only: ProjectRecord = serde_json::from_str(&live_only).unwrap();
        let repo_only: ProjectRecord = serde_json::from_str(&repo_only).unwrap();

        assert_eq!(
            both.links(),
            ProjectLinks::Both {
                live: "https://y.dev".to_string(),
                repo: "https://github.com/x/y".to_string(),
            }
        );
        assert_eq!(live_only.links(), ProjectLinks::LiveOnly("https://y.dev".to_string()));
        assert_eq!(
            repo_only.links(),
            ProjectLinks::RepoOnly("https://github.com/x/y".to_string())
        );
    }

    #[test]
    fn test_normalize_link() {
        assert_eq!(normalize_link("#"), None);
        assert_eq!(normalize_link("  "), None);
        assert_eq!(normalize_link(" # "), None);
        assert_eq!(normalize_link("https://a.b"), Some("https://a.b".to_string()));
    }

    #[test]
    fn test_overview_fallbacks() {
        let mut record: ProjectRecord = serde_json::from_str(&record_json("", "")).unwrap();
        assert_eq!(record.overview_text(), "Short");

        record.long_description = Some("Long".to_string());
        assert_eq!(record.overview_text(), "Long");

        record.overview = Some("Overview".to_string());
        assert_eq!(record.overview_text(), "Overview");
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Mobile".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(ProjectType::Mobile))
        );
        assert_eq!(
            "web".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(ProjectType::Web))
        );
        assert!("desktop".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_filter_labels_round_trip_values() {
        for tab in CategoryFilter::TABS {
            assert_eq!(tab.value().parse::<CategoryFilter>(), Ok(tab));
        }
        assert_eq!(CategoryFilter::All.label(), "All Projects");
    }

    #[test]
    fn test_project_id_parse() {
        assert_eq!("12".parse::<ProjectId>(), Ok(ProjectId(12)));
        assert!("abc".parse::<ProjectId>().is_err());
        assert!("-1".parse::<ProjectId>().is_err());
    }
}
