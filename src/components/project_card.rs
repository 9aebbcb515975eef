use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::catalog::{ProjectRecord, ProjectType};

/// Layout of the project listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Technology chips shown before collapsing the rest into "+N".
    pub fn tech_limit(&self) -> usize {
        match self {
            ViewMode::Grid => 3,
            ViewMode::List => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

/// First `limit` technologies plus the count of those left out, if any.
pub fn tech_preview(technologies: &[String], limit: usize) -> (&[String], Option<usize>) {
    let shown = &technologies[..limit.min(technologies.len())];
    let hidden = technologies.len() - shown.len();
    (shown, (hidden > 0).then_some(hidden))
}

pub fn type_icon(kind: ProjectType) -> &'static str {
    match kind {
        ProjectType::Mobile => "\u{1F4F1}",
        ProjectType::Web => "\u{1F5A5}",
    }
}

/// Category badge tinted with the project's accent color.
#[component]
pub fn CategoryBadge(project: ProjectRecord) -> impl IntoView {
    view! {
        <span
            class="category-badge"
            style=format!("background-color: {}30; color: {}", project.color, project.color)
        >
            <span class="badge-icon">{type_icon(project.kind)}</span>
            {project.category}
        </span>
    }
}

#[component]
pub fn ProjectCard(
    project: ProjectRecord,
    #[prop(optional)] mode: ViewMode,
) -> impl IntoView {
    let navigate = use_navigate();
    let path = project.detail_path();
    let open = move |_: ev::MouseEvent| navigate(&path, Default::default());

    let (shown, hidden) = tech_preview(&project.technologies, mode.tech_limit());
    let chips = shown
        .iter()
        .map(|tech| view! { <span class="tech-chip">{tech.clone()}</span> })
        .collect::<Vec<_>>();
    let more = hidden.map(|n| view! { <span class="tech-chip">{format!("+{}", n)}</span> });

    let stop = |ev: ev::MouseEvent| ev.stop_propagation();
    let repo = project.github_url.clone().map(|url| {
        view! {
            <a href=url target="_blank" rel="noopener noreferrer" class="quick-link" title="Source code" on:click=stop>
                "</>"
            </a>
        }
    });
    let live = project.live_url.clone().map(|url| {
        view! {
            <a href=url target="_blank" rel="noopener noreferrer" class="quick-link" title="Live site" on:click=stop>
                "\u{2197}"
            </a>
        }
    });

    view! {
        <div
            class=format!("project-card project-card-{}", mode.as_str())
            style=format!("--accent: {}", project.color)
            on:click=open
        >
            <div class="project-card-image">
                <img src=project.image.clone() alt=project.title.clone() loading="lazy" />
                <div class="project-card-badge">
                    <CategoryBadge project=project.clone() />
                </div>
                <div class="project-card-links">{repo}{live}</div>
                <div class="project-card-hint">"View Case Study"</div>
            </div>
            <div class="project-card-body">
                <h3 class="project-card-title">{project.title.clone()}</h3>
                <p class="project-card-description">{project.description.clone()}</p>
                <div class="tech-chips">{chips}{more}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn techs(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_tech_preview_collapses_overflow() {
        let all = techs(&["Flutter", "Dart", "Firebase", "Bloc", "Maps"]);
        let (shown, hidden) = tech_preview(&all, ViewMode::Grid.tech_limit());
        assert_eq!(shown, &all[..3]);
        assert_eq!(hidden, Some(2));
    }

    #[test]
    fn test_tech_preview_list_mode_shows_four() {
        let all = techs(&["Flutter", "Dart", "Firebase", "Bloc", "Maps"]);
        let (shown, hidden) = tech_preview(&all, ViewMode::List.tech_limit());
        assert_eq!(shown.len(), 4);
        assert_eq!(hidden, Some(1));
    }

    #[test]
    fn test_tech_preview_no_overflow() {
        let all = techs(&["React", "Tailwind"]);
        let (shown, hidden) = tech_preview(&all, 3);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, None);
        let (shown, hidden) = tech_preview(&[], 3);
        assert!(shown.is_empty());
        assert_eq!(hidden, None);
    }
}
