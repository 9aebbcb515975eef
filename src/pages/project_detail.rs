use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::Site;
use crate::catalog::ProjectRecord;
use crate::components::project_card::{CategoryBadge, ProjectCard};
use crate::components::project_links::ProjectLinksPanel;
use crate::components::reveal::Reveal;
use crate::components::screenshot_gallery::ScreenshotGallery;
use crate::components::video_player::VideoPlayer;

/// Label/value pairs for the info cards; fields the record lacks are skipped.
pub fn info_cards(project: &ProjectRecord) -> Vec<(&'static str, String)> {
    [
        ("Year", project.year.clone()),
        ("Role", project.role.clone()),
        ("Duration", project.duration.clone()),
        ("Type", Some(project.category.clone())),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let site = expect_context::<Site>();
    let params = use_params_map();

    let key = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    // New id, new page: start from the top.
    Effect::new(move |_| {
        key.track();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    move || {
        let catalog = site.catalog.clone();
        let key = key.get();
        match catalog.find_by_key(&key).cloned() {
            Some(project) => {
                let related = catalog
                    .related_to(&project)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>();
                view! { <ProjectDetail project=project related=related /> }.into_any()
            }
            None => view! { <ProjectNotFound /> }.into_any(),
        }
    }
}

#[component]
fn ProjectNotFound() -> impl IntoView {
    view! {
        <div class="page project-not-found">
            <h1>"Project Not Found"</h1>
            <p>"The project you're looking for doesn't exist or has been removed."</p>
            <a href="/" class="btn btn-primary">"\u{2190} Go back home"</a>
        </div>
    }
}

#[component]
fn ProjectDetail(project: ProjectRecord, related: Vec<ProjectRecord>) -> impl IntoView {
    let cards = info_cards(&project)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="info-card">
                    <span class="info-card-label">{label}</span>
                    <span class="info-card-value">{value}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let features = (!project.features.is_empty()).then(|| {
        let items = project
            .features
            .iter()
            .map(|f| view! { <li class="feature-item">{f.clone()}</li> })
            .collect::<Vec<_>>();
        view! {
            <Reveal class="detail-block">
                <h2>"Key Features"</h2>
                <ul class="feature-list">{items}</ul>
            </Reveal>
        }
    });

    let stack = project
        .technologies
        .iter()
        .map(|t| view! { <span class="tech-chip">{t.clone()}</span> })
        .collect::<Vec<_>>();

    let gallery = (!project.screenshots.is_empty()).then(|| {
        let screenshots = project.screenshots.clone();
        let title = project.title.clone();
        let color = project.color.clone();
        view! {
            <Reveal class="detail-block">
                <h2>"Screenshots"</h2>
                <ScreenshotGallery screenshots=screenshots title=title color=color />
            </Reveal>
        }
    });

    let video = project.demo_video.clone().map(|url| {
        let color = project.color.clone();
        view! {
            <Reveal class="detail-block">
                <h2>"Demo Video"</h2>
                <VideoPlayer url=url color=color />
            </Reveal>
        }
    });

    let overview = project.overview_text().to_string();

    let related_section = (!related.is_empty()).then(|| {
        let cards = related
            .into_iter()
            .map(|p| view! { <ProjectCard project=p /> })
            .collect::<Vec<_>>();
        view! {
            <section class="related-projects">
                <h2>"Related " <span class="gradient-text">"Projects"</span></h2>
                <div class="project-grid">{cards}</div>
            </section>
        }
    });

    view! {
        <div class="page project-detail-page" style=format!("--accent: {}", project.color)>
            <a href="/#projects" class="back-link">"\u{2190} Back to Projects"</a>

            <header class="detail-hero">
                <img class="detail-hero-image" src=project.image.clone() alt=project.title.clone() />
                <div class="detail-hero-text">
                    <CategoryBadge project=project.clone() />
                    <h1>{project.title.clone()}</h1>
                    <p class="detail-description">{project.description.clone()}</p>
                </div>
            </header>

            <div class="info-cards">{cards}</div>

            <div class="detail-layout">
                <div class="detail-main">
                    <Reveal class="detail-block">
                        <h2>"Project Overview"</h2>
                        <p class="detail-overview">{overview}</p>
                    </Reveal>
                    {features}
                    {gallery}
                    {video}
                </div>
                <aside class="detail-sidebar">
                    <div class="detail-block">
                        <h3>"Tech Stack"</h3>
                        <div class="tech-chips">{stack}</div>
                    </div>
                    <ProjectLinksPanel links=project.links() />
                </aside>
            </div>

            {related_section}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProjectId, ProjectType};

    fn record() -> ProjectRecord {
        ProjectRecord {
            id: ProjectId(4),
            title: "Ledger".to_string(),
            description: "Budget tracker".to_string(),
            category: "Web App".to_string(),
            kind: ProjectType::Web,
            technologies: vec!["React".to_string()],
            image: "/img/ledger.png".to_string(),
            color: "#10b981".to_string(),
            github_url: None,
            live_url: None,
            year: Some("2024".to_string()),
            role: None,
            duration: Some("3 months".to_string()),
            overview: None,
            long_description: None,
            features: vec![],
            screenshots: vec![],
            demo_video: None,
        }
    }

    #[test]
    fn test_info_cards_skip_missing_fields() {
        let cards = info_cards(&record());
        let labels: Vec<&str> = cards.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Year", "Duration", "Type"], "Role is absent");
        assert_eq!(cards[2].1, "Web App");
    }

    #[test]
    fn test_info_cards_full_record() {
        let mut project = record();
        project.role = Some("Lead Developer".to_string());
        assert_eq!(info_cards(&project).len(), 4);
    }
}
