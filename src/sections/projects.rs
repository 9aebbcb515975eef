use leptos::prelude::*;

use crate::app::Site;
use crate::catalog::{self, CategoryFilter, FEATURED_COUNT};
use crate::components::category_tabs::CategoryTabs;
use crate::components::project_card::ProjectCard;
use crate::components::reveal::Reveal;
use crate::pages::all_projects::listing_href;

/// Featured work on the landing page: the first few projects, filterable by type only.
#[component]
pub fn Projects() -> impl IntoView {
    let site = expect_context::<Site>();
    let catalog = site.catalog.clone();
    let (filter, set_filter) = signal(CategoryFilter::All);

    let visible = Memo::new(move |_| {
        catalog::query(catalog.featured(FEATURED_COUNT), filter.get(), "")
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <section id="projects" class="section projects">
            <Reveal class="section-header">
                <span class="section-pill">"Featured Work"</span>
                <h2 class="section-title">"Recent " <span class="gradient-text">"Projects"</span></h2>
                <p class="section-description">
                    "A selection of mobile apps and web applications that solve real problems."
                </p>
            </Reveal>

            <CategoryTabs selected=filter on_select=move |f| set_filter.set(f) />

            <div class="project-grid">
                <For
                    each=move || visible.get()
                    key=|project| project.id
                    children=|project| view! { <ProjectCard project=project /> }
                />
            </div>

            <p class="click-hint">"Click on any project to view the full case study"</p>

            <div class="section-cta">
                <a href=move || listing_href(filter.get()) class="btn btn-primary">
                    "View All Projects \u{2192}"
                </a>
            </div>
        </section>
    }
}
