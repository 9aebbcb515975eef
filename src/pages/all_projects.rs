use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::Site;
use crate::catalog::CategoryFilter;
use crate::components::category_tabs::CategoryTabs;
use crate::components::project_card::{ProjectCard, ViewMode};

/// "Showing 2 projects in Mobile Apps matching "flutter"".
pub fn results_summary(count: usize, filter: CategoryFilter, text: &str) -> String {
    let mut summary = format!(
        "Showing {} project{}",
        count,
        if count == 1 { "" } else { "s" }
    );
    if filter != CategoryFilter::All {
        summary.push_str(&format!(" in {}", filter.label()));
    }
    let text = text.trim();
    if !text.is_empty() {
        summary.push_str(&format!(" matching \"{}\"", text));
    }
    summary
}

/// Listing URL preselecting `filter`, e.g. "/projects?category=mobile".
pub fn listing_href(filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "/projects".to_string(),
        other => format!("/projects?category={}", other.value()),
    }
}

/// Initial tab from the `category` query parameter; unknown values fall back to All.
pub fn filter_from_query(raw: Option<&str>) -> CategoryFilter {
    match raw.map(str::parse::<CategoryFilter>) {
        Some(Ok(filter)) => filter,
        Some(Err(e)) => {
            tracing::warn!("{}", e);
            CategoryFilter::All
        }
        None => CategoryFilter::All,
    }
}

#[component]
pub fn AllProjectsPage() -> impl IntoView {
    let site = expect_context::<Site>();
    let catalog = site.catalog.clone();

    let query = use_query_map();
    let initial = query.with_untracked(|q| filter_from_query(q.get_str("category")));

    let (filter, set_filter) = signal(initial);
    let (search_query, set_search_query) = signal(String::new());
    let (view_mode, set_view_mode) = signal(ViewMode::Grid);

    // Recomputed only when the tab or the query text changes
    let filtered = Memo::new(move |_| {
        let text = search_query.get();
        catalog
            .query(filter.get(), &text)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let clear_filters = move |_: leptos::ev::MouseEvent| {
        set_search_query.set(String::new());
        set_filter.set(CategoryFilter::All);
    };

    let summary = move || {
        search_query.with(|text| results_summary(filtered.with(Vec::len), filter.get(), text))
    };

    let results = move || {
        let projects = filtered.get();
        if projects.is_empty() {
            return view! {
                <div class="no-results">
                    <div class="no-results-icon">"\u{1F50D}"</div>
                    <h3>"No Projects Found"</h3>
                    <p>"Try adjusting your search or filter to find what you're looking for."</p>
                    <button class="btn btn-primary" on:click=clear_filters>"Clear Filters"</button>
                </div>
            }
            .into_any();
        }

        let mode = view_mode.get();
        let cards = projects
            .into_iter()
            .map(|project| view! { <ProjectCard project=project mode=mode /> })
            .collect::<Vec<_>>();
        view! { <div class=format!("project-{}", mode.as_str())>{cards}</div> }.into_any()
    };

    view! {
        <div class="page all-projects-page">
            <a href="/" class="back-link">"\u{2190} Back to Home"</a>

            <div class="page-header">
                <span class="section-pill">"Portfolio"</span>
                <h1>"All " <span class="gradient-text">"Projects"</span></h1>
                <p class="page-description">
                    "The complete collection. Click any card for the full case study with details, screenshots and demo videos."
                </p>
            </div>

            <div class="listing-controls">
                <input
                    type="search"
                    class="input search-input"
                    placeholder="Search projects..."
                    prop:value=move || search_query.get()
                    on:input=move |ev| set_search_query.set(event_target_value(&ev))
                />
                <CategoryTabs selected=filter on_select=move |f| set_filter.set(f) />
                <div class="view-toggle">
                    <button
                        class="view-toggle-btn"
                        class:active=move || view_mode.get() == ViewMode::Grid
                        title="Grid view"
                        on:click=move |_| set_view_mode.set(ViewMode::Grid)
                    >
                        "\u{25A6}"
                    </button>
                    <button
                        class="view-toggle-btn"
                        class:active=move || view_mode.get() == ViewMode::List
                        title="List view"
                        on:click=move |_| set_view_mode.set(ViewMode::List)
                    >
                        "\u{2630}"
                    </button>
                </div>
            </div>

            <p class="results-summary">{summary}</p>

            {results}

            <p class="click-hint">"Click on any project card to view the full case study"</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectType;

    #[test]
    fn test_summary_plural_and_singular() {
        assert_eq!(results_summary(3, CategoryFilter::All, ""), "Showing 3 projects");
        assert_eq!(results_summary(1, CategoryFilter::All, ""), "Showing 1 project");
        assert_eq!(results_summary(0, CategoryFilter::All, ""), "Showing 0 projects");
    }

    #[test]
    fn test_summary_mentions_filter_and_text() {
        assert_eq!(
            results_summary(2, CategoryFilter::Only(ProjectType::Mobile), " flutter "),
            "Showing 2 projects in Mobile Apps matching \"flutter\""
        );
    }

    #[test]
    fn test_listing_href_round_trips_through_query() {
        for filter in CategoryFilter::TABS {
            let href = listing_href(filter);
            let raw = href.split_once("?category=").map(|(_, v)| v);
            assert_eq!(filter_from_query(raw), filter, "{} lost its tab", href);
        }
        assert_eq!(listing_href(CategoryFilter::All), "/projects");
    }

    #[test]
    fn test_unknown_category_param_falls_back_to_all() {
        assert_eq!(filter_from_query(Some("desktop")), CategoryFilter::All);
        assert_eq!(filter_from_query(None), CategoryFilter::All);
        assert_eq!(
            filter_from_query(Some("Mobile")),
            CategoryFilter::Only(ProjectType::Mobile)
        );
    }

    #[test]
    fn test_summary_ignores_blank_text() {
        assert_eq!(
            results_summary(4, CategoryFilter::Only(ProjectType::Web), "   "),
            "Showing 4 projects in Web Apps"
        );
    }
}
