use leptos::prelude::*;

use crate::catalog::ProjectLinks;

/// Action buttons for a case study; the primary button is the live site when there is one.
#[component]
pub fn ProjectLinksPanel(links: ProjectLinks) -> impl IntoView {
    let live_button = |url: String| {
        view! {
            <a href=url target="_blank" rel="noopener noreferrer" class="btn btn-primary btn-block">
                "\u{2197} View Live Demo"
            </a>
        }
    };
    let repo_button = |url: String, class: &'static str| {
        view! {
            <a href=url target="_blank" rel="noopener noreferrer" class=class>
                "</> View Source Code"
            </a>
        }
    };

    let buttons = match links {
        ProjectLinks::Both { live, repo } => view! {
            <div class="link-buttons">
                {live_button(live)}
                {repo_button(repo, "btn btn-secondary btn-block")}
            </div>
        }
        .into_any(),
        ProjectLinks::LiveOnly(live) => live_button(live).into_any(),
        ProjectLinks::RepoOnly(repo) => repo_button(repo, "btn btn-primary btn-block").into_any(),
        ProjectLinks::None => view! {
            <div class="links-unavailable">
                <p>"Links coming soon"</p>
                <span>"This project is private or still in progress."</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="detail-panel project-links">
            <h3>"Project Links"</h3>
            {buttons}
        </div>
    }
}
