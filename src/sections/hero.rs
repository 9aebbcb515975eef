use leptos::ev;
use leptos::prelude::*;

use crate::app::Site;
use crate::components::navbar::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let site = expect_context::<Site>();
    let owner = site.config.owner.clone();
    let available = owner.available;
    let project_count = site.catalog.len();
    let tech_count = site.catalog.technologies().len();

    let view_work = |ev: ev::MouseEvent| {
        if scroll_to_section("projects") {
            ev.prevent_default();
        }
    };

    let resume = owner.resume.clone().map(|href| {
        view! {
            <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                "Download Resume"
            </a>
        }
    });

    view! {
        <section id="hero" class="section hero">
            <div class="hero-inner">
                <Show when=move || available>
                    <span class="availability-pill">"Available for new projects"</span>
                </Show>
                <p class="hero-greeting">"Hi, I'm"</p>
                <h1 class="hero-name gradient-text">{owner.name.clone()}</h1>
                <h2 class="hero-role">{owner.role.clone()}</h2>
                <p class="hero-tagline">{owner.tagline.clone()}</p>

                <div class="hero-actions">
                    <a href="/#projects" class="btn btn-primary" on:click=view_work>
                        "View My Work"
                    </a>
                    {resume}
                </div>

                <div class="hero-stats">
                    <div class="stat">
                        <span class="stat-value">{project_count}</span>
                        <span class="stat-label">"Projects"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">{tech_count}</span>
                        <span class="stat-label">"Technologies"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">{site.content.experience.len()}</span>
                        <span class="stat-label">"Roles"</span>
                    </div>
                </div>
            </div>
            <a href="/#about" class="scroll-indicator" on:click=|ev: ev::MouseEvent| {
                if scroll_to_section("about") {
                    ev.prevent_default();
                }
            }>
                "\u{2193}"
            </a>
        </section>
    }
}
