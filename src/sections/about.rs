use leptos::prelude::*;

use crate::app::Site;
use crate::components::reveal::Reveal;

#[component]
pub fn About() -> impl IntoView {
    let site = expect_context::<Site>();
    let about = site.content.about.clone();
    let owner = site.config.owner.clone();

    let paragraphs = about
        .paragraphs
        .into_iter()
        .map(|p| view! { <p class="about-paragraph">{p}</p> })
        .collect::<Vec<_>>();

    let highlights = about
        .highlights
        .into_iter()
        .map(|h| {
            view! {
                <li class="about-highlight">
                    <span class="check">"\u{2713}"</span>
                    {h}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="about" class="section about">
            <Reveal class="section-header">
                <span class="section-pill">"About Me"</span>
                <h2 class="section-title">"Who I " <span class="gradient-text">"Am"</span></h2>
            </Reveal>
            <Reveal class="about-grid">
                <div class="about-card">
                    <h3>{owner.name}</h3>
                    <p class="about-role">{owner.role}</p>
                    {owner.location.map(|loc| view! { <p class="about-location">{loc}</p> })}
                </div>
                <div class="about-body">
                    {paragraphs}
                    <ul class="about-highlights">{highlights}</ul>
                </div>
            </Reveal>
        </section>
    }
}
