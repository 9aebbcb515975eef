use leptos::prelude::*;

use crate::app::Site;
use crate::components::proficiency::ProficiencyDots;
use crate::components::reveal::Reveal;

#[component]
pub fn Skills() -> impl IntoView {
    let site = expect_context::<Site>();

    let categories = site
        .content
        .skills
        .iter()
        .map(|category| {
            let skills = category
                .skills
                .iter()
                .map(|skill| {
                    view! {
                        <div class="skill-item">
                            <span class="skill-name">{skill.name.clone()}</span>
                            <ProficiencyDots proficiency=skill.proficiency.clone() />
                        </div>
                    }
                })
                .collect::<Vec<_>>();
            let title = category.title.clone();
            let description = category.description.clone();

            view! {
                <Reveal class="skill-category">
                    <h3>{title}</h3>
                    <p class="skill-category-description">{description}</p>
                    <div class="skill-list">{skills}</div>
                </Reveal>
            }
        })
        .collect::<Vec<_>>();

    let extras = site
        .content
        .additional_skills
        .iter()
        .map(|name| view! { <span class="skill-tag">{name.clone()}</span> })
        .collect::<Vec<_>>();

    view! {
        <section id="skills" class="section skills">
            <Reveal class="section-header">
                <span class="section-pill">"Skills & Expertise"</span>
                <h2 class="section-title">"What I " <span class="gradient-text">"Work With"</span></h2>
                <p class="section-description">
                    "A curated set of technologies and tools I use to bring ideas to life, from mobile apps to web experiences."
                </p>
            </Reveal>
            <div class="skills-grid">{categories}</div>
            <Reveal class="additional-skills">
                <h3>"Also experienced with"</h3>
                <div class="skill-tags">{extras}</div>
            </Reveal>
        </section>
    }
}
