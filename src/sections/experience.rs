use leptos::ev;
use leptos::prelude::*;

use crate::app::Site;
use crate::components::reveal::Reveal;
use crate::content::Achievement;

#[component]
pub fn Experience() -> impl IntoView {
    let site = expect_context::<Site>();
    let resume = site.config.owner.resume.clone();
    let (certificate, set_certificate) = signal::<Option<Achievement>>(None);

    let timeline = site
        .content
        .experience
        .iter()
        .map(|exp| {
            let techs = exp
                .technologies
                .iter()
                .map(|t| view! { <span class="tech-chip">{t.clone()}</span> })
                .collect::<Vec<_>>();
            view! {
                <div class="timeline-item">
                    <span class="timeline-dot"></span>
                    <div class="timeline-card">
                        <div class="timeline-meta">
                            <span class="timeline-kind">{exp.kind.clone()}</span>
                            <span class="timeline-period">{exp.period.clone()}</span>
                            <span class="timeline-location">{exp.location.clone()}</span>
                        </div>
                        <h4>{exp.title.clone()}</h4>
                        <p class="timeline-company">{exp.company.clone()}</p>
                        <p class="timeline-description">{exp.description.clone()}</p>
                        <div class="tech-chips">{techs}</div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let achievements = site
        .content
        .achievements
        .iter()
        .map(|achievement| {
            let preview = achievement.certificate.clone().map(|src| {
                let selected = achievement.clone();
                view! {
                    <button
                        class="certificate-preview"
                        on:click=move |_| set_certificate.set(Some(selected.clone()))
                    >
                        <img src=src alt=format!("{} certificate", achievement.title) loading="lazy" />
                        <span>"View Certificate"</span>
                    </button>
                }
            });
            view! {
                <div class="achievement-card">
                    <span class="achievement-year">{achievement.year.clone()}</span>
                    <h4>{achievement.title.clone()}</h4>
                    <p class="achievement-org">{achievement.organization.clone()}</p>
                    <p class="achievement-description">{achievement.description.clone()}</p>
                    {preview}
                </div>
            }
        })
        .collect::<Vec<_>>();

    let resume_link = resume.map(|href| {
        view! {
            <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-secondary resume-link">
                "Download Full Resume \u{2192}"
            </a>
        }
    });

    let modal = move || {
        certificate.get().map(|achievement| {
            view! {
                <div class="modal-backdrop" on:click=move |_| set_certificate.set(None)>
                    <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                        <div class="modal-header">
                            <div>
                                <h3>{achievement.title.clone()}</h3>
                                <p>{format!("{} \u{2022} {}", achievement.organization, achievement.year)}</p>
                            </div>
                            <button class="modal-close" on:click=move |_| set_certificate.set(None)>
                                "\u{2715}"
                            </button>
                        </div>
                        <img
                            class="modal-image"
                            src=achievement.certificate.clone().unwrap_or_default()
                            alt=format!("{} certificate", achievement.title)
                        />
                    </div>
                </div>
            }
        })
    };

    view! {
        <section id="experience" class="section experience">
            <Reveal class="section-header">
                <span class="section-pill">"Experience & Achievements"</span>
                <h2 class="section-title">"My " <span class="gradient-text">"Journey"</span></h2>
                <p class="section-description">
                    "Career milestones, certifications and achievements that shaped my work."
                </p>
            </Reveal>
            <div class="experience-grid">
                <div class="experience-column">
                    <h3>"Work Experience"</h3>
                    <div class="timeline">{timeline}</div>
                </div>
                <div class="experience-column">
                    <h3>"Achievements & Certifications"</h3>
                    <div class="achievements">{achievements}</div>
                    {resume_link}
                </div>
            </div>
            {modal}
        </section>
    }
}
