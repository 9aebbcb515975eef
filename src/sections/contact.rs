use leptos::prelude::*;

use crate::app::Site;
use crate::components::contact_form::ContactForm;
use crate::components::reveal::Reveal;

#[component]
pub fn Contact() -> impl IntoView {
    let site = expect_context::<Site>();
    let owner = site.config.owner.clone();

    let mut info = vec![(
        "Email",
        owner.email.clone(),
        format!("mailto:{}", owner.email),
    )];
    if let Some(phone) = owner.phone.clone() {
        let tel: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
        info.push(("Phone", phone, format!("tel:{}", tel)));
    }
    if let Some(location) = owner.location.clone() {
        info.push(("Location", location, "#contact".to_string()));
    }

    let info_cards = info
        .into_iter()
        .map(|(label, value, href)| {
            view! {
                <a href=href class="contact-info-card">
                    <span class="contact-info-label">{label}</span>
                    <span class="contact-info-value">{value}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    let socials = site
        .content
        .socials
        .iter()
        .map(|s| {
            view! {
                <a
                    href=s.href.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-button"
                    style=format!("--social-color: {}", s.color)
                    title=s.name.clone()
                >
                    {s.name.clone()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let availability = owner.available.then(|| {
        view! {
            <div class="availability">
                <span class="availability-dot"></span>
                "Currently available for freelance work"
            </div>
        }
    });

    view! {
        <section id="contact" class="section contact">
            <Reveal class="section-header">
                <span class="section-pill">"Get In Touch"</span>
                <h2 class="section-title">"Let's Work " <span class="gradient-text">"Together"</span></h2>
                <p class="section-description">
                    "Have a project in mind? I'm always open to discussing new opportunities."
                </p>
            </Reveal>
            <div class="contact-grid">
                <div class="contact-info">
                    {info_cards}
                    <h3>"Connect with me"</h3>
                    <div class="social-buttons">{socials}</div>
                    {availability}
                </div>
                <ContactForm />
            </div>
        </section>
    }
}
