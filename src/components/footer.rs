use leptos::prelude::*;

use crate::app::Site;
use crate::components::navbar::{scroll_to_section, NAV_SECTIONS};

#[component]
pub fn Footer() -> impl IntoView {
    let site = expect_context::<Site>();
    let owner = site.config.owner.clone();
    let year = js_sys::Date::new_0().get_full_year();

    let socials = site
        .content
        .socials
        .iter()
        .map(|s| {
            view! {
                <a href=s.href.clone() target="_blank" rel="noopener noreferrer" class="social-link">
                    {s.name.clone()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let quick_links = NAV_SECTIONS
        .iter()
        .map(|(label, id)| {
            view! { <a href=format!("/#{}", id) class="footer-link">{*label}</a> }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <h3>{owner.name.clone()}</h3>
                    <p>{owner.role.clone()}</p>
                </div>
                <div class="footer-links">{quick_links}</div>
                <div class="footer-socials">{socials}</div>
            </div>
            <div class="footer-bottom">
                <p>{format!("\u{00A9} {} {}. All rights reserved.", year, owner.name)}</p>
                <button class="btn btn-ghost back-to-top" on:click=move |_| {
                    scroll_to_section("hero");
                }>
                    "Back to top \u{2191}"
                </button>
            </div>
        </footer>
    }
}
