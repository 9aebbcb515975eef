use leptos::ev;
use leptos::prelude::*;

use crate::app::Site;

/// Landing page sections linked from the navigation bar, as (label, element id).
pub const NAV_SECTIONS: [(&str, &str); 6] = [
    ("Home", "hero"),
    ("About", "about"),
    ("Skills", "skills"),
    ("Projects", "projects"),
    ("Experience", "experience"),
    ("Contact", "contact"),
];

/// Scroll distance after which the bar switches to its compact style.
pub const SCROLLED_OFFSET: f64 = 50.0;

/// A section becomes active once its top is this close to the viewport top.
pub const ACTIVE_THRESHOLD: f64 = 150.0;

/// The last section (in page order) whose top edge has passed `threshold`.
pub fn active_section<'a>(tops: &[(&'a str, f64)], threshold: f64) -> Option<&'a str> {
    tops.iter()
        .rev()
        .find(|(_, top)| *top <= threshold)
        .map(|(id, _)| *id)
}

/// Smooth-scroll to the element with `id`. Returns false when it is not on the page.
pub fn scroll_to_section(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match element {
        Some(el) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

fn section_tops() -> Vec<(&'static str, f64)> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return vec![];
    };
    NAV_SECTIONS
        .iter()
        .filter_map(|(_, id)| {
            doc.get_element_by_id(id)
                .map(|el| (*id, el.get_bounding_client_rect().top()))
        })
        .collect()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let site = expect_context::<Site>();
    let (is_scrolled, set_is_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal("hero");

    // Compact style and active link both follow the scroll position.
    let _ = window_event_listener(ev::scroll, move |_| {
        let scroll_y = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        set_is_scrolled.set(scroll_y > SCROLLED_OFFSET);

        if let Some(id) = active_section(&section_tops(), ACTIVE_THRESHOLD) {
            if active.get_untracked() != id {
                set_active.set(id);
            }
        }
    });

    // Off the landing page the link falls through to "/#id".
    let go_to = move |ev: ev::MouseEvent, id: &'static str| {
        if scroll_to_section(id) {
            ev.prevent_default();
        }
        set_menu_open.set(false);
    };

    let nav_links = move |class: &'static str| {
        NAV_SECTIONS
            .iter()
            .map(|(label, id)| {
                let id = *id;
                view! {
                    <a
                        href=format!("/#{}", id)
                        class=move || {
                            if active.get() == id {
                                format!("{} active", class)
                            } else {
                                class.to_string()
                            }
                        }
                        on:click=move |ev| go_to(ev, id)
                    >
                        {*label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let owner = site.config.owner.name.clone();

    view! {
        <nav class="navbar" class:scrolled=move || is_scrolled.get()>
            <div class="navbar-inner">
                <a href="/#hero" class="navbar-logo" on:click=move |ev| go_to(ev, "hero")>
                    {owner}
                    <span class="logo-dot">"."</span>
                </a>

                <div class="nav-links">{nav_links("nav-link")}</div>

                <a href="/#contact" class="btn btn-primary nav-cta" on:click=move |ev| go_to(ev, "contact")>
                    "Let's Talk"
                </a>

                <button
                    class="menu-toggle"
                    title="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu-backdrop" on:click=move |_| set_menu_open.set(false)></div>
                <div class="mobile-menu">{nav_links("mobile-nav-link")}</div>
            </Show>
        </nav>
    }
}
