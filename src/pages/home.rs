use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::navbar::scroll_to_section;
use crate::sections::about::About;
use crate::sections::contact::Contact;
use crate::sections::experience::Experience;
use crate::sections::hero::Hero;
use crate::sections::projects::Projects;
use crate::sections::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    let location = use_location();

    // Arriving from another page via "/#section": jump to it once mounted.
    Effect::new(move |_| {
        let hash = location.hash.get();
        let id = hash.trim_start_matches('#');
        if !id.is_empty() {
            scroll_to_section(id);
        }
    });

    view! {
        <div class="page home-page">
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Experience />
            <Contact />
        </div>
    }
}
