use leptos::prelude::*;

use crate::content::{filled_dots, PROFICIENCY_DOTS};

/// Skill level drawn as a row of dots with the label beside it.
#[component]
pub fn ProficiencyDots(
    /// Level label, e.g. "expert"
    #[prop(into)]
    proficiency: String,
) -> impl IntoView {
    let filled = filled_dots(&proficiency);
    let dots = (0..PROFICIENCY_DOTS)
        .map(|i| {
            let class = if i < filled { "dot dot-filled" } else { "dot" };
            view! { <span class=class></span> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="proficiency">
            <div class="proficiency-dots">{dots}</div>
            <span class="proficiency-label">{proficiency}</span>
        </div>
    }
}
